use crate::kmlib::{KmeansError, Point, PointVec, Result};
use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

type FileHandler = io::Result<io::Lines<io::BufReader<File>>>;

fn read_lines<P>(filename: P) -> FileHandler
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

pub struct CsvParser {
    /* Read comma delimited points, x and y from the first two columns.
    A first non-blank line that isn't numeric is taken as a header */
    file: std::path::PathBuf,
}

impl CsvParser {
    pub fn new(path: &Path) -> Self {
        Self {
            file: path.to_path_buf(),
        }
    }

    pub fn parse(&self) -> Result<PointVec> {
        let mut points = PointVec::new();
        let mut pos = 0;
        let mut first = true;
        for (idx, line) in read_lines(&self.file)?.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // only the first non-blank line may be a header
            let header_slot = first;
            first = false;
            match parse_line(&line) {
                Ok((x, y)) => {
                    points.set(pos, Point::new(x, y))?;
                    pos += 1;
                }
                Err(_) if header_slot => debug!("skipping header: {}", line),
                Err(msg) => return Err(KmeansError::Parse { line: idx + 1, msg }),
            }
        }
        debug!("parsed {} points from {}", points.len(), self.file.display());
        Ok(points)
    }
}

fn parse_line(line: &str) -> std::result::Result<(f64, f64), String> {
    let mut fields = line.split(',');
    let x = parse_coord(fields.next())?;
    let y = parse_coord(fields.next())?;
    Ok((x, y))
}

fn parse_coord(field: Option<&str>) -> std::result::Result<f64, String> {
    let field = field.ok_or_else(|| "expected at least two columns".to_string())?;
    let value = field
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad coordinate '{}': {}", field.trim(), e))?;
    if !value.is_finite() {
        return Err(format!("non-finite coordinate '{}'", field.trim()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_parse_with_header() {
        let f = write_tmp("x,y,label\n1.5,2,0\n-3,4.25,1\n\n7,8\n");
        let points = CsvParser::new(f.path()).parse().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.get(0).unwrap(), Point::new(1.5, 2.0));
        assert_eq!(points.get(1).unwrap(), Point::new(-3.0, 4.25));
        assert_eq!(points.get(2).unwrap(), Point::new(7.0, 8.0));
        assert!(points.is_growable());
    }

    #[test]
    fn test_parse_without_header() {
        let f = write_tmp("0.0, 1.0\n2.0, 3.0\n");
        let points = CsvParser::new(f.path()).parse().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.get(1).unwrap().y, 3.0);
    }

    #[test]
    fn test_bad_line_reports_number() {
        let f = write_tmp("x,y\n1,2\n3\n");
        match CsvParser::new(f.path()).parse() {
            Err(KmeansError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_after_blank_lines() {
        let f = write_tmp("\n  \nx,y\n1,2\n");
        let points = CsvParser::new(f.path()).parse().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points.get(0).unwrap(), Point::new(1.0, 2.0));

        // a second non-numeric line is still an error
        let f = write_tmp("\nx,y\nx,y\n");
        assert!(matches!(
            CsvParser::new(f.path()).parse(),
            Err(KmeansError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let f = write_tmp("1,2\ninf,3\n");
        assert!(matches!(
            CsvParser::new(f.path()).parse(),
            Err(KmeansError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let res = CsvParser::new(Path::new("/nonexistent/points.csv")).parse();
        assert!(matches!(res, Err(KmeansError::Io(_))));
    }
}
