use crate::kmlib::{PointVec, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct CsvWriter {
    writer: Box<dyn Write>,
}

impl CsvWriter {
    /// Output to a path, or stdout when there isn't one
    pub fn new(out_path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match out_path {
            Some(path) => {
                let m_page = page_size::get() * 1000;
                let file = File::create(path)?;
                Box::new(BufWriter::with_capacity(m_page, file))
            }
            None => Box::new(BufWriter::new(std::io::stdout())),
        };
        Ok(Self { writer })
    }

    /// Header then one `x,y,cluster` row per point in container order
    pub fn write_points(&mut self, points: &PointVec) -> Result<()> {
        writeln!(self.writer, "x,y,cluster")?;
        for p in points.iter() {
            writeln!(self.writer, "{:.6},{:.6},{}", p.x, p.y, p.label())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
