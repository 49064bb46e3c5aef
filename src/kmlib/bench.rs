use crate::kmlib::{BenchArgs, CsvParser, CsvWriter, PointVec, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub size: usize,
    pub threads: usize,
    pub seconds: f64,
    pub empty_clusters: usize,
}

#[derive(Debug, Serialize)]
pub struct BenchReport<'a> {
    pub params: &'a BenchArgs,
    pub timings: Vec<Timing>,
}

/// Time one run on a fresh copy of `points` so every thread count does the
/// same work from the same seed
pub fn time_run(points: &PointVec, args: &BenchArgs, threads: usize) -> Result<(PointVec, Timing)> {
    let mut m_points = points.clone();
    let mut rng = StdRng::seed_from_u64(args.km.seed);
    let start = Instant::now();
    let fit = args.km.kmeans(threads).fit(&mut m_points, &mut rng)?;
    let seconds = start.elapsed().as_secs_f64();
    Ok((
        m_points,
        Timing {
            size: points.len(),
            threads,
            seconds,
            empty_clusters: fit.empty_clusters,
        },
    ))
}

pub fn bench_main(args: &BenchArgs) -> Result<Vec<Timing>> {
    let mut timings = Vec::new();

    println!("{:>12} Number of threads", "");
    print!("Dataset size");
    for threads in 1..=args.max_threads {
        print!(" {:>12}", format!("N={}", threads));
    }
    println!();

    for &size in &args.sizes {
        let path = args.dataset_path(size);
        let points = CsvParser::new(&path).parse()?;
        if points.len() != size {
            warn!(
                "{} holds {} points, expected {}",
                path.display(),
                points.len(),
                size
            );
        }

        print!("{:<12}", size);
        for threads in 1..=args.max_threads {
            let (labeled, timing) = time_run(&points, args, threads)?;
            CsvWriter::new(Some(args.output.as_path()))?.write_points(&labeled)?;
            print!(" {:>12.6}", timing.seconds);
            timings.push(timing);
        }
        println!();
    }

    if let Some(report) = &args.report {
        let out = BufWriter::new(File::create(report)?);
        serde_json::to_writer_pretty(
            out,
            &BenchReport {
                params: args,
                timings: timings.clone(),
            },
        )?;
        info!("wrote report to {}", report.display());
    }

    Ok(timings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmlib::{Cli, Commands};
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_sweep_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        for size in [8, 12] {
            let path = dir.path().join(format!("gen_data{}_nolabel.csv", size));
            let mut f = File::create(path).unwrap();
            for i in 0..size {
                let offset = if i % 2 == 0 { 0.0 } else { 50.0 };
                writeln!(f, "{},{}", offset + i as f64, offset).unwrap();
            }
        }
        let data_dir = dir.path().to_str().unwrap().to_string();
        let output = dir.path().join("out.csv");
        let report = dir.path().join("report.json");

        let cli = Cli::try_parse_from([
            "parkmeans",
            "bench",
            "--data-dir",
            &data_dir,
            "--sizes",
            "8,12",
            "--max-threads",
            "3",
            "-k",
            "2",
            "--epochs",
            "3",
            "--output",
            output.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
        ])
        .unwrap();
        let args = match cli.command {
            Commands::Bench(args) => args,
            _ => panic!("expected bench"),
        };

        let timings = bench_main(&args).unwrap();
        assert_eq!(timings.len(), 6);
        assert_eq!(timings[5].size, 12);
        assert_eq!(timings[5].threads, 3);

        // last labeled result: 12 rows plus header
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 13);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(json["timings"].as_array().unwrap().len(), 6);
        assert_eq!(json["params"]["km"]["k"], 2);
    }

    #[test]
    fn test_runs_agree_across_threads() {
        let points: PointVec = (0..40)
            .map(|i| ((i % 7) as f64 * 0.3, (i / 7) as f64 * 0.7))
            .collect();
        let cli = Cli::try_parse_from(["parkmeans", "bench", "-k", "3"]).unwrap();
        let args = match cli.command {
            Commands::Bench(args) => args,
            _ => panic!("expected bench"),
        };
        let (base, _) = time_run(&points, &args, 1).unwrap();
        for threads in 2..=4 {
            let (labeled, timing) = time_run(&points, &args, threads).unwrap();
            assert_eq!(labeled, base);
            assert_eq!(timing.threads, threads);
        }
        // input is never mutated
        assert!(points.labels().iter().all(|&l| l == -1));
    }
}
