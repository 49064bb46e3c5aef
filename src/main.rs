extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use parkmeans::{bench_main, Cli, Commands, CsvParser, CsvWriter, KmeansParams, Result, RunArgs};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

fn run_main(args: RunArgs) -> Result<()> {
    let mut points = CsvParser::new(&args.input).parse()?;
    info!("loaded {} points", points.len());

    let mut rng = StdRng::seed_from_u64(args.km.seed);
    let start = Instant::now();
    let fit = args.km.kmeans(args.threads).fit(&mut points, &mut rng)?;
    info!("clustered in {:.6}s", start.elapsed().as_secs_f64());

    let labels = points.labels();
    for (c, centroid) in fit.centroids.iter().enumerate() {
        let size = labels.iter().filter(|&&l| l == c as i64).count();
        info!(
            "cluster {}: {} points @ ({:.4}, {:.4})",
            c, size, centroid.x, centroid.y
        );
    }
    if fit.empty_clusters != 0 {
        warn!("{} empty cluster events", fit.empty_clusters);
    }

    CsvWriter::new(args.output.as_deref())?.write_points(&points)
}

fn main() {
    let args = Cli::parse();
    let params: &dyn KmeansParams = match &args.command {
        Commands::Run(m_args) => m_args,
        Commands::Bench(m_args) => m_args,
    };

    let level = if params.debug() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    info!("params: {:#?}", params);
    if !params.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }

    let result = match args.command {
        Commands::Run(m_args) => run_main(m_args),
        Commands::Bench(m_args) => bench_main(&m_args).map(|timings| {
            info!("{} runs timed", timings.len());
        }),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("finished");
}
