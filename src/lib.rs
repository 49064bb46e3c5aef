#[macro_use]
extern crate log;

mod kmlib;
pub use self::{
    kmlib::accumulate, kmlib::accumulate_blocks, kmlib::assign_centroid, kmlib::assign_sweep,
    kmlib::bench_main, kmlib::cluster, kmlib::distance, kmlib::init_centroids, kmlib::time_run,
    kmlib::update_centroids, kmlib::BenchArgs, kmlib::BenchReport, kmlib::Cli, kmlib::ClusterSum,
    kmlib::Commands, kmlib::CsvParser, kmlib::CsvWriter, kmlib::Fit, kmlib::KMeans,
    kmlib::KmParams, kmlib::KmeansError, kmlib::KmeansParams, kmlib::Point, kmlib::PointVec,
    kmlib::Result, kmlib::RunArgs, kmlib::Timing, kmlib::Workers, kmlib::BLOCK_LEN,
};
