mod assign;
pub use crate::kmlib::assign::{assign_centroid, assign_sweep};

mod bench;
pub use crate::kmlib::bench::{bench_main, time_run, BenchReport, Timing};

mod cli;
pub use crate::kmlib::cli::{BenchArgs, Cli, Commands, KmParams, KmeansParams, RunArgs};

mod csvparser;
pub use crate::kmlib::csvparser::CsvParser;

mod csvwriter;
pub use crate::kmlib::csvwriter::CsvWriter;

mod errors;
pub use crate::kmlib::errors::{KmeansError, Result};

mod init;
pub use crate::kmlib::init::init_centroids;

mod kmeans;
pub use crate::kmlib::kmeans::{cluster, Fit, KMeans};

mod point;
pub use crate::kmlib::point::{distance, Point};

mod pointvec;
pub use crate::kmlib::pointvec::PointVec;

mod update;
pub use crate::kmlib::update::{
    accumulate, accumulate_blocks, update_centroids, ClusterSum, BLOCK_LEN,
};

mod workers;
pub use crate::kmlib::workers::Workers;
