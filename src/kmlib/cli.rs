extern crate pretty_env_logger;

use crate::kmlib::KMeans;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(name = "parkmeans")]
#[command(about = "Parallel K-Means clustering of 2D points")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

pub trait KmeansParams: std::fmt::Debug {
    fn validate(&self) -> bool;
    fn debug(&self) -> bool;
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Cluster a csv of points")]
    Run(RunArgs),

    #[command(about = "Time clustering over dataset sizes and thread counts")]
    Bench(BenchArgs),
}

#[derive(clap::Args, Serialize, Clone, Debug)]
pub struct KmParams {
    /// Number of clusters
    #[arg(short, default_value_t = 3, help_heading = "Clustering")]
    pub k: usize,

    /// Number of assignment/update cycles
    #[arg(long, default_value_t = 10, help_heading = "Clustering")]
    pub epochs: usize,

    /// Seed for centroid initialization
    #[arg(long, default_value_t = 42, help_heading = "Clustering")]
    pub seed: u64,
}

impl KmParams {
    pub fn kmeans(&self, threads: usize) -> KMeans {
        KMeans::new(self.k, self.epochs, threads)
    }

    fn validate(&self) -> bool {
        let mut is_ok = true;
        if self.k < 1 {
            error!("-k must be at least 1");
            is_ok = false;
        }
        if self.epochs == 0 {
            warn!("--epochs 0 leaves every point unassigned");
        }
        is_ok
    }
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Input csv, x and y in the first two columns
    #[arg(short, long, help_heading = "I/O")]
    pub input: PathBuf,

    /// Output csv of x,y,cluster (default stdout)
    #[arg(short, long, help_heading = "I/O")]
    pub output: Option<PathBuf>,

    /// Number of threads
    #[arg(short, long, default_value_t = 1, help_heading = "I/O")]
    pub threads: usize,

    /// Verbose logging
    #[arg(long, default_value_t = false, help_heading = "I/O")]
    pub debug: bool,

    #[command(flatten)]
    pub km: KmParams,
}

impl KmeansParams for RunArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    /// Validate command line arguments
    fn validate(&self) -> bool {
        let mut is_ok = true;

        is_ok &= validate_file(&self.input, "--input");
        is_ok &= self.km.validate();

        if self.threads < 1 {
            error!("--threads must be at least 1");
            is_ok = false;
        }

        is_ok
    }
}

#[derive(Parser, Serialize, Debug, Clone)]
pub struct BenchArgs {
    /// Directory holding gen_data{size}_nolabel.csv files
    #[arg(long, default_value = ".", help_heading = "I/O")]
    pub data_dir: PathBuf,

    /// Dataset sizes to sweep
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [5000, 15000, 100000, 500000],
        help_heading = "I/O"
    )]
    pub sizes: Vec<usize>,

    /// Sweep thread counts 1..=max-threads
    #[arg(long, default_value_t = 4, help_heading = "I/O")]
    pub max_threads: usize,

    /// Labeled result of the last run
    #[arg(short, long, default_value = "kmeans_output.csv", help_heading = "I/O")]
    pub output: PathBuf,

    /// Write all timings as json
    #[arg(long, help_heading = "I/O")]
    pub report: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, default_value_t = false, help_heading = "I/O")]
    pub debug: bool,

    #[command(flatten)]
    pub km: KmParams,
}

impl BenchArgs {
    pub fn dataset_path(&self, size: usize) -> PathBuf {
        self.data_dir.join(format!("gen_data{}_nolabel.csv", size))
    }
}

impl KmeansParams for BenchArgs {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        let mut is_ok = true;

        if !self.data_dir.is_dir() {
            error!("--data-dir is not a directory");
            is_ok = false;
        }

        for size in &self.sizes {
            is_ok &= validate_file(&self.dataset_path(*size), "dataset");
        }

        is_ok &= self.km.validate();

        if self.max_threads < 1 {
            error!("--max-threads must be at least 1");
            is_ok = false;
        }

        is_ok
    }
}

/// Helper function to validate a file's existence and type
fn validate_file(path: &Path, label: &str) -> bool {
    if !path.exists() {
        error!("{} {} does not exist", label, path.display());
        return false;
    }
    if !path.is_file() {
        error!("{} {} is not a file", label, path.display());
        return false;
    }
    true
}
