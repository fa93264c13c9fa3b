use std::path::PathBuf;

use clap::Parser;

/// Dataset opened when no path is given.
pub const DEFAULT_DATASET: &str = "resume_dataset.csv";

#[derive(Parser, Debug)]
#[command(name = "resume-screening")]
#[command(about = "Browse and search a CSV dataset of resumes by job category")]
pub struct Cli {
    /// Path to the resume CSV file
    #[arg(value_name = "DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            dataset_path: cli.dataset,
            verbose: cli.verbose,
        }
    }
}
