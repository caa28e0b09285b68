//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod simulate;

use std::path::PathBuf;

use clap::Args;
use shortrate_report::{OutputFormat, StreamPolicy};

use crate::config::CliConfig;

/// Flags shared by `simulate` and `check`; each overrides its config value
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Generator seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'p', long)]
    pub num_paths: Option<usize>,

    /// Number of time steps
    #[arg(short = 'n', long)]
    pub num_steps: Option<usize>,

    /// Time step size
    #[arg(long)]
    pub dt: Option<f64>,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (svg, csv)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Seed each model run separately instead of sharing one stream
    #[arg(long)]
    pub independent_streams: bool,
}

impl RunArgs {
    /// Apply flags on top of `config`
    pub fn apply(&self, mut config: CliConfig) -> CliConfig {
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(num_paths) = self.num_paths {
            config.simulation.num_paths = num_paths;
        }
        if let Some(num_steps) = self.num_steps {
            config.simulation.num_steps = num_steps;
        }
        if let Some(dt) = self.dt {
            config.simulation.time_step_size = dt;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.independent_streams {
            config.simulation.stream_policy = StreamPolicy::Independent;
        }
        config
    }
}
