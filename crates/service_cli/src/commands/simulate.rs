//! Simulate command implementation
//!
//! Runs the plain then the harmonic model and writes one artefact per model.

use shortrate_report::{ChartRenderer, Pipeline, SummaryReporter};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the simulate command
pub fn run(config: &CliConfig) -> Result<()> {
    let params = config.to_parameters()?;
    let format = config.output.format;
    let pipeline = Pipeline::new(params, config.simulation.seed)?
        .with_stream_policy(config.simulation.stream_policy);

    info!(
        num_paths = params.num_paths,
        num_steps = params.num_steps,
        seed = config.simulation.seed,
        policy = ?pipeline.stream_policy(),
        output_dir = %config.output.dir.display(),
        format = %format,
        "Starting simulation"
    );

    let mut reporter = SummaryReporter::new(ChartRenderer::new(format, &config.output.dir));
    let report = pipeline.run(&mut reporter)?.into_result()?;

    for run in report.runs() {
        info!(
            model = %run.kind,
            terminal_mean = run.mean_path.terminal().unwrap_or(f64::NAN),
            draws = run.stream_end - run.stream_start,
            "Run complete"
        );
    }
    for path in reporter.renderer().written() {
        println!("{}", path.display());
    }

    info!("Simulation complete");
    Ok(())
}
