//! Check command implementation
//!
//! Validates the resolved configuration and prints what a `simulate` run
//! would do, without drawing a single random number.

use shortrate_models::models::{HarmonicForcing, HullWhiteModel, ShortRateModelKind};
use shortrate_report::pipeline::chart_title;
use shortrate_report::render::slug;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;
    print!("{}", summary(config)?);
    info!("Configuration OK");
    Ok(())
}

/// Human-readable summary of a validated configuration
pub fn summary(config: &CliConfig) -> Result<String> {
    let params = config.to_parameters()?;
    let format = config.output.format;
    let model = HullWhiteModel::from_simulation(&params);
    let forcing = HarmonicForcing::new(params.amplitude, params.frequency);

    let grid_points = params.num_steps + 1;
    let ensemble_bytes = params
        .num_paths
        .saturating_mul(grid_points)
        .saturating_mul(std::mem::size_of::<f64>());

    let mut lines = vec![
        "Model".to_string(),
        format!("  long_term_mean       {}", params.long_term_mean),
        format!("  reversion_speed      {}", params.reversion_speed),
        format!("  volatility           {}", params.volatility),
        format!("  amplitude            {}", params.amplitude),
        format!("  frequency            {}", params.frequency),
    ];
    if let Some(period) = forcing.period() {
        lines.push(format!("  forcing period       {:.4}", period));
    }
    lines.push(format!("  initial_rate         {}", params.initial_rate));

    lines.extend([
        "Simulation".to_string(),
        format!("  num_paths            {}", params.num_paths),
        format!("  num_steps            {}", params.num_steps),
        format!("  time_step_size       {}", params.time_step_size),
        format!("  horizon              {}", params.horizon()),
        format!("  seed                 {}", config.simulation.seed),
        format!("  stream policy        {:?}", config.simulation.stream_policy),
        format!("  draws per run        {}", params.draw_count()),
        format!(
            "  ensemble memory      {:.1} MiB per run",
            ensemble_bytes as f64 / (1024.0 * 1024.0)
        ),
    ]);

    lines.extend([
        format!("Analytic terminal mean ({})", ShortRateModelKind::HullWhite),
        format!(
            "  continuous           {:.6}",
            model.expected_rate(params.initial_rate, params.horizon())
        ),
        format!(
            "  euler                {:.6}",
            model.discrete_expected_rate(params.initial_rate, params.time_step_size, params.num_steps)
        ),
        format!(
            "  harmonic amplitude   {:.6}",
            forcing.response_amplitude(params.reversion_speed)
        ),
    ]);

    lines.push("Output".to_string());
    lines.extend(ShortRateModelKind::ALL.iter().map(|&kind| {
        let file = format!("{}.{}", slug(&chart_title(kind)), format.extension());
        format!("  {}", config.output.dir.join(file).display())
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
