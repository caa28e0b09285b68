//! Two-model simulation pipeline.
//!
//! ```text
//! params ─┬─> simulate(HullWhite)          ─> reduce ─> render
//!         └─> simulate(HarmonicHullWhite)  ─> reduce ─> render
//! ```
//!
//! # Stream Policy
//!
//! With [`StreamPolicy::Shared`] (the default) one generator seeded once
//! feeds both runs: the harmonic run starts exactly where the plain run
//! stopped, so results are reproducible as an ordered pair.
//! [`StreamPolicy::Independent`] seeds run `i` with `seed + i`, making each
//! model reproducible on its own at the cost of that pairing.
//!
//! # Rendering Failures
//!
//! A failed render is logged and recorded on the [`PipelineReport`]; the
//! remaining runs still execute so the shared stream advances exactly as in
//! a successful run. [`PipelineReport::into_result`] turns recorded failures
//! into an error for the caller.

use serde::Deserialize;
use shortrate_core::types::{SimulationError, SimulationParameters};
use shortrate_models::models::{ShortRateModelEnum, ShortRateModelKind};
use shortrate_sim::mc::PathSimulator;
use shortrate_sim::rng::SimRng;
use thiserror::Error;
use tracing::{info, warn};

use crate::render::{RenderError, Renderer};
use crate::summary::{MeanPath, SummaryReporter};

/// How the random stream is shared between model runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamPolicy {
    /// One stream, plain model first, harmonic model continuing it
    #[default]
    Shared,
    /// A fresh stream per model, seeded `seed + run_index`
    Independent,
}

/// Pipeline failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parameters rejected before any simulation
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A chart could not be rendered
    #[error("Rendering failed for '{title}': {source}")]
    Render {
        /// Title of the failed chart
        title: String,
        /// Renderer error
        #[source]
        source: RenderError,
    },
}

/// Result of one model run.
#[derive(Clone, Debug)]
pub struct ModelRun {
    /// Model variant
    pub kind: ShortRateModelKind,
    /// Chart title
    pub title: String,
    /// Column-wise mean of the ensemble
    pub mean_path: MeanPath,
    /// Generator position (draw count) when the run started
    pub stream_start: u64,
    /// Generator position (draw count) when the run finished
    pub stream_end: u64,
}

/// Outcome of a pipeline execution.
#[derive(Debug, Default)]
pub struct PipelineReport {
    runs: Vec<ModelRun>,
    render_failures: Vec<(String, RenderError)>,
}

impl PipelineReport {
    /// Completed runs in execution order.
    pub fn runs(&self) -> &[ModelRun] {
        &self.runs
    }

    /// Run for `kind`, if executed.
    pub fn run(&self, kind: ShortRateModelKind) -> Option<&ModelRun> {
        self.runs.iter().find(|r| r.kind == kind)
    }

    /// Rendering failures as `(title, error)` pairs.
    pub fn render_failures(&self) -> &[(String, RenderError)] {
        &self.render_failures
    }

    /// Fails with the first recorded rendering failure, if any.
    pub fn into_result(mut self) -> Result<Self, PipelineError> {
        if self.render_failures.is_empty() {
            return Ok(self);
        }
        let (title, source) = self.render_failures.remove(0);
        Err(PipelineError::Render { title, source })
    }
}

/// Chart title for a model variant.
pub fn chart_title(kind: ShortRateModelKind) -> String {
    format!("Mean Interest Rate Path ({})", kind.description())
}

/// Plain then harmonic simulation, each reduced and rendered.
///
/// # Examples
///
/// ```rust
/// use shortrate_core::types::SimulationParameters;
/// use shortrate_report::pipeline::Pipeline;
/// use shortrate_report::render::CsvRenderer;
/// use shortrate_report::summary::SummaryReporter;
///
/// let params = SimulationParameters::builder()
///     .num_paths(16)
///     .num_steps(32)
///     .build()
///     .unwrap();
/// let dir = std::env::temp_dir().join("shortrate-doc-pipeline");
/// let mut reporter = SummaryReporter::new(CsvRenderer::new(&dir));
///
/// let report = Pipeline::new(params, 42)
///     .unwrap()
///     .run(&mut reporter)
///     .unwrap()
///     .into_result()
///     .unwrap();
///
/// assert_eq!(report.runs().len(), 2);
/// assert_eq!(report.runs()[1].stream_start, report.runs()[0].stream_end);
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    params: SimulationParameters,
    seed: u64,
    policy: StreamPolicy,
}

impl Pipeline {
    /// Creates a pipeline with the shared stream policy.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if any invariant is violated.
    pub fn new(params: SimulationParameters, seed: u64) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self {
            params,
            seed,
            policy: StreamPolicy::Shared,
        })
    }

    /// Sets the stream policy.
    pub fn with_stream_policy(mut self, policy: StreamPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Simulation parameters.
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream policy.
    pub fn stream_policy(&self) -> StreamPolicy {
        self.policy
    }

    /// Runs both models in order.
    ///
    /// Rendering failures are recorded on the report rather than aborting,
    /// so every model is simulated regardless.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Simulation` if the simulator rejects the
    /// parameters; nothing has been drawn in that case.
    pub fn run<R: Renderer>(
        &self,
        reporter: &mut SummaryReporter<R>,
    ) -> Result<PipelineReport, PipelineError> {
        let mut report = PipelineReport::default();
        let mut simulator = PathSimulator::new(self.params)?;
        let mut shared = SimRng::from_seed(self.seed);

        for (index, kind) in ShortRateModelKind::ALL.into_iter().enumerate() {
            let mut independent;
            let rng = match self.policy {
                StreamPolicy::Shared => &mut shared,
                StreamPolicy::Independent => {
                    independent = SimRng::from_seed(self.seed.wrapping_add(index as u64));
                    &mut independent
                }
            };

            let run = self.run_model(&mut simulator, kind, rng, reporter, &mut report);
            report.runs.push(run);
        }

        Ok(report)
    }

    fn run_model<R: Renderer>(
        &self,
        simulator: &mut PathSimulator,
        kind: ShortRateModelKind,
        rng: &mut SimRng,
        reporter: &mut SummaryReporter<R>,
        report: &mut PipelineReport,
    ) -> ModelRun {
        let model = ShortRateModelEnum::from_params(kind, &self.params);
        let title = chart_title(kind);
        let stream_start = rng.draws();

        info!(
            model = model.model_name(),
            num_paths = self.params.num_paths,
            num_steps = self.params.num_steps,
            seed = rng.seed(),
            stream_start,
            "Simulating"
        );

        let ensemble = simulator.simulate(&model, rng);
        let mean_path = reporter.reduce(&ensemble);
        drop(ensemble);

        info!(
            model = model.model_name(),
            terminal_mean = mean_path.terminal().unwrap_or(f64::NAN),
            "Mean path reduced"
        );

        if let Err(err) = reporter.render(&mean_path, &title) {
            warn!(title = %title, error = %err, "Rendering failed");
            report.render_failures.push((title.clone(), err));
        }

        ModelRun {
            kind,
            title,
            mean_path,
            stream_start,
            stream_end: rng.draws(),
        }
    }
}
