//! # shortrate_report: Summary statistics, rendering and the pipeline
//!
//! ## Layer 4 (Report) Role
//!
//! - [`summary`]: Reduce an ensemble to its mean path
//! - [`render`]: The `Renderer` capability with SVG chart and CSV table outputs
//! - [`pipeline`]: Plain model then harmonic model, each reduced and rendered
//!
//! ## Usage Examples
//!
//! ```rust
//! use shortrate_report::summary::reduce;
//! use shortrate_sim::mc::PathEnsemble;
//!
//! let ensemble = PathEnsemble::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//!     vec![5.0, 6.0],
//! ])
//! .unwrap();
//!
//! let mean = reduce(&ensemble);
//! assert_eq!(mean.values(), &[3.0, 4.0]);
//! ```

#![deny(missing_docs)]

pub mod pipeline;
pub mod render;
pub mod summary;

pub use pipeline::{ModelRun, Pipeline, PipelineError, PipelineReport, StreamPolicy};
pub use render::{ChartRenderer, OutputFormat, RenderError, Renderer};
pub use summary::{MeanPath, SummaryReporter};
