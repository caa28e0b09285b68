//! Error types for the CLI.

use shortrate_core::types::SimulationError;
use shortrate_report::{PipelineError, RenderError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or override could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameters rejected before simulation
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A chart or table could not be written
    #[error("Rendering failed for '{title}': {source}")]
    Render {
        /// Title of the failed artefact
        title: String,
        /// Renderer error
        #[source]
        source: RenderError,
    },

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Simulation(e) => Self::Simulation(e),
            PipelineError::Render { title, source } => Self::Render { title, source },
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
