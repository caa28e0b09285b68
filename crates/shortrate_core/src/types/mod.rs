//! Parameter, time and error types.
//!
//! This module provides:
//! - `params`: Immutable simulation parameters with builder-time validation
//! - `time`: The uniform time grid shared by every path of a run
//! - `error`: Structured error types for parameter validation
//!
//! # Re-exports
//!
//! - [`SimulationParameters`], [`SimulationParametersBuilder`] from `params`
//! - [`TimeGrid`] from `time`
//! - [`SimulationError`] from `error`

pub mod error;
pub mod params;
pub mod time;

pub use error::SimulationError;
pub use params::{SimulationParameters, SimulationParametersBuilder};
pub use time::TimeGrid;
