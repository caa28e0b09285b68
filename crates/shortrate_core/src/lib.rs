//! # shortrate_core: Foundation types for short-rate path simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! shortrate_core is the bottom layer of the workspace, providing:
//! - Validated simulation parameters: `SimulationParameters` (`types::params`)
//! - The uniform simulation time axis: `TimeGrid` (`types::time`)
//! - Error types: `SimulationError` (`types::error`)
//! - Default model constants (`defaults`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other shortrate_* crates:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use shortrate_core::types::{SimulationParameters, TimeGrid};
//!
//! let params = SimulationParameters::builder()
//!     .num_paths(100)
//!     .num_steps(50)
//!     .time_step_size(0.01)
//!     .build()
//!     .unwrap();
//!
//! let grid = TimeGrid::from_params(&params);
//! assert_eq!(grid.len(), 51);
//! assert_eq!(grid.time(0), 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SimulationParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod defaults;
pub mod types;
