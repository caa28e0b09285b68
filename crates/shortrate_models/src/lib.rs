//! # shortrate_models: Short-rate drift models
//!
//! ## Layer 2 (Models) Role
//!
//! Provides the deterministic part of the short-rate dynamics. Each model
//! exposes a mean-reversion gap through the [`models::DriftRule`] trait; the
//! path engine scales that gap by the reversion speed and step size and adds
//! the diffusion term.
//!
//! - `models::hull_white`: Plain Hull-White, gap `theta - r`
//! - `models::harmonic`: Harmonic forcing, gap `theta - r + A sin(w t)`
//! - `models::model_enum`: Static dispatch over both variants
//!
//! ## Usage Examples
//!
//! ```rust
//! use shortrate_core::types::SimulationParameters;
//! use shortrate_models::models::{DriftRule, ShortRateModelEnum, ShortRateModelKind};
//!
//! let params = SimulationParameters::default();
//! let model = ShortRateModelEnum::from_params(ShortRateModelKind::HullWhite, &params);
//!
//! // At the long-term mean there is no pull
//! assert_eq!(model.reversion_gap(params.long_term_mean, 0.0), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod models;

pub use num_traits::Float;
