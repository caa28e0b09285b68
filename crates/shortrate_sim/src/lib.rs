//! # shortrate_sim: Path simulation engine
//!
//! ## Layer 3 (Engine) Role
//!
//! Integrates the short-rate SDE over an ensemble of paths with the
//! Euler-Maruyama scheme:
//! ```text
//! r[t] = r[t-1] + (a * gap(r[t-1], time[t-1]) * dt + sigma * sqrt(dt) * Z)
//! ```
//!
//! - [`rng`]: Seeded generator with draw accounting
//! - [`mc`]: Ensemble storage and the path simulator
//!
//! ## Random Stream Ownership
//!
//! The generator is never global. Callers create a [`rng::SimRng`] and pass
//! it by `&mut` to every simulation, so running the plain model and then the
//! harmonic model on the same handle continues one stream across both runs.
//!
//! ```rust
//! use shortrate_core::types::SimulationParameters;
//! use shortrate_models::models::{ShortRateModelEnum, ShortRateModelKind};
//! use shortrate_sim::mc::simulate;
//! use shortrate_sim::rng::SimRng;
//!
//! let params = SimulationParameters::builder()
//!     .num_paths(64)
//!     .num_steps(100)
//!     .build()
//!     .unwrap();
//! let mut rng = SimRng::from_seed(42);
//!
//! let plain = ShortRateModelEnum::from_params(ShortRateModelKind::HullWhite, &params);
//! let ensemble = simulate(&params, &plain, &mut rng).unwrap();
//!
//! assert_eq!(ensemble.shape(), (64, 101));
//! assert_eq!(rng.draws(), 64 * 100);
//! ```

#![deny(missing_docs)]

pub mod mc;
pub mod rng;
