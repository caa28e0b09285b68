//! Short-rate drift models.
//!
//! Both models share the same Euler-Maruyama recurrence and differ only in
//! their mean-reversion gap, so the trait surface is a single method.

pub mod drift;
pub mod harmonic;
pub mod hull_white;
pub mod model_enum;

pub use drift::DriftRule;
pub use harmonic::{HarmonicForcing, HarmonicHullWhiteModel};
pub use hull_white::{HullWhiteModel, HullWhiteParams};
pub use model_enum::{ShortRateModelEnum, ShortRateModelKind};
