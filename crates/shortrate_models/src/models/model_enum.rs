//! Static dispatch enum for short-rate models.
//!
//! `ShortRateModelEnum` lets the pipeline hold either variant behind one
//! concrete type, dispatched with `match` rather than `Box<dyn DriftRule>`.
//!
//! ## Example
//!
//! ```
//! use shortrate_core::types::SimulationParameters;
//! use shortrate_models::models::{ShortRateModelEnum, ShortRateModelKind};
//!
//! let params = SimulationParameters::default();
//! let model = ShortRateModelEnum::from_params(ShortRateModelKind::HarmonicHullWhite, &params);
//!
//! assert_eq!(model.model_name(), "HullWhiteHarmonic");
//! assert_eq!(model.kind(), ShortRateModelKind::HarmonicHullWhite);
//! ```

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use shortrate_core::types::{SimulationError, SimulationParameters};

use super::drift::DriftRule;
use super::harmonic::HarmonicHullWhiteModel;
use super::hull_white::HullWhiteModel;

/// Model variant selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortRateModelKind {
    /// Plain Hull-White
    #[cfg_attr(feature = "serde", serde(rename = "hull-white"))]
    HullWhite,
    /// Hull-White with harmonic forcing
    #[cfg_attr(feature = "serde", serde(rename = "hull-white-harmonic"))]
    HarmonicHullWhite,
}

impl ShortRateModelKind {
    /// Both variants in pipeline order.
    pub const ALL: [ShortRateModelKind; 2] = [Self::HullWhite, Self::HarmonicHullWhite];

    /// Stable identifier used in configuration and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HullWhite => "hull-white",
            Self::HarmonicHullWhite => "hull-white-harmonic",
        }
    }

    /// Human-readable model description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::HullWhite => "Hull-White Model",
            Self::HarmonicHullWhite => "Hull-White Harmonic Forcing",
        }
    }
}

impl fmt::Display for ShortRateModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortRateModelKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hull-white" | "hw" | "plain" => Ok(Self::HullWhite),
            "hull-white-harmonic" | "hwhf" | "harmonic" => Ok(Self::HarmonicHullWhite),
            other => Err(SimulationError::invalid(
                "model",
                format!("unknown model '{}'", other),
            )),
        }
    }
}

/// Static dispatch enum over short-rate models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShortRateModelEnum<T: Float> {
    /// Plain Hull-White model
    HullWhite(HullWhiteModel<T>),
    /// Harmonic-forced Hull-White model
    HarmonicHullWhite(HarmonicHullWhiteModel<T>),
}

impl ShortRateModelEnum<f64> {
    /// Build the requested variant from full simulation parameters.
    pub fn from_params(kind: ShortRateModelKind, params: &SimulationParameters) -> Self {
        match kind {
            ShortRateModelKind::HullWhite => {
                Self::HullWhite(HullWhiteModel::from_simulation(params))
            }
            ShortRateModelKind::HarmonicHullWhite => {
                Self::HarmonicHullWhite(HarmonicHullWhiteModel::from_simulation(params))
            }
        }
    }
}

impl<T: Float> ShortRateModelEnum<T> {
    /// Variant selector.
    pub fn kind(&self) -> ShortRateModelKind {
        match self {
            Self::HullWhite(_) => ShortRateModelKind::HullWhite,
            Self::HarmonicHullWhite(_) => ShortRateModelKind::HarmonicHullWhite,
        }
    }

    /// Model name.
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::HullWhite(_) => HullWhiteModel::<T>::model_name(),
            Self::HarmonicHullWhite(_) => HarmonicHullWhiteModel::<T>::model_name(),
        }
    }

    /// Underlying unforced Hull-White model.
    pub fn hull_white(&self) -> &HullWhiteModel<T> {
        match self {
            Self::HullWhite(m) => m,
            Self::HarmonicHullWhite(m) => m.base(),
        }
    }
}

impl<T: Float> DriftRule<T> for ShortRateModelEnum<T> {
    #[inline]
    fn reversion_gap(&self, rate: T, time: T) -> T {
        match self {
            Self::HullWhite(m) => m.reversion_gap(rate, time),
            Self::HarmonicHullWhite(m) => m.reversion_gap(rate, time),
        }
    }
}
