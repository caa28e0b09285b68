//! Hull-White model with harmonic forcing of the reversion target.
//!
//! ```text
//! dr(t) = a * (theta - r(t) + A sin(w t)) * dt + sigma * dW(t)
//! ```
//!
//! The forcing term shifts the target periodically, so the expected rate
//! settles into an oscillation of period `2 pi / w` around `theta`, lagged
//! and damped by the reversion speed. Driven by identical noise, the
//! difference to the plain model is deterministic:
//! ```text
//! d[t] = d[t-1] * (1 - a dt) + a A sin(w t[t-1]) dt
//! ```

use num_traits::Float;
use shortrate_core::types::SimulationParameters;

use super::drift::DriftRule;
use super::hull_white::{HullWhiteModel, HullWhiteParams};

/// Periodic forcing `A sin(w t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonicForcing<T: Float> {
    /// Forcing amplitude (A)
    pub amplitude: T,
    /// Angular frequency (w)
    pub frequency: T,
}

impl<T: Float> HarmonicForcing<T> {
    /// Create a forcing term.
    pub fn new(amplitude: T, frequency: T) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Forcing value at `time`.
    #[inline]
    pub fn value(&self, time: T) -> T {
        self.amplitude * (self.frequency * time).sin()
    }

    /// Period `2 pi / |w|`, `None` for a static forcing.
    pub fn period(&self) -> Option<T> {
        if self.frequency == T::zero() {
            return None;
        }
        let two_pi = T::from(2.0 * std::f64::consts::PI)?;
        Some(two_pi / self.frequency.abs())
    }

    /// Steady-state amplitude of the expected-rate response to the forcing.
    ///
    /// For the linear relaxation `d' = a (A sin(w t) - d)` the response is
    /// `A a / sqrt(a^2 + w^2)`.
    pub fn response_amplitude(&self, mean_reversion: T) -> T {
        let a = mean_reversion;
        let w = self.frequency;
        let denom = (a * a + w * w).sqrt();
        if denom == T::zero() {
            return T::zero();
        }
        self.amplitude.abs() * a.abs() / denom
    }
}

/// Hull-White model whose reversion target carries a harmonic term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonicHullWhiteModel<T: Float> {
    base: HullWhiteModel<T>,
    forcing: HarmonicForcing<T>,
}

impl<T: Float> HarmonicHullWhiteModel<T> {
    /// Create a harmonic model from Hull-White parameters and a forcing term.
    pub fn new(params: HullWhiteParams<T>, forcing: HarmonicForcing<T>) -> Self {
        Self {
            base: HullWhiteModel::new(params),
            forcing,
        }
    }

    /// Unforced Hull-White model sharing these parameters.
    #[inline]
    pub fn base(&self) -> &HullWhiteModel<T> {
        &self.base
    }

    /// Forcing term.
    #[inline]
    pub fn forcing(&self) -> &HarmonicForcing<T> {
        &self.forcing
    }

    /// Model name.
    pub fn model_name() -> &'static str {
        "HullWhiteHarmonic"
    }
}

impl HarmonicHullWhiteModel<f64> {
    /// Build the model from full simulation parameters.
    pub fn from_simulation(params: &SimulationParameters) -> Self {
        Self::new(
            HullWhiteParams::from_simulation(params),
            HarmonicForcing::new(params.amplitude, params.frequency),
        )
    }
}

impl<T: Float> DriftRule<T> for HarmonicHullWhiteModel<T> {
    #[inline]
    fn reversion_gap(&self, rate: T, time: T) -> T {
        self.base.reversion_gap(rate, time) + self.forcing.value(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn model() -> HarmonicHullWhiteModel<f64> {
        HarmonicHullWhiteModel::from_simulation(&SimulationParameters::default())
    }

    #[test]
    fn test_forcing_value_and_period() {
        let forcing = HarmonicForcing::new(0.02_f64, 2.0 * PI / 22.0);
        assert_eq!(forcing.value(0.0), 0.0);
        assert_relative_eq!(forcing.value(5.5), 0.02, epsilon = 1e-15);
        assert_relative_eq!(forcing.value(16.5), -0.02, epsilon = 1e-15);
        assert_relative_eq!(forcing.period().unwrap(), 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_static_forcing_has_no_period() {
        let forcing = HarmonicForcing::new(0.02_f64, 0.0);
        assert!(forcing.period().is_none());
        assert_eq!(forcing.value(10.0), 0.0);
    }

    #[test]
    fn test_gap_reduces_to_plain_at_forcing_zeros() {
        let m = model();
        let plain = m.base().reversion_gap(0.03, 0.0);
        assert_eq!(m.reversion_gap(0.03, 0.0), plain);
        assert_relative_eq!(m.reversion_gap(0.03, 11.0), plain, epsilon = 1e-15);
    }

    #[test]
    fn test_gap_adds_forcing() {
        let m = model();
        // Quarter period: forcing at its peak
        assert_relative_eq!(m.reversion_gap(0.05, 5.5), 0.02, epsilon = 1e-15);
        assert_relative_eq!(m.reversion_gap(0.05, 16.5), -0.02, epsilon = 1e-15);
    }

    #[test]
    fn test_response_amplitude() {
        let forcing = HarmonicForcing::new(0.02_f64, 0.3);
        let expected = 0.02 * 0.4 / (0.4_f64 * 0.4 + 0.3 * 0.3).sqrt();
        assert_relative_eq!(forcing.response_amplitude(0.4), expected, epsilon = 1e-15);
        assert_eq!(HarmonicForcing::new(0.02_f64, 0.0).response_amplitude(0.0), 0.0);
    }

    #[test]
    fn test_model_name() {
        assert_eq!(
            HarmonicHullWhiteModel::<f64>::model_name(),
            "HullWhiteHarmonic"
        );
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_forcing_serde_roundtrip() {
            let forcing = HarmonicForcing::new(0.02_f64, 2.0 * PI / 22.0);
            let json = serde_json::to_string(&forcing).unwrap();

            let parsed: HarmonicForcing<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, forcing);
            assert_eq!(parsed.period(), forcing.period());
        }
    }
}
