//! Hull-White one-factor short-rate model with a constant reversion target.
//!
//! The model is described by:
//! ```text
//! dr(t) = a * (theta - r(t)) * dt + sigma * dW(t)
//! ```
//! where:
//! - r(t) = short rate at time t
//! - a = mean reversion speed
//! - theta = long-term mean
//! - sigma = volatility (non-negative)
//! - dW(t) = Wiener process increment
//!
//! ## Key Properties
//!
//! - **Mean reversion**: For `a > 0` the expected rate decays towards `theta`
//! - **Gaussian**: Rates are normally distributed and may become negative
//! - **Stationary spread**: `sigma / sqrt(2a)` once the initial rate is forgotten
//!
//! ## Usage
//!
//! ```
//! use shortrate_models::models::hull_white::{HullWhiteModel, HullWhiteParams};
//! use shortrate_models::models::DriftRule;
//!
//! let params = HullWhiteParams::new(0.05_f64, 0.1, 0.04).unwrap();
//! let model = HullWhiteModel::new(params);
//!
//! // Gap pulls a low rate upwards
//! assert!(model.reversion_gap(0.02, 0.0) > 0.0);
//!
//! // Expected rate relaxes towards the long-term mean
//! let far = model.expected_rate(0.02, 200.0);
//! assert!((far - 0.05).abs() < 1e-8);
//! ```

use num_traits::Float;
use shortrate_core::types::{SimulationError, SimulationParameters};

use super::drift::DriftRule;

/// Hull-White model parameters.
///
/// # Fields
///
/// * `long_term_mean` - Reversion target (theta)
/// * `mean_reversion` - Mean reversion speed (a)
/// * `volatility` - Short rate volatility (sigma), must be non-negative
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullWhiteParams<T: Float> {
    /// Reversion target (theta)
    pub long_term_mean: T,
    /// Mean reversion speed (a)
    pub mean_reversion: T,
    /// Volatility of short rate (sigma >= 0)
    pub volatility: T,
}

impl<T: Float> HullWhiteParams<T> {
    /// Create new Hull-White parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if `volatility` is
    /// negative or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use shortrate_models::models::hull_white::HullWhiteParams;
    ///
    /// assert!(HullWhiteParams::new(0.05, 0.1, 0.04).is_ok());
    /// assert!(HullWhiteParams::new(0.05, 0.1, -0.04).is_err());
    /// ```
    pub fn new(
        long_term_mean: T,
        mean_reversion: T,
        volatility: T,
    ) -> Result<Self, SimulationError> {
        if !(volatility >= T::zero()) {
            return Err(SimulationError::invalid("volatility", "must be non-negative"));
        }
        Ok(Self {
            long_term_mean,
            mean_reversion,
            volatility,
        })
    }

    /// Stationary standard deviation `sigma / sqrt(2a)`.
    ///
    /// Returns `None` when the process is not mean-reverting (`a <= 0`).
    pub fn stationary_std_dev(&self) -> Option<T> {
        if self.mean_reversion <= T::zero() {
            return None;
        }
        let two = T::from(2.0).unwrap_or(T::one());
        Some(self.volatility / (two * self.mean_reversion).sqrt())
    }
}

impl HullWhiteParams<f64> {
    /// Extract the Hull-White fields from full simulation parameters.
    pub fn from_simulation(params: &SimulationParameters) -> Self {
        Self {
            long_term_mean: params.long_term_mean,
            mean_reversion: params.reversion_speed,
            volatility: params.volatility,
        }
    }
}

/// Hull-White one-factor model with a constant long-term mean.
///
/// # Discretisation
///
/// Under Euler-Maruyama the engine applies
/// ```text
/// r(t+dt) = r(t) + a * (theta - r(t)) * dt + sigma * sqrt(dt) * Z
/// ```
/// and this type supplies the `theta - r(t)` gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullWhiteModel<T: Float> {
    params: HullWhiteParams<T>,
}

impl<T: Float> HullWhiteModel<T> {
    /// Create a new Hull-White model instance.
    pub fn new(params: HullWhiteParams<T>) -> Self {
        Self { params }
    }

    /// Model parameters.
    #[inline]
    pub fn params(&self) -> &HullWhiteParams<T> {
        &self.params
    }

    /// Continuous-time conditional mean `E[r(t) | r(0)]`.
    ///
    /// ```text
    /// E[r(t)] = theta + (r0 - theta) * exp(-a t)
    /// ```
    pub fn expected_rate(&self, initial_rate: T, time: T) -> T {
        let theta = self.params.long_term_mean;
        let a = self.params.mean_reversion;
        theta + (initial_rate - theta) * (-(a * time)).exp()
    }

    /// Exact mean of the Euler-Maruyama recurrence after `steps` steps.
    ///
    /// The noise has zero mean, so the discrete mean follows
    /// `m[n] = theta + (r0 - theta) * (1 - a dt)^n`.
    pub fn discrete_expected_rate(&self, initial_rate: T, dt: T, steps: usize) -> T {
        let theta = self.params.long_term_mean;
        let a = self.params.mean_reversion;
        let n = T::from(steps).unwrap_or(T::zero());
        theta + (initial_rate - theta) * (T::one() - a * dt).powf(n)
    }

    /// Model name.
    pub fn model_name() -> &'static str {
        "HullWhite1F"
    }
}

impl HullWhiteModel<f64> {
    /// Build the model from full simulation parameters.
    pub fn from_simulation(params: &SimulationParameters) -> Self {
        Self::new(HullWhiteParams::from_simulation(params))
    }
}

impl<T: Float> DriftRule<T> for HullWhiteModel<T> {
    #[inline]
    fn reversion_gap(&self, rate: T, _time: T) -> T {
        self.params.long_term_mean - rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> HullWhiteModel<f64> {
        HullWhiteModel::new(HullWhiteParams::new(0.05, 0.1, 0.04).unwrap())
    }

    #[test]
    fn test_params_validation() {
        assert!(HullWhiteParams::new(0.05_f64, 0.1, 0.0).is_ok());
        assert!(HullWhiteParams::new(0.05_f64, -0.1, 0.04).is_ok());

        let err = HullWhiteParams::new(0.05_f64, 0.1, -0.01).unwrap_err();
        assert_eq!(err.parameter(), "volatility");
        assert!(HullWhiteParams::new(0.05_f64, 0.1, f64::NAN).is_err());
    }

    #[test]
    fn test_from_simulation() {
        let sim = SimulationParameters::default();
        let params = HullWhiteParams::from_simulation(&sim);
        assert_eq!(params.long_term_mean, sim.long_term_mean);
        assert_eq!(params.mean_reversion, sim.reversion_speed);
        assert_eq!(params.volatility, sim.volatility);
    }

    #[test]
    fn test_stationary_std_dev() {
        let params = HullWhiteParams::new(0.05_f64, 0.5, 0.04).unwrap();
        assert_relative_eq!(params.stationary_std_dev().unwrap(), 0.04, epsilon = 1e-15);

        let no_reversion = HullWhiteParams::new(0.05_f64, 0.0, 0.04).unwrap();
        assert!(no_reversion.stationary_std_dev().is_none());
    }

    #[test]
    fn test_reversion_gap_ignores_time() {
        let m = model();
        assert_relative_eq!(m.reversion_gap(0.02, 0.0), 0.03, epsilon = 1e-15);
        assert_relative_eq!(m.reversion_gap(0.02, 37.5), 0.03, epsilon = 1e-15);
        assert_relative_eq!(m.reversion_gap(0.08, 1.0), -0.03, epsilon = 1e-15);
    }

    #[test]
    fn test_expected_rate_limits() {
        let m = model();
        assert_relative_eq!(m.expected_rate(0.02, 0.0), 0.02, epsilon = 1e-15);
        assert_relative_eq!(m.expected_rate(0.02, 500.0), 0.05, epsilon = 1e-12);

        // One e-folding closes ~63% of the gap
        let one_tau = m.expected_rate(0.02, 10.0);
        assert_relative_eq!(one_tau, 0.05 - 0.03 * (-1.0_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_discrete_mean_matches_recurrence() {
        let m = model();
        let dt = 0.01;
        let mut mean = 0.02;
        for _ in 0..250 {
            mean += 0.1 * m.reversion_gap(mean, 0.0) * dt;
        }
        assert_relative_eq!(
            m.discrete_expected_rate(0.02, dt, 250),
            mean,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_discrete_mean_close_to_continuous() {
        let m = model();
        let discrete = m.discrete_expected_rate(0.02, 0.01, 5_000);
        let continuous = m.expected_rate(0.02, 50.0);
        assert_relative_eq!(discrete, continuous, epsilon = 1e-5);
    }

    #[test]
    fn test_model_name() {
        assert_eq!(HullWhiteModel::<f64>::model_name(), "HullWhite1F");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_params_serde_roundtrip() {
            let params = HullWhiteParams::new(0.05_f64, 0.1, 0.04).unwrap();
            let json = serde_json::to_string(&params).unwrap();
            assert!(json.contains("\"mean_reversion\":0.1"));

            let parsed: HullWhiteParams<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, params);
        }
    }
}
