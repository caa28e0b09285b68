//! Simulation parameters shared by both short-rate models.
//!
//! [`SimulationParameters`] is a plain `Copy` record: the plain Hull-White
//! model reads the mean-reversion fields, the harmonic variant additionally
//! reads `amplitude` and `frequency`, and the path engine reads the grid
//! fields. Structural invariants are checked by [`SimulationParameters::validate`],
//! which the builder and the path engine both call.

use crate::defaults;

use super::error::SimulationError;

/// Model and discretisation parameters for one simulation run.
///
/// # Invariants
///
/// - `num_paths > 0`
/// - `num_steps > 0`
/// - `time_step_size > 0`
/// - `volatility >= 0`
///
/// Comparisons are written so that NaN fails every check.
///
/// # Examples
///
/// ```rust
/// use shortrate_core::types::SimulationParameters;
///
/// let params = SimulationParameters::default();
/// assert!(params.validate().is_ok());
/// assert_eq!(params.num_paths, 1_000);
/// assert_eq!(params.num_steps, 5_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Long-term mean the short rate reverts to (theta).
    pub long_term_mean: f64,
    /// Mean reversion speed (a).
    pub reversion_speed: f64,
    /// Short rate volatility (sigma), must be non-negative.
    pub volatility: f64,
    /// Harmonic forcing amplitude.
    pub amplitude: f64,
    /// Harmonic forcing angular frequency.
    pub frequency: f64,
    /// Short rate at time zero, shared by every path.
    pub initial_rate: f64,
    /// Number of simulated paths, must be positive.
    pub num_paths: usize,
    /// Number of time steps per path, must be positive.
    pub num_steps: usize,
    /// Time step size (dt), must be positive.
    pub time_step_size: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            long_term_mean: defaults::LONG_TERM_MEAN,
            reversion_speed: defaults::REVERSION_SPEED,
            volatility: defaults::VOLATILITY,
            amplitude: defaults::AMPLITUDE,
            frequency: defaults::FREQUENCY,
            initial_rate: defaults::INITIAL_RATE,
            num_paths: defaults::NUM_PATHS,
            num_steps: defaults::NUM_STEPS,
            time_step_size: defaults::TIME_STEP_SIZE,
        }
    }
}

impl SimulationParameters {
    /// Creates a new parameters builder seeded with the default constants.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Validates the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if:
    /// - `num_paths` or `num_steps` is 0
    /// - `time_step_size` is not strictly positive
    /// - `volatility` is negative
    /// - the ensemble size `num_paths * (num_steps + 1)` overflows `usize`
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_paths == 0 {
            return Err(SimulationError::invalid("num_paths", "must be positive, got 0"));
        }
        if self.num_steps == 0 {
            return Err(SimulationError::invalid("num_steps", "must be positive, got 0"));
        }
        if !(self.time_step_size > 0.0) {
            return Err(SimulationError::invalid(
                "time_step_size",
                format!("must be positive, got {}", self.time_step_size),
            ));
        }
        if !(self.volatility >= 0.0) {
            return Err(SimulationError::invalid(
                "volatility",
                format!("must be non-negative, got {}", self.volatility),
            ));
        }
        if self.grid_size().is_none() {
            return Err(SimulationError::invalid(
                "num_paths",
                format!(
                    "ensemble of {} x {} cells overflows usize",
                    self.num_paths, self.num_steps
                ),
            ));
        }
        Ok(())
    }

    /// Number of cells in the ensemble grid, `None` on overflow.
    #[inline]
    pub fn grid_size(&self) -> Option<usize> {
        self.num_steps
            .checked_add(1)
            .and_then(|columns| self.num_paths.checked_mul(columns))
    }

    /// Number of standard-normal draws a simulation consumes.
    #[inline]
    pub fn draw_count(&self) -> usize {
        self.num_paths.saturating_mul(self.num_steps)
    }

    /// Simulated horizon `num_steps * time_step_size`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.num_steps as f64 * self.time_step_size
    }
}

/// Builder for [`SimulationParameters`].
///
/// Starts from the default constants and validates at build time.
///
/// # Examples
///
/// ```rust
/// use shortrate_core::types::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .reversion_speed(0.5)
///     .volatility(0.0)
///     .num_paths(10)
///     .build()
///     .expect("valid parameters");
/// assert_eq!(params.reversion_speed, 0.5);
///
/// let err = SimulationParameters::builder().num_steps(0).build();
/// assert!(err.is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    params: SimulationParameters,
}

impl SimulationParametersBuilder {
    /// Sets the long-term mean.
    #[inline]
    pub fn long_term_mean(mut self, value: f64) -> Self {
        self.params.long_term_mean = value;
        self
    }

    /// Sets the mean reversion speed.
    #[inline]
    pub fn reversion_speed(mut self, value: f64) -> Self {
        self.params.reversion_speed = value;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, value: f64) -> Self {
        self.params.volatility = value;
        self
    }

    /// Sets the harmonic forcing amplitude.
    #[inline]
    pub fn amplitude(mut self, value: f64) -> Self {
        self.params.amplitude = value;
        self
    }

    /// Sets the harmonic forcing angular frequency.
    #[inline]
    pub fn frequency(mut self, value: f64) -> Self {
        self.params.frequency = value;
        self
    }

    /// Sets the initial short rate.
    #[inline]
    pub fn initial_rate(mut self, value: f64) -> Self {
        self.params.initial_rate = value;
        self
    }

    /// Sets the number of paths.
    #[inline]
    pub fn num_paths(mut self, value: usize) -> Self {
        self.params.num_paths = value;
        self
    }

    /// Sets the number of time steps.
    #[inline]
    pub fn num_steps(mut self, value: usize) -> Self {
        self.params.num_steps = value;
        self
    }

    /// Sets the time step size.
    #[inline]
    pub fn time_step_size(mut self, value: f64) -> Self {
        self.params.time_step_size = value;
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` when an invariant is violated.
    pub fn build(self) -> Result<SimulationParameters, SimulationError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let params = SimulationParameters::default();
        assert!(params.validate().is_ok());
        assert_relative_eq!(params.frequency, 2.0 * std::f64::consts::PI / 22.0);
        assert_relative_eq!(params.horizon(), 50.0);
    }

    #[test]
    fn test_builder_overrides() {
        let params = SimulationParameters::builder()
            .long_term_mean(0.03)
            .reversion_speed(0.2)
            .volatility(0.01)
            .amplitude(0.0)
            .frequency(1.0)
            .initial_rate(0.04)
            .num_paths(7)
            .num_steps(9)
            .time_step_size(0.5)
            .build()
            .unwrap();

        assert_eq!(params.long_term_mean, 0.03);
        assert_eq!(params.reversion_speed, 0.2);
        assert_eq!(params.volatility, 0.01);
        assert_eq!(params.amplitude, 0.0);
        assert_eq!(params.frequency, 1.0);
        assert_eq!(params.initial_rate, 0.04);
        assert_eq!(params.num_paths, 7);
        assert_eq!(params.num_steps, 9);
        assert_eq!(params.time_step_size, 0.5);
    }

    #[test]
    fn test_zero_paths_rejected() {
        let err = SimulationParameters::builder().num_paths(0).build().unwrap_err();
        assert_eq!(err.parameter(), "num_paths");
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = SimulationParameters::builder().num_steps(0).build().unwrap_err();
        assert_eq!(err.parameter(), "num_steps");
    }

    #[test]
    fn test_non_positive_step_size_rejected() {
        for dt in [0.0, -0.01, f64::NAN] {
            let err = SimulationParameters::builder()
                .time_step_size(dt)
                .build()
                .unwrap_err();
            assert_eq!(err.parameter(), "time_step_size");
        }
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let err = SimulationParameters::builder()
            .volatility(-0.01)
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), "volatility");

        // Zero volatility is a valid deterministic model
        assert!(SimulationParameters::builder().volatility(0.0).build().is_ok());
    }

    #[test]
    fn test_grid_overflow_rejected() {
        let params = SimulationParameters {
            num_paths: usize::MAX,
            num_steps: 2,
            ..SimulationParameters::default()
        };
        assert!(params.grid_size().is_none());
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_draw_count_and_grid_size() {
        let params = SimulationParameters::builder()
            .num_paths(3)
            .num_steps(4)
            .build()
            .unwrap();
        assert_eq!(params.draw_count(), 12);
        assert_eq!(params.grid_size(), Some(15));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_params_serde_roundtrip() {
            let params = SimulationParameters::builder()
                .num_paths(64)
                .num_steps(200)
                .time_step_size(0.05)
                .build()
                .unwrap();
            let json = serde_json::to_string(&params).unwrap();
            assert!(json.contains("\"num_paths\":64"));

            let parsed: SimulationParameters = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, params);
            assert!(parsed.validate().is_ok());
        }

        #[test]
        fn test_params_serde_missing_field_is_error() {
            assert!(serde_json::from_str::<SimulationParameters>("{\"num_paths\":10}").is_err());
        }
    }
}
