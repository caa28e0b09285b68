//! Uniform time grid for path simulation.
//!
//! Every path of a run is observed on the same grid of `num_steps + 1`
//! points `t_k = k * dt`, starting at zero.
//!
//! # Examples
//!
//! ```
//! use shortrate_core::types::TimeGrid;
//!
//! let grid = TimeGrid::new(4, 0.25).unwrap();
//! assert_eq!(grid.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(grid.horizon(), 1.0);
//! ```

use super::error::SimulationError;
use super::params::SimulationParameters;

/// Ordered, uniformly spaced simulation times.
///
/// Immutable once constructed; the only way to obtain one is from a step
/// count and a step size.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    step_size: f64,
    times: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid of `num_steps + 1` points spaced by `step_size`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if `num_steps` is zero or
    /// `step_size` is not strictly positive.
    pub fn new(num_steps: usize, step_size: f64) -> Result<Self, SimulationError> {
        if num_steps == 0 {
            return Err(SimulationError::invalid("num_steps", "must be positive, got 0"));
        }
        if !(step_size > 0.0) {
            return Err(SimulationError::invalid(
                "time_step_size",
                format!("must be positive, got {}", step_size),
            ));
        }
        Ok(Self::build(num_steps, step_size))
    }

    /// Creates the grid described by validated parameters.
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self::build(params.num_steps, params.time_step_size)
    }

    fn build(num_steps: usize, step_size: f64) -> Self {
        let times = (0..=num_steps).map(|k| k as f64 * step_size).collect();
        Self { step_size, times }
    }

    /// Time of grid point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > num_steps`.
    #[inline]
    pub fn time(&self, index: usize) -> f64 {
        self.times[index]
    }

    /// Number of grid points (`num_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: a grid holds at least the origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of steps between grid points.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Spacing between consecutive points.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Last grid time.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Grid times as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Iterator over grid times.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_starts_at_zero_and_is_uniform() {
        let grid = TimeGrid::new(100, 0.01).unwrap();
        assert_eq!(grid.len(), 101);
        assert_eq!(grid.num_steps(), 100);
        assert_eq!(grid.time(0), 0.0);
        for k in 1..grid.len() {
            assert_relative_eq!(grid.time(k) - grid.time(k - 1), 0.01, epsilon = 1e-12);
        }
        assert_relative_eq!(grid.horizon(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_from_params() {
        let params = SimulationParameters::builder()
            .num_steps(10)
            .time_step_size(0.5)
            .build()
            .unwrap();
        let grid = TimeGrid::from_params(&params);
        assert_eq!(grid.len(), 11);
        assert_eq!(grid.step_size(), 0.5);
        assert_eq!(grid.horizon(), 5.0);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_rejects_invalid_inputs() {
        assert!(TimeGrid::new(0, 0.1).is_err());
        assert!(TimeGrid::new(10, 0.0).is_err());
        assert!(TimeGrid::new(10, -1.0).is_err());
    }

    #[test]
    fn test_grid_iter_matches_slice() {
        let grid = TimeGrid::new(3, 2.0).unwrap();
        let collected: Vec<f64> = grid.iter().collect();
        assert_eq!(collected.as_slice(), grid.as_slice());
    }
}
