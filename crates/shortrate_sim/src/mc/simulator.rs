//! Euler-Maruyama path simulator.
//!
//! One recurrence serves every model; the drift rule is the only thing that
//! changes between the plain and the harmonic run.
//!
//! # Algorithm
//!
//! 1. Validate parameters (before any draw)
//! 2. Precompute `vol_sqrt_dt = sigma * sqrt(dt)`
//! 3. Set column 0 of every path to the initial rate
//! 4. For each step `t` in `1..=num_steps`:
//!    - draw `num_paths` standard normals in one batch
//!    - for each path, `r[t] = r[t-1] + (a * gap(r[t-1], time[t-1]) * dt + vol_sqrt_dt * z)`

use shortrate_core::types::{SimulationError, SimulationParameters, TimeGrid};
use shortrate_models::models::DriftRule;
use tracing::debug;

use super::ensemble::PathEnsemble;
use crate::rng::SimRng;

/// Reusable path simulator for one parameter set.
///
/// Holds the validated parameters, the time grid and the per-step shock
/// buffer, so repeated runs (plain then harmonic) allocate only their
/// output ensembles.
///
/// # Examples
///
/// ```rust
/// use shortrate_core::types::SimulationParameters;
/// use shortrate_models::models::{ShortRateModelEnum, ShortRateModelKind};
/// use shortrate_sim::mc::PathSimulator;
/// use shortrate_sim::rng::SimRng;
///
/// let params = SimulationParameters::builder()
///     .num_paths(10)
///     .num_steps(20)
///     .build()
///     .unwrap();
/// let mut simulator = PathSimulator::new(params).unwrap();
/// let mut rng = SimRng::from_seed(42);
///
/// for kind in ShortRateModelKind::ALL {
///     let model = ShortRateModelEnum::from_params(kind, &params);
///     let ensemble = simulator.simulate(&model, &mut rng);
///     assert_eq!(ensemble.shape(), (10, 21));
/// }
/// assert_eq!(rng.draws(), 2 * 10 * 20);
/// ```
#[derive(Clone, Debug)]
pub struct PathSimulator {
    params: SimulationParameters,
    grid: TimeGrid,
    shocks: Vec<f64>,
}

impl PathSimulator {
    /// Creates a simulator for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if any invariant is violated.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self {
            grid: TimeGrid::from_params(&params),
            shocks: vec![0.0; params.num_paths],
            params,
        })
    }

    /// Simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Time grid shared by every path.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Simulates the full ensemble under `rule`, advancing `rng` by exactly
    /// `num_paths * num_steps` draws.
    pub fn simulate<R: DriftRule<f64>>(&mut self, rule: &R, rng: &mut SimRng) -> PathEnsemble {
        let num_paths = self.params.num_paths;
        let num_steps = self.params.num_steps;
        let num_times = num_steps + 1;

        // Precompute constants outside the loop
        let dt = self.params.time_step_size;
        let reversion_speed = self.params.reversion_speed;
        let vol_sqrt_dt = self.params.volatility * dt.sqrt();

        let draws_before = rng.draws();
        let mut ensemble =
            PathEnsemble::with_initial_rate(num_paths, num_steps, self.params.initial_rate);
        let rates = ensemble.as_mut_slice();

        for step in 1..num_times {
            rng.fill_normal(&mut self.shocks);
            let time = self.grid.time(step - 1);

            for (path_idx, &z) in self.shocks.iter().enumerate() {
                let offset = path_idx * num_times + step;
                let prior = rates[offset - 1];
                let drift = reversion_speed * rule.reversion_gap(prior, time) * dt;
                let diffusion = vol_sqrt_dt * z;
                rates[offset] = prior + (drift + diffusion);
            }
        }

        debug!(
            num_paths,
            num_steps,
            draws = rng.draws() - draws_before,
            "ensemble simulated"
        );

        ensemble
    }
}

/// Validates `params` and simulates one ensemble under `rule`.
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameters` before touching `rng` if any
/// invariant is violated.
pub fn simulate<R: DriftRule<f64>>(
    params: &SimulationParameters,
    rule: &R,
    rng: &mut SimRng,
) -> Result<PathEnsemble, SimulationError> {
    let mut simulator = PathSimulator::new(*params)?;
    Ok(simulator.simulate(rule, rng))
}
