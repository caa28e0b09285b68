//! Default model and simulation constants.
//!
//! These reproduce the reference configuration: a 5% long-term mean, slow
//! reversion, and a harmonic forcing with a 22 year period.

use std::f64::consts::PI;

/// Long-term mean of the short rate.
pub const LONG_TERM_MEAN: f64 = 0.05;

/// Mean reversion speed (a).
pub const REVERSION_SPEED: f64 = 0.1;

/// Short rate volatility (sigma).
pub const VOLATILITY: f64 = 0.04;

/// Amplitude of the harmonic forcing term.
pub const AMPLITUDE: f64 = 0.02;

/// Period of the harmonic forcing, in model time units.
pub const FORCING_PERIOD: f64 = 22.0;

/// Angular frequency of the harmonic forcing term.
pub const FREQUENCY: f64 = 2.0 * PI / FORCING_PERIOD;

/// Short rate at time zero.
pub const INITIAL_RATE: f64 = 0.02;

/// Number of simulated paths.
pub const NUM_PATHS: usize = 1_000;

/// Number of time steps per path.
pub const NUM_STEPS: usize = 5_000;

/// Time step size (dt).
pub const TIME_STEP_SIZE: f64 = 0.01;

/// Seed for the shared pseudo-random stream.
pub const SEED: u64 = 42;
