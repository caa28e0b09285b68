//! Path simulation kernels.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationParameters  (validated once at construction)
//! ├── TimeGrid              (drift rules see time[t-1])
//! ├── shock buffer          (one normal per path, reused every step)
//! └── simulate(rule, rng) -> PathEnsemble
//! ```
//!
//! # Draw Ordering
//!
//! Shocks are drawn step-major: at each step the engine fills one buffer of
//! `num_paths` normals, path 0 first, then advances every path. A run
//! therefore consumes exactly `num_paths * num_steps` variates, and a second
//! run on the same generator starts where the first stopped.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order:
//! `data[path_idx * (num_steps + 1) + step_idx]`, with `step_idx = 0` holding
//! the initial rate.

mod ensemble;
mod simulator;

pub use ensemble::PathEnsemble;
pub use simulator::{simulate, PathSimulator};
