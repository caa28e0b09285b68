//! DriftRule trait for the deterministic part of the recurrence.
//!
//! The path engine advances every path with
//! ```text
//! r[t] = r[t-1] + (a * gap(r[t-1], time[t-1]) * dt + sigma * sqrt(dt) * Z)
//! ```
//! and a `DriftRule` supplies `gap`. Closures `Fn(T, T) -> T` taking
//! `(prior_rate, time)` implement the trait directly, which keeps ad-hoc
//! rules in tests as cheap as the named models.
//!
//! ## Example
//!
//! ```
//! use shortrate_models::models::DriftRule;
//!
//! let towards_five_percent = |rate: f64, _time: f64| 0.05 - rate;
//! assert!((towards_five_percent.reversion_gap(0.02, 1.0) - 0.03).abs() < 1e-15);
//! ```

use num_traits::Float;

/// Mean-reversion gap of a short-rate model.
///
/// # Type Parameters
/// * `T` - Float type
pub trait DriftRule<T: Float> {
    /// Gap between the reversion target and the prior rate.
    ///
    /// # Arguments
    /// * `rate` - Rate at the previous grid point
    /// * `time` - Time of the previous grid point
    fn reversion_gap(&self, rate: T, time: T) -> T;
}

impl<T, F> DriftRule<T> for F
where
    T: Float,
    F: Fn(T, T) -> T,
{
    #[inline]
    fn reversion_gap(&self, rate: T, time: T) -> T {
        self(rate, time)
    }
}
