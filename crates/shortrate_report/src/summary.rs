//! Mean-path reduction and the summary reporter.
//!
//! [`reduce`] collapses the path dimension of an ensemble into the
//! column-wise arithmetic mean. [`SummaryReporter`] pairs that reduction with
//! a [`Renderer`] so a pipeline can reduce and present in one call.

use shortrate_sim::mc::PathEnsemble;

use crate::render::{RenderError, Renderer};

/// Column-wise mean of an ensemble, one value per grid point.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanPath {
    values: Vec<f64>,
}

impl MeanPath {
    /// Wraps precomputed values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values indexed by step.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the path holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `step`, if in range.
    #[inline]
    pub fn get(&self, step: usize) -> Option<f64> {
        self.values.get(step).copied()
    }

    /// Value at the last grid point.
    pub fn terminal(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Smallest and largest value, ignoring NaN.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Pointwise difference `self - other`.
    ///
    /// Returns `None` if the lengths differ.
    pub fn deviation_from(&self, other: &MeanPath) -> Option<MeanPath> {
        if self.len() != other.len() {
            return None;
        }
        Some(MeanPath::from_values(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Steps at which the series changes sign.
    ///
    /// Zeros do not count as a sign; a crossing is reported at the first
    /// non-zero value whose sign differs from the last non-zero value.
    pub fn zero_crossings(&self) -> Vec<usize> {
        let mut crossings = Vec::new();
        let mut last_positive: Option<bool> = None;
        for (step, &v) in self.values.iter().enumerate() {
            if v == 0.0 || v.is_nan() {
                continue;
            }
            let positive = v > 0.0;
            if let Some(prev) = last_positive {
                if prev != positive {
                    crossings.push(step);
                }
            }
            last_positive = Some(positive);
        }
        crossings
    }
}

/// Reduces an ensemble to its column-wise arithmetic mean.
///
/// `mean[t] = r[0][t] + (1 / num_paths) * sum_p (r[p][t] - r[0][t])`, with the
/// offsets summed in path order. A column of identical rates reduces to that
/// rate exactly.
pub fn reduce(ensemble: &PathEnsemble) -> MeanPath {
    let mut paths = ensemble.paths();
    let base = match paths.next() {
        Some(first) => first,
        None => return MeanPath::from_values(Vec::new()),
    };

    let mut offsets = vec![0.0; ensemble.num_times()];
    for path in paths {
        for ((offset, &rate), &anchor) in offsets.iter_mut().zip(path).zip(base) {
            *offset += rate - anchor;
        }
    }

    let n = ensemble.num_paths() as f64;
    let values = base
        .iter()
        .zip(&offsets)
        .map(|(&anchor, &offset)| anchor + offset / n)
        .collect();
    MeanPath::from_values(values)
}

/// Reduces ensembles and hands the result to a renderer.
#[derive(Debug)]
pub struct SummaryReporter<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> SummaryReporter<R> {
    /// Creates a reporter around `renderer`.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Column-wise mean of `ensemble`.
    pub fn reduce(&self, ensemble: &PathEnsemble) -> MeanPath {
        reduce(ensemble)
    }

    /// Presents `series` under `title`.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's failure; `series` is left untouched.
    pub fn render(&mut self, series: &MeanPath, title: &str) -> Result<(), RenderError> {
        self.renderer.render(series, title)
    }

    /// The wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Unwraps the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
