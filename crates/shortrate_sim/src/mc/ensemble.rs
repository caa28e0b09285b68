//! Dense storage for a simulated ensemble of short-rate paths.

use shortrate_core::types::SimulationError;

/// Row-major grid of simulated rates, shape `(num_paths, num_steps + 1)`.
///
/// # Examples
///
/// ```rust
/// use shortrate_sim::mc::PathEnsemble;
///
/// let ensemble = PathEnsemble::from_rows(vec![
///     vec![1.0, 2.0],
///     vec![3.0, 4.0],
///     vec![5.0, 6.0],
/// ])
/// .unwrap();
///
/// assert_eq!(ensemble.shape(), (3, 2));
/// assert_eq!(ensemble.path(1), &[3.0, 4.0]);
/// assert_eq!(ensemble.column(1).collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathEnsemble {
    num_paths: usize,
    num_times: usize,
    data: Vec<f64>,
}

impl PathEnsemble {
    /// Allocates an ensemble whose first column holds `initial_rate`.
    ///
    /// All other cells start at zero and are written by the simulator.
    pub(crate) fn with_initial_rate(
        num_paths: usize,
        num_steps: usize,
        initial_rate: f64,
    ) -> Self {
        let num_times = num_steps + 1;
        let mut data = vec![0.0; num_paths * num_times];
        for row in data.chunks_exact_mut(num_times) {
            row[0] = initial_rate;
        }
        Self {
            num_paths,
            num_times,
            data,
        }
    }

    /// Builds an ensemble from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` if there are no rows, the
    /// rows are empty, or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SimulationError> {
        let num_paths = rows.len();
        if num_paths == 0 {
            return Err(SimulationError::invalid("num_paths", "must be positive, got 0"));
        }
        let num_times = rows[0].len();
        if num_times == 0 {
            return Err(SimulationError::invalid("num_steps", "rows must not be empty"));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != num_times) {
            return Err(SimulationError::invalid(
                "num_steps",
                format!(
                    "row {} has {} values, expected {}",
                    bad,
                    rows[bad].len(),
                    num_times
                ),
            ));
        }
        Ok(Self {
            num_paths,
            num_times,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of paths (rows).
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Number of time steps; the grid has one more column.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.num_times - 1
    }

    /// Number of columns (`num_steps + 1`).
    #[inline]
    pub fn num_times(&self) -> usize {
        self.num_times
    }

    /// `(num_paths, num_steps + 1)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_paths, self.num_times)
    }

    /// Rate of path `path_idx` at grid point `step_idx`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, path_idx: usize, step_idx: usize) -> f64 {
        assert!(step_idx < self.num_times, "step index out of range");
        self.data[path_idx * self.num_times + step_idx]
    }

    /// One path as a slice of `num_steps + 1` rates.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let start = path_idx * self.num_times;
        &self.data[start..start + self.num_times]
    }

    /// Iterator over paths.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.num_times)
    }

    /// Iterator over the rates of every path at grid point `step_idx`.
    pub fn column(&self, step_idx: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(step_idx < self.num_times, "step index out of range");
        self.data
            .iter()
            .skip(step_idx)
            .step_by(self.num_times)
            .copied()
    }

    /// Rates at the final grid point.
    pub fn terminal_rates(&self) -> Vec<f64> {
        self.column(self.num_times - 1).collect()
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
