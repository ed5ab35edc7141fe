//! Newton divided-difference table.
//!
//! Entry `(degree, index)` is the divided difference of the `degree + 1`
//! consecutive samples starting at `index`:
//!
//! ```text
//! f[x_i]                = y_i
//! f[x_i, ..., x_{i+d}]  = (f[x_i, ..., x_{i+d-1}] - f[x_{i+1}, ..., x_{i+d}]) / (x_i - x_{i+d})
//! ```
//!
//! The table is triangular: row `d` holds `n - d` entries. Entries are
//! computed on first request and cached; the naive recursion revisits the
//! same sub-differences exponentially often, the cache makes a full table
//! `O(n²)`. The sample set is owned and immutable, so a cached entry never
//! goes stale.

use std::cell::OnceCell;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;


#[derive(Debug, Clone)]
pub struct DividedDifferences {
    samples: SampleSet,
    table: Vec<Vec<OnceCell<f64>>>,
}

impl DividedDifferences {
    pub fn new(samples: SampleSet) -> Self {
        let n = samples.len();
        let table = (0..n)
            .map(|d| (0..n - d).map(|_| OnceCell::new()).collect())
            .collect();

        tracing::debug!(n, "divided-difference table allocated");
        Self { samples, table }
    }

    pub fn samples(&self) -> &SampleSet { &self.samples }

    /// Largest degree the table can produce, `n - 1`.
    pub fn max_degree(&self) -> usize { self.samples.len() - 1 }

    /// Divided difference of degree `degree` starting at sample `index`.
    ///
    /// # Errors
    /// - [`InterpolationError::DegreeOutOfRange`] if `degree + index >= n`.
    pub fn coefficient(&self, degree: usize, index: usize) -> Result<f64, InterpolationError> {
        self.coefficient_offset(degree, index, 0)
    }

    /// As [`DividedDifferences::coefficient`] over the window starting at `offset`.
    ///
    /// Reindexes into the same table, `index + offset`, without rebuilding.
    pub fn coefficient_offset(
        &self,
        degree: usize,
        index: usize,
        offset: usize,
    ) -> Result<f64, InterpolationError> {
        self.samples.check_degree(degree, index + offset)?;
        Ok(self.entry(degree, index + offset))
    }

    /// Triangular prefix of rows `0..=degree`.
    ///
    /// Row 0 is every `y`, each following row one entry shorter.
    pub fn coefficients(&self, degree: usize) -> Result<Vec<Vec<f64>>, InterpolationError> {
        self.samples.check_degree(degree, 0)?;

        Ok((0..=degree)
            .map(|d| (0..self.table[d].len()).map(|i| self.entry(d, i)).collect())
            .collect())
    }

    /// Number of entries computed so far.
    pub fn computed(&self) -> usize {
        self.table.iter().flatten().filter(|cell| cell.get().is_some()).count()
    }

    fn entry(&self, degree: usize, index: usize) -> f64 {
        *self.table[degree][index].get_or_init(|| {
            if degree == 0 {
                return self.samples.y()[index];
            }

            let x = self.samples.x();
            let upper = self.entry(degree - 1, index);
            let lower = self.entry(degree - 1, index + 1);
            let value = (upper - lower) / (x[index] - x[index + degree]);

            tracing::trace!(degree, index, value, "divided difference");
            value
        })
    }
}
