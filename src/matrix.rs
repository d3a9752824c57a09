//! Symmetric distance matrix input type.
//!
//! The engine consumes a pre-built matrix and never mutates it. The
//! validating constructor enforces the input contract once, so the hot
//! construction loop can index without re-checking.

use crate::error::AcoError;
use rand::Rng;

/// An N×N nonnegative symmetric distance matrix with zero diagonal.
///
/// Immutable for the duration of a run. `N` fixes the problem dimension
/// for every other entity in the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wraps a raw matrix, validating the input contract.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidMatrix`] if the matrix is not square,
    /// contains a negative or non-finite entry, has a nonzero diagonal,
    /// or is asymmetric.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(AcoError::InvalidMatrix(format!(
                        "entry ({i}, {j}) must be finite and nonnegative, got {d}"
                    )));
                }
            }
            if rows[i][i] != 0.0 {
                return Err(AcoError::InvalidMatrix(format!(
                    "diagonal entry ({i}, {i}) must be zero, got {}",
                    rows[i][i]
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(AcoError::InvalidMatrix(format!(
                        "asymmetric entries at ({i}, {j}): {} vs {}",
                        rows[i][j], rows[j][i]
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Generates a random symmetric instance with entries in
    /// `[0, max_distance)` and a zero diagonal.
    ///
    /// Convenience factory for tests, benchmarks, and sweep drivers.
    pub fn random<R: Rng>(n: usize, max_distance: f64, rng: &mut R) -> Self {
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = rng.random_range(0.0..max_distance.max(f64::MIN_POSITIVE));
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        Self { rows }
    }

    /// Problem dimension N.
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Distance from node `i` to node `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }
}
