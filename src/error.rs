//! Error types for the Ant System engine.
//!
//! Only structural and parameter errors are surfaced; numeric edge cases
//! encountered mid-search (all-zero sampling weights, zero-cost tours)
//! are recovered in place so a long run is never aborted by a single
//! degenerate step.

use std::fmt;

/// Fatal errors raised before any pheromone state is created or mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    /// Problem dimension too small to construct a tour (requires N ≥ 2).
    InvalidDimension {
        /// The offending dimension.
        n: usize,
    },

    /// A configuration parameter is outside its valid range.
    InvalidParameter(String),

    /// The distance matrix violates the input contract
    /// (square, symmetric, nonnegative, zero diagonal).
    InvalidMatrix(String),
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcoError::InvalidDimension { n } => {
                write!(f, "problem dimension must be at least 2, got {n}")
            }
            AcoError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            AcoError::InvalidMatrix(msg) => write!(f, "invalid distance matrix: {msg}"),
        }
    }
}

impl std::error::Error for AcoError {}
