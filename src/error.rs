//! # Error Types
//!
//! This module defines the error type shared by every component of the harness.
//! Errors are local precondition failures checked at component boundaries: a bad
//! construction parameter, an operator that changed the population size, or a
//! degenerate (empty) population. None of them is recovered mid-run; they
//! propagate out of [`Population::evolve`](crate::population::Population::evolve)
//! and [`GeneticAlgorithm::run`](crate::evolution::GeneticAlgorithm::run).
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn check_share(share: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&share) {
//!         return Err(GeneticError::InvalidParameter(format!(
//!             "share should belong to [0, 1], received: {}",
//!             share
//!         )));
//!     }
//!     Ok(share)
//! }
//!
//! assert!(check_share(0.5).is_ok());
//! assert!(check_share(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use bitga::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> bitga::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A construction parameter is outside its valid domain, e.g. a rank constant
    /// outside `(0, 1)` or a `(length, size)` pair missing from the mutation table.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An operator broke a structural invariant, e.g. produced a different number of
    /// individuals than it received.
    #[error("Invariant violation in {operator}: expected {expected}, got {actual}")]
    InvariantViolation {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when components are wired together inconsistently.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a fitness function yields a non-finite score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when the selection wheel is malformed.
    #[error("Selection error: {0}")]
    Selection(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Returns an [`GeneticError::InvariantViolation`] unless an operator preserved the
/// number of individuals it was given.
pub(crate) fn ensure_size_preserved(
    operator: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if expected != actual {
        return Err(GeneticError::InvariantViolation {
            operator,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Returns an [`GeneticError::InvalidParameter`] unless `value` is a probability.
pub(crate) fn ensure_probability(name: &str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::InvalidParameter(format!(
            "{} should belong to [0, 1], received: {}",
            name, value
        )));
    }
    Ok(value)
}
