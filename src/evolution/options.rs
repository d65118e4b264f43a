//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the stopping and success contract of a
//! [`GeneticAlgorithm`](super::GeneticAlgorithm) run.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(10_000, LogLevel::Minimal);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_max_generations(), 10_000_000);
//! ```
//!
//! ## Fields
//!
//! - `max_generations`: Safety valve. A run that has not converged after this many
//!   generations stops anyway and is reported as capped, not as converged.
//! - `log_level`: How much the run loop reports through `tracing`.
//! - `identical_count`: Distinct genotype count that counts as converged when no
//!   mutation is configured.
//! - `homogeneity`: Distinct genotype share at or below which a run with mutation
//!   counts as converged.
//! - `success_with_mutation` / `success_without_mutation`: Optimal share a stopped
//!   run needs to be a success.

use crate::error::{ensure_probability, GeneticError, Result};

/// How much the run loop reports.
///
/// - `Verbose`: a `debug` event for every generation, plus `Minimal`.
/// - `Minimal`: `info` events when a run starts and stops.
/// - `None`: no events from the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    max_generations: usize,
    log_level: LogLevel,
    identical_count: usize,
    homogeneity: f64,
    success_with_mutation: f64,
    success_without_mutation: f64,
}

impl EvolutionOptions {
    pub const DEFAULT_MAX_GENERATIONS: usize = 10_000_000;
    pub const DEFAULT_HOMOGENEITY: f64 = 0.01;
    pub const DEFAULT_SUCCESS_WITH_MUTATION: f64 = 0.9;
    pub const DEFAULT_SUCCESS_WITHOUT_MUTATION: f64 = 1.0;

    pub fn new(max_generations: usize, log_level: LogLevel) -> Self {
        Self {
            max_generations,
            log_level,
            ..Self::default()
        }
    }

    /// Checks that the options describe a run that can terminate.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for a zero generation cap or identical count, and
    /// `InvalidParameter` for a share outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }
        if self.identical_count == 0 {
            return Err(GeneticError::Configuration(
                "Identical count cannot be zero".to_string(),
            ));
        }
        ensure_probability("homogeneity", self.homogeneity)?;
        ensure_probability("success share with mutation", self.success_with_mutation)?;
        ensure_probability("success share without mutation", self.success_without_mutation)?;
        Ok(())
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_identical_count(&self) -> usize {
        self.identical_count
    }

    pub fn get_homogeneity(&self) -> f64 {
        self.homogeneity
    }

    /// Whether a population of `size` individuals can ever satisfy the homogeneity
    /// criterion. A single distinct genotype already makes up `1 / size` of it.
    pub fn is_homogeneity_reachable(&self, size: usize) -> bool {
        self.homogeneity * size as f64 >= 1.0
    }

    /// The optimal share a stopped run needs to count as a success.
    pub fn get_success_share(&self, with_mutation: bool) -> f64 {
        if with_mutation {
            self.success_with_mutation
        } else {
            self.success_without_mutation
        }
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .max_generations(5_000)
    ///     .log_level(LogLevel::Verbose)
    ///     .homogeneity(0.1)
    ///     .build();
    ///
    /// assert_eq!(options.get_homogeneity(), 0.1);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            max_generations: Self::DEFAULT_MAX_GENERATIONS,
            log_level: LogLevel::None,
            identical_count: 1,
            homogeneity: Self::DEFAULT_HOMOGENEITY,
            success_with_mutation: Self::DEFAULT_SUCCESS_WITH_MUTATION,
            success_without_mutation: Self::DEFAULT_SUCCESS_WITHOUT_MUTATION,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    max_generations: Option<usize>,
    log_level: Option<LogLevel>,
    identical_count: Option<usize>,
    homogeneity: Option<f64>,
    success_with_mutation: Option<f64>,
    success_without_mutation: Option<f64>,
}

impl EvolutionOptionsBuilder {
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn identical_count(mut self, value: usize) -> Self {
        self.identical_count = Some(value);
        self
    }

    pub fn homogeneity(mut self, value: f64) -> Self {
        self.homogeneity = Some(value);
        self
    }

    pub fn success_with_mutation(mut self, value: f64) -> Self {
        self.success_with_mutation = Some(value);
        self
    }

    pub fn success_without_mutation(mut self, value: f64) -> Self {
        self.success_without_mutation = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            identical_count: self.identical_count.unwrap_or(defaults.identical_count),
            homogeneity: self.homogeneity.unwrap_or(defaults.homogeneity),
            success_with_mutation: self
                .success_with_mutation
                .unwrap_or(defaults.success_with_mutation),
            success_without_mutation: self
                .success_without_mutation
                .unwrap_or(defaults.success_without_mutation),
        }
    }
}
