//! # Experiment
//!
//! Batch execution of independent runs. Every run builds its own
//! [`GeneticAlgorithm`] from a setup closure and owns a random stream seeded with
//! `base_seed + run index`, so runs never share state and a batch gives the same
//! report whether it executes on one thread or on the rayon pool.

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::launcher::{GeneticAlgorithm, RunOutcome, RunReport};
use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Aggregate over all runs of an [`Experiment`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    pub runs: usize,
    pub successes: usize,
    /// Runs that stopped on convergence rather than on the generation cap.
    pub converged: usize,
    pub mean_generations: f64,
}

impl ExperimentReport {
    /// Aggregates reports in run order.
    pub fn from_reports(reports: &[RunReport]) -> Self {
        let runs = reports.len();
        let successes = reports.iter().filter(|r| r.success).count();
        let converged = reports
            .iter()
            .filter(|r| r.outcome == RunOutcome::Converged)
            .count();
        let total: usize = reports.iter().map(|r| r.generations).sum();
        let mean_generations = if runs == 0 {
            0.0
        } else {
            total as f64 / runs as f64
        };

        Self {
            runs,
            successes,
            converged,
            mean_generations,
        }
    }

    /// Fraction of successful runs.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64
        }
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Success runs: {} / {}", self.successes, self.runs)
    }
}

/// A batch of independent runs of the same configuration.
///
/// # Example
///
/// ```rust
/// use bitga::evolution::{Experiment, GeneticAlgorithm};
/// use bitga::fitness::FhdFitness;
/// use bitga::genotype::BinaryGenotypeFactory;
/// use bitga::individual::IndividualFactory;
/// use bitga::phenotype::BinaryPhenotypeFactory;
/// use bitga::population::Population;
/// use bitga::selection::StochasticUniversalSampling;
///
/// let experiment = Experiment::new(4, |rng| {
///     let factory = IndividualFactory::new(BinaryGenotypeFactory::new(6), BinaryPhenotypeFactory);
///     let population = Population::new(factory.mixed(9, 1, rng), factory)?;
///     GeneticAlgorithm::builder()
///         .with_population(population)
///         .with_selection(StochasticUniversalSampling::new(0.9, FhdFitness::default())?)
///         .build()
/// })
/// .with_seed(7);
///
/// let report = experiment.run().unwrap();
/// assert_eq!(report.runs, 4);
/// ```
pub struct Experiment<F>
where
    F: Fn(&mut RandomNumberGenerator) -> Result<GeneticAlgorithm> + Send + Sync,
{
    setup: F,
    runs: usize,
    base_seed: u64,
    parallel: bool,
}

impl<F> Experiment<F>
where
    F: Fn(&mut RandomNumberGenerator) -> Result<GeneticAlgorithm> + Send + Sync,
{
    /// Creates a parallel experiment of `runs` runs with base seed 0.
    pub fn new(runs: usize, setup: F) -> Self {
        Self {
            setup,
            runs,
            base_seed: 0,
            parallel: true,
        }
    }

    pub fn with_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Executes the runs one after another on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Executes every run and aggregates the reports.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the experiment has no runs, and otherwise the
    /// first error raised by setup or by a run.
    #[instrument(
        level = "info",
        skip(self),
        fields(runs = self.runs, base_seed = self.base_seed, parallel = self.parallel)
    )]
    pub fn run(&self) -> Result<ExperimentReport> {
        if self.runs == 0 {
            return Err(GeneticError::Configuration(
                "Experiment needs at least one run".to_string(),
            ));
        }

        let reports = if self.parallel {
            (0..self.runs)
                .into_par_iter()
                .map(|index| self.run_once(index))
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..self.runs)
                .map(|index| self.run_once(index))
                .collect::<Result<Vec<_>>>()?
        };

        let report = ExperimentReport::from_reports(&reports);
        info!(
            successes = report.successes,
            converged = report.converged,
            mean_generations = report.mean_generations,
            "Experiment finished"
        );
        Ok(report)
    }

    fn run_once(&self, index: usize) -> Result<RunReport> {
        let mut rng = RandomNumberGenerator::from_seed(self.base_seed.wrapping_add(index as u64));
        let mut ga = (self.setup)(&mut rng)?;
        let report = ga.run(&mut rng)?;
        debug!(run = index, %report, "Run finished");
        Ok(report)
    }
}

impl<F> fmt::Debug for Experiment<F>
where
    F: Fn(&mut RandomNumberGenerator) -> Result<GeneticAlgorithm> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Experiment")
            .field("runs", &self.runs)
            .field("base_seed", &self.base_seed)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}
