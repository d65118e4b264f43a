use std::fmt;

use tracing::{debug, info, instrument, warn};

use super::builder::GeneticAlgorithmBuilder;
use super::options::{EvolutionOptions, LogLevel};
use crate::{
    error::Result,
    operator::{Crossover, Mutation},
    population::Population,
    rng::RandomNumberGenerator,
    selection::Selection,
};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    /// The population became identical (no mutation) or homogeneous (with mutation).
    Converged,
    /// The generation cap fired before the population converged.
    MaxGenerationsReached,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Number of generations evolved.
    pub generations: usize,
    /// Whether the final population holds enough optimal individuals.
    pub success: bool,
    pub optimal_share: f64,
    pub distinct: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} after {} generations: success={}, optimal share={:.3}, distinct={}",
            self.outcome, self.generations, self.success, self.optimal_share, self.distinct
        )
    }
}

/// Drives a population through generations until it converges or the generation
/// cap fires, then judges the final population against the optimum.
///
/// The stop criterion depends on whether a mutation operator is configured:
/// without mutation the population must collapse to `identical_count` distinct
/// genotypes, with mutation it only needs to become homogeneous. The success
/// threshold is relaxed the same way, since mutation keeps perturbing an otherwise
/// converged population.
#[derive(Debug)]
pub struct GeneticAlgorithm {
    population: Population,
    selection: Box<dyn Selection>,
    crossover: Option<Box<dyn Crossover>>,
    mutation: Option<Box<dyn Mutation>>,
    options: EvolutionOptions,
}

impl GeneticAlgorithm {
    /// Creates a new `GeneticAlgorithm`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`EvolutionOptions::validate`] if the options are invalid.
    pub fn new(
        population: Population,
        selection: Box<dyn Selection>,
        crossover: Option<Box<dyn Crossover>>,
        mutation: Option<Box<dyn Mutation>>,
        options: EvolutionOptions,
    ) -> Result<Self> {
        options.validate()?;
        if mutation.is_some() && !options.is_homogeneity_reachable(population.len()) {
            warn!(
                size = population.len(),
                homogeneity = options.get_homogeneity(),
                max_generations = options.get_max_generations(),
                "Homogeneity share is below 1 / population size; the run can only stop at the generation cap"
            );
        }
        Ok(Self {
            population,
            selection,
            crossover,
            mutation,
            options,
        })
    }

    pub fn builder() -> GeneticAlgorithmBuilder {
        GeneticAlgorithmBuilder::new()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn has_mutation(&self) -> bool {
        self.mutation.is_some()
    }

    /// Whether the population satisfies the stop criterion, ignoring the cap.
    pub fn is_converged(&self) -> bool {
        if self.has_mutation() {
            self.population.is_homogeneous(self.options.get_homogeneity())
        } else {
            self.population
                .is_identical(self.options.get_identical_count())
        }
    }

    /// Whether the population satisfies the success criterion.
    pub fn is_solution(&self) -> bool {
        self.population
            .is_optimal(self.options.get_success_share(self.has_mutation()))
    }

    /// Evolves the population until the stop criterion or the generation cap fires.
    ///
    /// The stop criterion is checked before every generation, so an already
    /// converged population is reported without being evolved.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while evolving; the run ends there.
    #[instrument(
        level = "debug",
        skip_all,
        fields(size = self.population.len(), mutation = self.mutation.is_some())
    )]
    pub fn run(&mut self, rng: &mut RandomNumberGenerator) -> Result<RunReport> {
        let log_level = self.options.get_log_level();
        let max_generations = self.options.get_max_generations();

        if log_level != LogLevel::None {
            info!(
                size = self.population.len(),
                distinct = self.population.distinct(),
                max_generations,
                "Starting run"
            );
        }

        let mut generations = 0;
        let outcome = loop {
            if self.is_converged() {
                break RunOutcome::Converged;
            }
            if generations >= max_generations {
                break RunOutcome::MaxGenerationsReached;
            }

            self.population.evolve(
                self.selection.as_ref(),
                self.crossover.as_deref(),
                self.mutation.as_deref(),
                rng,
            )?;
            generations += 1;

            if log_level == LogLevel::Verbose {
                debug!(
                    generation = generations,
                    distinct = self.population.distinct(),
                    optimal_share = self.population.optimal_share(),
                    "Evolved generation"
                );
            }
        };

        let report = RunReport {
            outcome,
            generations,
            success: self.is_solution(),
            optimal_share: self.population.optimal_share(),
            distinct: self.population.distinct(),
        };

        match (log_level, outcome) {
            (LogLevel::None, _) => {}
            (_, RunOutcome::MaxGenerationsReached) => {
                warn!(generations, success = report.success, "Run hit the generation cap")
            }
            (_, RunOutcome::Converged) => {
                info!(generations, success = report.success, "Run converged")
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use crate::fitness::{ConstFitness, FhdFitness};
    use crate::genotype::BinaryGenotypeFactory;
    use crate::individual::IndividualFactory;
    use crate::operator::{DenseMutation, MutationTable};
    use crate::phenotype::BinaryPhenotypeFactory;
    use crate::selection::{RouletteWheelSelection, StochasticUniversalSampling};

    fn factory(length: usize) -> IndividualFactory {
        IndividualFactory::new(BinaryGenotypeFactory::new(length), BinaryPhenotypeFactory)
    }

    fn population(texts: &[&str]) -> Population {
        let factory = factory(texts[0].len());
        let individuals = texts
            .iter()
            .map(|text| factory.instance(text).unwrap())
            .collect();
        Population::new(individuals, factory).unwrap()
    }

    #[test]
    fn test_converged_population_is_not_evolved() {
        let mut ga = GeneticAlgorithm::new(
            population(&["000", "000", "000"]),
            Box::new(RouletteWheelSelection::new(0.9, FhdFitness::default()).unwrap()),
            None,
            None,
            EvolutionOptions::default(),
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let report = ga.run(&mut rng).unwrap();

        assert_eq!(report.outcome, RunOutcome::Converged);
        assert_eq!(report.generations, 0);
        assert!(report.success);
        assert_eq!(report.optimal_share, 1.0);
        assert_eq!(report.distinct, 1);
    }

    #[test]
    fn test_identical_but_not_optimal_fails() {
        let mut ga = GeneticAlgorithm::new(
            population(&["101", "101"]),
            Box::new(StochasticUniversalSampling::new(0.5, ConstFitness).unwrap()),
            None,
            None,
            EvolutionOptions::default(),
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let report = ga.run(&mut rng).unwrap();

        assert_eq!(report.outcome, RunOutcome::Converged);
        assert!(!report.success);
        assert!(!ga.is_solution());
    }

    #[test]
    fn test_cap_is_a_safety_valve() {
        // full-rate mutation flips every locus each generation, so the population
        // alternates between two distinct genotypes and never becomes homogeneous
        let mut ga = GeneticAlgorithm::new(
            population(&["0000", "1111"]),
            Box::new(RouletteWheelSelection::new(0.5, ConstFitness).unwrap()),
            None,
            Some(Box::new(DenseMutation::with_rate(1.0).unwrap())),
            EvolutionOptions::builder()
                .max_generations(25)
                .homogeneity(0.0)
                .build(),
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let report = ga.run(&mut rng).unwrap();

        assert_eq!(report.outcome, RunOutcome::MaxGenerationsReached);
        assert_eq!(report.generations, 25);
        assert_eq!(report.success, ga.is_solution());
    }

    #[test]
    fn test_default_homogeneity_is_unreachable_for_small_populations() {
        let table = MutationTable::standard();
        let options = EvolutionOptions::builder().max_generations(50).build();
        assert!(!options.is_homogeneity_reachable(10));

        // already a single genotype, yet 1 / 10 exceeds the default share of 0.01
        let mut ga = GeneticAlgorithm::new(
            population(&["0000000000"; 10]),
            Box::new(StochasticUniversalSampling::new(0.9, FhdFitness::default()).unwrap()),
            None,
            Some(Box::new(DenseMutation::new(&table, 10, 10).unwrap())),
            options,
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);

        let report = ga.run(&mut rng).unwrap();

        assert_eq!(report.outcome, RunOutcome::MaxGenerationsReached);
        assert_eq!(report.generations, 50);
    }

    #[test]
    fn test_success_threshold_follows_mutation() {
        let with_mutation = GeneticAlgorithm::new(
            population(&["00", "00", "00", "00", "00", "00", "00", "00", "00", "11"]),
            Box::new(RouletteWheelSelection::new(0.5, ConstFitness).unwrap()),
            None,
            Some(Box::new(DenseMutation::with_rate(0.0).unwrap())),
            EvolutionOptions::default(),
        )
        .unwrap();
        assert!(with_mutation.is_solution());
        assert!(!with_mutation.is_converged());

        let without_mutation = GeneticAlgorithm::new(
            population(&["00", "00", "00", "00", "00", "00", "00", "00", "00", "11"]),
            Box::new(RouletteWheelSelection::new(0.5, ConstFitness).unwrap()),
            None,
            None,
            EvolutionOptions::default(),
        )
        .unwrap();
        assert!(!without_mutation.is_solution());
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let result = GeneticAlgorithm::new(
            population(&["00"]),
            Box::new(RouletteWheelSelection::new(0.5, ConstFitness).unwrap()),
            None,
            None,
            EvolutionOptions::new(0, LogLevel::None),
        );

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
