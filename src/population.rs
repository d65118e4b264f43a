//! # Population
//!
//! A [`Population`] holds the current generation and the known optimal individual
//! of the target problem. [`evolve`](Population::evolve) replaces the generation
//! with `mutation(crossover(selection(individuals)))`, with crossover and mutation
//! optional; the convergence predicates compare genotypes across the generation
//! and against the optimum.
//!
//! Shares are fractions in `[0, 1]`: `is_optimal(0.9)` asks whether at least 90%
//! of the individuals carry the optimal genotype.

use std::collections::HashSet;

use crate::error::{ensure_size_preserved, GeneticError, Result};
use crate::individual::{Individual, IndividualFactory};
use crate::operator::{Crossover, Mutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::Selection;

/// The current generation of a run.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    optimal: Individual,
    factory: IndividualFactory,
}

impl Population {
    /// Creates a population whose optimum and phenotype decoding come from `factory`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `individuals` is empty and `Configuration` if an
    /// individual's chromosome length differs from the factory's.
    pub fn new(individuals: Vec<Individual>, factory: IndividualFactory) -> Result<Self> {
        if individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if let Some(odd) = individuals
            .iter()
            .find(|i| i.genotype().len() != factory.length())
        {
            return Err(GeneticError::Configuration(format!(
                "population expects chromosomes of length {}, received {}",
                factory.length(),
                odd.genotype()
            )));
        }

        Ok(Self {
            optimal: factory.optimal_individual(),
            individuals,
            factory,
        })
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The known best individual, fixed for the lifetime of the population.
    pub fn optimal(&self) -> &Individual {
        &self.optimal
    }

    pub fn factory(&self) -> &IndividualFactory {
        &self.factory
    }

    /// Replaces the generation with the output of the operators.
    ///
    /// The current individuals are only read; selection copies the ones it draws,
    /// and crossover and mutation work on those copies. On error the population is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Propagates operator errors and returns `InvariantViolation` if any stage
    /// changes the number of individuals.
    pub fn evolve(
        &mut self,
        selection: &dyn Selection,
        crossover: Option<&dyn Crossover>,
        mutation: Option<&dyn Mutation>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let size = self.individuals.len();
        let phenotypes = self.factory.phenotypes();

        let mut next = selection.next_generation(&self.individuals, rng)?;
        ensure_size_preserved("selection", size, next.len())?;

        if let Some(crossover) = crossover {
            next = crossover.next_generation(next, phenotypes, rng)?;
            ensure_size_preserved("crossover", size, next.len())?;
        }

        if let Some(mutation) = mutation {
            next = mutation.next_generation(next, phenotypes, rng)?;
            ensure_size_preserved("mutation", size, next.len())?;
        }

        self.individuals = next;
        Ok(())
    }

    /// Number of distinct genotypes in the generation.
    pub fn distinct(&self) -> usize {
        self.individuals
            .iter()
            .map(Individual::genotype)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Fraction of individuals whose genotype equals the optimal one.
    pub fn optimal_share(&self) -> f64 {
        let optimal = self.optimal.genotype();
        let count = self
            .individuals
            .iter()
            .filter(|i| i.genotype() == optimal)
            .count();
        count as f64 / self.individuals.len() as f64
    }

    /// Whether at least `share` of the individuals are optimal.
    pub fn is_optimal(&self, share: f64) -> bool {
        self.optimal_share() >= share
    }

    /// Whether the generation holds exactly `count` distinct genotypes.
    pub fn is_identical(&self, count: usize) -> bool {
        self.distinct() == count
    }

    /// Whether distinct genotypes make up at most `share` of the generation.
    pub fn is_homogeneous(&self, share: f64) -> bool {
        self.distinct() as f64 / self.individuals.len() as f64 <= share
    }
}
