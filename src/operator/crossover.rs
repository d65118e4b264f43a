use std::fmt::Debug;

use tracing::trace;

use crate::error::{ensure_probability, ensure_size_preserved, GeneticError, Result};
use crate::individual::Individual;
use crate::phenotype::PhenotypeFactory;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover operators.
///
/// A crossover operator recombines a generation and must return as many individuals
/// as it received. Children whose genotype was produced by recombination get their
/// phenotype developed with `phenotypes`.
pub trait Crossover: Debug + Send + Sync {
    fn next_generation(
        &self,
        individuals: Vec<Individual>,
        phenotypes: &dyn PhenotypeFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

/// One-point crossover over uniformly random pairs.
///
/// The generation is shuffled and consumed two at a time. Each pair, with the
/// configured probability, draws a point `k ∈ [0, L)` and swaps the genotype
/// suffixes starting at `k`. With an odd number of individuals the one left
/// without a partner passes through unchanged.
///
/// # Examples
///
/// ```
/// use bitga::genotype::BinaryGenotypeFactory;
/// use bitga::individual::IndividualFactory;
/// use bitga::operator::{Crossover, OnePointCrossover};
/// use bitga::phenotype::BinaryPhenotypeFactory;
/// use bitga::rng::RandomNumberGenerator;
///
/// let factory = IndividualFactory::new(BinaryGenotypeFactory::new(8), BinaryPhenotypeFactory);
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let parents = factory.random(6, &mut rng);
///
/// let children = OnePointCrossover::new()
///     .next_generation(parents, factory.phenotypes(), &mut rng)
///     .unwrap();
/// assert_eq!(children.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePointCrossover {
    probability: f64,
}

impl OnePointCrossover {
    /// Creates a crossover that recombines every pair.
    pub fn new() -> Self {
        Self { probability: 1.0 }
    }

    /// Creates a crossover that recombines each pair with `probability`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `probability` lies in `[0, 1]`.
    pub fn with_probability(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("crossover probability", probability)?,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    fn mate(
        &self,
        first: Individual,
        second: Individual,
        phenotypes: &dyn PhenotypeFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        let length = first.genotype().len();
        if length == 0 || !rng.chance(self.probability) {
            return Ok((first, second));
        }

        let point = rng.index(length);
        let (left, right) = first.genotype().splice(second.genotype(), point)?;
        Ok((
            Individual::develop(left, phenotypes),
            Individual::develop(right, phenotypes),
        ))
    }
}

impl Default for OnePointCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl Crossover for OnePointCrossover {
    fn next_generation(
        &self,
        individuals: Vec<Individual>,
        phenotypes: &dyn PhenotypeFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let size = individuals.len();
        if let Some(first) = individuals.first() {
            let length = first.genotype().len();
            if let Some(odd) = individuals.iter().find(|i| i.genotype().len() != length) {
                return Err(GeneticError::Configuration(format!(
                    "one-point crossover needs equal chromosome lengths, found {} and {}",
                    length,
                    odd.genotype().len()
                )));
            }
        }

        let mut pool = individuals;
        rng.shuffle(&mut pool);

        let mut next = Vec::with_capacity(size);
        let mut pool = pool.into_iter();
        while let Some(first) = pool.next() {
            match pool.next() {
                Some(second) => {
                    let (left, right) = self.mate(first, second, phenotypes, rng)?;
                    next.push(left);
                    next.push(right);
                }
                None => next.push(first),
            }
        }

        trace!(size, pairs = size / 2, "one-point crossover recombined generation");
        ensure_size_preserved("one-point crossover", size, next.len())?;
        Ok(next)
    }
}
