use std::collections::BTreeMap;
use std::fmt::Debug;

use tracing::trace;

use crate::error::{ensure_probability, ensure_size_preserved, GeneticError, OptionExt, Result};
use crate::individual::Individual;
use crate::phenotype::PhenotypeFactory;
use crate::rng::RandomNumberGenerator;

/// Trait for mutation operators.
///
/// A mutation operator perturbs a generation in place and must return as many
/// individuals as it received. Every individual whose genotype changed has its
/// phenotype redeveloped with `phenotypes`.
pub trait Mutation: Debug + Send + Sync {
    fn next_generation(
        &self,
        individuals: Vec<Individual>,
        phenotypes: &dyn PhenotypeFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

/// Per-locus mutation probabilities keyed by `(chromosome length, population size)`.
///
/// Lookups are exact; the table is never interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationTable {
    rates: BTreeMap<(usize, usize), f64>,
}

impl MutationTable {
    /// Chromosome lengths covered by [`standard`](Self::standard), with their base rate
    /// for a population of 100.
    pub const STANDARD_BASE_RATES: [(usize, f64); 2] = [(10, 0.0005), (100, 0.00001)];

    /// Population sizes covered by [`standard`](Self::standard).
    pub const STANDARD_POPULATION_SIZES: [usize; 11] =
        [10, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

    /// The tuned table: `rate(L, N) = base(L) / (N / 100)`.
    pub fn standard() -> Self {
        let rates = Self::STANDARD_BASE_RATES
            .iter()
            .flat_map(|&(length, base)| {
                Self::STANDARD_POPULATION_SIZES
                    .iter()
                    .map(move |&size| ((length, size), base / (size as f64 / 100.0)))
            })
            .collect();
        Self { rates }
    }

    /// Builds a table from explicit `((length, size), rate)` entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a rate is not a probability.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((usize, usize), f64)>,
    {
        let rates = entries
            .into_iter()
            .map(|(key, rate)| ensure_probability("mutation rate", rate).map(|rate| (key, rate)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { rates })
    }

    /// The per-locus mutation probability for chromosomes of `length` loci in a
    /// population of `size` individuals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the pair is not in the table.
    pub fn rate(&self, length: usize, size: usize) -> Result<f64> {
        self.rates
            .get(&(length, size))
            .copied()
            .ok_or_else_genetic(|| {
                GeneticError::InvalidParameter(format!(
                    "No mutation rate for chromosome length {} and population size {}",
                    length, size
                ))
            })
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for MutationTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Flips every locus of every individual independently with a fixed probability.
///
/// # Examples
///
/// ```
/// use bitga::operator::{DenseMutation, MutationTable};
///
/// let table = MutationTable::standard();
/// let mutation = DenseMutation::new(&table, 10, 200).unwrap();
/// assert!((mutation.rate() - 0.00025).abs() < 1e-15);
///
/// assert!(DenseMutation::new(&table, 10, 150).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseMutation {
    rate: f64,
    /// `(length, size)` the rate was looked up for, if it came from a table.
    bucket: Option<(usize, usize)>,
}

impl DenseMutation {
    /// Looks the rate up in `table` for the given chromosome length and population
    /// size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the pair is not in the table.
    pub fn new(table: &MutationTable, length: usize, size: usize) -> Result<Self> {
        Ok(Self {
            rate: table.rate(length, size)?,
            bucket: Some((length, size)),
        })
    }

    /// Uses `rate` for any chromosome length and population size.
    pub fn with_rate(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: ensure_probability("mutation rate", rate)?,
            bucket: None,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn check_bucket(&self, individuals: &[Individual]) -> Result<()> {
        let Some((length, size)) = self.bucket else {
            return Ok(());
        };
        if individuals.len() != size {
            return Err(GeneticError::Configuration(format!(
                "mutation rate was tuned for {} individuals, received {}",
                size,
                individuals.len()
            )));
        }
        if let Some(odd) = individuals.iter().find(|i| i.genotype().len() != length) {
            return Err(GeneticError::Configuration(format!(
                "mutation rate was tuned for chromosome length {}, received {}",
                length,
                odd.genotype().len()
            )));
        }
        Ok(())
    }
}

impl Mutation for DenseMutation {
    fn next_generation(
        &self,
        individuals: Vec<Individual>,
        phenotypes: &dyn PhenotypeFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        self.check_bucket(&individuals)?;

        let size = individuals.len();
        let mut flipped = 0usize;
        let mut next = individuals;
        for individual in next.iter_mut() {
            let mut changed = false;
            for locus in 0..individual.genotype().len() {
                if rng.chance(self.rate) {
                    individual.mutate(locus)?;
                    changed = true;
                    flipped += 1;
                }
            }
            if changed {
                individual.redevelop(phenotypes);
            }
        }

        trace!(size, flipped, rate = self.rate, "dense mutation perturbed generation");
        ensure_size_preserved("dense mutation", size, next.len())?;
        Ok(next)
    }
}
