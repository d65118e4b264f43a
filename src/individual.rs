//! # Individual
//!
//! An [`Individual`] pairs a genotype with the phenotype developed from it. Cloning
//! an individual deep-copies both, so a clone can be mutated without affecting the
//! original.
//!
//! [`IndividualFactory`] combines a [`GenotypeFactory`] with a [`PhenotypeFactory`]
//! and builds starting populations.
//!
//! ## Example
//!
//! ```rust
//! use bitga::genotype::BinaryGenotypeFactory;
//! use bitga::individual::IndividualFactory;
//! use bitga::phenotype::BinaryPhenotypeFactory;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let factory = IndividualFactory::new(BinaryGenotypeFactory::new(10), BinaryPhenotypeFactory);
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! // 99 random individuals followed by one optimal individual
//! let individuals = factory.mixed(99, 1, &mut rng);
//! assert_eq!(individuals.len(), 100);
//! assert_eq!(individuals[99].genotype().to_string(), "0000000000");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::genotype::{Genotype, GenotypeFactory};
use crate::phenotype::{Phenotype, PhenotypeFactory};
use crate::rng::RandomNumberGenerator;

/// A genotype together with its developed phenotype.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genotype: Genotype,
    phenotype: Phenotype,
}

impl Individual {
    pub fn new(genotype: Genotype, phenotype: Phenotype) -> Self {
        Self {
            genotype,
            phenotype,
        }
    }

    /// Builds an individual, developing its phenotype from `genotype`.
    pub fn develop<P>(genotype: Genotype, phenotypes: &P) -> Self
    where
        P: PhenotypeFactory + ?Sized,
    {
        let phenotype = phenotypes.sample(&genotype);
        Self::new(genotype, phenotype)
    }

    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    pub fn phenotype(&self) -> &Phenotype {
        &self.phenotype
    }

    pub fn into_genotype(self) -> Genotype {
        self.genotype
    }

    /// Flips the bit at `locus`. The phenotype is left as is until
    /// [`redevelop`](Self::redevelop) is called.
    pub fn mutate(&mut self, locus: usize) -> Result<()> {
        self.genotype.mutate(locus)
    }

    /// Recomputes the phenotype from the current genotype.
    pub fn redevelop<P>(&mut self, phenotypes: &P)
    where
        P: PhenotypeFactory + ?Sized,
    {
        self.phenotype = phenotypes.sample(&self.genotype);
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) -> {}", self.genotype, self.phenotype)
    }
}

/// Builds individuals of one chromosome length and one phenotype decoding.
#[derive(Debug, Clone)]
pub struct IndividualFactory {
    genotypes: Arc<dyn GenotypeFactory>,
    phenotypes: Arc<dyn PhenotypeFactory>,
}

impl IndividualFactory {
    pub fn new<G, P>(genotypes: G, phenotypes: P) -> Self
    where
        G: GenotypeFactory + 'static,
        P: PhenotypeFactory + 'static,
    {
        Self::from_shared(Arc::new(genotypes), Arc::new(phenotypes))
    }

    pub fn from_shared(
        genotypes: Arc<dyn GenotypeFactory>,
        phenotypes: Arc<dyn PhenotypeFactory>,
    ) -> Self {
        Self {
            genotypes,
            phenotypes,
        }
    }

    /// Chromosome length of every individual this factory builds.
    pub fn length(&self) -> usize {
        self.genotypes.length()
    }

    pub fn genotypes(&self) -> &dyn GenotypeFactory {
        self.genotypes.as_ref()
    }

    pub fn phenotypes(&self) -> &dyn PhenotypeFactory {
        self.phenotypes.as_ref()
    }

    pub fn develop(&self, genotype: Genotype) -> Individual {
        Individual::develop(genotype, self.phenotypes())
    }

    /// Builds an individual from a chromosome written as `'0'`/`'1'` symbols.
    pub fn instance(&self, chromosome: &str) -> Result<Individual> {
        let genotype = self.genotypes.sample(chromosome)?;
        Ok(self.develop(genotype))
    }

    /// `n` individuals with random genotypes.
    pub fn random(&self, n: usize, rng: &mut RandomNumberGenerator) -> Vec<Individual> {
        (0..n)
            .map(|_| self.develop(self.genotypes.random(rng)))
            .collect()
    }

    /// `n` copies of the optimal individual.
    pub fn optimal(&self, n: usize) -> Vec<Individual> {
        let optimal = self.optimal_individual();
        vec![optimal; n]
    }

    pub fn optimal_individual(&self) -> Individual {
        self.develop(self.genotypes.optimal())
    }

    /// `random` random individuals followed by `optimal` optimal ones.
    pub fn mixed(
        &self,
        random: usize,
        optimal: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Individual> {
        let mut individuals = self.random(random, rng);
        individuals.extend(self.optimal(optimal));
        individuals
    }
}
