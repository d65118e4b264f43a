//! # Fitness functions
//!
//! A [`FitnessFunction`] scores an individual; higher is better. Scores must be pure
//! and deterministic for a given individual. Non-finite scores are rejected by
//! [`Rank`](crate::selection::Rank) when it orders a population.

use std::fmt::Debug;

use crate::individual::Individual;

/// Scores an individual.
pub trait FitnessFunction: Debug + Send + Sync {
    fn score(&self, individual: &Individual) -> f64;
}

/// Scores every individual 100, so selection is driven by genetic drift alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstFitness;

impl FitnessFunction for ConstFitness {
    fn score(&self, _individual: &Individual) -> f64 {
        100.0
    }
}

/// A deceptive bit-counting function: every one-locus is worth 1 and every
/// zero-locus is worth `delta`, so with `delta > 1` the all-zeros chromosome wins.
///
/// `score = (L - k) + k * delta` where `L` is the chromosome length and `k` the zero
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FhdFitness {
    delta: f64,
}

impl FhdFitness {
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }
}

impl Default for FhdFitness {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl FitnessFunction for FhdFitness {
    fn score(&self, individual: &Individual) -> f64 {
        let genotype = individual.genotype();
        let length = genotype.len() as f64;
        let zeros = genotype.count_zeros() as f64;
        (length - zeros) + zeros * self.delta
    }
}

/// `x^2` of a numerical phenotype.
///
/// Counting phenotypes have no `x`; they score NaN, which ranking rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticFitness;

impl FitnessFunction for QuadraticFitness {
    fn score(&self, individual: &Individual) -> f64 {
        individual
            .phenotype()
            .value()
            .map_or(f64::NAN, |x| x.powi(2))
    }
}

/// `exp(c * x)` of a numerical phenotype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFitness {
    c: f64,
}

impl ExponentialFitness {
    pub fn new(c: f64) -> Self {
        Self { c }
    }
}

impl FitnessFunction for ExponentialFitness {
    fn score(&self, individual: &Individual) -> f64 {
        individual
            .phenotype()
            .value()
            .map_or(f64::NAN, |x| (self.c * x).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::Genotype;
    use crate::phenotype::{BinaryPhenotypeFactory, NumericalPhenotypeFactory};

    fn binary(text: &str) -> Individual {
        Individual::develop(text.parse().unwrap(), &BinaryPhenotypeFactory)
    }

    fn numerical(text: &str) -> Individual {
        Individual::develop(text.parse::<Genotype>().unwrap(), &NumericalPhenotypeFactory::new())
    }

    #[test]
    fn test_const_fitness() {
        assert_eq!(ConstFitness.score(&binary("0101")), 100.0);
        assert_eq!(ConstFitness.score(&numerical("1111")), 100.0);
    }

    #[test]
    fn test_fhd_fitness() {
        let fitness = FhdFitness::default();

        assert_eq!(fitness.score(&binary("1111111111")), 10.0);
        assert_eq!(fitness.score(&binary("0000000000")), 1000.0);
        assert_eq!(fitness.score(&binary("0011111111")), 8.0 + 200.0);
    }

    #[test]
    fn test_fhd_prefers_zeros() {
        let fitness = FhdFitness::new(2.0);
        assert!(fitness.score(&binary("0001")) > fitness.score(&binary("0011")));
    }

    #[test]
    fn test_quadratic_fitness() {
        // 1010 = 10 -> 0.1
        let score = QuadraticFitness.score(&numerical("1010"));
        assert!((score - 0.01).abs() < 1e-12);
        assert!(QuadraticFitness.score(&binary("1010")).is_nan());
    }

    #[test]
    fn test_exponential_fitness() {
        let fitness = ExponentialFitness::new(2.0);
        // 1100100 = 100 -> 1.0
        let score = fitness.score(&numerical("1100100"));
        assert!((score - 2.0f64.exp()).abs() < 1e-12);
        assert!(fitness.score(&binary("1")).is_nan());
    }
}
