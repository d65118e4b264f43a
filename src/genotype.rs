//! # Genotype
//!
//! A [`Genotype`] is a fixed-length chromosome of bits, written most significant
//! locus first (`"0110"` has locus 0 equal to `0`). Each [`Individual`] owns its
//! genotype exclusively; operators that derive new individuals clone it.
//!
//! [`GenotypeFactory`] implementations produce genotypes of one fixed length:
//! random ones to seed a population, and the known optimal one used as ground
//! truth for convergence checks.
//!
//! ```rust
//! use bitga::genotype::{BinaryGenotypeFactory, Genotype, GenotypeFactory};
//!
//! let factory = BinaryGenotypeFactory::new(5);
//! assert_eq!(factory.optimal().to_string(), "00000");
//!
//! let mut genotype: Genotype = "10110".parse().unwrap();
//! genotype.mutate(0).unwrap();
//! assert_eq!(genotype.to_string(), "00110");
//! ```
//!
//! [`Individual`]: crate::individual::Individual

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// An ordered, fixed-length sequence of bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genotype {
    chromosome: Vec<bool>,
}

impl Genotype {
    pub fn new(chromosome: Vec<bool>) -> Self {
        Self { chromosome }
    }

    /// An all-zeros chromosome of the given length.
    pub fn zeros(length: usize) -> Self {
        Self::new(vec![false; length])
    }

    /// An all-ones chromosome of the given length.
    pub fn ones(length: usize) -> Self {
        Self::new(vec![true; length])
    }

    /// Encodes `value` as a big-endian binary chromosome of exactly `length` loci.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `value` does not fit in `length` bits.
    pub fn from_decimal(value: u64, length: usize) -> Result<Self> {
        let width = (u64::BITS - value.leading_zeros()) as usize;
        if width > length {
            return Err(GeneticError::InvalidParameter(format!(
                "{} needs {} bits but the chromosome has {}",
                value, width, length
            )));
        }

        let chromosome = (0..length)
            .rev()
            .map(|shift| shift < 64 && (value >> shift) & 1 == 1)
            .collect();
        Ok(Self::new(chromosome))
    }

    /// The unsigned integer spelled by the chromosome, or `None` above 64 loci.
    pub fn to_decimal(&self) -> Option<u64> {
        if self.chromosome.len() > 64 {
            return None;
        }
        Some(
            self.chromosome
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)),
        )
    }

    /// The chromosome read as a binary number, as a float.
    ///
    /// Exact up to 53 loci, rounded beyond.
    pub fn magnitude(&self) -> f64 {
        self.chromosome
            .iter()
            .fold(0.0, |acc, &bit| acc * 2.0 + if bit { 1.0 } else { 0.0 })
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    pub fn loci(&self) -> &[bool] {
        &self.chromosome
    }

    pub fn count_zeros(&self) -> usize {
        self.chromosome.iter().filter(|&&bit| !bit).count()
    }

    pub fn count_ones(&self) -> usize {
        self.chromosome.len() - self.count_zeros()
    }

    /// Flips the bit at `locus`.
    ///
    /// The owning individual's phenotype is not refreshed; callers rebuild it with
    /// [`Individual::redevelop`](crate::individual::Individual::redevelop).
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `locus` is past the end of the chromosome.
    pub fn mutate(&mut self, locus: usize) -> Result<()> {
        let len = self.chromosome.len();
        let bit = self.chromosome.get_mut(locus).ok_or_else(|| {
            GeneticError::InvalidParameter(format!(
                "locus {} is outside a chromosome of length {}",
                locus, len
            ))
        })?;
        *bit = !*bit;
        Ok(())
    }

    /// Swaps suffixes with `other` at `point`, returning both children.
    ///
    /// The first child keeps `self`'s prefix `[0, point)` followed by `other`'s
    /// suffix; the second child is the mirror image.
    pub fn splice(&self, other: &Self, point: usize) -> Result<(Self, Self)> {
        if self.len() != other.len() {
            return Err(GeneticError::Configuration(format!(
                "cannot splice chromosomes of lengths {} and {}",
                self.len(),
                other.len()
            )));
        }
        if point > self.len() {
            return Err(GeneticError::InvalidParameter(format!(
                "crossover point {} is outside a chromosome of length {}",
                point,
                self.len()
            )));
        }

        let (head, tail) = self.chromosome.split_at(point);
        let (other_head, other_tail) = other.chromosome.split_at(point);

        let first = head.iter().chain(other_tail).copied().collect();
        let second = other_head.iter().chain(tail).copied().collect();
        Ok((Self::new(first), Self::new(second)))
    }
}

impl FromStr for Genotype {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|symbol| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidParameter(format!(
                    "chromosome symbols must be '0' or '1', received: {:?}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.chromosome {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Produces genotypes of a single fixed length.
pub trait GenotypeFactory: fmt::Debug + Send + Sync {
    /// The chromosome length every produced genotype has.
    fn length(&self) -> usize;

    /// The known best genotype for the target problem.
    fn optimal(&self) -> Genotype;

    /// A genotype whose loci are independent fair coin flips.
    fn random(&self, rng: &mut RandomNumberGenerator) -> Genotype {
        Genotype::new((0..self.length()).map(|_| rng.chance(0.5)).collect())
    }

    /// Parses a chromosome written as `'0'`/`'1'` symbols.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` on a foreign symbol and `Configuration` when the
    /// length differs from [`length`](Self::length).
    fn sample(&self, chromosome: &str) -> Result<Genotype> {
        let genotype: Genotype = chromosome.parse()?;
        if genotype.len() != self.length() {
            return Err(GeneticError::Configuration(format!(
                "expected a chromosome of length {}, received one of length {}",
                self.length(),
                genotype.len()
            )));
        }
        Ok(genotype)
    }
}

/// Genotypes for the bit-counting problem, where the all-zeros chromosome is optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryGenotypeFactory {
    length: usize,
}

impl BinaryGenotypeFactory {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for BinaryGenotypeFactory {
    fn default() -> Self {
        Self::new(100)
    }
}

impl GenotypeFactory for BinaryGenotypeFactory {
    fn length(&self) -> usize {
        self.length
    }

    fn optimal(&self) -> Genotype {
        Genotype::zeros(self.length)
    }
}

/// Genotypes for numerical problems, where the largest number (all ones) is optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericalGenotypeFactory {
    length: usize,
}

impl NumericalGenotypeFactory {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for NumericalGenotypeFactory {
    fn default() -> Self {
        Self::new(10)
    }
}

impl GenotypeFactory for NumericalGenotypeFactory {
    fn length(&self) -> usize {
        self.length
    }

    fn optimal(&self) -> Genotype {
        Genotype::ones(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let genotype: Genotype = "0110".parse().unwrap();

        assert_eq!(genotype.loci(), &[false, true, true, false]);
        assert_eq!(genotype.to_string(), "0110");
        assert_eq!(genotype.count_zeros(), 2);
        assert_eq!(genotype.count_ones(), 2);
    }

    #[test]
    fn test_parse_rejects_foreign_symbols() {
        let result = "01a0".parse::<Genotype>();
        assert!(matches!(result, Err(GeneticError::InvalidParameter(_))));
    }

    #[test]
    fn test_mutate_flips_single_locus() {
        let mut genotype: Genotype = "0000".parse().unwrap();

        genotype.mutate(2).unwrap();
        assert_eq!(genotype.to_string(), "0010");

        genotype.mutate(2).unwrap();
        assert_eq!(genotype.to_string(), "0000");
    }

    #[test]
    fn test_mutate_out_of_range() {
        let mut genotype = Genotype::zeros(3);
        assert!(genotype.mutate(3).is_err());
        assert_eq!(genotype, Genotype::zeros(3));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Genotype::zeros(4);
        let mut copy = original.clone();

        copy.mutate(0).unwrap();

        assert_eq!(original.to_string(), "0000");
        assert_eq!(copy.to_string(), "1000");
    }

    #[test]
    fn test_splice() {
        let a: Genotype = "11111".parse().unwrap();
        let b: Genotype = "00000".parse().unwrap();

        let (c, d) = a.splice(&b, 2).unwrap();
        assert_eq!(c.to_string(), "11000");
        assert_eq!(d.to_string(), "00111");

        let (c, d) = a.splice(&b, 0).unwrap();
        assert_eq!(c, b);
        assert_eq!(d, a);
    }

    #[test]
    fn test_splice_length_mismatch() {
        let a = Genotype::zeros(3);
        let b = Genotype::zeros(4);
        assert!(matches!(a.splice(&b, 1), Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_decimal_conversions() {
        let genotype = Genotype::from_decimal(5, 4).unwrap();
        assert_eq!(genotype.to_string(), "0101");
        assert_eq!(genotype.to_decimal(), Some(5));
        assert_eq!(genotype.magnitude(), 5.0);

        assert_eq!(Genotype::ones(10).to_decimal(), Some(1023));
        assert_eq!(Genotype::zeros(65).to_decimal(), None);
        assert_eq!(Genotype::from_decimal(0, 0).unwrap(), Genotype::default());
        assert!(Genotype::from_decimal(8, 3).is_err());
    }

    #[test]
    fn test_factory_optimal() {
        assert_eq!(BinaryGenotypeFactory::new(2).optimal().to_string(), "00");
        assert_eq!(BinaryGenotypeFactory::new(5).optimal().to_string(), "00000");
        assert_eq!(NumericalGenotypeFactory::new(2).optimal().to_string(), "11");
        assert_eq!(NumericalGenotypeFactory::new(5).optimal().to_string(), "11111");
    }

    #[test]
    fn test_factory_sample_checks_length() {
        let factory = BinaryGenotypeFactory::new(4);

        assert_eq!(factory.sample("0101").unwrap().to_string(), "0101");
        assert!(matches!(
            factory.sample("010"),
            Err(GeneticError::Configuration(_))
        ));
    }
}
