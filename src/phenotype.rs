//! # Phenotype
//!
//! A [`Phenotype`] is the decoded meaning of a genotype, the value fitness
//! functions look at. It is computed once, when an individual is developed from its
//! genotype, and is not tracked automatically afterwards: operators that change a
//! genotype rebuild the phenotype through the population's [`PhenotypeFactory`].
//!
//! Two decodings are provided:
//!
//! - [`BinaryPhenotypeFactory`] counts loci: `(length, zero count)`.
//! - [`NumericalPhenotypeFactory`] reads the chromosome as a binary number and
//!   scales it down by 100, optionally decoding it with a [`Codec`] first.
//!
//! ## Example
//!
//! ```rust
//! use bitga::genotype::Genotype;
//! use bitga::phenotype::{NumericalPhenotypeFactory, Phenotype, PhenotypeFactory};
//!
//! let genotype: Genotype = "1111101000".parse().unwrap();
//! let phenotype = NumericalPhenotypeFactory::new().sample(&genotype);
//!
//! assert_eq!(phenotype, Phenotype::Value(10.0));
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::codec::Codec;
use crate::genotype::Genotype;

/// The decoded value of a genotype.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phenotype {
    /// Chromosome length and number of zero loci.
    Counts { length: usize, zeros: usize },
    /// A real number decoded from the chromosome.
    Value(f64),
}

impl Phenotype {
    /// The real value, if this is a numerical phenotype.
    pub fn value(&self) -> Option<f64> {
        match self {
            Phenotype::Value(x) => Some(*x),
            Phenotype::Counts { .. } => None,
        }
    }

    /// `(length, zeros)`, if this is a counting phenotype.
    pub fn counts(&self) -> Option<(usize, usize)> {
        match self {
            Phenotype::Counts { length, zeros } => Some((*length, *zeros)),
            Phenotype::Value(_) => None,
        }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phenotype::Counts { length, zeros } => write!(f, "({}, {})", length, zeros),
            Phenotype::Value(x) => write!(f, "({})", x),
        }
    }
}

/// Develops a phenotype from a genotype.
///
/// Implementations must be pure: the same genotype always yields the same
/// phenotype.
pub trait PhenotypeFactory: Debug + Send + Sync {
    fn sample(&self, genotype: &Genotype) -> Phenotype;
}

/// Decodes a chromosome into its length and zero count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryPhenotypeFactory;

impl PhenotypeFactory for BinaryPhenotypeFactory {
    fn sample(&self, genotype: &Genotype) -> Phenotype {
        Phenotype::Counts {
            length: genotype.len(),
            zeros: genotype.count_zeros(),
        }
    }
}

/// Decodes a chromosome into `binary value / 100`.
#[derive(Debug, Clone)]
pub struct NumericalPhenotypeFactory {
    codec: Option<Arc<dyn Codec>>,
    scale: f64,
}

impl NumericalPhenotypeFactory {
    pub fn new() -> Self {
        Self {
            codec: None,
            scale: 100.0,
        }
    }

    /// Decodes the chromosome with `codec` before reading it as a number, so that
    /// e.g. gray-coded genotypes map onto their binary values.
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }
}

impl Default for NumericalPhenotypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PhenotypeFactory for NumericalPhenotypeFactory {
    fn sample(&self, genotype: &Genotype) -> Phenotype {
        let magnitude = match &self.codec {
            Some(codec) => codec.decode(genotype).magnitude(),
            None => genotype.magnitude(),
        };
        Phenotype::Value(magnitude / self.scale)
    }
}
