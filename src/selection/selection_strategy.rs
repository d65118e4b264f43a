use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection operators.
///
/// A selection operator draws the next generation from the current one. It must
/// return exactly as many individuals as it received, each a deep copy of an
/// individual from the input; it never fabricates new genotypes.
///
/// # Examples
///
/// ```
/// use bitga::fitness::FhdFitness;
/// use bitga::genotype::BinaryGenotypeFactory;
/// use bitga::individual::IndividualFactory;
/// use bitga::phenotype::BinaryPhenotypeFactory;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::selection::{Selection, StochasticUniversalSampling};
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let factory = IndividualFactory::new(BinaryGenotypeFactory::new(10), BinaryPhenotypeFactory);
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let individuals = factory.random(20, &mut rng);
///
///     let selection = StochasticUniversalSampling::new(0.9801, FhdFitness::default())?;
///     let selected = selection.next_generation(&individuals, &mut rng)?;
///
///     assert_eq!(selected.len(), 20);
///     Ok(())
/// }
/// ```
pub trait Selection: Debug + Send + Sync {
    /// Draws the next generation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `individuals` is empty
    /// - a fitness score is not finite
    /// - the operator would change the population size
    fn next_generation(
        &self,
        individuals: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}
