use tracing::trace;

use crate::error::{ensure_size_preserved, Result};
use crate::fitness::FitnessFunction;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::rank::Rank;
use crate::selection::selection_strategy::Selection;
use crate::selection::wheel::Wheel;

/// Roulette-wheel selection (RWS) over rank-assigned probabilities.
///
/// Each of the `N` slots of the next generation is filled by an independent uniform
/// spin of the wheel, so an individual with probability `p` is drawn a
/// Binomial(`N`, `p`) number of times.
///
/// # Examples
///
/// ```
/// use bitga::fitness::FhdFitness;
/// use bitga::genotype::BinaryGenotypeFactory;
/// use bitga::individual::IndividualFactory;
/// use bitga::phenotype::BinaryPhenotypeFactory;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::selection::{RouletteWheelSelection, Selection};
///
/// let factory = IndividualFactory::new(BinaryGenotypeFactory::new(10), BinaryPhenotypeFactory);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let individuals = factory.random(10, &mut rng);
///
/// let selection = RouletteWheelSelection::new(0.9801, FhdFitness::default()).unwrap();
/// let selected = selection.next_generation(&individuals, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), individuals.len());
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheelSelection {
    rank: Rank,
}

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection ranking with constant `c`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 < c < 1`.
    pub fn new<F>(c: f64, fitness: F) -> Result<Self>
    where
        F: FitnessFunction + 'static,
    {
        Ok(Self::from_rank(Rank::new(c, fitness)?))
    }

    pub fn from_rank(rank: Rank) -> Self {
        Self { rank }
    }

    pub fn rank(&self) -> &Rank {
        &self.rank
    }
}

impl Selection for RouletteWheelSelection {
    fn next_generation(
        &self,
        individuals: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let wheel = Wheel::new(self.rank.match_with_probabilities(individuals)?)?;

        let selected = rng
            .fetch_uniform(0.0, 1.0, individuals.len())
            .into_iter()
            .map(|point| wheel.spin(point).cloned())
            .collect::<Result<Vec<_>>>()?;

        trace!(size = selected.len(), "roulette wheel selection drew next generation");
        ensure_size_preserved("roulette wheel selection", individuals.len(), selected.len())?;
        Ok(selected)
    }
}
