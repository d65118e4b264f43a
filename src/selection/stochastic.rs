use tracing::trace;

use crate::error::{ensure_size_preserved, Result};
use crate::fitness::FitnessFunction;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::rank::Rank;
use crate::selection::selection_strategy::Selection;
use crate::selection::wheel::Wheel;

/// Stochastic universal sampling (SUS) over rank-assigned probabilities.
///
/// A single offset `o ∈ [0, 1)` is drawn and the wheel is read at the `N` evenly
/// spaced pointers `o + i / N` (wrapped modulo 1). An individual with probability
/// `p` is then drawn either `floor(N * p)` or `ceil(N * p)` times, which gives much
/// lower variance than [`RouletteWheelSelection`](super::RouletteWheelSelection)
/// for the same wheel.
#[derive(Debug, Clone)]
pub struct StochasticUniversalSampling {
    rank: Rank,
}

impl StochasticUniversalSampling {
    /// Creates a new StochasticUniversalSampling ranking with constant `c`.
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

    /// The `size` pointers read from the wheel for a given offset.
    pub fn pointers(offset: f64, size: usize) -> impl Iterator<Item = f64> {
        let spacing = 1.0 / size as f64;
        (0..size).map(move |i| {
            let pointer = offset + i as f64 * spacing;
            if pointer >= 1.0 {
                pointer - 1.0
            } else {
                pointer
            }
        })
    }
}

impl Selection for StochasticUniversalSampling {
    fn next_generation(
        &self,
        individuals: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let wheel = Wheel::new(self.rank.match_with_probabilities(individuals)?)?;
        let offset = rng.unit();

        let selected = Self::pointers(offset, individuals.len())
            .map(|pointer| wheel.spin(pointer).cloned())
            .collect::<Result<Vec<_>>>()?;

        trace!(offset, size = selected.len(), "stochastic universal sampling drew next generation");
        ensure_size_preserved(
            "stochastic universal sampling",
            individuals.len(),
            selected.len(),
        )?;
        Ok(selected)
    }
}
