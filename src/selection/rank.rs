use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{GeneticError, Result};
use crate::fitness::FitnessFunction;
use crate::individual::Individual;

/// Assigns selection probabilities by rank rather than by raw fitness.
///
/// Individuals are sorted by ascending fitness (ties keep their input order) and the
/// individual at rank `r` (0 = worst) of `N` gets
///
/// ```text
/// p(r) = ((c - 1) / (c^N - 1)) * c^(N - 1 - r)
/// ```
///
/// a geometric series in `c ∈ (0, 1)` that sums to 1 and grows towards the best
/// individual. Values of `c` close to 1 flatten the distribution; small values
/// concentrate it on the top ranks.
///
/// # Examples
///
/// ```
/// use bitga::fitness::ConstFitness;
/// use bitga::selection::Rank;
///
/// let rank = Rank::new(0.5, ConstFitness).unwrap();
/// let probabilities = rank.probabilities(3);
///
/// let total: f64 = probabilities.iter().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// assert!(probabilities[2] > probabilities[0]);
/// ```
#[derive(Debug, Clone)]
pub struct Rank {
    c: f64,
    fitness: Arc<dyn FitnessFunction>,
}

impl Rank {
    /// The rank constant used when none is configured.
    pub const DEFAULT_CONSTANT: f64 = 0.9801;

    /// Creates a rank with constant `c` scoring individuals with `fitness`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 < c < 1`.
    pub fn new<F>(c: f64, fitness: F) -> Result<Self>
    where
        F: FitnessFunction + 'static,
    {
        Self::from_shared(c, Arc::new(fitness))
    }

    pub fn from_shared(c: f64, fitness: Arc<dyn FitnessFunction>) -> Result<Self> {
        if !(c > 0.0 && c < 1.0) {
            return Err(GeneticError::InvalidParameter(format!(
                "c should belong to (0, 1), received: {}",
                c
            )));
        }
        Ok(Self { c, fitness })
    }

    pub fn constant(&self) -> f64 {
        self.c
    }

    pub fn fitness(&self) -> &dyn FitnessFunction {
        self.fitness.as_ref()
    }

    /// Probability of the individual at `rank` (0 = worst) in a population of `size`,
    /// or `None` if `rank` is not below `size`.
    ///
    /// `c^N - 1` is evaluated as `exp_m1(N * ln_1p(c - 1))` so that constants close
    /// to 1 keep their precision.
    pub fn probability(&self, size: usize, rank: usize) -> Option<f64> {
        let exponent = size.checked_sub(rank)?.checked_sub(1)?;
        let shift = self.c - 1.0;
        let denominator = (size as f64 * shift.ln_1p()).exp_m1();
        Some(shift / denominator * self.c.powf(exponent as f64))
    }

    /// Probabilities for ranks `0..size`, worst first.
    ///
    /// The geometric weights `c^(N - 1 - r)` are divided by their own sum, so the
    /// result sums to 1 up to rounding for every `c ∈ (0, 1)`.
    pub fn probabilities(&self, size: usize) -> Vec<f64> {
        let weights: Vec<f64> = (0..size)
            .map(|rank| self.c.powf((size - 1 - rank) as f64))
            .collect();
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|weight| weight / total).collect()
    }

    /// Orders `individuals` by ascending fitness, keeping the input order among ties.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty slice and `FitnessCalculation` if any
    /// score is not finite.
    pub fn sort<'a>(&self, individuals: &'a [Individual]) -> Result<Vec<&'a Individual>> {
        if individuals.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let scores = individuals
            .iter()
            .map(|individual| {
                let score = self.fitness.score(individual);
                if !score.is_finite() {
                    return Err(GeneticError::FitnessCalculation(format!(
                        "Non-finite fitness score {} for individual {}",
                        score, individual
                    )));
                }
                Ok(score)
            })
            .collect::<Result<Vec<f64>>>()?;

        let mut indices: Vec<usize> = (0..individuals.len()).collect();
        // `sort_by` is stable, so ties keep their relative order.
        indices.sort_by(|&a, &b| {
            scores[a]
                .partial_cmp(&scores[b])
                .unwrap_or(Ordering::Equal)
        });

        Ok(indices.into_iter().map(|i| &individuals[i]).collect())
    }

    /// Pairs every individual with its selection probability, worst first.
    pub fn match_with_probabilities<'a>(
        &self,
        individuals: &'a [Individual],
    ) -> Result<Vec<(&'a Individual, f64)>> {
        let sorted = self.sort(individuals)?;
        let probabilities = self.probabilities(sorted.len());
        Ok(sorted.into_iter().zip(probabilities).collect())
    }
}
