use crate::error::{GeneticError, OptionExt, Result};
use crate::individual::Individual;

/// A half-open interval `[from, to)` of the unit line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: f64,
    pub to: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.to - self.from
    }

    fn contains(&self, point: f64) -> bool {
        self.from <= point && point < self.to
    }
}

/// A probability wheel: contiguous, non-overlapping segments covering `[0, 1]`,
/// one per individual, in ranked order.
///
/// Every segment is half-open except the last one, which is closed at 1, so each
/// point of `[0, 1]` falls in exactly one segment.
#[derive(Debug, Clone)]
pub struct Wheel<'a> {
    slots: Vec<(&'a Individual, Segment)>,
}

impl<'a> Wheel<'a> {
    /// How far the probabilities may sum away from 1.
    pub const TOLERANCE: f64 = 1e-9;

    /// Lays out `ranked` probabilities as consecutive segments.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `ranked` is empty, and a `Selection` error if a
    /// probability is negative or not finite or if they do not sum to 1 within
    /// [`TOLERANCE`](Self::TOLERANCE).
    pub fn new(ranked: Vec<(&'a Individual, f64)>) -> Result<Self> {
        if ranked.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut slots = Vec::with_capacity(ranked.len());
        let mut cumulative = 0.0;
        for (individual, probability) in ranked {
            if !probability.is_finite() || probability < 0.0 {
                return Err(GeneticError::Selection(format!(
                    "Wheel segment width must be a non-negative number, received: {}",
                    probability
                )));
            }
            let from = cumulative;
            cumulative += probability;
            slots.push((individual, Segment { from, to: cumulative }));
        }

        if (cumulative - 1.0).abs() > Self::TOLERANCE {
            return Err(GeneticError::Selection(format!(
                "Wheel probabilities sum to {} instead of 1",
                cumulative
            )));
        }

        // Close the wheel at exactly 1.0 to absorb floating-point drift
        if let Some((_, last)) = slots.last_mut() {
            last.to = 1.0;
        }

        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.slots.iter().map(|(_, segment)| *segment)
    }

    /// Index of the segment containing `point`.
    ///
    /// # Errors
    ///
    /// Returns a `Selection` error if `point` is outside `[0, 1]`.
    pub fn locate(&self, point: f64) -> Result<usize> {
        let last = self.slots.len() - 1;
        self.slots
            .iter()
            .position(|(_, segment)| segment.contains(point))
            .or_else(|| (point == 1.0).then_some(last))
            .ok_or_else_genetic(|| {
                GeneticError::Selection(format!("Point {} is outside the wheel", point))
            })
    }

    /// The individual whose segment contains `point`.
    pub fn spin(&self, point: f64) -> Result<&'a Individual> {
        let index = self.locate(point)?;
        Ok(self.slots[index].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype::BinaryPhenotypeFactory;

    fn individuals() -> Vec<Individual> {
        ["00", "01", "10", "11"]
            .iter()
            .map(|text| Individual::develop(text.parse().unwrap(), &BinaryPhenotypeFactory))
            .collect()
    }

    #[test]
    fn test_segments_are_contiguous() {
        let individuals = individuals();
        let ranked = individuals.iter().zip([0.1, 0.2, 0.3, 0.4]).collect();
        let wheel = Wheel::new(ranked).unwrap();

        let segments: Vec<Segment> = wheel.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].from, 0.0);
        assert_eq!(segments[3].to, 1.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
            assert!(pair[0].width() >= 0.0);
        }
    }

    #[test]
    fn test_locate_boundaries() {
        let individuals = individuals();
        let ranked = individuals.iter().zip([0.25, 0.25, 0.25, 0.25]).collect();
        let wheel = Wheel::new(ranked).unwrap();

        assert_eq!(wheel.locate(0.0).unwrap(), 0);
        assert_eq!(wheel.locate(0.2499).unwrap(), 0);
        assert_eq!(wheel.locate(0.25).unwrap(), 1);
        assert_eq!(wheel.locate(0.75).unwrap(), 3);
        assert_eq!(wheel.locate(1.0).unwrap(), 3);
        assert!(wheel.locate(1.5).is_err());
        assert!(wheel.locate(-0.1).is_err());
    }

    #[test]
    fn test_zero_width_segment_never_selected() {
        let individuals = individuals();
        let ranked = individuals.iter().zip([0.0, 0.5, 0.0, 0.5]).collect();
        let wheel = Wheel::new(ranked).unwrap();

        for step in 0..=100 {
            let index = wheel.locate(step as f64 / 100.0).unwrap();
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn test_spin_returns_individual() {
        let individuals = individuals();
        let ranked = individuals.iter().zip([0.0, 0.0, 0.0, 1.0]).collect();
        let wheel = Wheel::new(ranked).unwrap();

        assert_eq!(wheel.spin(0.3).unwrap().genotype().to_string(), "11");
    }

    #[test]
    fn test_malformed_wheels() {
        let individuals = individuals();

        let short = individuals.iter().zip([0.1, 0.1, 0.1, 0.1]).collect();
        assert!(matches!(Wheel::new(short), Err(GeneticError::Selection(_))));

        let negative = individuals.iter().zip([-0.5, 0.5, 0.5, 0.5]).collect();
        assert!(matches!(Wheel::new(negative), Err(GeneticError::Selection(_))));

        assert_eq!(Wheel::new(Vec::new()).unwrap_err(), GeneticError::EmptyPopulation);
    }
}
