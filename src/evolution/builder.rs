use crate::{
    error::{GeneticError, Result},
    operator::{Crossover, Mutation},
    population::Population,
    selection::Selection,
};

use super::{launcher::GeneticAlgorithm, options::EvolutionOptions};

/// Wires a [`GeneticAlgorithm`] from its parts.
///
/// Population and selection are required. Crossover and mutation are optional,
/// and options fall back to [`EvolutionOptions::default`].
///
/// # Example
///
/// ```rust
/// use bitga::evolution::GeneticAlgorithm;
/// use bitga::fitness::FhdFitness;
/// use bitga::genotype::BinaryGenotypeFactory;
/// use bitga::individual::IndividualFactory;
/// use bitga::phenotype::BinaryPhenotypeFactory;
/// use bitga::population::Population;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::selection::RouletteWheelSelection;
///
/// let factory = IndividualFactory::new(BinaryGenotypeFactory::new(10), BinaryPhenotypeFactory);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let population = Population::new(factory.mixed(19, 1, &mut rng), factory).unwrap();
///
/// let mut ga = GeneticAlgorithm::builder()
///     .with_population(population)
///     .with_selection(RouletteWheelSelection::new(0.9801, FhdFitness::default()).unwrap())
///     .build()
///     .unwrap();
///
/// let report = ga.run(&mut rng).unwrap();
/// assert_eq!(report.success, ga.population().is_optimal(1.0));
/// ```
#[derive(Debug, Default)]
pub struct GeneticAlgorithmBuilder {
    population: Option<Population>,
    selection: Option<Box<dyn Selection>>,
    crossover: Option<Box<dyn Crossover>>,
    mutation: Option<Box<dyn Mutation>>,
    options: Option<EvolutionOptions>,
}

impl GeneticAlgorithmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_selection<S: Selection + 'static>(mut self, selection: S) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    pub fn with_crossover<C: Crossover + 'static>(mut self, crossover: C) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn with_mutation<M: Mutation + 'static>(mut self, mutation: M) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<GeneticAlgorithm> {
        let population = self.population.ok_or_else(|| {
            GeneticError::Configuration("Population not specified".to_string())
        })?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        GeneticAlgorithm::new(
            population,
            selection,
            self.crossover,
            self.mutation,
            self.options.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::ConstFitness;
    use crate::genotype::BinaryGenotypeFactory;
    use crate::individual::IndividualFactory;
    use crate::operator::{DenseMutation, OnePointCrossover};
    use crate::phenotype::BinaryPhenotypeFactory;
    use crate::rng::RandomNumberGenerator;
    use crate::selection::StochasticUniversalSampling;

    fn population() -> Population {
        let factory = IndividualFactory::new(BinaryGenotypeFactory::new(4), BinaryPhenotypeFactory);
        let mut rng = RandomNumberGenerator::from_seed(0);
        Population::new(factory.random(10, &mut rng), factory).unwrap()
    }

    #[test]
    fn test_missing_parts() {
        let result = GeneticAlgorithmBuilder::new()
            .with_selection(StochasticUniversalSampling::new(0.5, ConstFitness).unwrap())
            .build();
        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Population")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        let result = GeneticAlgorithmBuilder::new()
            .with_population(population())
            .build();
        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Selection")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_full_build() {
        let ga = GeneticAlgorithmBuilder::new()
            .with_population(population())
            .with_selection(StochasticUniversalSampling::new(0.5, ConstFitness).unwrap())
            .with_crossover(OnePointCrossover::new())
            .with_mutation(DenseMutation::with_rate(0.01).unwrap())
            .with_options(EvolutionOptions::builder().max_generations(100).build())
            .build()
            .unwrap();

        assert!(ga.has_mutation());
        assert_eq!(ga.options().get_max_generations(), 100);
        assert_eq!(ga.population().len(), 10);
    }
}
