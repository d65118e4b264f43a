use bitga::{
    evolution::{EvolutionOptions, GeneticAlgorithm, LogLevel, RunOutcome},
    fitness::FhdFitness,
    genotype::BinaryGenotypeFactory,
    individual::IndividualFactory,
    operator::{DenseMutation, MutationTable, OnePointCrossover},
    phenotype::BinaryPhenotypeFactory,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{Rank, RouletteWheelSelection, StochasticUniversalSampling},
};

const LENGTH: usize = 10;
const SIZE: usize = 100;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn seeded_population(rng: &mut RandomNumberGenerator) -> Population {
    let factory = IndividualFactory::new(BinaryGenotypeFactory::new(LENGTH), BinaryPhenotypeFactory);
    Population::new(factory.mixed(SIZE - 1, 1, rng), factory).unwrap()
}

#[test]
fn test_rws_without_operators_terminates() {
    init_tracing();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut ga = GeneticAlgorithm::builder()
        .with_population(seeded_population(&mut rng))
        .with_selection(
            RouletteWheelSelection::new(Rank::DEFAULT_CONSTANT, FhdFitness::default()).unwrap(),
        )
        .with_options(EvolutionOptions::new(10_000_000, LogLevel::Minimal))
        .build()
        .unwrap();

    let report = ga.run(&mut rng).unwrap();

    // selection alone can only drift towards a single genotype
    assert_eq!(report.outcome, RunOutcome::Converged);
    assert!(ga.population().is_identical(1));
    assert_eq!(report.distinct, 1);
    assert_eq!(report.success, ga.population().is_optimal(1.0));
    assert_eq!(ga.population().len(), SIZE);
}

#[test]
fn test_sus_with_operators_terminates() {
    init_tracing();
    let mut rng = RandomNumberGenerator::from_seed(7);
    let table = MutationTable::standard();

    let mut ga = GeneticAlgorithm::builder()
        .with_population(seeded_population(&mut rng))
        .with_selection(
            StochasticUniversalSampling::new(Rank::DEFAULT_CONSTANT, FhdFitness::default())
                .unwrap(),
        )
        .with_crossover(OnePointCrossover::new())
        .with_mutation(DenseMutation::new(&table, LENGTH, SIZE).unwrap())
        .with_options(EvolutionOptions::new(1_000_000, LogLevel::Verbose))
        .build()
        .unwrap();

    let report = ga.run(&mut rng).unwrap();

    assert!(report.generations <= 1_000_000);
    if report.outcome == RunOutcome::Converged {
        assert!(ga.population().is_homogeneous(0.01));
    }
    assert_eq!(report.success, ga.population().is_optimal(0.9));
    assert_eq!(ga.population().len(), SIZE);
}

#[test]
fn test_strong_selection_finds_optimum() {
    let mut rng = RandomNumberGenerator::from_seed(3);

    // a small constant concentrates nearly all mass on the best rank
    let mut ga = GeneticAlgorithm::builder()
        .with_population(seeded_population(&mut rng))
        .with_selection(StochasticUniversalSampling::new(0.1, FhdFitness::default()).unwrap())
        .build()
        .unwrap();

    let report = ga.run(&mut rng).unwrap();

    assert_eq!(report.outcome, RunOutcome::Converged);
    assert!(report.success);
    assert_eq!(report.optimal_share, 1.0);
}

#[test]
fn test_cap_limits_generations() {
    let mut rng = RandomNumberGenerator::from_seed(11);

    let mut ga = GeneticAlgorithm::builder()
        .with_population(seeded_population(&mut rng))
        .with_selection(RouletteWheelSelection::new(0.9999, FhdFitness::default()).unwrap())
        .with_options(EvolutionOptions::new(3, LogLevel::None))
        .build()
        .unwrap();

    let report = ga.run(&mut rng).unwrap();

    assert_eq!(report.outcome, RunOutcome::MaxGenerationsReached);
    assert_eq!(report.generations, 3);
}
