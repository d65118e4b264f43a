pub mod builder;
pub mod experiment;
pub mod launcher;
pub mod options;

pub use builder::GeneticAlgorithmBuilder;
pub use experiment::{Experiment, ExperimentReport};
pub use launcher::{GeneticAlgorithm, RunOutcome, RunReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
