pub mod codec;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genotype;
pub mod individual;
pub mod operator;
pub mod phenotype;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionOptions, Experiment, GeneticAlgorithm, LogLevel, RunOutcome, RunReport};
pub use individual::{Individual, IndividualFactory};
pub use population::Population;
