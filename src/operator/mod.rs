//! # Genetic operators
//!
//! Operators that transform a selected generation: [`OnePointCrossover`]
//! recombines random pairs and [`DenseMutation`] flips loci at a rate taken from a
//! [`MutationTable`]. Both preserve the number of individuals and redevelop the
//! phenotype of every individual whose genotype they change.
pub mod crossover;
pub mod mutation;

pub use crossover::{Crossover, OnePointCrossover};
pub use mutation::{DenseMutation, Mutation, MutationTable};
