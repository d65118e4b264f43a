//! # Selection
//!
//! Rank-based selection operators. [`Rank`] orders a population by fitness and
//! assigns geometric rank probabilities; [`Wheel`] lays them out on the unit line;
//! [`RouletteWheelSelection`] and [`StochasticUniversalSampling`] read the wheel to
//! draw the next generation.
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod stochastic;
pub mod wheel;

pub use rank::Rank;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::Selection;
pub use stochastic::StochasticUniversalSampling;
pub use wheel::{Segment, Wheel};
