pub mod breeding;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod generation;
pub mod generator;
pub mod individual;
pub mod numeric;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionOptions, Mediator, MediatorBuilder, RunReport, Termination};
pub use generation::Generation;
pub use individual::Individual;
pub use population::{Population, StagnationRule};
