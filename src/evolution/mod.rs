//! # Evolution
//!
//! The control loop and everything needed to configure it.
pub mod builder;
pub mod config;
pub mod mediator;
pub mod options;

pub use builder::MediatorBuilder;
pub use config::GeneticConfig;
pub use mediator::{Mediator, RunReport, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
