//! Guesses a random 32-bit number with the genetic engine.
//!
//! Usage: `guess_number [CONFIG_PATH]`. Without a path the configuration is
//! looked up through `GENETIC_CONFIG_PATH`, then `./genetic.toml`. Log
//! verbosity follows `RUST_LOG` and defaults to `info`.

use std::path::PathBuf;
use std::process::ExitCode;

use genetic_mediator::{
    evaluation::Evaluator,
    evolution::{GeneticConfig, MediatorBuilder},
    numeric::{self, AtLeastThreshold, MatchingBits, UniformCrossover},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

const BITS: usize = 32;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let options = match GeneticConfig::load(config_path.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            error!(error = %e, "Cannot start the run");
            return ExitCode::FAILURE;
        }
    };

    let mediator = MediatorBuilder::new()
        .with_options(options)
        .with_individual_factory(numeric::number_factory(BITS))
        .with_evaluator(Evaluator::new(numeric::target_factory(BITS), MatchingBits))
        .with_selection_rule(AtLeastThreshold)
        .with_recombiner(UniformCrossover::default())
        .build();

    let mut mediator = match mediator {
        Ok(mediator) => mediator,
        Err(e) => {
            error!(error = %e, "Cannot start the run");
            return ExitCode::FAILURE;
        }
    };

    let report = mediator.run();
    println!(
        "{:?} after generation {} in {:.1?} (target {}, best {})",
        report.termination,
        report.generation,
        report.elapsed,
        mediator.evaluator().target(),
        mediator
            .current_generation()
            .best()
            .map(ToString::to_string)
            .unwrap_or_default()
    );
    ExitCode::SUCCESS
}
