//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the numeric parameters of a run: how many
//! individuals make up a generation, how long the run may last and how
//! stagnation is detected.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use genetic_mediator::evolution::EvolutionOptions;
//! use genetic_mediator::population::StagnationRule;
//!
//! let options = EvolutionOptions::builder()
//!     .individuals_per_generation(50)
//!     .max_duration_minutes(2)
//!     .stagnation_rule(StagnationRule::Literal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_individuals_per_generation(), 50);
//! assert_eq!(options.get_max_duration(), Duration::from_secs(120));
//!
//! let default_options = EvolutionOptions::default();
//! assert!(default_options.validate().is_ok());
//! ```

use std::time::Duration;

use crate::{
    error::{GeneticError, Result},
    population::StagnationRule,
};

const DEFAULT_INDIVIDUALS_PER_GENERATION: usize = 100;
const DEFAULT_MAX_DURATION_MINUTES: u64 = 10;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    individuals_per_generation: usize,
    max_duration: Duration,
    stagnation_rule: StagnationRule,
    /// Minimum generation size evaluated in parallel
    parallel_threshold: usize,
    /// Keep every pruned parent generation in the population history
    retain_history: bool,
}

impl EvolutionOptions {
    pub fn new(individuals_per_generation: usize, max_duration: Duration) -> Self {
        Self {
            individuals_per_generation,
            max_duration,
            ..Self::default()
        }
    }

    /// Checks that the generation size and the run duration are positive.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.individuals_per_generation == 0 {
            return Err(GeneticError::Configuration(
                "Individuals per generation must be positive".to_string(),
            ));
        }
        if self.max_duration.is_zero() {
            return Err(GeneticError::Configuration(
                "Maximum run duration must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_individuals_per_generation(&self) -> usize {
        self.individuals_per_generation
    }

    pub fn get_max_duration(&self) -> Duration {
        self.max_duration
    }

    pub fn get_stagnation_rule(&self) -> StagnationRule {
        self.stagnation_rule
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_retain_history(&self) -> bool {
        self.retain_history
    }

    pub fn set_individuals_per_generation(&mut self, value: usize) {
        self.individuals_per_generation = value;
    }

    pub fn set_max_duration(&mut self, value: Duration) {
        self.max_duration = value;
    }

    pub fn set_stagnation_rule(&mut self, rule: StagnationRule) {
        self.stagnation_rule = rule;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_retain_history(&mut self, retain: bool) {
        self.retain_history = retain;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            individuals_per_generation: DEFAULT_INDIVIDUALS_PER_GENERATION,
            max_duration: Duration::from_secs(DEFAULT_MAX_DURATION_MINUTES * 60),
            stagnation_rule: StagnationRule::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            retain_history: false,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    individuals_per_generation: Option<usize>,
    max_duration: Option<Duration>,
    stagnation_rule: Option<StagnationRule>,
    parallel_threshold: Option<usize>,
    retain_history: Option<bool>,
}

impl EvolutionOptionsBuilder {
    pub fn individuals_per_generation(mut self, value: usize) -> Self {
        self.individuals_per_generation = Some(value);
        self
    }

    pub fn max_duration(mut self, value: Duration) -> Self {
        self.max_duration = Some(value);
        self
    }

    pub fn max_duration_minutes(self, minutes: u64) -> Self {
        self.max_duration(Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn stagnation_rule(mut self, value: StagnationRule) -> Self {
        self.stagnation_rule = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn retain_history(mut self, value: bool) -> Self {
        self.retain_history = Some(value);
        self
    }

    /// Builds and validates the options. Unset values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the generation size or the
    /// duration is zero.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            individuals_per_generation: self
                .individuals_per_generation
                .unwrap_or(defaults.individuals_per_generation),
            max_duration: self.max_duration.unwrap_or(defaults.max_duration),
            stagnation_rule: self.stagnation_rule.unwrap_or(defaults.stagnation_rule),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
            retain_history: self.retain_history.unwrap_or(defaults.retain_history),
        };
        options.validate()?;
        Ok(options)
    }
}
