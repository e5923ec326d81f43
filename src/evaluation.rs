//! # Evaluator
//!
//! The evaluator holds the target every individual is scored against. The
//! target is produced once, when the evaluator is built, and never changes for
//! the lifetime of the run. Scoring itself is delegated to a [`Scorer`]; the
//! evaluator only dispatches.
//!
//! ## Example
//!
//! ```rust
//! use genetic_mediator::evaluation::Evaluator;
//! use genetic_mediator::individual::Individual;
//! use genetic_mediator::numeric::{MatchingBits, Number};
//!
//! let evaluator = Evaluator::new(|| String::from("1010"), MatchingBits);
//! let mut guess = Number::new("1000");
//! evaluator.evaluate(&mut guess);
//!
//! assert_eq!(guess.score(), 3);
//! assert!(!guess.is_solution());
//! ```

use rayon::prelude::*;
use tracing::trace;

use crate::{
    generation::Generation,
    individual::Individual,
    strategy::{Factory, Scorer},
};

/// Scores individuals against a target created once at construction.
#[derive(Debug, Clone)]
pub struct Evaluator<T, S> {
    target: T,
    scorer: S,
}

impl<T, S> Evaluator<T, S> {
    /// Creates the evaluator, invoking `target_factory` exactly once.
    pub fn new<F>(target_factory: F, scorer: S) -> Self
    where
        F: Factory<T>,
    {
        Self {
            target: target_factory.produce(),
            scorer,
        }
    }

    /// The target individuals are scored against.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Scores one individual in place.
    pub fn evaluate<I>(&self, individual: &mut I)
    where
        S: Scorer<I, T>,
    {
        self.scorer.score(individual, &self.target);
    }

    /// Scores every member of `generation` in place.
    ///
    /// Members are independent of one another, so generations holding at least
    /// `parallel_threshold` members are scored with Rayon.
    pub fn evaluate_generation<I>(&self, generation: &mut Generation<I>, parallel_threshold: usize)
    where
        I: Individual,
        T: Sync,
        S: Scorer<I, T> + Sync,
    {
        let number = generation.number();
        let members = generation.individuals_mut();

        if members.len() >= parallel_threshold {
            trace!(generation = number, size = members.len(), "Parallel evaluation");
            members
                .par_iter_mut()
                .for_each(|individual| self.evaluate(individual));
        } else {
            members
                .iter_mut()
                .for_each(|individual| self.evaluate(individual));
        }
    }
}
