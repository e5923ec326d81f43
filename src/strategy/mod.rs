//! # Strategies
//!
//! The engine is domain-agnostic: how an individual is created, scored, selected
//! and recombined is supplied from outside through the capability traits in
//! this module. Each trait has a single method and is implemented for plain
//! closures, so callers can pass either a struct or a lambda.
//!
//! ```rust
//! use genetic_mediator::strategy::Factory;
//!
//! let target = || String::from("1010");
//! assert_eq!(target.produce(), "1010");
//! ```

/// Zero-argument constructor. Used both for random individuals and for the
/// target an [`Evaluator`](crate::evaluation::Evaluator) scores against.
pub trait Factory<T> {
    fn produce(&self) -> T;
}

impl<T, F> Factory<T> for F
where
    F: Fn() -> T,
{
    fn produce(&self) -> T {
        self()
    }
}

/// Scores an individual against the target, writing its score and solution
/// flag in place.
pub trait Scorer<I, T> {
    fn score(&self, individual: &mut I, target: &T);
}

impl<I, T, F> Scorer<I, T> for F
where
    F: Fn(&mut I, &T),
{
    fn score(&self, individual: &mut I, target: &T) {
        self(individual, target)
    }
}

/// Marks an individual as selected or not given the current threshold.
pub trait SelectionRule<I> {
    fn apply(&self, individual: &mut I, threshold: i32);
}

impl<I, F> SelectionRule<I> for F
where
    F: Fn(&mut I, i32),
{
    fn apply(&self, individual: &mut I, threshold: i32) {
        self(individual, threshold)
    }
}

/// Produces zero or more children from two parents.
pub trait Recombiner<I> {
    fn offspring(&self, first: &I, second: &I) -> Vec<I>;
}

impl<I, F> Recombiner<I> for F
where
    F: Fn(&I, &I) -> Vec<I>,
{
    fn offspring(&self, first: &I, second: &I) -> Vec<I> {
        self(first, second)
    }
}
