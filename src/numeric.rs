//! # Number guessing
//!
//! A concrete instantiation of the engine: individuals are fixed-length bit
//! strings and the target is a random bit string of the same length. The
//! score of a guess is the number of positions matching the target.
//!
//! ## Example
//!
//! ```rust
//! use genetic_mediator::evaluation::Evaluator;
//! use genetic_mediator::evolution::{EvolutionOptions, MediatorBuilder};
//! use genetic_mediator::numeric::{self, AtLeastThreshold, MatchingBits, UniformCrossover};
//!
//! let options = EvolutionOptions::builder()
//!     .individuals_per_generation(20)
//!     .max_duration_minutes(1)
//!     .build()
//!     .unwrap();
//!
//! let mut mediator = MediatorBuilder::new()
//!     .with_options(options)
//!     .with_individual_factory(numeric::number_factory(8))
//!     .with_evaluator(Evaluator::new(numeric::target_factory(8), MatchingBits))
//!     .with_selection_rule(AtLeastThreshold)
//!     .with_recombiner(UniformCrossover::new(0.05))
//!     .build()
//!     .unwrap();
//!
//! let report = mediator.run();
//! assert_eq!(mediator.current_generation().len(), 20);
//! println!("{:?}", report.termination);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    individual::{Individual, UNEVALUATED},
    rng::ThreadLocalRng,
    strategy::{Recombiner, Scorer, SelectionRule},
};

/// A candidate number written as a string of `'0'` and `'1'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    value: String,
    score: i32,
    selected: bool,
    child: bool,
    solution: bool,
}

impl Number {
    /// Creates an unevaluated number.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            score: UNEVALUATED,
            selected: false,
            child: false,
            solution: false,
        }
    }

    /// Creates an unevaluated number of `length` random bits.
    pub fn random(length: usize) -> Self {
        Self::new(ThreadLocalRng::bit_string(length))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score {})", self.value, self.score)
    }
}

impl Individual for Number {
    type Value = String;

    fn value(&self) -> &String {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    fn is_solution(&self) -> bool {
        self.solution
    }

    fn set_solution(&mut self, solution: bool) {
        self.solution = solution;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_child(&self) -> bool {
        self.child
    }

    fn set_child(&mut self, child: bool) {
        self.child = child;
    }
}

/// Factory of random numbers `length` bits long.
pub fn number_factory(length: usize) -> impl Fn() -> Number + Clone + Send + Sync {
    move || Number::random(length)
}

/// Factory of the random target, `length` bits long.
pub fn target_factory(length: usize) -> impl Fn() -> String + Clone + Send + Sync {
    move || ThreadLocalRng::bit_string(length)
}

/// Scores a number by the count of positions equal to the target.
///
/// The number is a solution when every position of the target matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingBits;

impl Scorer<Number, String> for MatchingBits {
    fn score(&self, individual: &mut Number, target: &String) {
        let matching = individual
            .value
            .chars()
            .zip(target.chars())
            .filter(|(guess, expected)| guess == expected)
            .count();
        let matching = i32::try_from(matching).unwrap_or(i32::MAX);

        individual.set_score(matching);
        individual.set_solution(
            individual.value.len() == target.len() && matching as usize == target.chars().count(),
        );
    }
}

/// Selects every number scoring at least the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastThreshold;

impl<I: Individual> SelectionRule<I> for AtLeastThreshold {
    fn apply(&self, individual: &mut I, threshold: i32) {
        let selected = individual.score() >= threshold;
        individual.set_selected(selected);
    }
}

/// Per-position coin flip between two parents, producing two mirrored children.
///
/// Each child bit is then flipped with probability `mutation_rate`. A rate of
/// zero gives plain uniform crossover.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UniformCrossover {
    mutation_rate: f64,
}

impl UniformCrossover {
    pub fn new(mutation_rate: f64) -> Self {
        Self {
            mutation_rate: mutation_rate.clamp(0.0, 1.0),
        }
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    fn mutate(&self, bit: char) -> char {
        if self.mutation_rate > 0.0 && ThreadLocalRng::gen_bool(self.mutation_rate) {
            if bit == '1' {
                '0'
            } else {
                '1'
            }
        } else {
            bit
        }
    }
}

impl Recombiner<Number> for UniformCrossover {
    fn offspring(&self, first: &Number, second: &Number) -> Vec<Number> {
        let mut first_child = String::with_capacity(first.value.len());
        let mut second_child = String::with_capacity(second.value.len());

        for (a, b) in first.value.chars().zip(second.value.chars()) {
            let (to_first, to_second) = if ThreadLocalRng::gen_bool(0.5) {
                (a, b)
            } else {
                (b, a)
            };
            first_child.push(self.mutate(to_first));
            second_child.push(self.mutate(to_second));
        }

        [first_child, second_child]
            .into_iter()
            .map(|value| {
                let mut child = Number::new(value);
                child.set_child(true);
                child
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_number_is_unevaluated() {
        let number = Number::new("0101");
        assert_eq!(number.score(), UNEVALUATED);
        assert!(!number.is_evaluated());
        assert!(!number.is_selected());
        assert!(!number.is_child());
        assert!(!number.is_solution());
    }

    #[test]
    fn test_random_number_length() {
        let number = Number::random(32);
        assert_eq!(number.value().len(), 32);
    }

    #[test]
    fn test_matching_bits() {
        let target = String::from("1010");

        let mut partial = Number::new("1001");
        MatchingBits.score(&mut partial, &target);
        assert_eq!(partial.score(), 2);
        assert!(!partial.is_solution());

        let mut exact = Number::new("1010");
        MatchingBits.score(&mut exact, &target);
        assert_eq!(exact.score(), 4);
        assert!(exact.is_solution());
    }

    #[test]
    fn test_matching_bits_shorter_guess_is_not_a_solution() {
        let mut short = Number::new("10");
        MatchingBits.score(&mut short, &String::from("1010"));
        assert_eq!(short.score(), 2);
        assert!(!short.is_solution());
    }

    #[test]
    fn test_at_least_threshold() {
        let mut number = Number::new("1");
        number.set_score(3);
        AtLeastThreshold.apply(&mut number, 3);
        assert!(number.is_selected());
        AtLeastThreshold.apply(&mut number, 4);
        assert!(!number.is_selected());
    }

    #[test]
    fn test_uniform_crossover_mirrors_parents() {
        let first = Number::new("00000000");
        let second = Number::new("11111111");

        let children = UniformCrossover::default().offspring(&first, &second);

        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.is_child() && !c.is_evaluated()));
        for (a, b) in children[0].value().chars().zip(children[1].value().chars()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_uniform_crossover_full_mutation_flips_every_bit() {
        let parent = Number::new("0000");
        let children = UniformCrossover::new(1.0).offspring(&parent, &parent);
        assert!(children.iter().all(|c| c.value() == "1111"));
    }

    #[test]
    fn test_mutation_rate_is_clamped() {
        assert_eq!(UniformCrossover::new(3.0).mutation_rate(), 1.0);
        assert_eq!(UniformCrossover::new(-1.0).mutation_rate(), 0.0);
    }
}
