//! # Individual Trait
//!
//! The `Individual` trait is the data contract of a candidate solution. It has no
//! behaviour of its own: the evaluator writes its score and solution flag, the
//! selector writes its selected flag, and generations move it around.
//!
//! ## Score convention
//!
//! A score is a signed integer. A negative score (conventionally
//! [`UNEVALUATED`]) means the individual has never been evaluated.
//!
//! ## Example
//!
//! ```rust
//! use genetic_mediator::individual::{Individual, UNEVALUATED};
//!
//! #[derive(Debug)]
//! struct Word {
//!     value: String,
//!     score: i32,
//!     selected: bool,
//!     child: bool,
//!     solution: bool,
//! }
//!
//! impl Individual for Word {
//!     type Value = String;
//!
//!     fn value(&self) -> &String { &self.value }
//!     fn set_value(&mut self, value: String) { self.value = value; }
//!     fn score(&self) -> i32 { self.score }
//!     fn set_score(&mut self, score: i32) { self.score = score; }
//!     fn is_solution(&self) -> bool { self.solution }
//!     fn set_solution(&mut self, solution: bool) { self.solution = solution; }
//!     fn is_selected(&self) -> bool { self.selected }
//!     fn set_selected(&mut self, selected: bool) { self.selected = selected; }
//!     fn is_child(&self) -> bool { self.child }
//!     fn set_child(&mut self, child: bool) { self.child = child; }
//! }
//!
//! let word = Word { value: "abc".into(), score: UNEVALUATED, selected: false, child: false, solution: false };
//! assert!(!word.is_evaluated());
//! ```

use std::fmt::Debug;

/// Score carried by an individual that has not been evaluated yet.
pub const UNEVALUATED: i32 = -1;

/// Capability bundle implemented by every domain-specific candidate solution.
///
/// Types implementing this trait must also implement `Debug`, `Send` and `Sync`
/// so that generations can be logged and evaluated in parallel.
pub trait Individual: Debug + Send + Sync {
    /// The domain representation of the candidate.
    type Value;

    fn value(&self) -> &Self::Value;

    fn set_value(&mut self, value: Self::Value);

    /// Fitness score. Negative means never evaluated.
    fn score(&self) -> i32;

    fn set_score(&mut self, score: i32);

    /// Whether the evaluator judged the value a perfect match.
    fn is_solution(&self) -> bool;

    fn set_solution(&mut self, solution: bool);

    /// Whether the selector kept this individual for breeding.
    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// Whether this individual was produced by crossover.
    fn is_child(&self) -> bool;

    fn set_child(&mut self, child: bool);

    /// Returns `true` once a score has been assigned.
    fn is_evaluated(&self) -> bool {
        self.score() >= 0
    }
}
