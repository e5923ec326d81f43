use tracing::trace;

use crate::{generation::Generation, individual::Individual, strategy::SelectionRule};

/// Marks individuals as selected or unselected against a mutable threshold.
///
/// The threshold is reconfigured once per generation from
/// [`Generation::selection_threshold`]; the decision for each individual is
/// delegated to a [`SelectionRule`].
///
/// # Examples
///
/// ```
/// use genetic_mediator::individual::Individual;
/// use genetic_mediator::numeric::{AtLeastThreshold, Number};
/// use genetic_mediator::selection::Selector;
///
/// let mut selector = Selector::new(AtLeastThreshold, 0);
/// selector.set_threshold(3);
///
/// let mut number = Number::new("0110");
/// number.set_score(2);
/// selector.select(&mut number);
/// assert!(!number.is_selected());
/// ```
#[derive(Debug, Clone)]
pub struct Selector<R> {
    rule: R,
    threshold: i32,
}

impl<R> Selector<R> {
    pub fn new(rule: R, threshold: i32) -> Self {
        Self { rule, threshold }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    /// Applies the rule to one individual, updating its selected flag.
    pub fn select<I>(&self, individual: &mut I)
    where
        R: SelectionRule<I>,
    {
        self.rule.apply(individual, self.threshold);
    }

    /// Applies the rule to every member of `generation`.
    pub fn select_generation<I>(&self, generation: &mut Generation<I>)
    where
        I: Individual,
        R: SelectionRule<I>,
    {
        for individual in generation.individuals_mut() {
            self.select(individual);
        }
        trace!(
            generation = generation.number(),
            threshold = self.threshold,
            selected = generation.individuals().iter().filter(|i| i.is_selected()).count(),
            "Selection applied"
        );
    }
}
