use std::fmt::Debug;
use std::marker::PhantomData;

use crate::{
    error::{GeneticError, OptionExt, Result},
    evaluation::Evaluator,
    individual::Individual,
    strategy::{Factory, Recombiner, Scorer, SelectionRule},
};

use super::{EvolutionOptions, Mediator};

/// Fluent construction of a [`Mediator`].
///
/// Every strategy is required; options fall back to
/// [`EvolutionOptions::default`] when not given.
pub struct MediatorBuilder<I, T, F, S, R, X> {
    options: Option<EvolutionOptions>,
    individual_factory: Option<F>,
    evaluator: Option<Evaluator<T, S>>,
    selection_rule: Option<R>,
    recombiner: Option<X>,
    _individual: PhantomData<fn() -> I>,
}

impl<I, T, F, S, R, X> MediatorBuilder<I, T, F, S, R, X>
where
    I: Individual,
    T: Debug + Sync,
    F: Factory<I>,
    S: Scorer<I, T> + Sync,
    R: SelectionRule<I>,
    X: Recombiner<I>,
{
    pub fn new() -> Self {
        Self {
            options: None,
            individual_factory: None,
            evaluator: None,
            selection_rule: None,
            recombiner: None,
            _individual: PhantomData,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_individual_factory(mut self, factory: F) -> Self {
        self.individual_factory = Some(factory);
        self
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator<T, S>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_selection_rule(mut self, rule: R) -> Self {
        self.selection_rule = Some(rule);
        self
    }

    pub fn with_recombiner(mut self, recombiner: X) -> Self {
        self.recombiner = Some(recombiner);
        self
    }

    pub fn build(self) -> Result<Mediator<I, T, F, S, R, X>> {
        let individual_factory = self.individual_factory.ok_or_else_genetic(|| {
            GeneticError::Configuration("Individual factory not specified".to_string())
        })?;

        let evaluator = self.evaluator.ok_or_else_genetic(|| {
            GeneticError::Configuration("Evaluator not specified".to_string())
        })?;

        let selection_rule = self.selection_rule.ok_or_else_genetic(|| {
            GeneticError::Configuration("Selection rule not specified".to_string())
        })?;

        let recombiner = self.recombiner.ok_or_else_genetic(|| {
            GeneticError::Configuration("Recombiner not specified".to_string())
        })?;

        Mediator::new(
            self.options.unwrap_or_default(),
            individual_factory,
            evaluator,
            selection_rule,
            recombiner,
        )
    }
}

impl<I, T, F, S, R, X> Default for MediatorBuilder<I, T, F, S, R, X>
where
    I: Individual,
    T: Debug + Sync,
    F: Factory<I>,
    S: Scorer<I, T> + Sync,
    R: SelectionRule<I>,
    X: Recombiner<I>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{self, AtLeastThreshold, MatchingBits, Number, UniformCrossover};

    type NumberBuilder = MediatorBuilder<
        Number,
        String,
        fn() -> Number,
        MatchingBits,
        AtLeastThreshold,
        UniformCrossover,
    >;

    fn zeros() -> Number {
        Number::new("0000")
    }

    #[test]
    fn test_missing_strategy_is_reported() {
        let result = NumberBuilder::new()
            .with_individual_factory(zeros as fn() -> Number)
            .with_selection_rule(AtLeastThreshold)
            .with_recombiner(UniformCrossover::default())
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Evaluator")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_build_with_default_options() {
        let mediator = MediatorBuilder::new()
            .with_individual_factory(numeric::number_factory(4))
            .with_evaluator(Evaluator::new(numeric::target_factory(4), MatchingBits))
            .with_selection_rule(AtLeastThreshold)
            .with_recombiner(UniformCrossover::default())
            .build()
            .unwrap();

        assert_eq!(mediator.options(), &EvolutionOptions::default());
        assert_eq!(mediator.evaluator().target().len(), 4);
        assert!(mediator.current_generation().is_empty());
    }
}
