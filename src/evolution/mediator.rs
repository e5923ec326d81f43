use std::fmt::Debug;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::options::EvolutionOptions;
use crate::{
    breeding::Crosser,
    error::Result,
    evaluation::Evaluator,
    generation::Generation,
    generator::Generator,
    individual::Individual,
    population::Population,
    selection::Selector,
    strategy::{Factory, Recombiner, Scorer, SelectionRule},
};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current generation contains a solution.
    SolutionFound,
    /// The maximum run duration elapsed.
    TimeBudgetExhausted,
    /// The census shows the population is stagnating.
    PopulationDecreasing,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub termination: Termination,
    /// Number of the last generation.
    pub generation: u32,
    pub elapsed: Duration,
    pub decreasing: bool,
    pub census_entries: usize,
    /// Score of the best member of the last generation.
    pub best_score: Option<i32>,
}

/// Owns the control loop of a genetic run.
///
/// Each cycle selects the survivors of the current generation, eliminates the
/// rest, breeds the next generation from the survivors, tops it up with fresh
/// individuals, scores it and records its total in the census. The loop stops
/// when the current generation holds a solution, the time budget is spent, or
/// the population is found to be decreasing.
#[derive(Debug)]
pub struct Mediator<I, T, F, S, R, X>
where
    I: Individual,
{
    options: EvolutionOptions,
    generator: Generator<F>,
    evaluator: Evaluator<T, S>,
    selector: Selector<R>,
    crosser: Crosser<X>,
    population: Population<I>,
    generation: Generation<I>,
}

impl<I, T, F, S, R, X> Mediator<I, T, F, S, R, X>
where
    I: Individual,
    T: Debug + Sync,
    F: Factory<I>,
    S: Scorer<I, T> + Sync,
    R: SelectionRule<I>,
    X: Recombiner<I>,
{
    /// Validates `options` and wires the components of a run: a selector
    /// starting at threshold 0, a crosser bound to the generation size and a
    /// generator around `individual_factory`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid.
    pub fn new(
        options: EvolutionOptions,
        individual_factory: F,
        evaluator: Evaluator<T, S>,
        selection_rule: R,
        recombiner: X,
    ) -> Result<Self> {
        options.validate()?;

        let crosser = Crosser::new(recombiner, options.get_individuals_per_generation())?;
        let population = Population::with_rule(options.get_stagnation_rule());

        Ok(Self {
            generator: Generator::new(individual_factory),
            evaluator,
            selector: Selector::new(selection_rule, 0),
            crosser,
            population,
            generation: Generation::new(0),
            options,
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn evaluator(&self) -> &Evaluator<T, S> {
        &self.evaluator
    }

    /// The generation the last run ended on.
    pub fn current_generation(&self) -> &Generation<I> {
        &self.generation
    }

    pub fn population(&self) -> &Population<I> {
        &self.population
    }

    /// Runs the control loop until a stop condition holds.
    ///
    /// Options were validated by [`Mediator::new`], so the run itself has no
    /// error path and always ends with a [`RunReport`].
    ///
    /// Strategies are trusted to be total: a panic inside one of them unwinds
    /// through this call.
    pub fn run(&mut self) -> RunReport {
        let size = self.options.get_individuals_per_generation();
        let max_duration = self.options.get_max_duration();
        let parallel_threshold = self.options.get_parallel_threshold();
        let started_at = Instant::now();

        self.population = Population::with_rule(self.options.get_stagnation_rule());
        self.selector.set_threshold(0);

        info!(
            individuals_per_generation = size,
            max_duration_secs = max_duration.as_secs(),
            stagnation_rule = ?self.options.get_stagnation_rule(),
            "Starting run"
        );

        let mut generation = self.generator.generation(size);
        self.evaluator
            .evaluate_generation(&mut generation, parallel_threshold);
        debug!("Initial generation evaluated");

        while started_at.elapsed() < max_duration
            && !generation.contains_solution()
            && !self.population.is_decreasing()
        {
            info!(
                generation = generation.number(),
                best = ?generation.best(),
                "Processing generation"
            );
            let threshold = generation.selection_threshold();
            debug!(
                elapsed_secs = started_at.elapsed().as_secs(),
                target = ?self.evaluator.target(),
                total_score = generation.total_score(),
                threshold,
                "Generation state"
            );

            self.selector.set_threshold(threshold);
            self.selector.select_generation(&mut generation);
            generation.eliminate_unselected();

            let mut children = self.crosser.cross(&mut generation);
            if children.len() < size {
                let fresh = self.generator.generation(size - children.len());
                children.add_group(fresh.into_individuals().into_iter().map(Some));
            }
            self.evaluator
                .evaluate_generation(&mut children, parallel_threshold);
            self.population.census(&children);

            let parents = std::mem::replace(&mut generation, children);
            if self.options.get_retain_history() {
                self.population.add_generation(parents);
            }
        }

        let decreasing = self.population.is_decreasing();
        let termination = if generation.contains_solution() {
            Termination::SolutionFound
        } else if decreasing {
            Termination::PopulationDecreasing
        } else {
            Termination::TimeBudgetExhausted
        };
        let elapsed = started_at.elapsed();

        info!(
            termination = ?termination,
            target = ?self.evaluator.target(),
            best = ?generation.best(),
            decreasing,
            elapsed_secs = elapsed.as_secs(),
            "Run finished"
        );

        let report = RunReport {
            termination,
            generation: generation.number(),
            elapsed,
            decreasing,
            census_entries: self.population.census_entries().len(),
            best_score: generation.best().map(|best| best.score()),
        };
        self.generation = generation;
        report
    }
}
