//! # Generation
//!
//! A `Generation` is an ordered cohort of individuals sharing a generation number.
//! Members keep their insertion order until [`Generation::sort_by_score_desc`] is
//! called. The generation owns the aggregates the control loop relies on: the
//! total score recorded in the census, the selection threshold, elimination of
//! unselected members and best-individual lookup.
//!
//! ## Example
//!
//! ```rust
//! use genetic_mediator::generation::Generation;
//! use genetic_mediator::individual::Individual;
//! use genetic_mediator::numeric::Number;
//!
//! let mut generation = Generation::new(0);
//! for (bits, score) in [("00", 1), ("01", 2), ("11", 2)] {
//!     let mut number = Number::new(bits);
//!     number.set_score(score);
//!     generation.push(number);
//! }
//!
//! assert_eq!(generation.total_score(), 5);
//! assert_eq!(generation.best().unwrap().value(), "01");
//! ```

use std::collections::BTreeMap;

use tracing::trace;

use crate::{
    error::{GeneticError, Result},
    individual::Individual,
};

/// An ordered cohort of individuals tagged with an immutable generation number.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation<I> {
    individuals: Vec<I>,
    number: u32,
}

impl<I: Individual> Generation<I> {
    /// Creates an empty generation with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            individuals: Vec::new(),
            number,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn individuals(&self) -> &[I] {
        &self.individuals
    }

    /// Mutable access to the members, for in-place scoring and selection.
    pub fn individuals_mut(&mut self) -> &mut [I] {
        &mut self.individuals
    }

    pub fn into_individuals(self) -> Vec<I> {
        self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Appends one individual.
    pub fn push(&mut self, individual: I) {
        self.individuals.push(individual);
    }

    /// Appends one individual, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if `individual` is `None`.
    pub fn add(&mut self, individual: Option<I>) -> Result<()> {
        let individual = individual.ok_or_else(|| {
            GeneticError::InvalidArgument(format!(
                "Cannot add an absent individual to generation {}",
                self.number
            ))
        })?;
        self.individuals.push(individual);
        Ok(())
    }

    /// Appends a whole group, or nothing at all.
    ///
    /// If any member of the group is absent the call is a silent no-op and
    /// returns `false`. Otherwise every member is appended in order and the
    /// call returns `true`.
    pub fn add_group<G>(&mut self, group: G) -> bool
    where
        G: IntoIterator<Item = Option<I>>,
    {
        let group: Option<Vec<I>> = group.into_iter().collect();
        match group {
            Some(members) => {
                self.individuals.extend(members);
                true
            }
            None => {
                trace!(
                    generation = self.number,
                    "Group rejected: it contains an absent individual"
                );
                false
            }
        }
    }

    /// Appends every individual produced by `members`.
    pub fn extend<G>(&mut self, members: G)
    where
        G: IntoIterator<Item = I>,
    {
        self.individuals.extend(members);
    }

    /// Removes the first member equal to `individual` and returns it.
    pub fn remove(&mut self, individual: &I) -> Option<I>
    where
        I: PartialEq,
    {
        let index = self.individuals.iter().position(|i| i == individual)?;
        Some(self.individuals.remove(index))
    }

    /// Sum of every member's score.
    ///
    /// Unevaluated members contribute their negative sentinel as is, so the
    /// generation should be fully evaluated before calling this.
    pub fn total_score(&self) -> i64 {
        self.individuals.iter().map(|i| i64::from(i.score())).sum()
    }

    /// Number of members per evaluated score. Unevaluated members are left out.
    pub fn score_distribution(&self) -> BTreeMap<i32, usize> {
        let mut distribution = BTreeMap::new();
        for individual in self.individuals.iter().filter(|i| i.is_evaluated()) {
            *distribution.entry(individual.score()).or_insert(0) += 1;
        }
        distribution
    }

    /// Score cutoff protecting against over- and under-selection.
    ///
    /// Weighted average over the score histogram: every bucket `i` in
    /// `1..=max_score` adds `frequency[i] * i + 1`, and the sum is divided by
    /// the generation size, rounding down. Bucket 0 never contributes, so an
    /// all-zero generation has a threshold of 0. An empty generation also
    /// yields 0.
    pub fn selection_threshold(&self) -> i32 {
        if self.individuals.is_empty() {
            return 0;
        }

        let distribution = self.score_distribution();
        let max_score = distribution.keys().next_back().copied().unwrap_or(0).max(0);

        // Empty buckets in 1..=max_score still add their +1.
        let weighted_sum: i64 = distribution
            .iter()
            .filter(|(&score, _)| score >= 1)
            .map(|(&score, &frequency)| frequency as i64 * i64::from(score))
            .sum::<i64>()
            + i64::from(max_score);

        trace!(
            generation = self.number,
            distribution = ?distribution,
            weighted_sum,
            "Score distribution"
        );

        i32::try_from(weighted_sum / self.individuals.len() as i64).unwrap_or(i32::MAX)
    }

    /// Drops every member whose selected flag is false.
    pub fn eliminate_unselected(&mut self) {
        let snapshot = std::mem::take(&mut self.individuals);
        self.individuals = snapshot
            .into_iter()
            .filter(|individual| individual.is_selected())
            .collect();
    }

    pub fn contains_solution(&self) -> bool {
        self.individuals.iter().any(|i| i.is_solution())
    }

    /// The member with the strictly highest score. The earliest member wins ties.
    pub fn best(&self) -> Option<&I> {
        self.individuals.iter().fold(None, |best: Option<&I>, candidate| match best {
            Some(current) if candidate.score() <= current.score() => Some(current),
            _ => Some(candidate),
        })
    }

    /// Stable sort by descending score.
    pub fn sort_by_score_desc(&mut self) {
        self.individuals.sort_by(|a, b| b.score().cmp(&a.score()));
    }
}
