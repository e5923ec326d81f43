//! # Population
//!
//! Append-only history of generations plus a running census mapping each
//! generation number to that generation's total score. The census is the only
//! input of stagnation detection.
//!
//! Two stagnation rules are available, see [`StagnationRule`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{generation::Generation, individual::Individual};

/// Census entries required before stagnation can be reported.
pub const MIN_CENSUS_FOR_STAGNATION: usize = 11;

/// Number of comparisons a stagnation rule performs.
pub const STAGNATION_WINDOW: usize = 5;

/// How [`Population::is_decreasing`] reads the census.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagnationRule {
    /// Compares the entry at descending position 1 against positions 1 to 5.
    ///
    /// The first comparison is the entry against itself, which is never
    /// strictly lower, so this rule never reports stagnation. It is kept for
    /// runs that must reproduce the historical behaviour.
    Literal,
    /// Reports stagnation when each of the five latest totals is strictly lower
    /// than the one recorded before it.
    #[default]
    ConsecutiveDecline,
}

/// History of generations and their score census.
#[derive(Debug, Clone)]
pub struct Population<I> {
    generations: Vec<Generation<I>>,
    census: BTreeMap<u32, i64>,
    rule: StagnationRule,
}

impl<I: Individual> Population<I> {
    /// Creates an empty population using the default stagnation rule.
    pub fn new() -> Self {
        Self::with_rule(StagnationRule::default())
    }

    pub fn with_rule(rule: StagnationRule) -> Self {
        Self {
            generations: Vec::new(),
            census: BTreeMap::new(),
            rule,
        }
    }

    pub fn rule(&self) -> StagnationRule {
        self.rule
    }

    pub fn add_generation(&mut self, generation: Generation<I>) {
        self.generations.push(generation);
    }

    /// Number of generations kept in the history.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &[Generation<I>] {
        &self.generations
    }

    /// Records the total score of an evaluated generation.
    ///
    /// Must be called once per generation, in increasing generation order.
    pub fn census(&mut self, generation: &Generation<I>) {
        self.record(generation.number(), generation.total_score());
    }

    /// Records a raw census entry.
    pub fn record(&mut self, number: u32, total_score: i64) {
        self.census.insert(number, total_score);
    }

    pub fn census_entries(&self) -> &BTreeMap<u32, i64> {
        &self.census
    }

    /// Whether the population is stagnating under the configured rule.
    pub fn is_decreasing(&self) -> bool {
        self.is_decreasing_by(self.rule)
    }

    /// Whether the population is stagnating under `rule`.
    pub fn is_decreasing_by(&self, rule: StagnationRule) -> bool {
        if self.census.len() < MIN_CENSUS_FOR_STAGNATION {
            return false;
        }

        // Most recent first.
        let latest: Vec<i64> = self
            .census
            .values()
            .rev()
            .take(STAGNATION_WINDOW + 1)
            .copied()
            .collect();

        match rule {
            StagnationRule::Literal => (0..STAGNATION_WINDOW)
                .filter(|&i| latest[1] < latest[i + 1])
                .count()
                == STAGNATION_WINDOW,
            StagnationRule::ConsecutiveDecline => {
                latest.windows(2).all(|pair| pair[0] < pair[1])
            }
        }
    }
}

impl<I: Individual> Default for Population<I> {
    fn default() -> Self {
        Self::new()
    }
}
