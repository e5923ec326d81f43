//! # Generator
//!
//! Builds fresh generations from an individual factory. The control loop uses
//! it to seed generation 0 and to replenish a generation that came out of
//! crossing with fewer members than required.

use tracing::debug;

use crate::{generation::Generation, individual::Individual, strategy::Factory};

/// Produces generations of freshly created individuals.
#[derive(Debug, Clone)]
pub struct Generator<F> {
    factory: F,
}

impl<F> Generator<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Builds a generation numbered 0 holding `count` new individuals.
    pub fn generation<I>(&self, count: usize) -> Generation<I>
    where
        I: Individual,
        F: Factory<I>,
    {
        let mut generation = Generation::new(0);
        generation.extend((0..count).map(|_| self.factory.produce()));
        debug!(count, "Generated fresh individuals");
        generation
    }
}
