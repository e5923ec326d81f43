use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    generation::Generation,
    individual::Individual,
    strategy::Recombiner,
};

/// Breeds a child generation from a parent generation.
///
/// Parents are sorted by descending score (ties keep their relative order),
/// then adjacent pairs `(0, 1)`, `(2, 3)`, ... are handed to the
/// [`Recombiner`]. Each pair's offspring are added as a whole group, and no
/// further pair is crossed once the child generation holds `target_size`
/// members or fewer than two parents remain. The last group may therefore
/// take the child generation past `target_size`. An odd last parent is left
/// out for that cycle.
///
/// # Examples
///
/// ```
/// use genetic_mediator::breeding::Crosser;
/// use genetic_mediator::generation::Generation;
/// use genetic_mediator::individual::Individual;
/// use genetic_mediator::numeric::{Number, UniformCrossover};
///
/// let crosser = Crosser::new(UniformCrossover::default(), 4).unwrap();
///
/// let mut parents = Generation::new(0);
/// for bits in ["0000", "1111", "0101"] {
///     parents.push(Number::new(bits));
/// }
///
/// let children = crosser.cross(&mut parents);
/// assert_eq!(children.number(), 1);
/// assert_eq!(children.len(), 2);
/// assert!(children.individuals().iter().all(|c| c.is_child()));
/// ```
#[derive(Debug, Clone)]
pub struct Crosser<R> {
    recombiner: R,
    target_size: usize,
}

impl<R> Crosser<R> {
    /// Creates a crosser that stops pairing parents once `target_size`
    /// children exist.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if `target_size` is zero.
    pub fn new(recombiner: R, target_size: usize) -> Result<Self> {
        if target_size == 0 {
            return Err(GeneticError::InvalidArgument(
                "Crossing target size must be positive".to_string(),
            ));
        }
        Ok(Self {
            recombiner,
            target_size,
        })
    }

    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Sorts `parents` by descending score and breeds generation
    /// `parents.number() + 1` from adjacent pairs.
    pub fn cross<I>(&self, parents: &mut Generation<I>) -> Generation<I>
    where
        I: Individual,
        R: Recombiner<I>,
    {
        let mut children = Generation::new(parents.number() + 1);
        parents.sort_by_score_desc();

        let members = parents.individuals();
        let mut index = 0;
        while children.len() < self.target_size && index + 1 < members.len() {
            let offspring = self
                .recombiner
                .offspring(&members[index], &members[index + 1]);
            children.add_group(offspring.into_iter().map(Some));
            index += 2;
        }

        debug!(
            parent_generation = parents.number(),
            parents = members.len(),
            pairs = index / 2,
            children = children.len(),
            "Crossing done"
        );
        children
    }
}
