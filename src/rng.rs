//! # Random helpers
//!
//! Thread-local randomness for the bundled strategies. Strategies are called
//! through shared references (and possibly from Rayon workers), so they draw
//! from the thread-local generator instead of carrying a mutable one.
//!
//! ```rust
//! use genetic_mediator::rng::ThreadLocalRng;
//!
//! let bits = ThreadLocalRng::bit_string(8);
//! assert_eq!(bits.len(), 8);
//! assert!(bits.chars().all(|c| c == '0' || c == '1'));
//! ```

use rand::{thread_rng, Rng};

/// Entry points drawing from `rand`'s thread-local, entropy-seeded `ThreadRng`.
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Returns `true` with probability `p`, clamped to `[0, 1]`.
    pub fn gen_bool(p: f64) -> bool {
        thread_rng().gen_bool(p.clamp(0.0, 1.0))
    }

    /// A string of `len` random `'0'`/`'1'` characters.
    pub fn bit_string(len: usize) -> String {
        bit_string_with(&mut thread_rng(), len)
    }
}

/// A string of `len` random `'0'`/`'1'` characters drawn from `rng`.
pub fn bit_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_bit_string_with_seed_is_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        assert_eq!(bit_string_with(&mut first, 32), bit_string_with(&mut second, 32));
    }

    #[test]
    fn test_bit_string_empty() {
        assert!(ThreadLocalRng::bit_string(0).is_empty());
    }

    #[test]
    fn test_gen_bool_extremes() {
        assert!(ThreadLocalRng::gen_bool(1.0));
        assert!(!ThreadLocalRng::gen_bool(0.0));
        assert!(!ThreadLocalRng::gen_bool(-3.0));
    }
}
