//! # Breeding
//!
//! Crossing turns the survivors of one generation into the children of the
//! next one.
pub mod crosser;

pub use crosser::Crosser;
