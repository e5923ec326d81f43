//! # Error Types
//!
//! This module defines the error type shared by every component of the engine.
//! Invalid arguments are reported at the call that detects them, configuration
//! problems abort a run before the first generation is seeded.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetic_mediator::error::{GeneticError, Result};
//!
//! fn positive(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::InvalidArgument("size must be positive".to_string()));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(positive(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genetic_mediator::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[i32]) -> genetic_mediator::error::Result<i32> {
//!     scores.first().copied().ok_or_else_genetic(||
//!         GeneticError::InvalidArgument("no scores".to_string())
//!     )
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors raised by the genetic engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An absent value or an out-of-range argument was handed to the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Required settings are missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ```rust
/// use genetic_mediator::error::ResultExt;
/// use std::fs::File;
///
/// fn open(path: &str) -> genetic_mediator::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error into a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_message() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        match io.context("Failed to read genetic.toml") {
            Err(GeneticError::Other(msg)) => {
                assert!(msg.starts_with("Failed to read genetic.toml"));
                assert!(msg.contains("missing"));
            }
            _ => panic!("Expected Other error"),
        }
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_else_genetic(|| GeneticError::InvalidArgument("x".into()));
        assert!(matches!(result, Err(GeneticError::InvalidArgument(_))));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::Other("y".into())).unwrap(), 3);
    }

    #[test]
    fn test_display() {
        let err = GeneticError::Configuration("dureeExecution is missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: dureeExecution is missing");
    }
}
