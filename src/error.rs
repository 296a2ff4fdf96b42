//! Error types for graph construction.
//!
//! Construction is all-or-nothing: the first failing caller-supplied callable
//! aborts the build and its error reaches the caller unchanged. Nothing here
//! retries or suppresses.

use thiserror::Error;

/// Error raised while building a [`MatchingGraph`](crate::MatchingGraph).
///
/// Both variants originate in caller-supplied code; the engine itself has no
/// failure modes of its own.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatchGraphError {
    /// A vertex factory could not produce a payload for an input item.
    #[error("vertex construction failed: {context}")]
    Configuration { context: String },

    /// A condition, assessment, compatibility, or selection callable failed
    /// while evaluating a pair.
    #[error("matching rule failed: {context}")]
    Predicate { context: String },
}

/// Convenient Result type for matching-graph operations.
pub type Result<T> = std::result::Result<T, MatchGraphError>;

impl MatchGraphError {
    /// Create a configuration error.
    pub fn configuration(context: impl Into<String>) -> Self {
        Self::Configuration {
            context: context.into(),
        }
    }

    /// Create a predicate error.
    pub fn predicate(context: impl Into<String>) -> Self {
        Self::Predicate {
            context: context.into(),
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Rule and factory authors can chain context strings onto errors as they
/// bubble up, so a failure deep inside a condition extractor still names the
/// call site that triggered it.
///
/// # Example
///
/// ```
/// use bimatch::{ErrorContext, MatchGraphError, Result};
///
/// fn parse_rank(raw: &str) -> Result<i64> {
///     raw.parse::<i64>()
///         .map_err(|e| MatchGraphError::predicate(e.to_string()))
///         .with_context(|| format!("parsing rank from {raw:?}"))
/// }
///
/// let err = parse_rank("not-a-number").unwrap_err();
/// assert!(err.to_string().contains("parsing rank"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context,
    /// creating a chain that shows the path through the code.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MatchGraphError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MatchGraphError, new_ctx: &str) -> MatchGraphError {
    match err {
        MatchGraphError::Configuration { context } => MatchGraphError::Configuration {
            context: chain_context(new_ctx, &context),
        },
        MatchGraphError::Predicate { context } => MatchGraphError::Predicate {
            context: chain_context(new_ctx, &context),
        },
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
