//! Trait definitions for the pair-evaluation protocol.
//!
//! The protocol splits pair evaluation into four capability interfaces
//! (condition extraction per side, condition combination, match assessment,
//! and compatibility scoring), each independently replaceable on the graph
//! builder. [`Ruleset`](super::Ruleset) composes the four into the
//! engine-facing [`MatchRule`]; callers with policies that do not decompose
//! this way can implement [`MatchRule`] directly.

use crate::error::Result;
use crate::graph::{EdgeId, Weight};

use super::conditions::Conditions;

/// Derives the comparison value one side contributes to pair evaluation.
pub trait ConditionExtractor<T> {
    /// The value handed to the [`ConditionCombiner`].
    type Value;

    /// Extract the comparison value for one vertex item.
    fn extract(&self, item: &T) -> Result<Self::Value>;

    /// Name of this extractor for logging/debugging.
    fn name(&self) -> &'static str {
        "ConditionExtractor"
    }
}

/// Combines the two extracted values into a condition tuple.
pub trait ConditionCombiner<X, Y> {
    /// Evaluate all conditions for one pair of extracted values.
    fn combine(&self, x: &X, y: &Y) -> Result<Conditions>;

    /// Name of this combiner for logging/debugging.
    fn name(&self) -> &'static str {
        "ConditionCombiner"
    }
}

/// Decides whether a condition tuple constitutes a match.
pub trait MatchAssessor {
    /// Assess a condition tuple.
    fn assess(&self, conditions: &Conditions) -> Result<bool>;

    /// Name of this assessor for logging/debugging.
    fn name(&self) -> &'static str {
        "MatchAssessor"
    }
}

/// Scores how compatible a pair is.
///
/// The score is proposed as the weight of the pair's edge, subject to the
/// initial-weight contract of [`Edge::new`](crate::Edge::new).
pub trait CompatibilityScorer {
    /// Score a condition tuple.
    fn score(&self, conditions: &Conditions) -> Result<Weight>;

    /// Name of this scorer for logging/debugging.
    fn name(&self) -> &'static str {
        "CompatibilityScorer"
    }
}

/// Picks which incident edge, if any, becomes a primary vertex's recorded
/// match.
pub trait MatchSelector {
    /// Select from a vertex's incident edges, listed in adjacency order with
    /// their current weights. `None` leaves the vertex unmatched.
    fn select(&self, incident: &[(EdgeId, Weight)]) -> Result<Option<EdgeId>>;

    /// Name of this selector for logging/debugging.
    fn name(&self) -> &'static str {
        "MatchSelector"
    }
}

/// Engine-facing pair evaluation: everything edge construction needs to know
/// about one (x, y) pair.
pub trait MatchRule<X, Y> {
    /// Evaluate one pair of vertex items.
    fn evaluate(&self, x: &X, y: &Y) -> Result<PairAssessment>;

    /// Name of this rule for logging/debugging.
    fn name(&self) -> &'static str {
        "MatchRule"
    }
}

/// Result of evaluating one (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PairAssessment {
    /// Whether the pair receives an edge.
    pub is_match: bool,
    /// The weight proposed for that edge.
    pub compatibility: Weight,
}

impl PairAssessment {
    /// Create an assessment.
    pub const fn new(is_match: bool, compatibility: Weight) -> Self {
        Self {
            is_match,
            compatibility,
        }
    }

    /// A rejected pair.
    pub const fn no_match() -> Self {
        Self {
            is_match: false,
            compatibility: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_assessment_constructors() {
        let accepted = PairAssessment::new(true, 2);
        assert!(accepted.is_match);
        assert_eq!(accepted.compatibility, 2);

        let rejected = PairAssessment::no_match();
        assert!(!rejected.is_match);
        assert_eq!(rejected.compatibility, 0);
    }
}
