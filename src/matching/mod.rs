//! The pair-evaluation protocol: how arbitrary (x, y) pairs are scored and
//! accepted as edges.
//!
//! Evaluation runs through four replaceable steps, always in this order:
//!
//! 1. condition extraction per side ([`ConditionExtractor`], x side first),
//! 2. condition combination into a [`Conditions`] tuple
//!    ([`ConditionCombiner`]),
//! 3. match assessment ([`MatchAssessor`], default: any condition true),
//! 4. compatibility scoring ([`CompatibilityScorer`], default: count of
//!    satisfied conditions).
//!
//! [`Ruleset`] composes the four into the engine-facing [`MatchRule`];
//! [`MatchSelector`] separately governs which incident edge a primary vertex
//! records as its match.

mod conditions;
mod rules;
mod traits;

pub use conditions::Conditions;
pub use rules::{
    AnyConditionAssessor, DefaultRuleset, EqualityCombiner, HeaviestEdgeSelector,
    IdentityExtractor, Ruleset, SatisfiedCountScorer,
};
pub use traits::{
    CompatibilityScorer, ConditionCombiner, ConditionExtractor, MatchAssessor, MatchRule,
    MatchSelector, PairAssessment,
};
