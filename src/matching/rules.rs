//! Default implementations of the pair-evaluation protocol, and the
//! [`Ruleset`] that composes the four capability interfaces into one rule.

use crate::error::Result;
use crate::graph::{EdgeId, Weight};

use super::conditions::Conditions;
use super::traits::{
    CompatibilityScorer, ConditionCombiner, ConditionExtractor, MatchAssessor, MatchRule,
    MatchSelector, PairAssessment,
};

/// Default extractor: the comparison value is the item itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<T: Clone> ConditionExtractor<T> for IdentityExtractor {
    type Value = T;

    fn extract(&self, item: &T) -> Result<T> {
        Ok(item.clone())
    }

    fn name(&self) -> &'static str {
        "IdentityExtractor"
    }
}

/// Default combiner: a single condition, equality of the two values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityCombiner;

impl<X, Y> ConditionCombiner<X, Y> for EqualityCombiner
where
    X: PartialEq<Y>,
{
    fn combine(&self, x: &X, y: &Y) -> Result<Conditions> {
        Ok(Conditions::single(x == y))
    }

    fn name(&self) -> &'static str {
        "EqualityCombiner"
    }
}

/// Default assessor: a match if any condition holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyConditionAssessor;

impl MatchAssessor for AnyConditionAssessor {
    fn assess(&self, conditions: &Conditions) -> Result<bool> {
        Ok(conditions.any())
    }

    fn name(&self) -> &'static str {
        "AnyConditionAssessor"
    }
}

/// Default scorer: the number of satisfied conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatisfiedCountScorer;

impl CompatibilityScorer for SatisfiedCountScorer {
    fn score(&self, conditions: &Conditions) -> Result<Weight> {
        Ok(conditions.satisfied() as Weight)
    }

    fn name(&self) -> &'static str {
        "SatisfiedCountScorer"
    }
}

/// Default selector: the first maximal-weight incident edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaviestEdgeSelector;

impl MatchSelector for HeaviestEdgeSelector {
    fn select(&self, incident: &[(EdgeId, Weight)]) -> Result<Option<EdgeId>> {
        let mut best: Option<(EdgeId, Weight)> = None;
        for &(edge, weight) in incident {
            // Strict comparison keeps the first maximal edge on ties
            if best.map_or(true, |(_, heaviest)| weight > heaviest) {
                best = Some((edge, weight));
            }
        }
        Ok(best.map(|(edge, _)| edge))
    }

    fn name(&self) -> &'static str {
        "HeaviestEdgeSelector"
    }
}

/// Composition of the four capability interfaces into one pair-evaluation
/// rule.
///
/// Each piece is independently replaceable through the `with_*` methods; the
/// untouched pieces keep their defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ruleset<XE, YE, C, A, S> {
    x_extractor: XE,
    y_extractor: YE,
    combiner: C,
    assessor: A,
    scorer: S,
}

/// The all-defaults ruleset: identity values, one equality condition,
/// any-condition match, satisfied-count score.
pub type DefaultRuleset =
    Ruleset<IdentityExtractor, IdentityExtractor, EqualityCombiner, AnyConditionAssessor, SatisfiedCountScorer>;

impl DefaultRuleset {
    /// Create the all-defaults ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<XE, YE, C, A, S> Ruleset<XE, YE, C, A, S> {
    /// Replace the x-side condition extractor.
    pub fn with_x_extractor<XE2>(self, x_extractor: XE2) -> Ruleset<XE2, YE, C, A, S> {
        Ruleset {
            x_extractor,
            y_extractor: self.y_extractor,
            combiner: self.combiner,
            assessor: self.assessor,
            scorer: self.scorer,
        }
    }

    /// Replace the y-side condition extractor.
    pub fn with_y_extractor<YE2>(self, y_extractor: YE2) -> Ruleset<XE, YE2, C, A, S> {
        Ruleset {
            x_extractor: self.x_extractor,
            y_extractor,
            combiner: self.combiner,
            assessor: self.assessor,
            scorer: self.scorer,
        }
    }

    /// Replace the condition combiner.
    pub fn with_combiner<C2>(self, combiner: C2) -> Ruleset<XE, YE, C2, A, S> {
        Ruleset {
            x_extractor: self.x_extractor,
            y_extractor: self.y_extractor,
            combiner,
            assessor: self.assessor,
            scorer: self.scorer,
        }
    }

    /// Replace the match assessor.
    pub fn with_assessor<A2>(self, assessor: A2) -> Ruleset<XE, YE, C, A2, S> {
        Ruleset {
            x_extractor: self.x_extractor,
            y_extractor: self.y_extractor,
            combiner: self.combiner,
            assessor,
            scorer: self.scorer,
        }
    }

    /// Replace the compatibility scorer.
    pub fn with_scorer<S2>(self, scorer: S2) -> Ruleset<XE, YE, C, A, S2> {
        Ruleset {
            x_extractor: self.x_extractor,
            y_extractor: self.y_extractor,
            combiner: self.combiner,
            assessor: self.assessor,
            scorer,
        }
    }
}

impl<X, Y, XE, YE, C, A, S> MatchRule<X, Y> for Ruleset<XE, YE, C, A, S>
where
    XE: ConditionExtractor<X>,
    YE: ConditionExtractor<Y>,
    C: ConditionCombiner<XE::Value, YE::Value>,
    A: MatchAssessor,
    S: CompatibilityScorer,
{
    fn evaluate(&self, x: &X, y: &Y) -> Result<PairAssessment> {
        let x_value = self.x_extractor.extract(x)?;
        let y_value = self.y_extractor.extract(y)?;
        let conditions = self.combiner.combine(&x_value, &y_value)?;
        let is_match = self.assessor.assess(&conditions)?;
        let compatibility = self.scorer.score(&conditions)?;
        Ok(PairAssessment::new(is_match, compatibility))
    }

    fn name(&self) -> &'static str {
        "Ruleset"
    }
}
