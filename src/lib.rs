//! **A pluggable greedy bipartite matching engine.**
//!
//! `bimatch` builds a weighted bipartite graph between two item sets and
//! selects, for each vertex on a designated side, the incident edge of
//! maximum weight as that vertex's match. It is a reusable building block:
//! callers supply the two collections, a pairwise compatibility rule, and
//! optionally custom payload derivation per side; the engine constructs the
//! full bipartite edge set, then greedily assigns each primary-side vertex
//! its heaviest edge.
//!
//! The selection is deliberately local: there is no Hungarian algorithm and
//! no augmenting-path search, and several primary vertices may claim the same
//! opposite vertex. The engine performs no I/O and spawns no threads; a built
//! graph is read-only and safe to share across threads.
//!
//! ## Core Concepts & Modules
//!
//! - **[`graph`]**: the [`MatchingGraph`] arena (vertices, edges, selected
//!   matches), its [`GraphBuilder`], and the per-side [`SideInit`] inputs.
//!   Adjacency is index-based: vertices reference each other through
//!   [`VertexId`]/[`EdgeId`] rather than shared pointers.
//! - **[`matching`]**: the pair-evaluation protocol. The capability
//!   interfaces ([`ConditionExtractor`], [`ConditionCombiner`],
//!   [`MatchAssessor`], [`CompatibilityScorer`]) compose into a [`Ruleset`];
//!   the [`MatchSelector`] governs which incident edge a primary vertex
//!   records.
//! - **[`error`]**: the [`MatchGraphError`] taxonomy. Construction is
//!   all-or-nothing; the first failing caller-supplied callable aborts it.
//!
//! ## Getting Started
//!
//! With every default in place, items match by equality:
//!
//! ```
//! use bimatch::MatchingGraph;
//!
//! # fn main() -> bimatch::Result<()> {
//! let graph = MatchingGraph::from_sets(vec!["a", "b"], vec!["a", "c"])?;
//!
//! assert_eq!(graph.edges().len(), 1);
//! assert_eq!(graph.matches().count(), 1);
//! assert_eq!(graph.unmatched_x_vertices().len(), 1); // "b" found no partner
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Rules
//!
//! Any subset of the evaluation steps can be replaced on a [`Ruleset`]:
//!
//! ```
//! use bimatch::{ConditionCombiner, Conditions, DefaultRuleset, GraphBuilder, Result, SideInit};
//!
//! /// Equality, exact first, then ASCII-case-insensitive.
//! struct CaseTolerant;
//!
//! impl ConditionCombiner<String, String> for CaseTolerant {
//!     fn combine(&self, x: &String, y: &String) -> Result<Conditions> {
//!         Ok(Conditions::new(vec![x == y, x.eq_ignore_ascii_case(y)]))
//!     }
//! }
//!
//! # fn main() -> bimatch::Result<()> {
//! let graph = GraphBuilder::new()
//!     .rule(DefaultRuleset::new().with_combiner(CaseTolerant))
//!     .build(
//!         SideInit::from_items(vec!["Serde".to_string()]),
//!         SideInit::from_items(vec!["serde".to_string()]),
//!     )?;
//!
//! assert_eq!(graph.edges().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cost
//!
//! Edge construction evaluates every (x, y) combination: O(|X|·|Y|) time and
//! edge storage. That is the dominant cost for large input sets; there is no
//! indexing shortcut in the engine itself.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Satisfied-condition counts cast into Weight are bounded by the number
    // of conditions a combiner emits
    clippy::cast_possible_wrap
)]

pub mod error;
pub mod graph;
pub mod matching;

// Re-export main types for convenience
pub use error::{ErrorContext, MatchGraphError, Result};
pub use graph::{
    Edge, EdgeFactory, EdgeId, GraphBuilder, MatchingGraph, MatchingSummary, Side, SideInit,
    UnitEdgeFactory, Vertex, VertexId, Weight,
};
pub use matching::{
    AnyConditionAssessor, CompatibilityScorer, ConditionCombiner, ConditionExtractor, Conditions,
    DefaultRuleset, EqualityCombiner, HeaviestEdgeSelector, IdentityExtractor, MatchAssessor,
    MatchRule, MatchSelector, PairAssessment, Ruleset, SatisfiedCountScorer,
};
