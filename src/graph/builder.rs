//! Construction pipeline for [`MatchingGraph`].
//!
//! A build runs three sequential phases inside [`GraphBuilder::build`], with
//! no loops back: vertex initialization, all-pairs edge construction, and
//! per-vertex match selection. The first failing caller-supplied callable
//! aborts the build.

use std::fmt;

use crate::error::Result;
use crate::matching::{DefaultRuleset, HeaviestEdgeSelector, MatchRule, MatchSelector};

use super::vertex::{Side, Vertex, VertexId};
use super::{MatchingGraph, Weight};

/// One side's input: the items plus the factory that turns each item into a
/// vertex payload.
///
/// The factory is the per-side extension point for payload derivation. It
/// runs once per item during phase 1, in input order; its errors abort the
/// build as [`Configuration`](crate::MatchGraphError::Configuration) errors.
pub struct SideInit<I, P> {
    items: Vec<I>,
    factory: Box<dyn Fn(I) -> Result<P>>,
}

impl<I> SideInit<I, I> {
    /// Items become vertex payloads unchanged.
    pub fn from_items(items: impl IntoIterator<Item = I>) -> Self {
        Self {
            items: items.into_iter().collect(),
            factory: Box::new(|item| Ok(item)),
        }
    }
}

impl<I, P> SideInit<I, P> {
    /// Each item passes through `factory` to produce its vertex payload.
    pub fn with_factory<F>(items: impl IntoIterator<Item = I>, factory: F) -> Self
    where
        F: Fn(I) -> Result<P> + 'static,
    {
        Self {
            items: items.into_iter().collect(),
            factory: Box::new(factory),
        }
    }

    /// Like [`with_factory`](Self::with_factory), with an extras value
    /// threaded into every factory call.
    ///
    /// `extras` typically maps item keys to additional payload fields the
    /// items themselves do not carry.
    pub fn with_extras<M, F>(items: impl IntoIterator<Item = I>, extras: M, factory: F) -> Self
    where
        M: 'static,
        F: Fn(I, &M) -> Result<P> + 'static,
    {
        Self {
            items: items.into_iter().collect(),
            factory: Box::new(move |item| factory(item, &extras)),
        }
    }

    /// Number of input items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the side has no input items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run every item through the factory, in input order.
    fn into_vertices(self) -> Result<Vec<Vertex<P>>> {
        let factory = self.factory;
        self.items
            .into_iter()
            .map(|item| Ok(Vertex::new(factory(item)?)))
            .collect()
    }
}

impl<I, P> fmt::Debug for SideInit<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideInit")
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

/// Produces the payload attached to each accepted edge.
///
/// The factory receives exactly the arguments edge construction itself gets:
/// the endpoint pair and the proposed weight. Errors abort the build as
/// [`Configuration`](crate::MatchGraphError::Configuration) errors.
pub trait EdgeFactory {
    /// The payload type attached to every edge.
    type Payload;

    /// Produce the payload for one accepted edge.
    fn create(&self, vertex_1: VertexId, vertex_2: VertexId, weight: Weight)
        -> Result<Self::Payload>;

    /// Name of this factory for logging/debugging.
    fn name(&self) -> &'static str {
        "EdgeFactory"
    }
}

/// Default factory: edges carry no payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitEdgeFactory;

impl EdgeFactory for UnitEdgeFactory {
    type Payload = ();

    fn create(&self, _vertex_1: VertexId, _vertex_2: VertexId, _weight: Weight) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "UnitEdgeFactory"
    }
}

/// Builder carrying the injection points of the matching pipeline.
///
/// Defaults: the all-defaults [`DefaultRuleset`], the
/// [`HeaviestEdgeSelector`], payload-free edges, and the x set as primary
/// side.
#[derive(Debug, Clone)]
#[must_use]
pub struct GraphBuilder<R = DefaultRuleset, S = HeaviestEdgeSelector, F = UnitEdgeFactory> {
    rule: R,
    selector: S,
    edge_factory: F,
    according_to_x_set: bool,
}

impl GraphBuilder {
    /// Create a builder with every default in place.
    pub fn new() -> Self {
        Self {
            rule: DefaultRuleset::new(),
            selector: HeaviestEdgeSelector,
            edge_factory: UnitEdgeFactory,
            according_to_x_set: true,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, S, F> GraphBuilder<R, S, F> {
    /// Replace the pair-evaluation rule.
    pub fn rule<R2>(self, rule: R2) -> GraphBuilder<R2, S, F> {
        GraphBuilder {
            rule,
            selector: self.selector,
            edge_factory: self.edge_factory,
            according_to_x_set: self.according_to_x_set,
        }
    }

    /// Replace the match selector.
    pub fn selector<S2>(self, selector: S2) -> GraphBuilder<R, S2, F> {
        GraphBuilder {
            rule: self.rule,
            selector,
            edge_factory: self.edge_factory,
            according_to_x_set: self.according_to_x_set,
        }
    }

    /// Replace the edge payload factory.
    pub fn edge_factory<F2>(self, edge_factory: F2) -> GraphBuilder<R, S, F2> {
        GraphBuilder {
            rule: self.rule,
            selector: self.selector,
            edge_factory,
            according_to_x_set: self.according_to_x_set,
        }
    }

    /// Choose the primary side: the x set when `flag` is true, the y set
    /// otherwise.
    ///
    /// The flag fixes which side match selection iterates and the pair
    /// evaluation order during edge construction; it never changes which
    /// edges exist.
    pub const fn according_to_x_set(mut self, flag: bool) -> Self {
        self.according_to_x_set = flag;
        self
    }

    /// Run the three construction phases and return the finished graph.
    ///
    /// # Errors
    ///
    /// Propagates the first vertex/edge factory failure
    /// ([`Configuration`](crate::MatchGraphError::Configuration)) or rule /
    /// selector failure ([`Predicate`](crate::MatchGraphError::Predicate)).
    /// No partially built graph escapes.
    pub fn build<IX, X, IY, Y>(
        self,
        x_init: SideInit<IX, X>,
        y_init: SideInit<IY, Y>,
    ) -> Result<MatchingGraph<X, Y, F::Payload>>
    where
        R: MatchRule<X, Y>,
        S: MatchSelector,
        F: EdgeFactory,
    {
        let mut graph = MatchingGraph {
            x_vertices: Vec::new(),
            y_vertices: Vec::new(),
            edges: Vec::new(),
            matches: Vec::new(),
            according_to_x_set: self.according_to_x_set,
        };
        graph.initialize_vertices(x_init, y_init)?;
        graph.build_edges(&self.rule, &self.edge_factory)?;
        graph.select_matches(&self.selector)?;
        Ok(graph)
    }
}

impl<X, Y, E> MatchingGraph<X, Y, E> {
    /// Phase 1: run each side's items through its factory, in input order.
    fn initialize_vertices<IX, IY>(
        &mut self,
        x_init: SideInit<IX, X>,
        y_init: SideInit<IY, Y>,
    ) -> Result<()> {
        self.x_vertices = x_init.into_vertices()?;
        self.y_vertices = y_init.into_vertices()?;
        tracing::debug!(
            x_vertices = self.x_vertices.len(),
            y_vertices = self.y_vertices.len(),
            "initialized vertex arenas"
        );
        Ok(())
    }

    /// Phase 2: evaluate every (x, y) combination through the rule.
    ///
    /// The outer loop runs over the non-primary side; the order affects only
    /// edge insertion order, never which pairs receive an edge.
    fn build_edges<R, F>(&mut self, rule: &R, factory: &F) -> Result<()>
    where
        R: MatchRule<X, Y>,
        F: EdgeFactory<Payload = E>,
    {
        let x_len = self.x_vertices.len();
        let y_len = self.y_vertices.len();

        if self.according_to_x_set {
            for y in 0..y_len {
                for x in 0..x_len {
                    self.consider_pair(rule, factory, x, y)?;
                }
            }
        } else {
            for x in 0..x_len {
                for y in 0..y_len {
                    self.consider_pair(rule, factory, x, y)?;
                }
            }
        }

        tracing::debug!(
            edges = self.edges.len(),
            rule = rule.name(),
            "built bipartite edge set"
        );
        Ok(())
    }

    /// Evaluate one pair, constructing its edge if the rule accepts it.
    fn consider_pair<R, F>(&mut self, rule: &R, factory: &F, x: usize, y: usize) -> Result<()>
    where
        R: MatchRule<X, Y>,
        F: EdgeFactory<Payload = E>,
    {
        let assessment = rule.evaluate(self.x_vertices[x].item(), self.y_vertices[y].item())?;
        if assessment.is_match {
            let vertex_1 = VertexId::x(x);
            let vertex_2 = VertexId::y(y);
            let payload = factory.create(vertex_1, vertex_2, assessment.compatibility)?;
            let edge =
                self.add_edge_with_payload(vertex_1, vertex_2, assessment.compatibility, payload);
            tracing::trace!(
                x,
                y,
                edge = edge.index(),
                compatibility = assessment.compatibility,
                "accepted pair"
            );
        }
        Ok(())
    }

    /// Phase 3: visit the primary side in construction order and record each
    /// vertex's selected edge. Isolated vertices contribute nothing.
    fn select_matches<S: MatchSelector>(&mut self, selector: &S) -> Result<()> {
        let primary = self.primary_side();
        let count = match primary {
            Side::X => self.x_vertices.len(),
            Side::Y => self.y_vertices.len(),
        };

        for index in 0..count {
            let incident = self.incident_weights(VertexId::new(primary, index));
            if let Some(edge) = selector.select(&incident)? {
                self.matches.push(edge);
            }
        }

        tracing::debug!(
            matches = self.matches.len(),
            selector = selector.name(),
            "selected per-vertex matches"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchGraphError;

    #[test]
    fn test_side_init_identity() {
        let init = SideInit::from_items(vec![1, 2, 3]);
        assert_eq!(init.len(), 3);
        assert!(!init.is_empty());

        let vertices = init.into_vertices().expect("identity factory succeeds");
        let items: Vec<i32> = vertices.iter().map(|v| *v.item()).collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_side_init_factory_transforms_items() {
        let init = SideInit::with_factory(vec!["a", "bb"], |s: &str| Ok(s.len()));
        let vertices = init.into_vertices().expect("factory succeeds");
        let items: Vec<usize> = vertices.iter().map(|v| *v.item()).collect();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_side_init_factory_error_propagates() {
        let init = SideInit::with_factory(vec![1, -1], |n: i32| {
            if n < 0 {
                Err(MatchGraphError::configuration("negative item"))
            } else {
                Ok(n)
            }
        });
        let err = init.into_vertices().unwrap_err();
        assert!(matches!(err, MatchGraphError::Configuration { .. }));
    }

    #[test]
    fn test_side_init_extras_threaded_into_every_call() {
        let extras = vec![10, 20, 30];
        let init = SideInit::with_extras(vec![0usize, 2], extras, |index, extras: &Vec<i32>| {
            extras
                .get(index)
                .copied()
                .ok_or_else(|| MatchGraphError::configuration(format!("no extra for item {index}")))
        });
        let vertices = init.into_vertices().expect("extras factory succeeds");
        let items: Vec<i32> = vertices.iter().map(|v| *v.item()).collect();
        assert_eq!(items, vec![10, 30]);
    }

    #[test]
    fn test_unit_edge_factory_is_infallible() {
        UnitEdgeFactory
            .create(VertexId::x(0), VertexId::y(0), 1)
            .expect("unit factory succeeds");
    }

    #[test]
    fn test_builder_defaults() {
        let builder = GraphBuilder::new();
        assert!(builder.according_to_x_set);
    }
}
