//! The bipartite matching graph: vertex/edge arenas, the construction
//! pipeline, and the greedy per-vertex match selection.
//!
//! A [`MatchingGraph`] is built in one pass through [`GraphBuilder::build`]
//! (or the all-defaults [`MatchingGraph::from_sets`]) and is read-only
//! afterwards, apart from [`Edge::add_weight`] and [`Vertex::add_neighbor`],
//! which exist on the arena types but are not exercised by the pipeline.
//! Construction cost is dominated by the all-pairs evaluation: O(|X|·|Y|)
//! time and edge storage.

mod builder;
mod edge;
mod vertex;

pub use builder::{EdgeFactory, GraphBuilder, SideInit, UnitEdgeFactory};
pub use edge::{Edge, EdgeId, Weight};
pub use vertex::{Side, Vertex, VertexId};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A weighted bipartite graph between two item sets, with a greedy
/// heaviest-edge match recorded per primary-side vertex.
///
/// `X` and `Y` are the per-side vertex payload types; `E` is the optional
/// edge payload (see [`EdgeFactory`]), `()` by default.
///
/// The match set is a local, per-vertex selection: several primary vertices
/// may claim the same opposite vertex, so `matches` is not a one-to-one
/// matching.
#[derive(Debug, Clone)]
pub struct MatchingGraph<X, Y, E = ()> {
    x_vertices: Vec<Vertex<X>>,
    y_vertices: Vec<Vertex<Y>>,
    edges: Vec<Edge<E>>,
    matches: Vec<EdgeId>,
    according_to_x_set: bool,
}

impl<X, Y, E> MatchingGraph<X, Y, E> {
    /// X-side vertices, in input order.
    pub fn x_vertices(&self) -> &[Vertex<X>] {
        &self.x_vertices
    }

    /// Y-side vertices, in input order.
    pub fn y_vertices(&self) -> &[Vertex<Y>] {
        &self.y_vertices
    }

    /// Every constructed edge, in pair-evaluation order.
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.index())
    }

    /// Mutable access to an edge, for [`Edge::add_weight`].
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(id.index())
    }

    /// Ids of the selected matches, in primary-side iteration order.
    pub fn match_ids(&self) -> &[EdgeId] {
        &self.matches
    }

    /// The selected match edges, in primary-side iteration order.
    pub fn matches(&self) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.matches.iter().map(|id| &self.edges[id.index()])
    }

    /// Whether the x set is the primary side.
    #[must_use]
    pub const fn according_to_x_set(&self) -> bool {
        self.according_to_x_set
    }

    /// The side match selection iterates.
    #[must_use]
    pub const fn primary_side(&self) -> Side {
        if self.according_to_x_set {
            Side::X
        } else {
            Side::Y
        }
    }

    /// Adjacent vertices of `id`, in registration order.
    pub fn neighbors_of(&self, id: VertexId) -> &[VertexId] {
        match id.side {
            Side::X => self.x_vertices[id.index].neighbors(),
            Side::Y => self.y_vertices[id.index].neighbors(),
        }
    }

    /// Incident edge ids of `id`, in registration order.
    pub fn edges_of(&self, id: VertexId) -> &[EdgeId] {
        match id.side {
            Side::X => self.x_vertices[id.index].edges(),
            Side::Y => self.y_vertices[id.index].edges(),
        }
    }

    /// Id of the first maximal-weight edge incident to `id`, or `None` for
    /// an isolated vertex.
    #[must_use]
    pub fn heaviest_edge_id(&self, id: VertexId) -> Option<EdgeId> {
        let mut best: Option<(EdgeId, Weight)> = None;
        for &edge in self.edges_of(id) {
            let weight = self.edges[edge.index()].weight();
            if best.map_or(true, |(_, heaviest)| weight > heaviest) {
                best = Some((edge, weight));
            }
        }
        best.map(|(edge, _)| edge)
    }

    /// The first maximal-weight edge incident to `id`, or `None` for an
    /// isolated vertex.
    #[must_use]
    pub fn heaviest_edge(&self, id: VertexId) -> Option<&Edge<E>> {
        self.heaviest_edge_id(id).map(|e| &self.edges[e.index()])
    }

    /// Append a payload-carrying edge and register it on both endpoints.
    ///
    /// The registration is symmetric: both vertices gain an adjacency entry.
    /// The supplied weight is subject to the initial-weight contract of
    /// [`Edge::new`].
    pub fn add_edge_with_payload(
        &mut self,
        vertex_1: VertexId,
        vertex_2: VertexId,
        weight: Weight,
        payload: E,
    ) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges
            .push(Edge::with_payload(vertex_1, vertex_2, weight, payload));
        self.register_incident(vertex_1, vertex_2, id);
        self.register_incident(vertex_2, vertex_1, id);
        id
    }

    fn register_incident(&mut self, at: VertexId, other: VertexId, edge: EdgeId) {
        match at.side {
            Side::X => self.x_vertices[at.index].add_neighbor(other, edge),
            Side::Y => self.y_vertices[at.index].add_neighbor(other, edge),
        }
    }

    /// Incident edges of `id` with their current weights, in adjacency order.
    pub(crate) fn incident_weights(&self, id: VertexId) -> Vec<(EdgeId, Weight)> {
        self.edges_of(id)
            .iter()
            .map(|&e| (e, self.edges[e.index()].weight()))
            .collect()
    }

    /// Distinct edge weights, in first-occurrence order.
    #[must_use]
    pub fn unique_weights(&self) -> IndexSet<Weight> {
        self.edges.iter().map(Edge::weight).collect()
    }

    /// X-side endpoints of the selected matches, in match order.
    ///
    /// May repeat a vertex when the y set is primary and several y vertices
    /// claim the same x vertex.
    pub fn matched_x_vertices(&self) -> Vec<&Vertex<X>> {
        self.matches()
            .filter_map(|edge| edge.endpoint_on(Side::X))
            .map(|id| &self.x_vertices[id.index])
            .collect()
    }

    /// Y-side endpoints of the selected matches, in match order.
    ///
    /// May repeat a vertex when the x set is primary and several x vertices
    /// claim the same y vertex.
    pub fn matched_y_vertices(&self) -> Vec<&Vertex<Y>> {
        self.matches()
            .filter_map(|edge| edge.endpoint_on(Side::Y))
            .map(|id| &self.y_vertices[id.index])
            .collect()
    }
}

impl<X: PartialEq, Y, E> MatchingGraph<X, Y, E> {
    /// X-side vertices no selected match touches, in construction order.
    ///
    /// Membership is decided by item equality, like every vertex comparison.
    pub fn unmatched_x_vertices(&self) -> Vec<&Vertex<X>> {
        let matched = self.matched_x_vertices();
        self.x_vertices
            .iter()
            .filter(|vertex| !matched.contains(vertex))
            .collect()
    }
}

impl<X, Y: PartialEq, E> MatchingGraph<X, Y, E> {
    /// Y-side vertices no selected match touches, in construction order.
    ///
    /// Membership is decided by item equality, like every vertex comparison.
    pub fn unmatched_y_vertices(&self) -> Vec<&Vertex<Y>> {
        let matched = self.matched_y_vertices();
        self.y_vertices
            .iter()
            .filter(|vertex| !matched.contains(vertex))
            .collect()
    }
}

impl<X, Y> MatchingGraph<X, Y> {
    /// Append a payload-free edge and register it on both endpoints.
    pub fn add_edge(&mut self, vertex_1: VertexId, vertex_2: VertexId, weight: Weight) -> EdgeId {
        self.add_edge_with_payload(vertex_1, vertex_2, weight, ())
    }
}

impl<X, Y> MatchingGraph<X, Y>
where
    X: Clone + PartialEq<Y>,
    Y: Clone,
{
    /// All-defaults construction: items compared for equality, payload-free
    /// edges, the x set primary.
    ///
    /// # Errors
    ///
    /// Infallible with the default rule in practice; kept fallible for
    /// signature parity with [`GraphBuilder::build`].
    pub fn from_sets(
        x_items: impl IntoIterator<Item = X>,
        y_items: impl IntoIterator<Item = Y>,
    ) -> Result<Self> {
        GraphBuilder::new().build(SideInit::from_items(x_items), SideInit::from_items(y_items))
    }
}

/// Serializable roll-up of a built graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSummary {
    /// Number of x-side vertices.
    pub x_vertices: usize,
    /// Number of y-side vertices.
    pub y_vertices: usize,
    /// Number of constructed edges.
    pub edges: usize,
    /// Number of selected matches.
    pub matches: usize,
    /// X-side vertices touched by a match.
    pub matched_x_vertices: usize,
    /// X-side vertices no match touches.
    pub unmatched_x_vertices: usize,
    /// Y-side vertices touched by a match.
    pub matched_y_vertices: usize,
    /// Y-side vertices no match touches.
    pub unmatched_y_vertices: usize,
    /// Distinct edge weights, in first-occurrence order.
    pub unique_weights: Vec<Weight>,
}

impl MatchingSummary {
    /// Summarize a built graph.
    #[must_use]
    pub fn from_graph<X: PartialEq, Y: PartialEq, E>(graph: &MatchingGraph<X, Y, E>) -> Self {
        Self {
            x_vertices: graph.x_vertices().len(),
            y_vertices: graph.y_vertices().len(),
            edges: graph.edges().len(),
            matches: graph.match_ids().len(),
            matched_x_vertices: graph.matched_x_vertices().len(),
            unmatched_x_vertices: graph.unmatched_x_vertices().len(),
            matched_y_vertices: graph.matched_y_vertices().len(),
            unmatched_y_vertices: graph.unmatched_y_vertices().len(),
            unique_weights: graph.unique_weights().into_iter().collect(),
        }
    }
}
