//! Core data model: vertices, weighted edges, ingest batches and solver
//! configuration.

use serde::{Deserialize, Serialize};

/// One-based vertex identifier in `[1, num_vertices]`.
pub type VertexId = u32;

/// Largest vertex count a graph can hold: every id must fit a [`VertexId`].
pub const MAX_VERTICES: usize = VertexId::MAX as usize;

/// Non-negative edge weight. Zero means "no edge".
pub type Weight = u64;

/// A directed, weighted edge.
///
/// The derived ordering is lexicographic on `(source, destination, weight)`,
/// which is the canonical order produced by the deduplicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The `(source, destination)` pair identifying this edge.
    #[inline]
    pub fn key(&self) -> (VertexId, VertexId) {
        (self.source, self.destination)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((source, destination, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// Raw edges plus the counts declared by whoever produced them.
///
/// `declared_edges` is advisory: the true edge count is whatever survives
/// deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBatch {
    pub num_vertices: usize,
    pub declared_edges: usize,
    pub edges: Vec<Edge>,
}

impl EdgeBatch {
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> Self {
        let declared_edges = edges.len();
        Self {
            num_vertices,
            declared_edges,
            edges,
        }
    }

    /// Largest vertex id referenced by any edge, if there are edges.
    pub fn max_vertex(&self) -> Option<VertexId> {
        self.edges
            .iter()
            .map(|e| e.source.max(e.destination))
            .max()
    }
}

/// What the solver does with a vertex that has outgoing edges but zero
/// total out-weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Treat it as a sink: it redistributes nothing. Reported as a warning.
    #[default]
    Skip,
    /// Fail with [`crate::GraphError::DegenerateVertex`] before iterating.
    Reject,
}

/// PageRank parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor (probability of following an edge).
    pub damping: f64,
    /// Convergence threshold on the maximum per-vertex change.
    pub tolerance: f64,
    /// Iteration cap; exceeding it is reported as non-convergence.
    pub max_iterations: usize,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-4,
            max_iterations: 100,
            degenerate_policy: DegeneratePolicy::Skip,
        }
    }
}
