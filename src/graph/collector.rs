//! Edge collector
//!
//! Accumulates raw `(source, destination, weight)` triples as they arrive
//! from an external source. No ordering, deduplication or validation
//! happens here; that is the job of later stages.

use crate::types::{Edge, EdgeBatch, VertexId, Weight};

/// Upper bound on the buffer pre-sized from a declared edge count.
const PRESIZE_LIMIT: usize = 1 << 16;

/// Accumulates raw edges for a graph with a known vertex count.
#[derive(Debug, Clone, Default)]
pub struct EdgeCollector {
    num_vertices: usize,
    declared_edges: Option<usize>,
    edges: Vec<Edge>,
}

impl EdgeCollector {
    /// Create an empty collector for `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            declared_edges: None,
            edges: Vec::new(),
        }
    }

    /// Create a collector with a declared edge count.
    ///
    /// The declared count is carried into the resulting [`EdgeBatch`] for
    /// validation. It is advisory only: the buffer is pre-sized to at most
    /// 65536 edges and grows from there.
    pub fn with_declared(num_vertices: usize, declared_edges: usize) -> Self {
        Self {
            num_vertices,
            declared_edges: Some(declared_edges),
            edges: Vec::with_capacity(declared_edges.min(PRESIZE_LIMIT)),
        }
    }

    /// Record one edge.
    pub fn push(&mut self, source: VertexId, destination: VertexId, weight: Weight) {
        self.edges.push(Edge::new(source, destination, weight));
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of raw edges collected so far (duplicates included).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Raw edges in arrival order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Hand the collected edges to the next stage.
    ///
    /// Without a declared count the batch declares exactly what was
    /// collected.
    pub fn finish(self) -> EdgeBatch {
        let declared_edges = self.declared_edges.unwrap_or(self.edges.len());
        EdgeBatch {
            num_vertices: self.num_vertices,
            declared_edges,
            edges: self.edges,
        }
    }
}

impl Extend<Edge> for EdgeCollector {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl Extend<(VertexId, VertexId, Weight)> for EdgeCollector {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId, Weight)>>(&mut self, iter: I) {
        self.edges.extend(iter.into_iter().map(Edge::from));
    }
}
