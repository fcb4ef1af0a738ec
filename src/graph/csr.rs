//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over out-edges, which is exactly what
//! PageRank needs during power iteration.
//!
//! Vertex ids are one-based, so every array carries a leading sentinel:
//! `row_ptr[0] == 0`, `col_idx[0] == 0` and `weights[0] == 0`. The edges of
//! vertex `v` live at `row_ptr[v]..row_ptr[v + 1]`, and `row_ptr` has
//! `num_vertices + 2` entries.

use crate::error::{GraphError, Result};
use crate::graph::dedup::is_canonical;
use crate::pagerank::RankVector;
use crate::types::{Edge, VertexId, Weight, MAX_VERTICES};

/// A directed weighted graph in one-based CSR format.
///
/// The topology is fixed once built. The only mutable part is the attached
/// rank vector, which is written by the rank solver.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    num_vertices: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<VertexId>,
    weights: Vec<Weight>,
    /// Total outgoing weight per vertex (index 0 unused)
    out_weight: Vec<Weight>,
    ranks: Option<RankVector>,
}

impl CsrGraph {
    /// Build from a canonical edge list in a single sweep.
    ///
    /// `edges` must be sorted by source (as produced by
    /// [`dedup_edges`](crate::graph::dedup::dedup_edges)) and every endpoint
    /// must lie in `[1, num_vertices]`, with `num_vertices` at most
    /// [`MAX_VERTICES`]. None of this is checked here; use
    /// [`CsrGraph::build`] for a validating constructor.
    pub fn from_sorted_edges(edges: &[Edge], num_vertices: usize) -> Self {
        debug_assert!(num_vertices <= MAX_VERTICES);
        let mut row_ptr = Vec::with_capacity(num_vertices + 2);
        let mut col_idx = Vec::with_capacity(edges.len() + 1);
        let mut weights = Vec::with_capacity(edges.len() + 1);

        row_ptr.push(0);
        col_idx.push(0);
        weights.push(0);

        // Open rows up to each edge's source, filling gaps left by vertices
        // without out-edges.
        let mut cursor: usize = 0;
        for edge in edges {
            while cursor < edge.source as usize {
                cursor += 1;
                row_ptr.push(col_idx.len());
            }
            col_idx.push(edge.destination);
            weights.push(edge.weight);
        }

        // Trailing rows, plus the end marker for the last vertex.
        while cursor <= num_vertices {
            cursor += 1;
            row_ptr.push(col_idx.len());
        }

        let mut graph = Self {
            num_vertices,
            row_ptr,
            col_idx,
            weights,
            out_weight: Vec::new(),
            ranks: None,
        };
        graph.out_weight = std::iter::once(0)
            .chain((1..=num_vertices as VertexId).map(|v| {
                graph
                    .neighbors(v)
                    .fold(0 as Weight, |acc, (_, w)| acc.saturating_add(w))
            }))
            .collect();
        graph
    }

    /// Build from a canonical edge list, rejecting input the sweep cannot
    /// handle: unsorted or duplicated pairs, zero weights, or endpoints
    /// outside `[1, num_vertices]`, or a vertex count beyond [`MAX_VERTICES`].
    pub fn build(edges: &[Edge], num_vertices: usize) -> Result<Self> {
        if num_vertices > MAX_VERTICES {
            return Err(GraphError::MalformedInput(format!(
                "vertex count {num_vertices} exceeds {MAX_VERTICES}"
            )));
        }
        if !is_canonical(edges) {
            return Err(GraphError::MalformedInput(
                "edges must be sorted, deduplicated and carry positive weights".into(),
            ));
        }
        if let Some(edge) = edges.iter().find(|e| {
            e.source == 0
                || e.destination == 0
                || e.source as usize > num_vertices
                || e.destination as usize > num_vertices
        }) {
            return Err(GraphError::MalformedInput(format!(
                "edge ({}, {}) references a vertex outside [1, {}]",
                edge.source, edge.destination, num_vertices
            )));
        }
        Ok(Self::from_sorted_edges(edges, num_vertices))
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of stored edges (sentinel excluded).
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// Row pointers, `num_vertices + 2` entries.
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Destination per edge slot, `num_edges + 1` entries.
    pub fn col_idx(&self) -> &[VertexId] {
        &self.col_idx
    }

    /// Weight per edge slot, `num_edges + 1` entries.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    #[inline]
    fn row_range(&self, vertex: VertexId) -> std::ops::Range<usize> {
        let v = vertex as usize;
        if v == 0 || v > self.num_vertices {
            return 0..0;
        }
        self.row_ptr[v]..self.row_ptr[v + 1]
    }

    /// Destinations of `vertex`'s out-edges, ascending.
    pub fn row(&self, vertex: VertexId) -> &[VertexId] {
        &self.col_idx[self.row_range(vertex)]
    }

    /// Iterate over `(destination, weight)` for each out-edge of `vertex`.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.row_range(vertex)
            .map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Iterate over every stored edge in CSR order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (1..=self.num_vertices as VertexId).flat_map(move |v| {
            self.neighbors(v)
                .map(move |(destination, weight)| Edge::new(v, destination, weight))
        })
    }

    /// Out-degree of `vertex`.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.row_range(vertex).len()
    }

    /// Total outgoing weight of `vertex`.
    pub fn out_weight(&self, vertex: VertexId) -> Weight {
        self.out_weight.get(vertex as usize).copied().unwrap_or(0)
    }

    /// Vertices with no outgoing edges.
    pub fn sinks(&self) -> Vec<VertexId> {
        (1..=self.num_vertices as VertexId)
            .filter(|&v| self.degree(v) == 0)
            .collect()
    }

    /// Vertices with outgoing edges whose weights sum to zero.
    pub fn degenerate_vertices(&self) -> Vec<VertexId> {
        (1..=self.num_vertices as VertexId)
            .filter(|&v| self.degree(v) > 0 && self.out_weight(v) == 0)
            .collect()
    }

    /// Ranks attached by the last successful solver run.
    pub fn ranks(&self) -> Option<&RankVector> {
        self.ranks.as_ref()
    }

    pub(crate) fn attach_ranks(&mut self, ranks: RankVector) {
        self.ranks = Some(ranks);
    }

    /// Verify the structural invariants of the CSR arrays.
    pub fn check_invariants(&self) -> Result<()> {
        let n = self.num_vertices;
        let m = self.num_edges();
        let fail = |msg: String| Err(GraphError::MalformedInput(msg));

        if self.row_ptr.len() != n + 2 {
            return fail(format!(
                "row_ptr has {} entries, expected {}",
                self.row_ptr.len(),
                n + 2
            ));
        }
        if self.weights.len() != self.col_idx.len() {
            return fail("col_idx and weights differ in length".into());
        }
        if self.row_ptr[0] != 0 {
            return fail("row_ptr[0] must be 0".into());
        }
        if let Some(i) = self.row_ptr.windows(2).position(|w| w[0] > w[1]) {
            return fail(format!("row_ptr decreases at index {}", i + 1));
        }
        if self.row_ptr[n + 1] != m + 1 {
            return fail(format!(
                "row_ptr ends at {}, expected {}",
                self.row_ptr[n + 1],
                m + 1
            ));
        }
        for v in 1..=n as VertexId {
            let row = self.row(v);
            if row.windows(2).any(|w| w[0] >= w[1]) {
                return fail(format!("row {v} is not strictly ascending"));
            }
            if let Some(&d) = row.iter().find(|&&d| d == 0 || d as usize > n) {
                return fail(format!("row {v} references vertex {d} outside [1, {n}]"));
            }
        }
        Ok(())
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::from_sorted_edges(&[], 0)
    }
}
