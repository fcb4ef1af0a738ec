//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; trait objects work too for dynamic composition.

use crate::error::Result;
use crate::graph::csr::CsrGraph;
use crate::graph::dedup::dedup_edges;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{Edge, RankConfig};

// ============================================================================
// EdgeCanonicalizer: sort + dedup (stage 1)
// ============================================================================

/// Turns raw edges into the canonical sequence the CSR builder expects.
///
/// # Contract
///
/// - **Output order**: ascending by `(source, destination)`.
/// - **Uniqueness**: at most one edge per `(source, destination)` pair.
/// - **Idempotent**: canonicalizing canonical output changes nothing.
pub trait EdgeCanonicalizer {
    fn canonicalize(&self, edges: Vec<Edge>) -> Vec<Edge>;
}

/// Keeps the heaviest edge of each parallel group and drops zero weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxWeightDedup;

impl EdgeCanonicalizer for MaxWeightDedup {
    #[inline]
    fn canonicalize(&self, edges: Vec<Edge>) -> Vec<Edge> {
        dedup_edges(edges)
    }
}

// ============================================================================
// CsrBuilder: canonical edges → CSR (stage 2)
// ============================================================================

/// Builds the CSR graph from canonical edges.
pub trait CsrBuilder {
    fn build(&self, edges: &[Edge], num_vertices: usize) -> Result<CsrGraph>;
}

/// Single linear sweep over already-validated edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepCsrBuilder;

impl CsrBuilder for SweepCsrBuilder {
    #[inline]
    fn build(&self, edges: &[Edge], num_vertices: usize) -> Result<CsrGraph> {
        Ok(CsrGraph::from_sorted_edges(edges, num_vertices))
    }
}

/// Re-checks canonical order and vertex ranges before building.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedCsrBuilder;

impl CsrBuilder for CheckedCsrBuilder {
    fn build(&self, edges: &[Edge], num_vertices: usize) -> Result<CsrGraph> {
        CsrGraph::build(edges, num_vertices)
    }
}

// ============================================================================
// Ranker: CSR → rank vector (stage 3)
// ============================================================================

/// Computes ranks over a built graph.
///
/// The result may be unconverged (`converged == false`); the pipeline turns
/// that into [`GraphError::NonConvergence`](crate::GraphError) and only
/// attaches converged ranks to the graph.
pub trait Ranker {
    fn rank(&self, graph: &CsrGraph, cfg: &RankConfig) -> Result<PageRankResult>;
}

/// Weighted PageRank configured from the run's [`RankConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRankRanker;

impl Ranker for PageRankRanker {
    fn rank(&self, graph: &CsrGraph, cfg: &RankConfig) -> Result<PageRankResult> {
        StandardPageRank::from_config(cfg).run(graph)
    }
}
