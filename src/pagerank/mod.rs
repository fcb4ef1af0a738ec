//! PageRank algorithms
//!
//! This module provides the rank vector type and the weighted PageRank
//! solver that produces it.

pub mod standard;

use serde::Serialize;

use crate::types::VertexId;

/// Per-vertex ranks indexed by one-based [`VertexId`].
///
/// Slot 0 is a sentinel fixed at `0.0`. After a completed run the entries
/// for `1..=n` sum to `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankVector {
    values: Vec<f64>,
}

impl RankVector {
    /// All-zero ranks for `num_vertices` vertices.
    pub fn zeroed(num_vertices: usize) -> Self {
        Self {
            values: vec![0.0; num_vertices + 1],
        }
    }

    /// Every vertex at `1 / num_vertices`.
    pub fn uniform(num_vertices: usize) -> Self {
        let mut ranks = Self::zeroed(num_vertices);
        if num_vertices > 0 {
            let initial = 1.0 / num_vertices as f64;
            ranks.values[1..].fill(initial);
        }
        ranks
    }

    /// Wrap a raw buffer whose slot 0 is the sentinel.
    pub(crate) fn from_raw(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            values.push(0.0);
        }
        values[0] = 0.0;
        Self { values }
    }

    /// Rank of `vertex`, or `0.0` for ids outside the vector.
    pub fn get(&self, vertex: VertexId) -> f64 {
        match vertex as usize {
            0 => 0.0,
            v => self.values.get(v).copied().unwrap_or(0.0),
        }
    }

    /// Number of vertices (sentinel excluded).
    pub fn len(&self) -> usize {
        self.values.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ranks for vertices `1..=n`, in id order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[1..]
    }

    /// Iterate over `(vertex, rank)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(i, &r)| (i as VertexId + 1, r))
    }

    pub fn sum(&self) -> f64 {
        self.as_slice().iter().sum()
    }

    /// Scale so the entries sum to one. No-op when the sum is not positive.
    pub(crate) fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            for rank in &mut self.values[1..] {
                *rank /= sum;
            }
        }
    }

    /// Highest-ranked vertices first; ties go to the lower id.
    pub fn top_n(&self, n: usize) -> Vec<(VertexId, f64)> {
        let mut indexed: Vec<_> = self.iter().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }
}

impl Default for RankVector {
    fn default() -> Self {
        Self::zeroed(0)
    }
}

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Normalized ranks for each vertex
    pub scores: RankVector,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Maximum per-vertex change in the final sweep
    pub delta: f64,
    /// Whether the tolerance test passed within the iteration cap
    pub converged: bool,
    /// Vertices skipped because their out-weight summed to zero
    pub degenerate: Vec<VertexId>,
}

impl PageRankResult {
    pub fn new(scores: RankVector, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
            degenerate: Vec::new(),
        }
    }

    /// Get top N vertices by rank
    pub fn top_n(&self, n: usize) -> Vec<(VertexId, f64)> {
        self.scores.top_n(n)
    }

    /// Get the rank of a specific vertex
    pub fn score(&self, vertex: VertexId) -> f64 {
        self.scores.get(vertex)
    }
}
