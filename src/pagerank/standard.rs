//! Weighted PageRank
//!
//! Power iteration where each vertex splits its damped rank across its
//! out-edges in proportion to edge weight. Every vertex is seeded with the
//! teleport share `(1 - d) / n` each sweep. Sinks redistribute nothing; the
//! mass they hold is recovered by the final renormalization.

use super::{PageRankResult, RankVector};
use crate::error::{GraphError, Result};
use crate::graph::csr::CsrGraph;
use crate::types::{DegeneratePolicy, RankConfig, VertexId};

/// Standard weighted PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the maximum per-vertex change
    pub threshold: f64,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &RankConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            threshold: cfg.tolerance,
            degenerate_policy: cfg.degenerate_policy,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.threshold = tolerance;
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    fn check_params(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(GraphError::InvalidParameter(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "threshold must be finite and positive, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(GraphError::InvalidParameter(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Run PageRank on a graph
    ///
    /// Returns the last computed vector even if convergence wasn't
    /// achieved, with `converged=false`. Use [`StandardPageRank::solve`] to
    /// treat non-convergence as an error.
    pub fn run(&self, graph: &CsrGraph) -> Result<PageRankResult> {
        self.check_params()?;

        let n = graph.num_vertices();
        if n == 0 {
            return Ok(PageRankResult::new(RankVector::default(), 0, 0.0, true));
        }

        let degenerate = graph.degenerate_vertices();
        if let Some(&vertex) = degenerate.first() {
            if self.degenerate_policy == DegeneratePolicy::Reject {
                return Err(GraphError::DegenerateVertex { vertex });
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(
                count = degenerate.len(),
                first = vertex,
                "skipping vertices with zero total out-weight"
            );
        }

        // Slot 0 stays at zero in both buffers.
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n + 1];
        scores[0] = 0.0;
        let mut new_scores = vec![0.0; n + 1];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            new_scores.fill(teleport);
            new_scores[0] = 0.0;

            // Propagate scores through edges
            for vertex in 1..=n {
                let total_weight = graph.out_weight(vertex as VertexId);
                if total_weight == 0 {
                    continue;
                }
                let share = self.damping * scores[vertex] / total_weight as f64;
                for (neighbor, weight) in graph.neighbors(vertex as VertexId) {
                    new_scores[neighbor as usize] += share * weight as f64;
                }
            }

            // Largest per-vertex change (L-infinity)
            delta = scores[1..]
                .iter()
                .zip(&new_scores[1..])
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let mut ranks = RankVector::from_raw(scores);
        ranks.normalize();

        let converged = delta <= self.threshold;
        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = n, iterations, delta, converged, "pagerank finished");

        let mut result = PageRankResult::new(ranks, iterations, delta, converged);
        result.degenerate = degenerate;
        Ok(result)
    }

    /// Run PageRank and attach the ranks to `graph`.
    ///
    /// Hitting the iteration cap is reported as
    /// [`GraphError::NonConvergence`], which carries the best-effort vector;
    /// the graph's rank slot is left untouched in that case.
    pub fn solve(&self, graph: &mut CsrGraph) -> Result<PageRankResult> {
        let result = self.run(graph)?;
        if !result.converged {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank hit the iteration cap"
            );
            return Err(GraphError::NonConvergence {
                iterations: result.iterations,
                delta: result.delta,
                ranks: result.scores,
            });
        }
        graph.attach_ranks(result.scores.clone());
        Ok(result)
    }
}
