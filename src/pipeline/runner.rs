//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! Calling [`Pipeline::run`] executes them in order, handing each stage's
//! output to the next by value and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Validate the batch against the `PipelineSpec`
//! 2. Canonicalize (sort + dedup)
//! 3. Build the CSR graph
//! 4. Rank, then attach converged ranks to the graph
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its stage types; the zero-sized defaults add
//! zero bytes and zero runtime cost.

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::csr::CsrGraph;
use crate::pagerank::PageRankResult;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_BUILD,
    STAGE_CANONICALIZE, STAGE_RANK, STAGE_VALIDATE,
};
use crate::pipeline::spec::PipelineSpec;
use crate::pipeline::traits::{
    CsrBuilder, EdgeCanonicalizer, MaxWeightDedup, PageRankRanker, Ranker, SweepCsrBuilder,
};
use crate::pipeline::validation::{Finding, ValidationEngine, ValidationInput};
use crate::types::{EdgeBatch, VertexId};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Canon` | [`EdgeCanonicalizer`] | [`MaxWeightDedup`] |
/// | `Build` | [`CsrBuilder`] | [`SweepCsrBuilder`] |
/// | `Rnk` | [`Ranker`] | [`PageRankRanker`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Canon, Build, Rnk> {
    pub canonicalizer: Canon,
    pub builder: Build,
    pub ranker: Rnk,
}

/// Type alias for the default pipeline.
pub type BasePipeline = Pipeline<MaxWeightDedup, SweepCsrBuilder, PageRankRanker>;

impl BasePipeline {
    /// Max-weight dedup, single-sweep CSR build, weighted PageRank.
    pub fn base() -> Self {
        Pipeline {
            canonicalizer: MaxWeightDedup,
            builder: SweepCsrBuilder,
            ranker: PageRankRanker,
        }
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// The built graph with ranks attached.
    #[serde(skip)]
    pub graph: CsrGraph,
    pub iterations: usize,
    pub delta: f64,
    /// Vertices skipped by the solver for having zero out-weight.
    pub degenerate: Vec<VertexId>,
    /// Non-fatal validation findings.
    pub warnings: Vec<Finding>,
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Canon, Build, Rnk> Pipeline<Canon, Build, Rnk>
where
    Canon: EdgeCanonicalizer,
    Build: CsrBuilder,
    Rnk: Ranker,
{
    /// Execute the pipeline with the default validation rules.
    pub fn run(
        &self,
        batch: EdgeBatch,
        spec: &PipelineSpec,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput> {
        self.run_with_engine(batch, spec, &ValidationEngine::with_defaults(), observer)
    }

    /// Execute the pipeline, validating with a caller-supplied engine.
    ///
    /// Validation errors abort before any graph is built. A solver run
    /// that hits the iteration cap yields [`GraphError::NonConvergence`]
    /// with the best-effort ranks; in that case nothing is attached.
    pub fn run_with_engine(
        &self,
        batch: EdgeBatch,
        spec: &PipelineSpec,
        engine: &ValidationEngine,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput> {
        // Stage 0: Validate
        trace_stage!(STAGE_VALIDATE);
        observer.on_stage_start(STAGE_VALIDATE);
        let clock = StageClock::start();
        let warnings = engine
            .validate(&ValidationInput::new(spec, &batch))
            .into_result()?;
        #[cfg(feature = "tracing")]
        for warning in &warnings {
            tracing::warn!(%warning, "validation warning");
        }
        let report = StageReportBuilder::new(clock.elapsed())
            .vertices(batch.num_vertices)
            .edges(batch.edges.len())
            .build();
        observer.on_stage_end(STAGE_VALIDATE, &report);

        let EdgeBatch {
            num_vertices,
            edges,
            ..
        } = batch;

        // Stage 1: Canonicalize
        trace_stage!(STAGE_CANONICALIZE);
        observer.on_stage_start(STAGE_CANONICALIZE);
        let clock = StageClock::start();
        let edges = self.canonicalizer.canonicalize(edges);
        let report = StageReportBuilder::new(clock.elapsed())
            .edges(edges.len())
            .build();
        observer.on_stage_end(STAGE_CANONICALIZE, &report);
        observer.on_edges(&edges);

        // Stage 2: Build CSR
        trace_stage!(STAGE_BUILD);
        observer.on_stage_start(STAGE_BUILD);
        let clock = StageClock::start();
        let mut graph = self.builder.build(&edges, num_vertices)?;
        drop(edges);
        let report = StageReportBuilder::new(clock.elapsed())
            .vertices(graph.num_vertices())
            .edges(graph.num_edges())
            .build();
        observer.on_stage_end(STAGE_BUILD, &report);
        observer.on_graph(&graph);

        // Stage 3: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let result = self.ranker.rank(&graph, &spec.rank)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(result.iterations)
            .converged(result.converged)
            .residual(result.delta)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&result);

        let PageRankResult {
            scores,
            iterations,
            delta,
            converged,
            degenerate,
        } = result;

        if !converged {
            return Err(GraphError::NonConvergence {
                iterations,
                delta,
                ranks: scores,
            });
        }
        graph.attach_ranks(scores);

        Ok(PipelineOutput {
            graph,
            iterations,
            delta,
            degenerate,
            warnings,
        })
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the default configuration and allows overriding individual
/// stages.
///
/// ```
/// # use csr_pagerank::pipeline::runner::PipelineBuilder;
/// # use csr_pagerank::pipeline::traits::*;
/// let pipeline = PipelineBuilder::new()
///     .builder(CheckedCsrBuilder)
///     .build();
/// ```
pub struct PipelineBuilder<
    Canon = MaxWeightDedup,
    Build = SweepCsrBuilder,
    Rnk = PageRankRanker,
> {
    canonicalizer: Canon,
    builder: Build,
    ranker: Rnk,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            canonicalizer: MaxWeightDedup,
            builder: SweepCsrBuilder,
            ranker: PageRankRanker,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Canon, Build, Rnk> PipelineBuilder<Canon, Build, Rnk> {
    /// Override the canonicalization stage.
    pub fn canonicalizer<C: EdgeCanonicalizer>(self, c: C) -> PipelineBuilder<C, Build, Rnk> {
        PipelineBuilder {
            canonicalizer: c,
            builder: self.builder,
            ranker: self.ranker,
        }
    }

    /// Override the CSR builder stage.
    pub fn builder<B: CsrBuilder>(self, b: B) -> PipelineBuilder<Canon, B, Rnk> {
        PipelineBuilder {
            canonicalizer: self.canonicalizer,
            builder: b,
            ranker: self.ranker,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Canon, Build, R> {
        PipelineBuilder {
            canonicalizer: self.canonicalizer,
            builder: self.builder,
            ranker: r,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Canon, Build, Rnk> {
        Pipeline {
            canonicalizer: self.canonicalizer,
            builder: self.builder,
            ranker: self.ranker,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
