//! # csr-pagerank
//!
//! Weighted PageRank over a compressed sparse-row (CSR) graph.
//!
//! A run moves through four stages, each taking ownership of the previous
//! stage's output:
//!
//! 1. **Collect** raw `(source, destination, weight)` triples
//!    ([`graph::collector::EdgeCollector`]).
//! 2. **Canonicalize**: sort, drop zero weights and keep the maximum weight
//!    per `(source, destination)` pair ([`graph::dedup::dedup_edges`]).
//! 3. **Build** the one-based CSR adjacency ([`graph::csr::CsrGraph`]).
//! 4. **Rank** with edge-weight-proportional PageRank
//!    ([`pagerank::standard::StandardPageRank`]).
//!
//! The [`pipeline`] module wires the stages together with validation and
//! stage observers; [`exchange`] reads and writes the line-oriented
//! interchange format.
//!
//! ```
//! use csr_pagerank::graph::collector::EdgeCollector;
//! use csr_pagerank::pipeline::runner::BasePipeline;
//! use csr_pagerank::pipeline::observer::NoopObserver;
//! use csr_pagerank::pipeline::spec::PipelineSpec;
//!
//! let mut collector = EdgeCollector::new(3);
//! collector.push(1, 2, 1);
//! collector.push(2, 3, 1);
//! collector.push(3, 1, 1);
//!
//! let output = BasePipeline::base()
//!     .run(collector.finish(), &PipelineSpec::default(), &mut NoopObserver)
//!     .unwrap();
//! let ranks = output.graph.ranks().unwrap();
//! assert!((ranks.get(1) - 1.0 / 3.0).abs() < 1e-3);
//! ```

pub mod error;
pub mod exchange;
pub mod graph;
pub mod pagerank;
pub mod pipeline;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::csr::CsrGraph;
pub use graph::dedup::dedup_edges;
pub use pagerank::standard::StandardPageRank;
pub use pagerank::{PageRankResult, RankVector};
pub use types::{DegeneratePolicy, Edge, EdgeBatch, RankConfig, VertexId, Weight, MAX_VERTICES};
