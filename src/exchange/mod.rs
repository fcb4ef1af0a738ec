//! Exchange adapter: the line-oriented interchange format.
//!
//! Reading produces an [`EdgeBatch`](crate::types::EdgeBatch) for the
//! pipeline; writing consumes a built graph or its rank vector.

pub mod dimacs;
pub mod egress;

pub use dimacs::{parse_dimacs, read_dimacs};
pub use egress::{degree_histogram, write_out_degrees, write_ranks, write_topology};
