//! Graph construction and representation
//!
//! Raw edges flow through the collector, get canonicalized by the
//! deduplicator, and end up in an immutable CSR structure.

pub mod collector;
pub mod csr;
pub mod dedup;
