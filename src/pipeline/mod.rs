//! Staged execution: validate → canonicalize → build → rank.
//!
//! - [`spec`]: run configuration (JSON).
//! - [`validation`]: pre-build checks producing errors and warnings.
//! - [`traits`]: stage boundaries and their default implementations.
//! - [`observer`]: stage timing and artifact hooks.
//! - [`runner`]: the [`runner::Pipeline`] that drives a run.

pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
