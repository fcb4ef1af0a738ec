//! Pipeline specification types.
//!
//! A [`PipelineSpec`] carries the solver parameters, runtime execution
//! limits, and strictness settings for one run. It is the input to the
//! [`super::validation::ValidationEngine`] together with the edge batch.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "rank": { "damping": 0.85, "tolerance": 0.0001, "max_iterations": 100 },
//!   "runtime": { "max_vertices": 1000000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::types::RankConfig;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

fn default_version() -> u32 {
    SPEC_VERSION
}

/// Top-level pipeline specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Spec version (currently `1`).
    #[serde(default = "default_version")]
    pub v: u32,

    /// PageRank parameters.
    #[serde(default)]
    pub rank: RankConfig,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields and soft count mismatches are errors;
    /// if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            rank: RankConfig::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl PipelineSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::InvalidParameter(format!("pipeline spec: {e}")))
    }

    pub fn with_rank(mut self, rank: RankConfig) -> Self {
        self.rank = rank;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum declared vertex count before rejecting.
    #[serde(default)]
    pub max_vertices: Option<usize>,

    /// Maximum number of raw edges before rejecting.
    #[serde(default)]
    pub max_edges: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
