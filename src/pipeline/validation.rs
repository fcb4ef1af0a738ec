//! Validation engine for edge batches and pipeline specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`ValidationInput`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! Validation happens before the CSR builder runs: the builder itself does
//! not bounds-check vertex ids.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use csr_pagerank::pipeline::validation::{ValidationEngine, ValidationInput};
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&ValidationInput::new(&spec, &batch));
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::fmt;

use serde::Serialize;

use super::spec::{PipelineSpec, SPEC_VERSION};
use crate::error::{GraphError, Result};
use crate::types::{EdgeBatch, MAX_VERTICES};

// ─── Codes ──────────────────────────────────────────────────────────────────

/// Stable machine-readable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An edge endpoint outside `[1, num_vertices]`.
    VertexOutOfRange,
    /// Declared counts disagree with the content.
    CountMismatch,
    /// Edge with weight zero (dropped during canonicalization).
    ZeroWeight,
    /// Solver parameter out of its valid range.
    InvalidParameter,
    /// A runtime limit is zero or exceeded.
    LimitExceeded,
    UnsupportedVersion,
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "vertex_out_of_range",
            Self::CountMismatch => "count_mismatch",
            Self::ZeroWeight => "zero_weight",
            Self::InvalidParameter => "invalid_parameter",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownField => "unknown_field",
        }
    }
}

// ─── Finding ────────────────────────────────────────────────────────────────

/// What went wrong, where, and how to fix it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub code: ErrorCode,
    /// JSON-pointer-like location, e.g. `/edges/3` or `/rank/damping`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Finding {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding with its severity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub finding: Finding,
}

impl ValidationDiagnostic {
    pub fn error(finding: Finding) -> Self {
        Self {
            severity: Severity::Error,
            finding,
        }
    }

    pub fn warning(finding: Finding) -> Self {
        Self {
            severity: Severity::Warning,
            finding,
        }
    }

    /// Error in strict mode, warning otherwise.
    fn strict_or_warn(strict: bool, finding: Finding) -> Self {
        if strict {
            Self::error(finding)
        } else {
            Self::warning(finding)
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.finding)
    }

    /// Iterate over warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.finding)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert the first error into a [`GraphError`], or hand back the
    /// warnings when the report is valid.
    ///
    /// Solver parameter findings map to [`GraphError::InvalidParameter`];
    /// everything else is [`GraphError::MalformedInput`].
    pub fn into_result(self) -> Result<Vec<Finding>> {
        let mut warnings = Vec::new();
        for diag in self.diagnostics {
            match diag.severity {
                Severity::Warning => warnings.push(diag.finding),
                Severity::Error => {
                    let msg = diag.finding.to_string();
                    return Err(match diag.finding.code {
                        ErrorCode::InvalidParameter => GraphError::InvalidParameter(msg),
                        _ => GraphError::MalformedInput(msg),
                    });
                }
            }
        }
        Ok(warnings)
    }
}

// ─── Input ──────────────────────────────────────────────────────────────────

/// Everything a rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub spec: &'a PipelineSpec,
    pub batch: &'a EdgeBatch,
}

impl<'a> ValidationInput<'a> {
    pub fn new(spec: &'a PipelineSpec, batch: &'a EdgeBatch) -> Self {
        Self { spec, batch }
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`ValidationInput`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so a long-lived engine
/// can be shared.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"vertex_range"`).
    fn name(&self) -> &str;

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s and collects all diagnostics into a
/// [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(SpecVersionRule));
        engine.add_rule(Box::new(RankParamsRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(VertexRangeRule));
        engine.add_rule(Box::new(DeclaredEdgesRule));
        engine.add_rule(Box::new(ZeroWeightRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules and return the collected report.
    pub fn validate(&self, input: &ValidationInput<'_>) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(input));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

/// Reported per-edge findings are capped so a bad file cannot flood the report.
const MAX_EDGE_FINDINGS: usize = 16;

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct SpecVersionRule;

impl ValidationRule for SpecVersionRule {
    fn name(&self) -> &str {
        "spec_version"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        if input.spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            Finding::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", input.spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Solver parameters ───────────────────────────────────────────────────

struct RankParamsRule;

impl ValidationRule for RankParamsRule {
    fn name(&self) -> &str {
        "rank_params"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let rank = &input.spec.rank;
        let mut out = Vec::new();

        if !(0.0..1.0).contains(&rank.damping) {
            out.push(ValidationDiagnostic::error(
                Finding::new(
                    ErrorCode::InvalidParameter,
                    "/rank/damping",
                    format!("damping must be in [0, 1), got {}", rank.damping),
                )
                .with_hint("0.85 is the conventional choice"),
            ));
        }
        if !rank.tolerance.is_finite() || rank.tolerance <= 0.0 {
            out.push(ValidationDiagnostic::error(Finding::new(
                ErrorCode::InvalidParameter,
                "/rank/tolerance",
                format!("tolerance must be finite and positive, got {}", rank.tolerance),
            )));
        }
        if rank.max_iterations == 0 {
            out.push(ValidationDiagnostic::error(Finding::new(
                ErrorCode::InvalidParameter,
                "/rank/max_iterations",
                "max_iterations must be greater than 0",
            )));
        }

        out
    }
}

// ─── 3. Runtime limits ──────────────────────────────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        let runtime = &input.spec.runtime;

        let checks: &[(&str, Option<usize>, usize)] = &[
            ("max_vertices", runtime.max_vertices, input.batch.num_vertices),
            ("max_edges", runtime.max_edges, input.batch.edges.len()),
        ];

        for &(field, limit, actual) in checks {
            match limit {
                Some(0) => out.push(ValidationDiagnostic::error(
                    Finding::new(
                        ErrorCode::LimitExceeded,
                        format!("/runtime/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!(
                        "Remove {field} to disable the limit, or set it to a positive value"
                    )),
                )),
                Some(limit) if actual > limit => out.push(ValidationDiagnostic::error(
                    Finding::new(
                        ErrorCode::LimitExceeded,
                        format!("/runtime/{field}"),
                        format!("input has {actual}, exceeding {field} = {limit}"),
                    ),
                )),
                _ => {}
            }
        }

        out
    }
}

// ─── 4. Every endpoint within [1, num_vertices] ─────────────────────────────

struct VertexRangeRule;

impl ValidationRule for VertexRangeRule {
    fn name(&self) -> &str {
        "vertex_range"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let n = input.batch.num_vertices;
        if n > MAX_VERTICES {
            return vec![ValidationDiagnostic::error(Finding::new(
                ErrorCode::VertexOutOfRange,
                "/num_vertices",
                format!("vertex count {n} exceeds {MAX_VERTICES}"),
            ))];
        }
        let in_range = |v: u32| v >= 1 && (v as usize) <= n;

        let bad: Vec<_> = input
            .batch
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !in_range(e.source) || !in_range(e.destination))
            .collect();

        let mut out: Vec<_> = bad
            .iter()
            .take(MAX_EDGE_FINDINGS)
            .map(|(i, e)| {
                ValidationDiagnostic::error(Finding::new(
                    ErrorCode::VertexOutOfRange,
                    format!("/edges/{i}"),
                    format!(
                        "edge ({}, {}) references a vertex outside [1, {n}]",
                        e.source, e.destination
                    ),
                ))
            })
            .collect();

        if bad.len() > MAX_EDGE_FINDINGS {
            out.push(ValidationDiagnostic::error(
                Finding::new(
                    ErrorCode::VertexOutOfRange,
                    "/edges",
                    format!("{} more out-of-range edges", bad.len() - MAX_EDGE_FINDINGS),
                )
                .with_hint("Check the declared vertex count"),
            ));
        }
        out
    }
}

// ─── 5. Declared edge count ─────────────────────────────────────────────────

struct DeclaredEdgesRule;

impl ValidationRule for DeclaredEdgesRule {
    fn name(&self) -> &str {
        "declared_edges"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let declared = input.batch.declared_edges;
        let actual = input.batch.edges.len();
        // Declaring more than present is fine: dedup shrinks the count anyway.
        if actual <= declared {
            return vec![];
        }
        vec![ValidationDiagnostic::strict_or_warn(
            input.spec.strict,
            Finding::new(
                ErrorCode::CountMismatch,
                "/declared_edges",
                format!("{actual} edges present but only {declared} declared"),
            ),
        )]
    }
}

// ─── 6. Zero-weight edges ───────────────────────────────────────────────────

struct ZeroWeightRule;

impl ValidationRule for ZeroWeightRule {
    fn name(&self) -> &str {
        "zero_weight"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let zero = input.batch.edges.iter().filter(|e| e.weight == 0).count();
        if zero == 0 {
            return vec![];
        }
        vec![ValidationDiagnostic::warning(
            Finding::new(
                ErrorCode::ZeroWeight,
                "/edges",
                format!("{zero} zero-weight edges will be dropped"),
            )
            .with_hint("A weight of 0 means the edge is absent"),
        )]
    }
}

// ─── 7. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                ValidationDiagnostic::strict_or_warn(
                    strict,
                    Finding::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Vec<ValidationDiagnostic> {
        let spec = input.spec;
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/runtime",
            &spec.runtime.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, RankConfig};

    fn spec(json: &str) -> PipelineSpec {
        PipelineSpec::from_json(json).unwrap()
    }

    fn cycle_batch() -> EdgeBatch {
        EdgeBatch::new(
            3,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 1)],
        )
    }

    fn validate(spec: &PipelineSpec, batch: &EdgeBatch) -> ValidationReport {
        ValidationEngine::with_defaults().validate(&ValidationInput::new(spec, batch))
    }

    // ─── Valid input ────────────────────────────────────────────────────

    #[test]
    fn test_valid_input_has_no_diagnostics() {
        let report = validate(&PipelineSpec::default(), &cycle_batch());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let report = validate(&PipelineSpec::default(), &EdgeBatch::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_rule_names() {
        let engine = ValidationEngine::default();
        assert_eq!(
            engine.rule_names(),
            vec![
                "spec_version",
                "rank_params",
                "runtime_limits",
                "vertex_range",
                "declared_edges",
                "zero_weight",
                "unknown_fields",
            ]
        );
    }

    // ─── Vertex range ───────────────────────────────────────────────────

    #[test]
    fn test_vertex_out_of_range() {
        let batch = EdgeBatch::new(2, vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1)]);
        let report = validate(&PipelineSpec::default(), &batch);

        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::VertexOutOfRange);
        assert_eq!(errors[0].path, "/edges/1");
    }

    #[test]
    fn test_vertex_zero_is_out_of_range() {
        let batch = EdgeBatch::new(2, vec![Edge::new(0, 1, 1)]);
        let report = validate(&PipelineSpec::default(), &batch);
        assert!(report.has_errors());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_vertex_count_beyond_ids() {
        let batch = EdgeBatch::new(MAX_VERTICES + 1, vec![]);
        let report = validate(&PipelineSpec::default(), &batch);

        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "/num_vertices");
        assert!(matches!(
            report.into_result(),
            Err(GraphError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_out_of_range_findings_are_capped() {
        let edges = (0..40).map(|i| Edge::new(1, 100 + i, 1)).collect();
        let batch = EdgeBatch::new(2, edges);
        let report = validate(&PipelineSpec::default(), &batch);
        assert_eq!(report.errors().count(), MAX_EDGE_FINDINGS + 1);
    }

    // ─── Counts and weights ─────────────────────────────────────────────

    #[test]
    fn test_declared_edges_exceeded_warns() {
        let mut batch = cycle_batch();
        batch.declared_edges = 2;
        let report = validate(&PipelineSpec::default(), &batch);

        assert!(report.is_valid());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings[0].code, ErrorCode::CountMismatch);
    }

    #[test]
    fn test_declared_edges_exceeded_strict_errors() {
        let mut batch = cycle_batch();
        batch.declared_edges = 2;
        let report = validate(&PipelineSpec::default().strict(true), &batch);
        assert!(report.has_errors());
    }

    #[test]
    fn test_declared_edges_may_exceed_content() {
        let mut batch = cycle_batch();
        batch.declared_edges = 10;
        assert!(validate(&PipelineSpec::default(), &batch).is_empty());
    }

    #[test]
    fn test_zero_weight_warns() {
        let batch = EdgeBatch::new(2, vec![Edge::new(1, 2, 0)]);
        let report = validate(&PipelineSpec::default(), &batch);
        assert!(report.is_valid());
        assert_eq!(report.warnings().next().unwrap().code, ErrorCode::ZeroWeight);
    }

    // ─── Spec checks ────────────────────────────────────────────────────

    #[test]
    fn test_bad_rank_params() {
        let s = PipelineSpec::default().with_rank(RankConfig {
            damping: 1.5,
            tolerance: 0.0,
            max_iterations: 0,
            ..RankConfig::default()
        });
        let report = validate(&s, &cycle_batch());
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/rank/damping", "/rank/tolerance", "/rank/max_iterations"]
        );
    }

    #[test]
    fn test_infinite_tolerance_rejected() {
        let s = PipelineSpec::default().with_rank(RankConfig {
            tolerance: f64::INFINITY,
            ..RankConfig::default()
        });
        let report = validate(&s, &cycle_batch());
        let paths: Vec<_> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/rank/tolerance"]);
    }

    #[test]
    fn test_unsupported_version() {
        let report = validate(&spec(r#"{ "v": 2 }"#), &cycle_batch());
        assert_eq!(
            report.errors().next().unwrap().code,
            ErrorCode::UnsupportedVersion
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        let report = validate(&spec(r#"{ "runtime": { "max_edges": 0 } }"#), &cycle_batch());
        assert_eq!(report.errors().next().unwrap().path, "/runtime/max_edges");
    }

    #[test]
    fn test_limit_exceeded() {
        let report = validate(
            &spec(r#"{ "runtime": { "max_vertices": 2 } }"#),
            &cycle_batch(),
        );
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
        assert_eq!(err.path, "/runtime/max_vertices");
    }

    #[test]
    fn test_unknown_fields_warn_when_lenient() {
        let report = validate(&spec(r#"{ "colour": "red" }"#), &cycle_batch());
        assert!(report.is_valid());
        assert_eq!(report.warnings().next().unwrap().path, "/colour");
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = validate(
            &spec(r#"{ "strict": true, "runtime": { "max_nodes": 5 } }"#),
            &cycle_batch(),
        );
        assert_eq!(report.errors().next().unwrap().path, "/runtime/max_nodes");
    }

    // ─── Conversion ─────────────────────────────────────────────────────

    #[test]
    fn test_into_result_maps_error_kinds() {
        let batch = EdgeBatch::new(1, vec![Edge::new(1, 2, 1)]);
        let err = validate(&PipelineSpec::default(), &batch)
            .into_result()
            .unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput(_)));

        let s = PipelineSpec::default().with_rank(RankConfig {
            damping: 2.0,
            ..RankConfig::default()
        });
        let err = validate(&s, &cycle_batch()).into_result().unwrap_err();
        assert!(matches!(err, GraphError::InvalidParameter(_)));
    }

    #[test]
    fn test_into_result_returns_warnings() {
        let batch = EdgeBatch::new(2, vec![Edge::new(1, 2, 0)]);
        let warnings = validate(&PipelineSpec::default(), &batch)
            .into_result()
            .unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_report_serializes_flat() {
        let batch = EdgeBatch::new(2, vec![Edge::new(1, 2, 0)]);
        let report = validate(&PipelineSpec::default(), &batch);
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "warning");
        assert_eq!(diag["code"], "zero_weight");
        assert_eq!(diag["path"], "/edges");
    }

    #[test]
    fn test_finding_display() {
        let f = Finding::new(ErrorCode::CountMismatch, "/declared_edges", "too many")
            .with_hint("fix it");
        assert_eq!(
            f.to_string(),
            "[count_mismatch] /declared_edges: too many (hint: fix it)"
        );
    }
}
