//! DIMACS-style edge list reader
//!
//! ```text
//! c comment lines start with 'c'
//! p edge 4 5          problem line: <kind> <vertices> <edges>
//! e 1 2               edge with implicit weight 1
//! e 1 3 7             edge with explicit weight
//! a 2 3 4             arc, weight required
//! ```
//!
//! The problem line must appear exactly once and before any edge. Its
//! edge count is recorded as the declared count; it is not enforced here.

use std::io::BufRead;

use crate::error::{GraphError, Result};
use crate::graph::collector::EdgeCollector;
use crate::types::{EdgeBatch, VertexId, Weight, MAX_VERTICES};

/// Read a whole DIMACS-style stream into an [`EdgeBatch`].
pub fn read_dimacs<R: BufRead>(reader: R) -> Result<EdgeBatch> {
    let mut collector: Option<EdgeCollector> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        let Some(tag) = fields.next() else {
            continue;
        };

        match tag {
            "c" => {}
            "p" => {
                if collector.is_some() {
                    return Err(GraphError::parse(line_no, "duplicate problem line"));
                }
                let _kind = fields
                    .next()
                    .ok_or_else(|| GraphError::parse(line_no, "problem line missing kind"))?;
                let vertices: usize = parse_field(fields.next(), line_no, "vertex count")?;
                let edges: usize = parse_field(fields.next(), line_no, "edge count")?;
                expect_end(fields, line_no)?;
                if vertices > MAX_VERTICES {
                    return Err(GraphError::parse(
                        line_no,
                        format!("vertex count {vertices} exceeds {MAX_VERTICES}"),
                    ));
                }
                collector = Some(EdgeCollector::with_declared(vertices, edges));
            }
            "e" | "a" => {
                let collector = collector.as_mut().ok_or_else(|| {
                    GraphError::MalformedInput(format!(
                        "line {line_no}: edge before problem line"
                    ))
                })?;
                let source: VertexId = parse_field(fields.next(), line_no, "source")?;
                let destination: VertexId = parse_field(fields.next(), line_no, "destination")?;
                let weight: Weight = match (tag, fields.next()) {
                    ("e", None) => 1,
                    (_, field) => parse_field(field, line_no, "weight")?,
                };
                expect_end(fields, line_no)?;
                collector.push(source, destination, weight);
            }
            other => {
                return Err(GraphError::parse(
                    line_no,
                    format!("unknown line tag {other:?}"),
                ));
            }
        }
    }

    collector
        .map(EdgeCollector::finish)
        .ok_or_else(|| GraphError::MalformedInput("missing problem line".into()))
}

/// Parse a DIMACS-style document held in memory.
pub fn parse_dimacs(text: &str) -> Result<EdgeBatch> {
    read_dimacs(text.as_bytes())
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, line: usize, what: &str) -> Result<T> {
    let raw = field.ok_or_else(|| GraphError::parse(line, format!("missing {what}")))?;
    raw.parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {what} {raw:?}")))
}

fn expect_end<'a>(mut fields: impl Iterator<Item = &'a str>, line: usize) -> Result<()> {
    match fields.next() {
        None => Ok(()),
        Some(extra) => Err(GraphError::parse(line, format!("unexpected field {extra:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    #[test]
    fn test_parse_basic_document() {
        let text = "\
c sample graph
p edge 3 3

e 1 2
e 2 3 4
a 3 1 2
";
        let batch = parse_dimacs(text).unwrap();
        assert_eq!(batch.num_vertices, 3);
        assert_eq!(batch.declared_edges, 3);
        assert_eq!(
            batch.edges,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 4), Edge::new(3, 1, 2)]
        );
    }

    #[test]
    fn test_duplicates_and_zero_weights_pass_through() {
        let batch = parse_dimacs("p sp 2 3\na 1 2 5\na 1 2 2\na 2 1 0\n").unwrap();
        assert_eq!(batch.edges.len(), 3);
        assert_eq!(batch.edges[2].weight, 0);
    }

    #[test]
    fn test_missing_problem_line() {
        let err = parse_dimacs("c nothing here\n").unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput(_)));
    }

    #[test]
    fn test_edge_before_problem_line() {
        let err = parse_dimacs("e 1 2\np edge 2 1\n").unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput(_)));
    }

    #[test]
    fn test_duplicate_problem_line() {
        let err = parse_dimacs("p edge 2 1\np edge 2 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_arc_requires_weight() {
        let err = parse_dimacs("p sp 2 1\na 1 2\n").unwrap_err();
        match err {
            GraphError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("weight"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = parse_dimacs("p sp 2 1\na 1 2 -3\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_unknown_tag_and_trailing_field() {
        assert!(matches!(
            parse_dimacs("p edge 2 1\nx 1 2\n").unwrap_err(),
            GraphError::Parse { line: 2, .. }
        ));
        assert!(matches!(
            parse_dimacs("p edge 2 1\ne 1 2 3 4\n").unwrap_err(),
            GraphError::Parse { line: 2, .. }
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_overstated_edge_count_is_advisory() {
        let batch = parse_dimacs("p edge 2 18446744073709551615\ne 1 2\n").unwrap();
        assert_eq!(batch.edges, vec![Edge::new(1, 2, 1)]);
        assert_eq!(batch.declared_edges as u64, u64::MAX);
    }

    #[test]
    fn test_vertex_count_must_fit_vertex_ids() {
        let err = parse_dimacs("p edge 4294967296 0\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
        assert!(parse_dimacs("p edge 4294967295 0\n").is_ok());
    }

    #[test]
    fn test_empty_graph() {
        let batch = parse_dimacs("p edge 0 0\n").unwrap();
        assert_eq!(batch, EdgeBatch::default());
    }
}
