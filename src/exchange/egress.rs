//! Line-oriented output: topology, ranks and out-degree listings.

use std::io::Write;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::graph::csr::CsrGraph;
use crate::pagerank::RankVector;
use crate::types::VertexId;

/// Write one `vertex destination weight` line per stored edge, in vertex
/// then destination order.
pub fn write_topology<W: Write>(graph: &CsrGraph, mut out: W) -> Result<()> {
    for edge in graph.edges() {
        writeln!(out, "{} {} {}", edge.source, edge.destination, edge.weight)?;
    }
    out.flush()?;
    Ok(())
}

/// Write one `vertex rank` line per vertex.
pub fn write_ranks<W: Write>(ranks: &RankVector, mut out: W) -> Result<()> {
    for (vertex, rank) in ranks.iter() {
        writeln!(out, "{vertex} {rank}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write one `vertex out_degree` line per vertex.
pub fn write_out_degrees<W: Write>(graph: &CsrGraph, mut out: W) -> Result<()> {
    for vertex in 1..=graph.num_vertices() as VertexId {
        writeln!(out, "{} {}", vertex, graph.degree(vertex))?;
    }
    out.flush()?;
    Ok(())
}

/// Count vertices per out-degree, sorted by degree ascending.
pub fn degree_histogram(graph: &CsrGraph) -> Vec<(usize, usize)> {
    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for vertex in 1..=graph.num_vertices() as VertexId {
        *counts.entry(graph.degree(vertex)).or_insert(0) += 1;
    }
    let mut histogram: Vec<_> = counts.into_iter().collect();
    histogram.sort_unstable();
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::dedup::dedup_edges;
    use crate::types::Edge;

    fn sample_graph() -> CsrGraph {
        let edges = dedup_edges(vec![
            Edge::new(2, 3, 1),
            Edge::new(1, 3, 2),
            Edge::new(1, 2, 5),
        ]);
        CsrGraph::from_sorted_edges(&edges, 4)
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_topology() {
        let graph = sample_graph();
        let text = render(|buf| write_topology(&graph, buf));
        assert_eq!(text, "1 2 5\n1 3 2\n2 3 1\n");
    }

    #[test]
    fn test_write_ranks() {
        let ranks = RankVector::uniform(2);
        let text = render(|buf| write_ranks(&ranks, buf));
        assert_eq!(text, "1 0.5\n2 0.5\n");
    }

    #[test]
    fn test_write_out_degrees() {
        let graph = sample_graph();
        let text = render(|buf| write_out_degrees(&graph, buf));
        assert_eq!(text, "1 2\n2 1\n3 0\n4 0\n");
    }

    #[test]
    fn test_degree_histogram() {
        let graph = sample_graph();
        assert_eq!(degree_histogram(&graph), vec![(0, 2), (1, 1), (2, 1)]);
        assert!(degree_histogram(&CsrGraph::default()).is_empty());
    }
}
