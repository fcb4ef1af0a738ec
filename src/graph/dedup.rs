//! Edge deduplication and canonical ordering
//!
//! Parallel edges are collapsed to the heaviest one and "absent" edges
//! (weight zero) are discarded. The output is sorted by
//! `(source, destination)`, which is exactly what the CSR sweep requires.

use crate::types::Edge;

/// Sort edges and keep one entry per `(source, destination)` pair, the one
/// with the maximum weight. Zero-weight edges never appear in the output.
///
/// The input buffer is reused; callers hand over ownership and receive a
/// fresh canonical sequence.
pub fn dedup_edges(mut edges: Vec<Edge>) -> Vec<Edge> {
    edges.retain(|e| e.weight > 0);
    // Weight ascending inside a run, so the last member of each run is the max.
    edges.sort();

    let mut canonical: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        match canonical.last_mut() {
            Some(last) if last.key() == edge.key() => *last = edge,
            _ => canonical.push(edge),
        }
    }
    canonical.shrink_to_fit();
    canonical
}

/// Returns `true` if `edges` is already in canonical form: strictly
/// increasing `(source, destination)` and no zero weights.
pub fn is_canonical(edges: &[Edge]) -> bool {
    edges.iter().all(|e| e.weight > 0) && edges.windows(2).all(|w| w[0].key() < w[1].key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_maximum_weight() {
        let edges = vec![Edge::new(1, 2, 5), Edge::new(1, 2, 2)];
        assert_eq!(dedup_edges(edges), vec![Edge::new(1, 2, 5)]);
    }

    #[test]
    fn test_maximum_wins_regardless_of_arrival_order() {
        let edges = vec![
            Edge::new(1, 2, 2),
            Edge::new(1, 2, 9),
            Edge::new(1, 2, 4),
        ];
        assert_eq!(dedup_edges(edges), vec![Edge::new(1, 2, 9)]);
    }

    #[test]
    fn test_drops_zero_weight() {
        let edges = vec![Edge::new(1, 2, 0), Edge::new(2, 1, 3), Edge::new(2, 3, 0)];
        assert_eq!(dedup_edges(edges), vec![Edge::new(2, 1, 3)]);
    }

    #[test]
    fn test_zero_weight_duplicate_does_not_hide_real_edge() {
        let edges = vec![Edge::new(1, 2, 0), Edge::new(1, 2, 7)];
        assert_eq!(dedup_edges(edges), vec![Edge::new(1, 2, 7)]);
    }

    #[test]
    fn test_sorted_by_source_then_destination() {
        let edges = vec![
            Edge::new(3, 1, 1),
            Edge::new(1, 3, 1),
            Edge::new(2, 2, 1),
            Edge::new(1, 2, 1),
        ];
        let out = dedup_edges(edges);
        let keys: Vec<_> = out.iter().map(Edge::key).collect();
        assert_eq!(keys, vec![(1, 2), (1, 3), (2, 2), (3, 1)]);
        assert!(is_canonical(&out));
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_edges(Vec::new()).is_empty());
        assert!(is_canonical(&[]));
    }

    #[test]
    fn test_idempotent() {
        let edges = vec![
            Edge::new(2, 1, 4),
            Edge::new(1, 2, 1),
            Edge::new(2, 1, 6),
            Edge::new(1, 1, 0),
        ];
        let once = dedup_edges(edges);
        let twice = dedup_edges(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_canonical_rejects_duplicates_and_disorder() {
        assert!(!is_canonical(&[Edge::new(1, 2, 1), Edge::new(1, 2, 3)]));
        assert!(!is_canonical(&[Edge::new(2, 1, 1), Edge::new(1, 2, 1)]));
        assert!(!is_canonical(&[Edge::new(1, 2, 0)]));
    }
}
