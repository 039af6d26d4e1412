use std::collections::{BTreeSet, HashMap};

use kg_core::{NodeId, StitchRecord};

use crate::graph::{Edge, StitchGraph, StitchNode};

/// Builds the knit graph from the complete accepted record sequence.
///
/// Callers must have range-checked links (`kg_parse::validate_links`); this
/// function indexes nodes unchecked, matching the contract that out-of-range
/// links are a parser defect, not a runtime condition.
pub fn build_graph(records: &[StitchRecord]) -> StitchGraph {
    let mut wale = BTreeSet::new();
    for (i, r) in records.iter().enumerate() {
        for j in r.links() {
            wale.insert(Edge::new(i, j));
        }
    }

    let mut course = BTreeSet::new();
    let mut last_of_yarn: HashMap<i32, NodeId> = HashMap::new();
    for (i, r) in records.iter().enumerate() {
        if let Some(&prev) = last_of_yarn.get(&r.yarn_id) {
            course.insert(Edge::new(prev, i));
        }
        last_of_yarn.insert(r.yarn_id, i);
    }

    // BTreeSet union iterates in ascending order, so the exported list is
    // already sorted and deduplicated across both families.
    let edges: Vec<Edge> = wale.union(&course).copied().collect();

    let nodes = records
        .iter()
        .enumerate()
        .map(|(id, r)| StitchNode {
            id,
            yarn_id: r.yarn_id,
            stitch_type: r.stitch_type.clone(),
            p: r.position,
        })
        .collect();

    StitchGraph {
        nodes,
        wale_edges: wale.into_iter().collect(),
        course_edges: course.into_iter().collect(),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::build_graph;
    use crate::graph::Edge;
    use kg_core::{Point3f, StitchRecord};

    fn rec(yarn_id: i32, in_links: [Option<usize>; 2], out_links: [Option<usize>; 2]) -> StitchRecord {
        StitchRecord {
            yarn_id,
            stitch_type: "knit".to_string(),
            direction: "a".to_string(),
            in_links,
            out_links,
            position: Point3f::ORIGIN,
        }
    }

    #[test]
    fn empty_records_build_an_empty_graph() {
        let g = build_graph(&[]);
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn reverse_wale_duplicates_collapse() {
        // node 0 declares out -> 1, node 1 declares in -> 0: one edge.
        let records = [
            rec(0, [None, None], [Some(1), None]),
            rec(0, [Some(0), None], [None, None]),
        ];
        let g = build_graph(&records);

        assert_eq!(g.wale_edges, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn self_loops_are_preserved() {
        let records = [rec(0, [Some(0), None], [None, None])];
        let g = build_graph(&records);

        assert_eq!(g.wale_edges, vec![Edge::new(0, 0)]);
        assert!(g.edges.contains(&Edge::new(0, 0)));
    }

    #[test]
    fn course_edges_chain_consecutive_same_yarn_nodes() {
        // yarn 42 appears at positions 2, 5, 9; distinct filler yarns
        // (outside 42) everywhere else.
        let mut records = Vec::new();
        for i in 0..10 {
            let yarn = if i == 2 || i == 5 || i == 9 {
                42
            } else {
                100 + i as i32
            };
            records.push(rec(yarn, [None, None], [None, None]));
        }
        let g = build_graph(&records);

        assert_eq!(g.course_edges, vec![Edge::new(2, 5), Edge::new(5, 9)]);
        assert!(!g.course_edges.contains(&Edge::new(2, 9)));

        for e in &g.course_edges {
            assert_eq!(g.nodes[e.a].yarn_id, g.nodes[e.b].yarn_id);
        }
    }

    #[test]
    fn union_emits_shared_edges_once() {
        // 0 and 1 share a yarn (course edge) and a wale link: one edge total.
        let records = [
            rec(3, [None, None], [Some(1), None]),
            rec(3, [None, None], [None, None]),
        ];
        let g = build_graph(&records);

        assert_eq!(g.wale_edges, vec![Edge::new(0, 1)]);
        assert_eq!(g.course_edges, vec![Edge::new(0, 1)]);
        assert_eq!(g.edges, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn edge_list_is_sorted_and_deterministic() {
        let records = [
            rec(0, [None, None], [Some(3), Some(2)]),
            rec(1, [Some(3), None], [None, None]),
            rec(0, [None, None], [None, None]),
            rec(1, [None, None], [Some(0), None]),
        ];
        let g = build_graph(&records);

        let mut sorted = g.edges.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(g.edges, sorted);

        assert_eq!(g, build_graph(&records));
    }

    #[test]
    fn builds_from_parsed_text() {
        let text = "0 knit a x x 1 x 0 0 0\n\
                    0 knit a 0 x 2 x 1 0 0\n\
                    1 purl b 1 x x x 2 0 0\n";
        let out = kg_parse::parse_stitch_file(text).unwrap();
        let g = build_graph(&out.records);

        assert_eq!(g.num_nodes(), 3);
        // wale: {0,1}, {1,2}; course: {0,1}; union: two edges.
        assert_eq!(g.edges, vec![Edge::new(0, 1), Edge::new(1, 2)]);
        assert_eq!(g.summary(), "Loaded 3 stitches and 2 edges");
    }
}
