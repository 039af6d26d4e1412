use std::collections::{BTreeMap, BTreeSet};

use kg_graph::StitchGraph;

/// Binary selector for one stitch type: `1.0` at matching nodes, else `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMask {
    /// Viewer quantity label, `{type}_only`.
    pub name: String,
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAttributes {
    /// Raw yarn id per node, unmodified.
    pub yarn_id: Vec<i32>,
    /// Distinct stitch types observed, sorted lexicographically.
    pub vocabulary: Vec<String>,
    /// Rank of each node's type in `vocabulary` (0-based).
    pub type_index: Vec<usize>,
    /// One mask per vocabulary entry, in vocabulary order.
    pub masks: Vec<TypeMask>,
}

impl NodeAttributes {
    pub fn project(graph: &StitchGraph) -> Self {
        let vocabulary: Vec<String> = graph
            .nodes
            .iter()
            .map(|n| n.stitch_type.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let rank: BTreeMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();
        let type_index: Vec<usize> = graph
            .nodes
            .iter()
            .map(|n| rank[n.stitch_type.as_str()])
            .collect();

        let masks = vocabulary
            .iter()
            .enumerate()
            .map(|(rank, stype)| TypeMask {
                name: format!("{stype}_only"),
                values: type_index
                    .iter()
                    .map(|&t| if t == rank { 1.0 } else { 0.0 })
                    .collect(),
            })
            .collect();

        Self {
            yarn_id: graph.nodes.iter().map(|n| n.yarn_id).collect(),
            vocabulary,
            type_index,
            masks,
        }
    }
}
