use kg_core::{Point3f, Vec3f};
use kg_graph::StitchGraph;

use crate::arrows::{edge_arrows, ArrowConfig};
use crate::attrs::NodeAttributes;

/// Everything the external viewer consumes, in one bundle.
///
/// `positions` is aligned to node ids, `edges`/`arrow_mids`/`arrow_dirs` are
/// aligned to each other by edge index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerPayload {
    pub positions: Vec<Point3f>,
    pub edges: Vec<[usize; 2]>,
    pub attributes: NodeAttributes,
    pub arrow_mids: Vec<Point3f>,
    pub arrow_dirs: Vec<Vec3f>,
    pub num_nodes: usize,
    pub num_edges: usize,
}

impl ViewerPayload {
    pub fn assemble(graph: &StitchGraph, cfg: &ArrowConfig) -> Self {
        let arrows = edge_arrows(graph, cfg);

        Self {
            positions: graph.positions().collect(),
            edges: graph.edges.iter().map(|e| [e.a, e.b]).collect(),
            attributes: NodeAttributes::project(graph),
            arrow_mids: arrows.iter().map(|a| a.mid).collect(),
            arrow_dirs: arrows.iter().map(|a| a.dir).collect(),
            num_nodes: graph.num_nodes(),
            num_edges: graph.num_edges(),
        }
    }
}
