use kg_core::{NodeId, Point3f};

/// Undirected edge, stored smaller index first so reverse duplicates compare
/// equal and edge lists sort deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(i: NodeId, j: NodeId) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StitchNode {
    pub id: NodeId,
    pub yarn_id: i32,
    pub stitch_type: String,
    pub p: Point3f,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StitchGraph {
    pub nodes: Vec<StitchNode>,
    /// Structural links, deduplicated, sorted.
    pub wale_edges: Vec<Edge>,
    /// Same-yarn sequential links, deduplicated, sorted.
    pub course_edges: Vec<Edge>,
    /// Union of wale and course edges; an edge in both appears once.
    pub edges: Vec<Edge>,
}

impl StitchGraph {
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3f> + '_ {
        self.nodes.iter().map(|n| n.p)
    }

    /// Endpoint positions of an edge, in `(a, b)` order.
    pub fn endpoints(&self, e: Edge) -> (Point3f, Point3f) {
        (self.nodes[e.a].p, self.nodes[e.b].p)
    }

    /// One-line count summary for status output.
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} stitches and {} edges",
            self.num_nodes(),
            self.num_edges()
        )
    }
}
