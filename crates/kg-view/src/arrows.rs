use kg_core::{Point3f, Vec3f};
use kg_graph::StitchGraph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowConfig {
    /// Visual length every non-degenerate arrow is rescaled to.
    pub length: f32,
    /// Edges shorter than this keep their raw (effectively zero) vector
    /// instead of being divided by a near-zero norm.
    pub eps: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: 0.01,
            eps: 1e-12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeArrow {
    pub mid: Point3f,
    pub dir: Vec3f,
}

/// Midpoint and fixed-length direction vector per edge.
///
/// Output index `k` corresponds to `graph.edges[k]`; the direction runs from
/// the edge's smaller endpoint to its larger one.
pub fn edge_arrows(graph: &StitchGraph, cfg: &ArrowConfig) -> Vec<EdgeArrow> {
    graph
        .edges
        .iter()
        .map(|&e| {
            let (pa, pb) = graph.endpoints(e);
            let v = pb - pa;
            let n = v.norm();
            let dir = if n > cfg.eps { v * (cfg.length / n) } else { v };
            EdgeArrow {
                mid: pa.midpoint(pb),
                dir,
            }
        })
        .collect()
}
