use crate::geom::Point3f;

pub type NodeId = usize;

/// One accepted stitch-file line. The node id is not stored here: it is the
/// record's position in the accepted sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchRecord {
    /// Yarn this stitch belongs to; not required unique or contiguous.
    pub yarn_id: i32,
    /// Categorical label (e.g. `knit`, `purl`); vocabulary is open.
    pub stitch_type: String,
    /// Carried from the input but semantically unused.
    pub direction: String,
    /// Up to two predecessor nodes this stitch pulls through.
    pub in_links: [Option<NodeId>; 2],
    /// Up to two successor nodes.
    pub out_links: [Option<NodeId>; 2],
    /// Defaults to the origin when the input triple is unparsable.
    pub position: Point3f,
}

impl StitchRecord {
    /// All present link values, in slot order: `in0, in1, out0, out1`.
    pub fn links(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.in_links
            .iter()
            .chain(self.out_links.iter())
            .filter_map(|l| *l)
    }
}
