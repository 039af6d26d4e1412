//! Knit-graph construction from an accepted stitch-record sequence.
//!
//! Two edge families are derived:
//! - **Wale edges**: the structural pull-through links a record declares in
//!   its `in`/`out` slots, independent of yarn. Reverse-direction duplicates
//!   collapse to one undirected edge; self-loops are kept.
//! - **Course edges**: for each yarn, consecutive occurrences in overall
//!   record order are linked, tracked by a "last node of this yarn" map in
//!   a single forward pass.
//!
//! The exported edge list is the sorted, deduplicated union of both
//! families, so repeated builds over the same records are byte-identical.
//! The builder is descriptive, not validating: disconnected, cyclic, or
//! otherwise odd graphs pass through unchanged.

mod build;
mod graph;

pub use build::build_graph;
pub use graph::{Edge, StitchGraph, StitchNode};
