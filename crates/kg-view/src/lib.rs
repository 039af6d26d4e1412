//! Derived views for an external 3D viewer.
//!
//! Everything here is a pure read of an immutable [`kg_graph::StitchGraph`]:
//! - [`edge_arrows`]: per-edge midpoint plus a fixed-length direction vector
//!   (tiny arrows stay visible regardless of edge length).
//! - [`NodeAttributes`]: per-node scalars: raw yarn id, categorical
//!   stitch-type index over the sorted observed vocabulary, and one binary
//!   mask per type.
//! - [`ViewerPayload`]: the whole downstream contract in one bundle, aligned
//!   by index to the graph's node and edge lists.
//!
//! The derivations are independent and may be recomputed at any time.

mod arrows;
mod attrs;
mod payload;

pub use arrows::{edge_arrows, ArrowConfig, EdgeArrow};
pub use attrs::{NodeAttributes, TypeMask};
pub use payload::ViewerPayload;
