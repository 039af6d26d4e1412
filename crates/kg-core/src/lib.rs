//! Foundational primitives for the `knit-graph` workspace.
//!
//! ## Stitch Records
//! A [`StitchRecord`] is one accepted line of a stitch file. Its node id is
//! its ordinal position among accepted lines; skipped lines never consume an
//! id. Absent links are `None`, never a sentinel integer, so "no link" and
//! "link to node 0" stay unambiguous.
//!
//! ## Geometry
//! Positions and direction vectors use plain `f32` triples with pixel-free,
//! unit-free semantics; the external viewer decides scale.

mod error;
mod geom;
mod record;

pub use error::Error;
pub use geom::{Point3f, Vec3f};
pub use record::{NodeId, StitchRecord};
