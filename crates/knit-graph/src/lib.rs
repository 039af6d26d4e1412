//! Umbrella crate for the `knit-graph` workspace.
//!
//! Re-exports the stitch-file parser, graph builder, and viewer-facing
//! derivations. The typical pipeline:
//!
//! ```
//! use knit_graph::{build_graph, parse_stitch_file, ArrowConfig, ViewerPayload};
//!
//! let text = "0 knit a x x 1 x 0 0 0\n\
//!             0 purl b 0 x x x 1 0 0\n";
//! let parsed = parse_stitch_file(text)?;
//! let graph = build_graph(&parsed.records);
//! let payload = ViewerPayload::assemble(&graph, &ArrowConfig::default());
//! assert_eq!(payload.num_nodes, 2);
//! # Ok::<(), knit_graph::Error>(())
//! ```

pub use kg_core::*;
pub use kg_graph::*;
pub use kg_parse::*;
pub use kg_view::*;
