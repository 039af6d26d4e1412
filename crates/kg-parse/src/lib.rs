//! Tolerant parsing of stitch files (`.st`).
//!
//! One data line is exactly 10 whitespace-separated tokens:
//!
//! ```text
//! yarn_id stitch_type direction in0 in1 out0 out1 x y z
//! ```
//!
//! Parsing never aborts on a bad line. Blank and `#` lines are ignored
//! silently; lines with the wrong token count or an unparsable `yarn_id`
//! are skipped and reported back to the caller with the raw text. Link
//! tokens that do not parse as node indices mean "absent" (files commonly
//! use a placeholder symbol such as `x` or `-1`). A position triple that
//! does not parse as three finite floats defaults to the origin without
//! affecting the record's acceptance.
//!
//! The whole file is parsed before any graph is built, so links may refer
//! forward to nodes that appear later. After the pass, every present link
//! is range-checked against the accepted node count; an out-of-range link
//! is a hard error because downstream stages index nodes unchecked.

mod file;
mod line;

pub use file::{parse_stitch_file, validate_links, ParseOutput, SkippedLine};
pub use line::{parse_line, LineOutcome, SkipReason};
