use core::fmt;

use kg_core::{NodeId, Point3f, StitchRecord};

const TOKENS_PER_RECORD: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line is a valid record.
    Record(StitchRecord),
    /// Blank line or comment; dropped without a report.
    Ignored,
    /// Malformed line; dropped and reported.
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TokenCount { found: usize },
    BadYarnId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount { found } => {
                write!(f, "expected {TOKENS_PER_RECORD} tokens, found {found}")
            }
            Self::BadYarnId => write!(f, "yarn id is not an integer"),
        }
    }
}

/// Parses one raw line of a stitch file.
///
/// Token layout: `yarn_id stitch_type direction in0 in1 out0 out1 x y z`.
/// The `direction` token is carried but unused.
pub fn parse_line(raw: &str) -> LineOutcome {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return LineOutcome::Ignored;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != TOKENS_PER_RECORD {
        return LineOutcome::Skip(SkipReason::TokenCount {
            found: tokens.len(),
        });
    }

    // A stitch cannot exist without a yarn identity, so this field is the
    // only one with no fallback.
    let Ok(yarn_id) = tokens[0].parse::<i32>() else {
        return LineOutcome::Skip(SkipReason::BadYarnId);
    };

    LineOutcome::Record(StitchRecord {
        yarn_id,
        stitch_type: tokens[1].to_string(),
        direction: tokens[2].to_string(),
        in_links: [parse_link(tokens[3]), parse_link(tokens[4])],
        out_links: [parse_link(tokens[5]), parse_link(tokens[6])],
        position: parse_position(tokens[7], tokens[8], tokens[9]),
    })
}

/// Any token that is not a node index means "absent". This covers the common
/// placeholder symbols (`x`, `.`) and the `-1` sentinel some writers emit.
fn parse_link(token: &str) -> Option<NodeId> {
    token.parse::<NodeId>().ok()
}

/// The three coordinates parse together: if any is unparsable or non-finite,
/// the whole position falls back to the origin rather than mixing parsed and
/// defaulted axes.
fn parse_position(x: &str, y: &str, z: &str) -> Point3f {
    match (x.parse::<f32>(), y.parse::<f32>(), z.parse::<f32>()) {
        (Ok(x), Ok(y), Ok(z)) if x.is_finite() && y.is_finite() && z.is_finite() => {
            Point3f { x, y, z }
        }
        _ => Point3f::ORIGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_line, LineOutcome, SkipReason};
    use kg_core::Point3f;

    fn record(raw: &str) -> kg_core::StitchRecord {
        match parse_line(raw) {
            LineOutcome::Record(r) => r,
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn full_record() {
        let r = record("2 purl b 0 1 x 3 0.5 -1.5 2.0");

        assert_eq!(r.yarn_id, 2);
        assert_eq!(r.stitch_type, "purl");
        assert_eq!(r.direction, "b");
        assert_eq!(r.in_links, [Some(0), Some(1)]);
        assert_eq!(r.out_links, [None, Some(3)]);
        assert_eq!(
            r.position,
            Point3f {
                x: 0.5,
                y: -1.5,
                z: 2.0
            }
        );
    }

    #[test]
    fn comments_and_blanks_are_silent() {
        assert_eq!(parse_line(""), LineOutcome::Ignored);
        assert_eq!(parse_line("   \t "), LineOutcome::Ignored);
        assert_eq!(parse_line("# header"), LineOutcome::Ignored);
        assert_eq!(parse_line("  # indented comment"), LineOutcome::Ignored);
    }

    #[test]
    fn wrong_token_count_is_reported() {
        assert_eq!(
            parse_line("1 knit a 0 x x x 0 0"),
            LineOutcome::Skip(SkipReason::TokenCount { found: 9 })
        );
        assert_eq!(
            parse_line("completely bogus"),
            LineOutcome::Skip(SkipReason::TokenCount { found: 2 })
        );
    }

    #[test]
    fn bad_yarn_id_is_reported() {
        assert_eq!(
            parse_line("yarn knit a 0 x x x 0 0 0"),
            LineOutcome::Skip(SkipReason::BadYarnId)
        );
    }

    #[test]
    fn placeholder_and_negative_links_are_absent() {
        let r = record("1 knit a x -1 . 2 0 0 0");

        assert_eq!(r.in_links, [None, None]);
        assert_eq!(r.out_links, [None, Some(2)]);
    }

    #[test]
    fn malformed_position_defaults_to_origin() {
        for triple in ["nan 0 0", "0 oops 0", "0 0 inf"] {
            let r = record(&format!("1 knit a x x x x {triple}"));
            assert_eq!(r.position, Point3f::ORIGIN, "triple: {triple}");
        }
    }

    #[test]
    fn partial_position_failure_defaults_all_three() {
        let r = record("1 knit a x x x x 1.0 2.0 bad");
        assert_eq!(r.position, Point3f::ORIGIN);
    }
}
