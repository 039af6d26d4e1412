use kg_core::{Error, StitchRecord};

use crate::line::{parse_line, LineOutcome, SkipReason};

/// A reported (non-silent) skip: the raw line is kept so callers can show it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input text.
    pub line_no: usize,
    pub raw: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    /// Accepted records; a record's index here is its node id.
    pub records: Vec<StitchRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a whole stitch file in one forward pass.
///
/// Malformed lines are collected in [`ParseOutput::skipped`], never aborting
/// the pass; zero accepted records is a valid, empty output. The only hard
/// error is a link pointing outside the accepted node sequence, checked once
/// the sequence is complete (forward references are legal until then).
pub fn parse_stitch_file(text: &str) -> Result<ParseOutput, Error> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            LineOutcome::Record(r) => records.push(r),
            LineOutcome::Ignored => {}
            LineOutcome::Skip(reason) => skipped.push(SkippedLine {
                line_no: i + 1,
                raw: raw.to_string(),
                reason,
            }),
        }
    }

    validate_links(&records)?;
    Ok(ParseOutput { records, skipped })
}

/// Checks that every present link is a valid index into `records`.
///
/// Self-links are valid; only `link >= records.len()` fails.
pub fn validate_links(records: &[StitchRecord]) -> Result<(), Error> {
    let nodes = records.len();
    for (node, r) in records.iter().enumerate() {
        for link in r.links() {
            if link >= nodes {
                return Err(Error::LinkOutOfRange { node, link, nodes });
            }
        }
    }
    Ok(())
}
