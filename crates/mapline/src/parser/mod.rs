//! Manual edge specification parser.
//!
//! One record per line, five whitespace-separated fields:
//!
//! ```text
//! X1 Y1 X2 Y2 COLOR
//! ```
//!
//! Coordinates are integers on the `0..=4000` drawing surface. Parsing is
//! skip-and-report: a bad record is rejected with a diagnostic and the rest
//! of the specification still parses. Only an entirely empty specification
//! fails the whole parse.

#[cfg(test)]
mod tests;

use std::fmt;

use log::debug;

use crate::edge::Edge;
use crate::error::ValidationError;

/// Number of fields a well-formed record carries: four coordinates and a
/// color. Extra trailing fields are ignored.
const RECORD_FIELDS: usize = 5;

/// Everything one parse produced: the surviving edges in input order, and
/// one diagnostic per rejected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub edges: Vec<Edge>,
    pub rejects: Vec<RecordReject>,
}

/// A rejected record and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReject {
    /// 1-based line number in the input text.
    pub line: usize,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than the five required fields.
    FieldCount { found: usize },
    /// A coordinate field failed numeric parse or the range check.
    /// `field` is the 0-based position of the offending field.
    InvalidCoordinate { field: usize, value: String },
}

impl fmt::Display for RecordReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::FieldCount { found } => write!(
                f,
                "line {}: malformed record: expected {} fields, found {}",
                self.line, RECORD_FIELDS, found
            ),
            RejectReason::InvalidCoordinate { field, value } => write!(
                f,
                "line {}: invalid coordinate '{}' in field {}",
                self.line, value, field + 1
            ),
        }
    }
}

/// Parse a multi-line edge specification.
///
/// An empty (or all-whitespace) specification is a validation failure,
/// never an empty success. Blank interior lines carry no record and are
/// skipped without a diagnostic.
pub fn parse_edges(text: &str) -> Result<ParseOutcome, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptySpecification);
    }

    let mut edges = Vec::new();
    let mut rejects = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < RECORD_FIELDS {
            rejects.push(RecordReject {
                line,
                reason: RejectReason::FieldCount {
                    found: fields.len(),
                },
            });
            continue;
        }
        match parse_record(&fields) {
            Ok(edge) => edges.push(edge),
            Err(reason) => rejects.push(RecordReject { line, reason }),
        }
    }

    debug!(
        "parsed {} edge(s), rejected {} record(s)",
        edges.len(),
        rejects.len()
    );
    Ok(ParseOutcome { edges, rejects })
}

/// Parse one record that already has enough fields.
fn parse_record(fields: &[&str]) -> Result<Edge, RejectReason> {
    let mut coords = [0i32; 4];
    for (i, field) in fields[..4].iter().enumerate() {
        coords[i] = field.parse().map_err(|_| RejectReason::InvalidCoordinate {
            field: i,
            value: field.to_string(),
        })?;
    }

    // The color token is never empty after whitespace splitting, so the
    // constructor can only reject an out-of-range coordinate here.
    Edge::new(fields[4], coords[0], coords[1], coords[2], coords[3]).map_err(|_| {
        let field = coords
            .iter()
            .position(|v| !(0..=crate::edge::COORD_MAX).contains(v))
            .unwrap_or(0);
        RejectReason::InvalidCoordinate {
            field,
            value: fields[field].to_string(),
        }
    })
}
