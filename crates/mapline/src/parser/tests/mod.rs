mod valid;

use super::{ParseOutcome, RejectReason, parse_edges};
use crate::edge::Edge;

/// Helper to build an expected edge.
fn edge(x1: i32, y1: i32, x2: i32, y2: i32, color: &str) -> Edge {
    Edge::new(color, x1, y1, x2, y2).unwrap()
}

/// Parse a specification that is expected to be non-empty.
fn parsed(text: &str) -> ParseOutcome {
    parse_edges(text).expect("specification should not be empty")
}

/// Assert that a parse produced exactly one reject, and return its reason.
fn single_reject(outcome: &ParseOutcome) -> &RejectReason {
    assert_eq!(
        outcome.rejects.len(),
        1,
        "expected exactly one reject, got {:?}",
        outcome.rejects
    );
    &outcome.rejects[0].reason
}
