//! Selection state machines for the two drawing modes.
//!
//! Landmark mode walks `Idle -> Selecting -> Ready -> Drawn`; manual-text
//! mode only toggles `Idle <-> Drawn`. The two machines are deliberately
//! separate. State is an immutable value: every transition consumes the old
//! state and returns the new one, together with what the display should do.

use crate::edge::{Edge, EdgeList};
use crate::error::{PipelineError, SelectionError, ValidationError};
use crate::parser::{self, RecordReject};

/// What the display should do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEffect {
    /// Leave whatever is currently rendered untouched.
    Keep,
    /// Replace the rendered segments with this list (`EdgeList::None`
    /// clears the display).
    Replace(EdgeList),
}

/// Landmark-mode selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No selection, nothing drawn.
    #[default]
    Idle,
    /// Exactly one endpoint chosen so far.
    Selecting {
        start: Option<String>,
        end: Option<String>,
    },
    /// Both endpoints chosen; a draw may be attempted.
    Ready { start: String, end: String },
    /// Edges were computed and handed to the renderer.
    Drawn { start: String, end: String },
}

impl SelectionState {
    /// Choose (or clear, with an empty name) the start landmark.
    pub fn select_start(self, name: &str) -> SelectionState {
        let (_, end) = self.into_names();
        normalized(non_empty(name), end)
    }

    /// Choose (or clear, with an empty name) the destination landmark.
    pub fn select_end(self, name: &str) -> SelectionState {
        let (start, _) = self.into_names();
        normalized(start, non_empty(name))
    }

    /// Drop the whole selection and clear the display.
    pub fn reset(self) -> (SelectionState, DisplayEffect) {
        (SelectionState::Idle, DisplayEffect::Replace(EdgeList::None))
    }

    /// Attempt to draw the currently selected route.
    ///
    /// `route` runs the query-and-translate pipeline for the selected pair.
    /// On success the machine moves to `Drawn` and the resulting list
    /// replaces the display. On failure the machine stays in `Ready` (the
    /// selection is still valid) and the display is untouched, so a
    /// previously drawn result is not lost. Drawing with an incomplete
    /// selection fails before `route` is ever invoked.
    pub fn draw<F>(self, route: F) -> (SelectionState, Result<EdgeList, PipelineError>)
    where
        F: FnOnce(&str, &str) -> Result<Vec<Edge>, PipelineError>,
    {
        let (start, end) = self.into_names();
        match (start, end) {
            (Some(start), Some(end)) => match route(&start, &end) {
                Ok(edges) => (
                    SelectionState::Drawn { start, end },
                    Ok(EdgeList::from(edges)),
                ),
                Err(e) => (SelectionState::Ready { start, end }, Err(e)),
            },
            (None, end) => (
                normalized(None, end),
                Err(SelectionError::MissingStart.into()),
            ),
            (start, None) => (
                normalized(start, None),
                Err(SelectionError::MissingEnd.into()),
            ),
        }
    }

    fn into_names(self) -> (Option<String>, Option<String>) {
        match self {
            SelectionState::Idle => (None, None),
            SelectionState::Selecting { start, end } => (start, end),
            SelectionState::Ready { start, end } | SelectionState::Drawn { start, end } => {
                (Some(start), Some(end))
            }
        }
    }
}

/// Canonical state for a pair of possibly-chosen names.
fn normalized(start: Option<String>, end: Option<String>) -> SelectionState {
    match (start, end) {
        (Some(start), Some(end)) => SelectionState::Ready { start, end },
        (None, None) => SelectionState::Idle,
        (start, end) => SelectionState::Selecting { start, end },
    }
}

fn non_empty(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Manual-text mode: either nothing is drawn, or the last parsed
/// specification is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SketchState {
    #[default]
    Idle,
    Drawn,
}

impl SketchState {
    /// Parse `text` and draw the surviving edges.
    ///
    /// Rejected records come back as diagnostics next to the edge list so
    /// the caller can surface every one of them. An empty specification is
    /// a validation failure and leaves the state unchanged.
    #[allow(clippy::type_complexity)]
    pub fn draw(
        self,
        text: &str,
    ) -> (SketchState, Result<(EdgeList, Vec<RecordReject>), ValidationError>) {
        match parser::parse_edges(text) {
            Ok(outcome) => (
                SketchState::Drawn,
                Ok((EdgeList::from(outcome.edges), outcome.rejects)),
            ),
            Err(e) => (self, Err(e)),
        }
    }

    /// Drop the sketch and clear the display.
    pub fn clear(self) -> (SketchState, DisplayEffect) {
        (SketchState::Idle, DisplayEffect::Replace(EdgeList::None))
    }
}

/// Monotonic fence for in-flight route queries.
///
/// Issuing a new query does not cancel the previous one, so a slow response
/// can arrive after a newer query was sent. Each query takes a token; only
/// a completion carrying the latest token may update the display.
#[derive(Debug, Default)]
pub struct RequestFence {
    latest: u64,
}

/// Token tying a completion back to the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestFence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether a completed query with `token` may update the display.
    pub fn admits(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamError;

    fn ready(start: &str, end: &str) -> SelectionState {
        SelectionState::Ready {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_select_start_then_end_reaches_ready() {
        let state = SelectionState::default()
            .select_start("Suzzallo")
            .select_end("Drumheller Fountain");
        assert_eq!(state, ready("Suzzallo", "Drumheller Fountain"));
    }

    #[test]
    fn test_single_choice_is_selecting() {
        let state = SelectionState::default().select_end("Suzzallo");
        assert_eq!(
            state,
            SelectionState::Selecting {
                start: None,
                end: Some("Suzzallo".to_string()),
            }
        );
    }

    #[test]
    fn test_clearing_both_choices_returns_to_idle() {
        let state = SelectionState::default()
            .select_start("Suzzallo")
            .select_start("");
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn test_reset_clears_display_from_any_state() {
        for state in [
            SelectionState::Idle,
            SelectionState::default().select_start("A"),
            ready("A", "B"),
            SelectionState::Drawn {
                start: "A".to_string(),
                end: "B".to_string(),
            },
        ] {
            let (next, effect) = state.reset();
            assert_eq!(next, SelectionState::Idle);
            assert_eq!(effect, DisplayEffect::Replace(EdgeList::None));
        }
    }

    #[test]
    fn test_draw_from_ready_reaches_drawn() {
        let edge = Edge::new("red", 0, 0, 5, 5).unwrap();
        let expected = edge.clone();
        let (state, result) = ready("A", "B").draw(|_, _| Ok(vec![edge]));
        assert!(matches!(state, SelectionState::Drawn { .. }));
        assert_eq!(result.unwrap(), EdgeList::from(vec![expected]));
    }

    #[test]
    fn test_draw_passes_selected_names() {
        let (_, result) = ready("Suzzallo", "Chemistry Library").draw(|start, end| {
            assert_eq!(start, "Suzzallo");
            assert_eq!(end, "Chemistry Library");
            Ok(vec![])
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_failed_draw_stays_ready() {
        let (state, result) = ready("A", "B").draw(|_, _| {
            Err(UpstreamError::Transport("connection refused".to_string()).into())
        });
        assert_eq!(state, ready("A", "B"));
        assert!(matches!(result, Err(PipelineError::Upstream(_))));
    }

    #[test]
    fn test_draw_with_incomplete_selection_never_runs_route() {
        let (state, result) = SelectionState::default()
            .select_end("B")
            .draw(|_, _| panic!("route must not run for an incomplete selection"));
        assert!(matches!(state, SelectionState::Selecting { .. }));
        assert!(matches!(
            result,
            Err(PipelineError::Selection(SelectionError::MissingStart))
        ));
    }

    #[test]
    fn test_redraw_from_drawn_is_allowed() {
        let drawn = SelectionState::Drawn {
            start: "A".to_string(),
            end: "B".to_string(),
        };
        let (state, result) = drawn.draw(|_, _| Ok(vec![]));
        assert!(matches!(state, SelectionState::Drawn { .. }));
        assert_eq!(result.unwrap(), EdgeList::Edges(vec![]));
    }

    #[test]
    fn test_sketch_draw_and_clear() {
        let (state, result) = SketchState::default().draw("1 1 2 2 red");
        assert_eq!(state, SketchState::Drawn);
        let (edges, rejects) = result.unwrap();
        assert_eq!(edges.len(), 1);
        assert!(rejects.is_empty());

        let (state, effect) = state.clear();
        assert_eq!(state, SketchState::Idle);
        assert_eq!(effect, DisplayEffect::Replace(EdgeList::None));
    }

    #[test]
    fn test_sketch_empty_text_keeps_state() {
        let (state, result) = SketchState::Drawn.draw("");
        assert_eq!(state, SketchState::Drawn);
        assert_eq!(result.unwrap_err(), ValidationError::EmptySpecification);
    }

    #[test]
    fn test_fence_admits_only_latest_token() {
        let mut fence = RequestFence::default();
        let first = fence.issue();
        let second = fence.issue();
        assert!(!fence.admits(first));
        assert!(fence.admits(second));
    }

    #[test]
    fn test_fence_tokens_are_monotonic() {
        let mut fence = RequestFence::default();
        let a = fence.issue();
        let b = fence.issue();
        assert_ne!(a, b);
    }
}
