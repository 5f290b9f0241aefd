use serde::Deserialize;

use crate::error::SelectionError;

/// A point on the drawing surface, as emitted by the routing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
}

/// One directed step of a returned path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Hop {
    pub start: MapPoint,
    pub end: MapPoint,
}

/// Wire shape of a `FindRoute` response.
///
/// The service serializes additional fields alongside `path` (per-hop and
/// total costs); they are irrelevant for drawing and ignored here. A
/// response that does not decode into this shape is an upstream error, not
/// a silent empty draw.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutePayload {
    #[serde(default)]
    pub path: Vec<Hop>,
}

/// A validated pair of landmark names.
///
/// Construction fails fast on an incomplete selection, so a query with a
/// missing endpoint can never reach the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    start: String,
    end: String,
}

impl RouteQuery {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, SelectionError> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(SelectionError::MissingStart);
        }
        if end.is_empty() {
            return Err(SelectionError::MissingEnd);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}
