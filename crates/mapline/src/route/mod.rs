//! Route-to-segment translation.

pub mod types;

use crate::edge::Edge;
use crate::error::UpstreamError;
use types::{Hop, RoutePayload};

/// Translate a decoded route into drawable segments, all in `color`.
///
/// Hop order is preserved exactly so the result renders as a connected
/// polyline rather than a disordered set of segments. An empty path is a
/// valid "nothing to draw" result, not an error.
///
/// The routing service owns coordinate validity. A hop outside the drawing
/// surface is a violation of its contract and surfaces as an
/// [`UpstreamError`], never as a local validation failure.
pub fn translate(payload: &RoutePayload, color: &str) -> Result<Vec<Edge>, UpstreamError> {
    let mut edges = Vec::with_capacity(payload.path.len());
    for hop in &payload.path {
        edges.push(translate_hop(hop, color)?);
    }
    Ok(edges)
}

fn translate_hop(hop: &Hop, color: &str) -> Result<Edge, UpstreamError> {
    Ok(Edge::new(
        color,
        hop.start.x,
        hop.start.y,
        hop.end.x,
        hop.end.y,
    )?)
}
