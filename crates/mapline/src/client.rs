//! Blocking HTTP client for the landmark catalog and routing service.

use log::debug;

use crate::error::UpstreamError;
use crate::route::types::{RoutePayload, RouteQuery};

/// Where the routing service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4567";

pub struct RouteClient {
    agent: ureq::Agent,
    base_url: String,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the landmark catalog used to populate selection choices.
    pub fn landmarks(&self) -> Result<Vec<String>, UpstreamError> {
        let url = format!("{}/campusBuildings", self.base_url);
        debug!("GET {url}");
        let mut response = self.agent.get(&url).call()?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Ask the routing service for the shortest path between the two
    /// landmarks in `query`.
    ///
    /// The service answers `null` for a pair with no connecting path; that
    /// decodes to an empty payload, which the translator treats as a valid
    /// "nothing to draw" result.
    pub fn find_route(&self, query: &RouteQuery) -> Result<RoutePayload, UpstreamError> {
        let url = format!("{}/FindRoute", self.base_url);
        debug!("GET {url}?s={}&e={}", query.start(), query.end());
        let mut response = self
            .agent
            .get(&url)
            .query("s", query.start())
            .query("e", query.end())
            .call()?;
        let body = response.body_mut().read_to_string()?;
        let payload: Option<RoutePayload> = serde_json::from_str(&body)?;
        Ok(payload.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = RouteClient::new("http://localhost:4567/");
        assert_eq!(client.base_url, "http://localhost:4567");
    }

    #[test]
    fn test_unreachable_service_is_transport_error() {
        // Nothing listens on this port; the call must fail before any
        // payload handling.
        let client = RouteClient::new("http://127.0.0.1:1");
        let query = RouteQuery::new("A", "B").unwrap();
        assert!(matches!(
            client.find_route(&query),
            Err(UpstreamError::Transport(_))
        ));
    }

    #[test]
    fn test_null_payload_decodes_to_empty_path() {
        let payload: Option<RoutePayload> = serde_json::from_str("null").unwrap();
        assert!(payload.unwrap_or_default().path.is_empty());
    }
}
