use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::client::RouteClient;
use crate::config::Config;
use crate::route::{self, types::RouteQuery};
use crate::selection::{RequestFence, SelectionState};

/// Run the route command: select two landmarks, query the routing service,
/// and draw the returned path.
pub fn run(
    start: Option<String>,
    end: Option<String>,
    color: Option<String>,
    server: Option<String>,
    out: Option<PathBuf>,
    underlay: Option<String>,
) -> Result<()> {
    let config = Config::load_or_default();
    let base_url = config.resolve_base_url(server.as_deref());
    let color = config.resolve_color(color.as_deref());
    let client = RouteClient::new(&base_url);

    let (start, end) = complete_selection(&client, start, end)?;

    let state = SelectionState::default()
        .select_start(&start)
        .select_end(&end);

    // A CLI run has exactly one query in flight, but the fence still gates
    // the display update the same way an interactive frontend would.
    let mut fence = RequestFence::default();
    let token = fence.issue();

    let (_state, outcome) = state.draw(|s, e| {
        let query = RouteQuery::new(s, e)?;
        let payload = client.find_route(&query)?;
        Ok(route::translate(&payload, &color)?)
    });
    let edges = outcome.with_context(|| {
        format!("Could not draw a route from '{start}' to '{end}' via {base_url}")
    })?;

    if !fence.admits(token) {
        return Ok(());
    }

    if edges.is_empty() {
        println!(
            "{}",
            format!("No path between '{start}' and '{end}'.").yellow()
        );
        return Ok(());
    }
    crate::commands::draw::emit(&edges, out, underlay)
}

/// Fill in whichever endpoints were not given on the command line with an
/// interactive pick over the landmark catalog.
fn complete_selection(
    client: &RouteClient,
    start: Option<String>,
    end: Option<String>,
) -> Result<(String, String)> {
    if let (Some(start), Some(end)) = (&start, &end) {
        return Ok((start.clone(), end.clone()));
    }

    let landmarks = client
        .landmarks()
        .context("Could not load the landmark catalog from the routing service")?;
    if landmarks.is_empty() {
        anyhow::bail!("The routing service knows no landmarks.");
    }

    let start = match start {
        Some(start) => start,
        None => pick("Start landmark:", &landmarks)?,
    };
    let end = match end {
        Some(end) => end,
        None => pick("Destination landmark:", &landmarks)?,
    };
    Ok((start, end))
}

fn pick(prompt: &str, landmarks: &[String]) -> Result<String> {
    inquire::Select::new(prompt, landmarks.to_vec())
        .prompt()
        .context("No landmark selected")
}
