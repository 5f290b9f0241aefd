use anyhow::{Context, Result};
use colored::Colorize;

use crate::client::RouteClient;
use crate::config::Config;

/// Run the landmarks command: print the catalog of selectable landmarks.
pub fn run(server: Option<String>) -> Result<()> {
    let config = Config::load_or_default();
    let base_url = config.resolve_base_url(server.as_deref());
    let client = RouteClient::new(&base_url);

    let mut landmarks = client
        .landmarks()
        .with_context(|| format!("Could not load the landmark catalog from {base_url}"))?;
    landmarks.sort();

    if landmarks.is_empty() {
        println!("{}", "The routing service knows no landmarks.".yellow());
        return Ok(());
    }

    for landmark in &landmarks {
        println!("{landmark}");
    }
    println!("{}", format!("{} landmark(s)", landmarks.len()).green());
    Ok(())
}
