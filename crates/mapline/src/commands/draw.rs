use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::edge::EdgeList;
use crate::render::svg::{SvgOptions, SvgRenderer};
use crate::render::{Renderer, TextRenderer};
use crate::selection::SketchState;

/// Run the draw command: parse a manual edge specification and render the
/// surviving segments.
pub fn run(file: &Path, out: Option<PathBuf>, underlay: Option<String>) -> Result<()> {
    let text = read_spec(file)?;

    let (_state, outcome) = SketchState::default().draw(&text);
    let (edges, rejects) =
        outcome.with_context(|| format!("Nothing to draw from {}", file.display()))?;

    for reject in &rejects {
        eprintln!("{} {reject}", "warning:".yellow().bold());
    }

    emit(&edges, out, underlay)?;

    if !rejects.is_empty() {
        eprintln!(
            "{}",
            format!("Skipped {} malformed record(s).", rejects.len()).yellow()
        );
    }
    Ok(())
}

/// Read the specification text from a file, or stdin for `-`.
fn read_spec(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read specification from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))
    }
}

/// Shared output path for both drawing modes: an SVG overlay when `out` is
/// given, a plain segment listing on stdout otherwise.
pub fn emit(edges: &EdgeList, out: Option<PathBuf>, underlay: Option<String>) -> Result<()> {
    if edges.is_empty() {
        println!("{}", "No segments to draw.".yellow());
    }
    match out {
        Some(path) => {
            let config = Config::load_or_default();
            let options = SvgOptions {
                underlay: config.resolve_underlay(underlay.as_deref()),
                stroke_width: 0,
            };
            let writer = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            SvgRenderer::new(writer, options).render(edges)?;
            println!(
                "{}",
                format!("Drew {} segment(s) to {}", edges.len(), path.display()).green()
            );
        }
        None => {
            TextRenderer::new(std::io::stdout().lock()).render(edges)?;
        }
    }
    Ok(())
}
