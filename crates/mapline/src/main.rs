use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod commands;
mod config;
mod edge;
mod error;
mod parser;
mod render;
mod route;
mod selection;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use simplelog::{ColorChoice, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    if TermLogger::init(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        let _ = SimpleLogger::init(level, log_config);
    }
}
