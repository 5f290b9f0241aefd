use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mapline")]
#[command(author, version, about)]
#[command(long_about = "Draw line segments and shortest campus routes over a map grid.\n\n\
    Describe segments by hand, or ask the routing service for the shortest\n\
    path between two landmarks and draw the result.\n\n\
    Examples:\n  \
    mapline draw edges.txt               List the parsed segments\n  \
    mapline draw edges.txt -o out.svg    Render them as an SVG overlay\n  \
    mapline route Suzzallo \"Drumheller Fountain\"\n  \
    mapline landmarks                    Show the selectable landmarks")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a manual edge specification and draw it
    Draw {
        /// Specification file with one `X1 Y1 X2 Y2 COLOR` record per
        /// line, or `-` for stdin
        file: PathBuf,

        /// Write an SVG overlay here instead of listing segments
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Image reference drawn underneath the segments in the SVG
        #[arg(long)]
        underlay: Option<String>,
    },

    /// Query the shortest route between two landmarks and draw it
    Route {
        /// Start landmark (picked interactively when omitted)
        start: Option<String>,

        /// Destination landmark (picked interactively when omitted)
        end: Option<String>,

        /// Display color for the route segments
        #[arg(short, long)]
        color: Option<String>,

        /// Base URL of the routing service
        #[arg(long)]
        server: Option<String>,

        /// Write an SVG overlay here instead of listing segments
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Image reference drawn underneath the segments in the SVG
        #[arg(long)]
        underlay: Option<String>,
    },

    /// List the landmarks known to the routing service
    Landmarks {
        /// Base URL of the routing service
        #[arg(long)]
        server: Option<String>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. server.base_url, defaults.color)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Draw {
                file,
                out,
                underlay,
            } => crate::commands::draw::run(&file, out, underlay),
            Commands::Route {
                start,
                end,
                color,
                server,
                out,
                underlay,
            } => crate::commands::route::run(start, end, color, server, out, underlay),
            Commands::Landmarks { server } => crate::commands::landmarks::run(server),
            Commands::Config { command } => crate::commands::config::run(command),
            Commands::Completion { shell } => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Commands::Version => {
                println!("mapline {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}
