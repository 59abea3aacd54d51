//! Flags shared by every `patternkit` subcommand.
//!
//! Flattened into [`super::Cli`], so `patternkit -q run observer` and
//! `patternkit run observer -q` mean the same thing.

use clap::Args;
use std::path::PathBuf;

/// Logging, output and config flags accepted before or after any subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log what the demo runner is doing on stderr.
    ///
    /// Demo output always goes to stdout; `-v` only adds diagnostics.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log demo runner activity to stderr (-v, -vv, -vvv)",
        long_help = "Log demo runner activity to stderr:
    (none)  - Warnings and errors only
    -v      - Which demo runs, where a journal is saved
    -vv     - Message routes, config layers, file writes
    -vvv    - Everything, including each port call"
    )]
    pub verbose: u8,

    /// Hide demo lines and status messages; errors still reach stderr.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide demo output and status messages"
    )]
    pub quiet: bool,

    /// Print demo headings and status lines without ANSI colour.
    ///
    /// Set automatically by `NO_COLOR` (<https://no-color.org>), or by
    /// `output.no_color = true` in the config file.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print headings and status lines without colour"
    )]
    pub no_color: bool,

    /// TOML file with `[demo]`, `[journal]` and `[output]` settings.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Settings file (drink amount, favourite channel, journal path)",
        long_help = "Settings file with [demo], [journal] and [output] tables.
Must exist, except for `init` and `config set`, which create it.
Without this flag the per-user config location is used if present."
    )]
    pub config: Option<PathBuf>,

    /// How headings, listings and status lines are rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Rendering of headings and listings"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for the terminal side of the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured headings on a terminal, plain text when piped.
    #[default]
    Auto,
    /// Coloured headings and status lines.
    Human,
    /// Demo lines only, no colour.
    Plain,
    /// `list` prints the catalog as JSON.
    Json,
}
