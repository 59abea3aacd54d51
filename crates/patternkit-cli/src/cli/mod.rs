//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use patternkit_core::{application::DemoFamily, domain::DrinkKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patternkit",
    bin_name = "patternkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Classic design patterns and SOLID principles, runnable",
    long_about = "patternkit runs small, scripted demonstrations of the Gang of Four \
                  patterns and the SOLID principles and prints what each one does.",
    after_help = "EXAMPLES:\n\
        \x20 patternkit run observer\n\
        \x20 patternkit run --all\n\
        \x20 patternkit list --family structural\n\
        \x20 patternkit send --kind 1 --text \"hello\"\n\
        \x20 patternkit completions bash > /usr/share/bash-completion/completions/patternkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one demo, or all of them.
    #[command(
        visible_alias = "r",
        about = "Run a pattern demo",
        after_help = "EXAMPLES:\n\
            \x20 patternkit run composite\n\
            \x20 patternkit run ocp\n\
            \x20 patternkit run --all"
    )]
    Run(RunArgs),

    /// List the demo catalog.
    #[command(
        visible_alias = "ls",
        about = "List available demos",
        after_help = "EXAMPLES:\n\
            \x20 patternkit list\n\
            \x20 patternkit list --family principle\n\
            \x20 patternkit list --format json"
    )]
    List(ListArgs),

    /// Send a message over the SMS / email bridge.
    #[command(
        about = "Send a message through the bridge",
        after_help = "EXAMPLES:\n\
            \x20 patternkit send --kind 1 --text \"a long hello\"\n\
            \x20 patternkit send --kind 2 --text \"hi\"\n\
            \x20 patternkit send            # prompts for both"
    )]
    Send(SendArgs),

    /// Order a hot drink from the abstract factory.
    #[command(
        about = "Make a hot drink",
        after_help = "EXAMPLES:\n\
            \x20 patternkit drink tea\n\
            \x20 patternkit drink coffee --amount 50"
    )]
    Drink(DrinkArgs),

    /// Write journal entries and optionally save them.
    #[command(
        about = "Keep a journal",
        after_help = "EXAMPLES:\n\
            \x20 patternkit journal \"I cried today\" \"I ate a bug\"\n\
            \x20 patternkit journal \"note\" --output notes/journal.txt\n\
            \x20 patternkit journal \"note\" --save --force"
    )]
    Journal(JournalArgs),

    /// Initialise a patternkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 patternkit init\n\
            \x20 patternkit init --force\n\
            \x20 patternkit --config ./patternkit.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patternkit completions bash > ~/.local/share/bash-completion/completions/patternkit\n\
            \x20 patternkit completions zsh  > ~/.zfunc/_patternkit\n\
            \x20 patternkit completions fish > ~/.config/fish/completions/patternkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the patternkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternkit config get demo.drink_amount\n\
            \x20 patternkit config set demo.channel 9\n\
            \x20 patternkit config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Commands that create the config file, so it may not exist yet.
    pub fn writes_config(&self) -> bool {
        matches!(
            self,
            Self::Init(_) | Self::Config(ConfigCommands::Set { .. })
        )
    }
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit run`.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["demo", "all"])))]
pub struct RunArgs {
    /// Demo name or alias, as shown by `patternkit list`.
    #[arg(value_name = "DEMO", help = "Demo to run (name or alias)")]
    pub demo: Option<String>,

    /// Run every demo in catalog order.
    #[arg(long = "all", help = "Run every demo")]
    pub all: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one pattern family.
    #[arg(short = 'f', long = "family", value_enum, help = "Filter by family")]
    pub family: Option<FamilyArg>,

    /// Output format.  Falls back to `output.format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

/// Pattern families accepted by `--family`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Creational,
    Structural,
    Behavioral,
    #[value(alias = "solid")]
    Principle,
}

impl From<FamilyArg> for DemoFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Creational => Self::Creational,
            FamilyArg::Structural => Self::Structural,
            FamilyArg::Behavioral => Self::Behavioral,
            FamilyArg::Principle => Self::Principle,
        }
    }
}

// ── send ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit send`.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// `1` sends a long message by SMS, any other number a short one by email.
    #[arg(short = 'k', long = "kind", value_name = "N", allow_hyphen_values = true)]
    pub kind: Option<String>,

    /// Message body.
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    pub text: Option<String>,
}

// ── drink ─────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit drink`.
#[derive(Debug, Args)]
pub struct DrinkArgs {
    /// Drink to make.
    #[arg(value_enum, value_name = "DRINK")]
    pub drink: DrinkArg,

    /// Millilitres to pour.  Defaults to `demo.drink_amount`.
    #[arg(short = 'a', long = "amount", value_name = "ML")]
    pub amount: Option<u32>,
}

/// Drinks the machine serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DrinkArg {
    Tea,
    Coffee,
}

impl From<DrinkArg> for DrinkKind {
    fn from(arg: DrinkArg) -> Self {
        match arg {
            DrinkArg::Tea => Self::Tea,
            DrinkArg::Coffee => Self::Coffee,
        }
    }
}

// ── journal ───────────────────────────────────────────────────────────────────

/// Arguments for `patternkit journal`.
#[derive(Debug, Args)]
pub struct JournalArgs {
    /// Entries, in order.
    #[arg(value_name = "ENTRY", required = true, num_args = 1..)]
    pub entries: Vec<String>,

    /// Save the journal to this file.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the journal to `journal.path` from the config.
    #[arg(long = "save", conflicts_with = "output")]
    pub save: bool,

    /// Replace an existing journal file.
    #[arg(long = "force", help = "Overwrite an existing journal file")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `patternkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `patternkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `demo.drink_amount`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_by_name() {
        let cli = Cli::parse_from(["patternkit", "run", "observer"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.demo.as_deref(), Some("observer"));
                assert!(!args.all);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn run_needs_a_demo_or_all() {
        assert!(Cli::try_parse_from(["patternkit", "run"]).is_err());
        assert!(Cli::try_parse_from(["patternkit", "run", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["patternkit", "run", "ocp", "--all"]).is_err());
    }

    #[test]
    fn drink_maps_to_domain_kind() {
        let cli = Cli::parse_from(["patternkit", "drink", "coffee", "--amount", "40"]);
        if let Commands::Drink(args) = cli.command {
            assert_eq!(DrinkKind::from(args.drink), DrinkKind::Coffee);
            assert_eq!(args.amount, Some(40));
        } else {
            panic!("expected Drink command");
        }
    }

    #[test]
    fn solid_is_an_alias_for_principle() {
        let cli = Cli::parse_from(["patternkit", "list", "--family", "solid"]);
        if let Commands::List(args) = cli.command {
            assert_eq!(args.family, Some(FamilyArg::Principle));
            assert_eq!(DemoFamily::from(FamilyArg::Principle), DemoFamily::Principle);
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn journal_requires_entries_and_rejects_two_targets() {
        assert!(Cli::try_parse_from(["patternkit", "journal"]).is_err());
        assert!(
            Cli::try_parse_from(["patternkit", "journal", "x", "--save", "--output", "j.txt"])
                .is_err()
        );
    }

    #[test]
    fn send_accepts_raw_selector_text() {
        let cli = Cli::parse_from(["patternkit", "send", "--kind", "-3", "--text", "hi"]);
        if let Commands::Send(args) = cli.command {
            assert_eq!(args.kind.as_deref(), Some("-3"));
            assert_eq!(args.text.as_deref(), Some("hi"));
        } else {
            panic!("expected Send command");
        }
    }

    #[test]
    fn init_and_config_set_write_config() {
        let writes = |args: &[&str]| Cli::parse_from(args).command.writes_config();
        assert!(writes(&["patternkit", "init"]));
        assert!(writes(&["patternkit", "config", "set", "demo.channel", "9"]));
        assert!(!writes(&["patternkit", "config", "get", "demo.channel"]));
        assert!(!writes(&["patternkit", "list"]));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["patternkit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
