//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Overrides;

/// Steam Shortcut Adder - register a launcher as a non-Steam game.
///
/// Running `ssa` with no subcommand adds the shortcut, then downloads its
/// library artwork. Robot Mode: use --robot for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "ssa", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "SSA_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors and the final summary only)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file (default: <config dir>/ssa/config.toml)
    #[arg(long, short = 'c', global = true, env = "SSA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub add: AddArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the default add action.
///
/// # Examples
///
/// ```bash
/// # Detect PollyMC and add "Minecraft Splitscreen"
/// ssa
///
/// # Register a different launcher under another name
/// ssa --app-name "My Game" --exe ~/bin/game.sh --start-dir ~/bin
///
/// # Preview the insertion
/// ssa --dry-run
/// ```
#[derive(Parser, Debug, Default)]
pub struct AddArgs {
    /// Shortcut name shown in the Steam library
    #[arg(long, short = 'n', env = "SSA_APP_NAME")]
    pub app_name: Option<String>,

    /// Launch target; skips launcher detection
    #[arg(long, value_name = "PATH")]
    pub exe: Option<String>,

    /// Working directory for --exe (default: its parent directory)
    #[arg(long, value_name = "DIR", requires = "exe")]
    pub start_dir: Option<String>,

    /// Steam userdata directory (default: ~/.steam/steam/userdata)
    #[arg(long, value_name = "DIR", env = "SSA_STEAM_USERDATA")]
    pub steam_userdata: Option<PathBuf>,

    /// Timeout per artwork download, in seconds
    #[arg(long, value_name = "SECS")]
    pub fetch_timeout: Option<u64>,

    /// Do not download artwork
    #[arg(long)]
    pub skip_artwork: bool,

    /// Show what would be written without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl AddArgs {
    /// Flag values that take precedence over the config file.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            app_name: self.app_name.clone(),
            exe: self.exe.clone(),
            start_dir: self.start_dir.clone(),
            steam_userdata: self.steam_userdata.clone(),
            fetch_timeout_secs: self.fetch_timeout,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
