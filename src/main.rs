//! Steam Shortcut Adder - registers a launcher as a non-Steam game.
//!
//! Provides both human-friendly and script-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing::debug;

use ssa::artwork::HttpFetcher;
use ssa::cli::{Cli, Commands, CompletionsArgs};
use ssa::config::{Settings, default_config_path, home_dir, load_config, load_optional_config};
use ssa::error::Result;
use ssa::logging::init_logging;
use ssa::output::{Output, OutputMode, VersionInfo};
use ssa::workflow::{AddShortcut, RunOptions};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        option_env!("VERGEN_GIT_DIRTY") == Some("true")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }
    if cli.no_color || !io::stderr().is_terminal() {
        console::set_colors_enabled_stderr(false);
    }

    let mode = OutputMode::from_cli(&cli);
    init_logging(mode.is_robot(), cli.verbose, cli.quiet);
    let out = mode.into_output();

    if let Err(e) = run(&cli, out.as_ref()) {
        out.error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, out: &dyn Output) -> Result<()> {
    match &cli.command {
        None => cmd_add(cli, out),
        Some(Commands::Version) => {
            cmd_version(out);
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            cmd_completions(args);
            Ok(())
        }
    }
}

fn cmd_add(cli: &Cli, out: &dyn Output) -> Result<()> {
    let home = home_dir()?;

    let (file, config_dir) = match &cli.config {
        Some(path) => (load_config(path)?, parent_dir(path)),
        None => match default_config_path() {
            Some(path) => (load_optional_config(&path)?, parent_dir(&path)),
            None => (Default::default(), home.clone()),
        },
    };

    let settings = Settings::resolve(&file, &cli.add.overrides(), &home, &config_dir)?;
    let options = RunOptions {
        dry_run: cli.add.dry_run,
        skip_artwork: cli.add.skip_artwork,
    };
    debug!(?options, "Starting add");

    let fetcher = HttpFetcher::new(settings.fetch_timeout);
    let report = AddShortcut::new(&settings, options).run(&fetcher, out)?;
    out.report(&report);
    Ok(())
}

fn parent_dir(path: &Path) -> std::path::PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn cmd_version(out: &dyn Output) {
    out.version_info(&VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty(),
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
    });
}

fn cmd_completions(args: &CompletionsArgs) {
    clap_complete::generate(args.shell, &mut Cli::command(), "ssa", &mut io::stdout());
}
