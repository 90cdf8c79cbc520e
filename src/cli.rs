//! CLI - Command Line Interface for FilmWise
//!
//! Run without a subcommand to open the interactive TUI. Subcommands print
//! catalog and configuration data, as JSON when piped.
//!
//! # Examples
//!
//! ```bash
//! # Open straight on the movies page with a slower carousel
//! filmwise --route /movies --interval-ms 5000
//!
//! # Dump catalog data
//! filmwise movies --genre crime --json
//! filmwise slides
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// FilmWise - browse movies and series from the terminal
///
/// Run without arguments to launch the interactive TUI.
#[derive(Parser, Debug)]
#[command(
    name = "filmwise",
    version,
    about = "Browse movies and series from the terminal",
    long_about = "A terminal front-end for the FilmWise catalog: a featured \
                  carousel, movie and series listings, and a collapsible \
                  header that adapts to narrow terminals.\n\n\
                  Run without arguments to launch the interactive TUI.",
    after_help = "EXAMPLES:\n\
                  filmwise                              Launch interactive TUI\n\
                  filmwise --route /movies              Open on the movies page\n\
                  filmwise movies --genre drama         List drama titles\n\
                  filmwise config --json                Show effective config"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tui: TuiArgs,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }

    /// Load the config file and apply command-line overrides
    pub fn effective_config(&self) -> Config {
        let (config, problem) = self.load_config();
        if let Some(e) = problem {
            log::warn!("{}; using defaults", e);
        }
        config
    }

    /// Like [`Cli::effective_config`], also returning why the file was not
    /// used when it exists but could not be read
    pub fn load_config(&self) -> (Config, Option<ConfigError>) {
        let (mut config, problem) = match self.config_path() {
            Some(path) => Config::load_checked(&path),
            None => {
                log::warn!("no config directory; using defaults");
                (Config::default(), None)
            }
        };
        self.tui.apply(&mut config);
        (config, problem)
    }

    /// Path of the config file in use
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Config::path)
    }
}

/// Options for the interactive session
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct TuiArgs {
    /// Page to open on launch (/, /movies, /series, /login, /about, /contact)
    #[arg(long, short = 'r')]
    pub route: Option<String>,

    /// Milliseconds between carousel advances
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Milliseconds a carousel transition lasts
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub transition_ms: Option<u64>,

    /// Start with the carousel paused
    #[arg(long)]
    pub no_autoplay: bool,
}

impl TuiArgs {
    /// Override config values with any flags given
    pub fn apply(&self, config: &mut Config) {
        if let Some(route) = &self.route {
            config.start_route = Some(route.clone());
        }
        if let Some(ms) = self.interval_ms {
            config.carousel.interval_ms = ms;
        }
        if let Some(ms) = self.transition_ms {
            config.carousel.transition_ms = ms;
        }
        if self.no_autoplay {
            config.carousel.autoplay = false;
        }
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the pages of the application
    Routes(RoutesCmd),

    /// List movies from the catalog
    #[command(visible_alias = "m")]
    Movies(MoviesCmd),

    /// List the featured carousel slides
    Slides(SlidesCmd),

    /// Show the effective configuration
    Config(ConfigCmd),
}

/// List all routes and their paths
#[derive(Args, Debug)]
pub struct RoutesCmd {}

/// List catalog movies
#[derive(Args, Debug)]
pub struct MoviesCmd {
    /// Only titles with this genre (case-insensitive)
    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// List featured slides
#[derive(Args, Debug)]
pub struct SlidesCmd {}

/// Show (and optionally write) the configuration
#[derive(Args, Debug)]
pub struct ConfigCmd {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub init: bool,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            success: false,
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print `data` as a JSON envelope, or as the text `plain` renders
    pub fn print<T, F>(&self, data: &T, plain: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", plain(data));
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
