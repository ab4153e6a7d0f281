//! Reel CLI
//!
//! Inspect the theme system from the command line:
//! - `reel state`: mode, host appearance, and effective appearance
//! - `reel palette`: the active palette as JSON or CSS variables
//! - `reel style <family>`: a resolved component style
//! - `reel cycle`: step the theme toggle and print each state
//! - `reel config`: the effective configuration as TOML

mod commands;
mod format;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reel_theme::{SystemAppearance, ThemeConfig, ThemeMode};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(about = "Inspect Reel theme state and component styles")]
#[command(version)]
struct Cli {
    /// Theme configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Mode to apply after mounting (light, dark, system)
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// Appearance reported by the host (light, dark, unknown)
    #[arg(long, global = true, default_value = "unknown")]
    host: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the current theme state
    State {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective palette
    Palette {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = PaletteFormat::Json)]
        format: PaletteFormat,
    },

    /// Resolve a component style
    Style {
        /// Component family (button, text, card, input)
        family: String,

        /// Variant name; unknown names use the default variant
        #[arg(long, default_value = "default")]
        variant: String,

        /// Size name; unknown names use the default size
        #[arg(long, default_value = "")]
        size: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Press the theme toggle repeatedly
    Cycle {
        /// Number of presses
        #[arg(short, long, default_value_t = 3)]
        steps: usize,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    Json,
    Css,
}

/// Settings shared by every command
pub struct Session {
    pub config: ThemeConfig,
    pub mode: Option<ThemeMode>,
    pub host: SystemAppearance,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let session = session(&cli)?;

    match cli.command {
        Commands::State { json } => commands::state(&session, json),
        Commands::Palette { format } => commands::palette(&session, format),
        Commands::Style {
            family,
            variant,
            size,
            json,
        } => commands::style(&session, &family, &variant, &size, json),
        Commands::Cycle { steps } => commands::cycle(&session, steps),
        Commands::Config => commands::config(&session),
    }
}

fn session(cli: &Cli) -> Result<Session> {
    let config = match &cli.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ThemeConfig::default(),
    };

    let mode = cli
        .mode
        .as_deref()
        .map(str::parse::<ThemeMode>)
        .transpose()
        .context("Invalid --mode")?;

    let host = cli
        .host
        .parse::<SystemAppearance>()
        .context("Invalid --host")?;

    Ok(Session { config, mode, host })
}
