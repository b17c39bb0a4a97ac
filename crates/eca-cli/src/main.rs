//! ECA CLI - play elementary cellular automata.
//!
//! Opens the desktop player by default; `eca run` plays in the terminal.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod terminal;

use commands::config as config_cmd;
use config::Config;
use terminal::Glyphs;

/// ECA CLI - elementary cellular automata, one generation per row.
///
/// Run `eca` to open the desktop player with the configured defaults.
#[derive(Parser, Debug)]
#[command(
    name = "eca",
    author,
    version,
    about = "Play elementary (Wolfram) cellular automata",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Simulation parameters shared by the playback commands.
///
/// Anything left out falls back to the configured defaults. Values are
/// validated together, so `--rule 300` fails with an invalid rule error.
#[derive(clap::Args, Debug, Default)]
struct ParamArgs {
    /// Rule number (0-255).
    #[arg(short, long, allow_hyphen_values = true)]
    rule: Option<i64>,

    /// Cells per generation.
    #[arg(short, long, allow_hyphen_values = true)]
    width: Option<i64>,

    /// Number of generations to play.
    #[arg(short, long, allow_hyphen_values = true)]
    steps: Option<i64>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the desktop player (default command).
    Viz {
        #[command(flatten)]
        params: ParamArgs,

        /// Cell edge length in pixels.
        #[arg(long)]
        cell_size: Option<u32>,
    },

    /// Play in the terminal, one line per generation.
    Run {
        #[command(flatten)]
        params: ParamArgs,

        /// Delay between generations in milliseconds.
        #[arg(long, conflicts_with = "no_delay")]
        delay_ms: Option<u64>,

        /// Print every generation back to back.
        #[arg(long)]
        no_delay: bool,

        /// Use '#' and '.' instead of block characters.
        #[arg(long)]
        ascii: bool,
    },

    /// Print the lookup table of a rule.
    Table {
        /// Rule number (0-255).
        #[arg(allow_hyphen_values = true)]
        rule: i64,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set
    let level = if cli.quiet {
        LevelFilter::ERROR
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN // Default to less noise
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // stdout carries the generations, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    // Default to the desktop player if no command given
    let command = cli.command.unwrap_or(Commands::Viz {
        params: ParamArgs::default(),
        cell_size: None,
    });

    match command {
        Commands::Viz { params, cell_size } => {
            let sim = config.params(params.rule, params.width, params.steps)?;
            let mut playback = config.playback();
            if let Some(cell_size) = cell_size {
                anyhow::ensure!(cell_size > 0, "cell size must be greater than 0");
                playback = playback.with_cell_size(cell_size);
            }
            commands::viz::execute(sim, playback)?;
        }

        Commands::Run {
            params,
            delay_ms,
            no_delay,
            ascii,
        } => {
            let sim = config.params(params.rule, params.width, params.steps)?;
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(delay_ms.unwrap_or(config.tick_delay_ms))
            };
            let playback = config.playback().with_tick_delay(delay);
            let glyphs = if ascii { Glyphs::ASCII } else { Glyphs::default() };
            commands::run::execute(sim, playback, glyphs).await?;
        }

        Commands::Table { rule, json } => {
            commands::table::execute(rule, json)?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
