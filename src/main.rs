//! Chain Reaction - CLI
//!
//! Daily thematic word-chain game with TUI and text modes, plus a few
//! inspection commands for the word banks.

use anyhow::{Context, Result, anyhow};
use chain_reaction::{
    bank::{
        ThematicBanks,
        loader::{embedded_associations, embedded_banks, load_banks_from_file},
    },
    commands::{daily_report, inspect_bank, run_simple, score_word},
    config::{GameConfig, GridSize},
    engine::Engine,
    game::{FileStore, MemoryStore, StateStore},
    output::{print_bank_report, print_daily_report, print_score_report},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chain_reaction",
    about = "Daily thematic word-chain game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file overriding the default rules
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Thematic bank TSV (base, word, difficulty, category) instead of the built-in banks
    #[arg(long, global = true)]
    banks: Option<PathBuf>,

    /// Save file for the current game; without it nothing is persisted
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// Grid side length: 5 or 6
    #[arg(short, long, global = true)]
    grid: Option<usize>,

    /// More logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple text mode (no TUI)
    Simple,

    /// Show the base word for a day
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Inspect a thematic bank by tier and category
    Words {
        /// Base word (default: today's word)
        #[arg(short, long)]
        base: Option<String>,

        /// Chain length used for tier unlocking
        #[arg(short = 'n', long, default_value = "1")]
        chain_length: usize,
    },

    /// Score a word against a base word
    Score {
        /// Word to score
        word: String,

        /// Base word (default: today's word)
        #[arg(short, long)]
        base: Option<String>,

        /// Chain length before the word is added
        #[arg(short = 'n', long, default_value = "1")]
        chain_length: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the TOML file, then command-line overrides
fn load_config(path: Option<&Path>, grid: Option<usize>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(side) = grid {
        config.grid_size =
            GridSize::from_side(side).ok_or_else(|| anyhow!("grid must be 5 or 6, got {side}"))?;
    }

    config.validate()?;
    Ok(config)
}

fn load_banks(path: Option<&Path>) -> Result<ThematicBanks> {
    match path {
        Some(path) => load_banks_from_file(path)
            .with_context(|| format!("loading banks from {}", path.display())),
        None => Ok(embedded_banks()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.grid)?;
    let banks = load_banks(cli.banks.as_deref())?;
    let associations = embedded_associations();
    let engine = Engine::new(&banks, &associations, &config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => match cli.state {
            Some(path) => run_play_command(engine, FileStore::new(path)),
            None => run_play_command(engine, MemoryStore::new()),
        },
        Commands::Simple => match cli.state {
            Some(path) => run_simple(engine, FileStore::new(path)).map_err(|e| anyhow!(e)),
            None => run_simple(engine, MemoryStore::new()).map_err(|e| anyhow!(e)),
        },
        Commands::Daily { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let report = daily_report(&engine, date)?;
            print_daily_report(&report);
            Ok(())
        }
        Commands::Words { base, chain_length } => {
            let base = resolve_base(&engine, base)?;
            let report = inspect_bank(&engine, &base, chain_length).map_err(|e| anyhow!(e))?;
            print_bank_report(&report);
            Ok(())
        }
        Commands::Score {
            word,
            base,
            chain_length,
        } => {
            let base = resolve_base(&engine, base)?;
            let report =
                score_word(&engine, &base, &word, chain_length).map_err(|e| anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
    }
}

/// The given base word, or today's
fn resolve_base(engine: &Engine<'_>, base: Option<String>) -> Result<String> {
    if let Some(base) = base {
        return Ok(base);
    }
    let today = Local::now().date_naive();
    let report = daily_report(engine, today)?;
    Ok(report.base_word)
}

fn run_play_command<S: StateStore>(engine: Engine<'_>, store: S) -> Result<()> {
    use chain_reaction::interactive::{App, run_tui};

    let app = App::new(engine, store)?;
    run_tui(app)
}
