//! Word Rush - CLI
//!
//! Timed word-formation game with TUI and line modes, solo or head to head.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordrush::{
    commands::{analyze_pool, run_simple, run_survey},
    core::PlayerId,
    game::{GameReport, Player},
    leaderboard::{JsonFileStore, Metric, RecordStore, record_result, top},
    output::{print_leaderboard, print_pool_analysis, print_survey_statistics},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordrush",
    about = "Word Rush: make as many words as you can from a pool of letters before time runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// JSON file holding player records
    #[arg(short = 'r', long, global = true, default_value = "wordrush-records.json")]
    records: PathBuf,

    /// Player id used for records
    #[arg(short = 'p', long, global = true, default_value = "1")]
    player: String,

    /// Display name (default: Player<id>)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Log filter, e.g. 'debug' or 'wordrush=info' (default: RUST_LOG, then 'warn')
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solo game in the TUI (default)
    Play {
        /// Difficulty: more letters and less time as it rises
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        difficulty: i32,
    },

    /// Head-to-head match against a simulated opponent in the TUI
    Duel {
        /// Seconds before the opponent joins
        #[arg(long, default_value = "3")]
        join_delay: u32,

        /// Seconds between opponent words (0: opponent never plays)
        #[arg(long, default_value = "8")]
        opponent_pace: u32,
    },

    /// Solo game in plain line mode (no TUI)
    Simple {
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        difficulty: i32,
    },

    /// List every word a pool of letters can make
    Possible {
        /// Pool letters, e.g. 'AERTSC' or 'a e r t s c'
        letters: String,
    },

    /// Show ranked player records
    Leaderboard {
        /// best-score, wins, average-score or games-played
        #[arg(short, long, default_value = "best-score")]
        metric: Metric,

        /// Number of players to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Measure how many words generated pools allow
    Survey {
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        difficulty: i32,

        /// Number of pools to generate
        #[arg(short = 'c', long, default_value = "500")]
        pools: usize,
    },
}

/// Install the stderr log subscriber
///
/// `--log-level` wins over `RUST_LOG`; with neither only warnings are shown.
fn init_tracing(log_level: Option<&str>) {
    let filter = log_level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load the word list based on the -w flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    if source == "embedded" {
        return Ok(Dictionary::embedded());
    }

    let words = load_from_file(source).with_context(|| format!("Failed to read word list '{source}'"))?;
    anyhow::ensure!(!words.is_empty(), "Word list '{source}' has no usable words");
    Ok(Dictionary::new(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let dictionary = load_dictionary(&cli.words)?;
    let player_id = PlayerId::new(cli.player.clone());
    let username = cli.name.clone().unwrap_or_else(|| player_id.default_username());
    let player = Player::new(player_id, username);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: 1 });

    match command {
        Commands::Play { difficulty } => {
            let report = run_play_command(difficulty, player.clone(), &dictionary)?;
            record_game(&cli.records, &player, report.as_ref())
        }
        Commands::Duel {
            join_delay,
            opponent_pace,
        } => {
            let report = run_duel_command(player.clone(), &dictionary, join_delay, opponent_pace)?;
            record_game(&cli.records, &player, report.as_ref())
        }
        Commands::Simple { difficulty } => {
            let report = run_simple(difficulty, player.id.clone(), &dictionary)?;
            record_game(&cli.records, &player, report.as_ref())
        }
        Commands::Possible { letters } => {
            let result = analyze_pool(&letters, &dictionary)?;
            print_pool_analysis(&result);
            Ok(())
        }
        Commands::Leaderboard { metric, limit } => run_leaderboard_command(&cli.records, metric, limit),
        Commands::Survey { difficulty, pools } => {
            let stats = run_survey(difficulty, pools, &dictionary, &mut rand::rng());
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(difficulty: i32, player: Player, dictionary: &Dictionary) -> Result<Option<GameReport>> {
    use wordrush::interactive::{App, run_tui};

    let app = App::solo(difficulty, player, dictionary);
    let report = run_tui(app)?;
    if let Some(report) = &report {
        wordrush::output::print_game_report(report);
    }
    Ok(report)
}

fn run_duel_command(
    player: Player,
    dictionary: &Dictionary,
    join_delay: u32,
    opponent_pace: u32,
) -> Result<Option<GameReport>> {
    use wordrush::interactive::{App, run_tui};

    let app = App::duel(player, dictionary, join_delay, opponent_pace);
    let report = run_tui(app)?;
    if let Some(report) = &report {
        wordrush::output::print_game_report(report);
    }
    Ok(report)
}

/// Fold a finished game into the player's persisted record
fn record_game(path: &Path, player: &Player, report: Option<&GameReport>) -> Result<()> {
    let Some(report) = report else {
        return Ok(());
    };

    let mut store = JsonFileStore::new(path);
    let previous_best = store.get(&player.id).ok().map(|r| r.best_score);
    let record = record_result(&mut store, &player.id, &player.username, report.score, report.won)
        .with_context(|| format!("Failed to update records in {}", path.display()))?;

    println!(
        "\n📊 {}  best {}  games {}  wins {}  avg {:.1}",
        record.username.bright_cyan().bold(),
        record.best_score.to_string().bright_yellow(),
        record.games_played,
        record.wins,
        record.average_score
    );
    if report.score > 0 && previous_best.is_none_or(|best| report.score > best) {
        println!("{}", "✨ New personal best!".bright_green().bold());
    }
    Ok(())
}

fn run_leaderboard_command(path: &Path, metric: Metric, limit: usize) -> Result<()> {
    let store = JsonFileStore::new(path);
    let records = store
        .all()
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    print_leaderboard(&top(&records, metric, limit), metric);
    Ok(())
}
