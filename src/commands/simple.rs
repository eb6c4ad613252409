//! Simple interactive CLI mode
//!
//! Line-based solo game without the TUI. The clock runs on wall time and is
//! caught up each time a line is entered.

use crate::core::PlayerId;
use crate::game::{GameReport, GameSummary, Rejection, Session};
use crate::output::formatters::{format_time, letter_tiles};
use crate::output::print_game_report;
use crate::wordlists::WordOracle;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Run one solo game in the terminal
///
/// Returns `None` if the player quits before time runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<O: WordOracle + ?Sized>(
    difficulty: i32,
    owner: PlayerId,
    oracle: &O,
) -> Result<Option<GameReport>> {
    let mut session = Session::start(difficulty, owner, oracle, &mut rand::rng());

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Rush - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Make words of {}+ letters from the pool before the clock runs out.",
        crate::game::MIN_WORD_LEN
    );
    println!("Each pool letter can be used once per word. Longer words score more.");
    println!("Commands: ':quit' to give up, ':pool' to show the letters again\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let mut last_tick = Instant::now();

    print_status(&session);

    loop {
        let Some(input) = get_user_input(&mut lines, "Word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(None);
        };

        catch_up(&mut session, &mut last_tick);
        if session.is_ended() {
            println!("\n{}", "⏰ Time's up!".bright_red().bold());
            break;
        }

        match LineCommand::parse(&input) {
            LineCommand::Empty => {}
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(None);
            }
            LineCommand::ShowPool => print_status(&session),
            LineCommand::Unknown(command) => {
                println!("  {} unknown command ':{command}'", "✗".red().bold());
            }
            LineCommand::Word(word) => match session.submit(word) {
                Ok(accepted) => {
                    println!(
                        "  {} {} {}  score {}  combo x{}",
                        "✓".green().bold(),
                        accepted.word.bright_white().bold(),
                        format!("+{}", accepted.points).green(),
                        accepted.score.to_string().bright_yellow(),
                        session.multiplier()
                    );
                }
                Err(Rejection::SessionEnded) => {
                    println!("\n{}", "⏰ Time's up!".bright_red().bold());
                    break;
                }
                Err(rejection) => println!("  {} {rejection}", "✗".red().bold()),
            },
        }

        println!(
            "  {} left\n",
            format_time(session.time_remaining()).bright_cyan()
        );
    }

    let summary = GameSummary::new(session.pool(), session.found_words(), oracle);
    let report = GameReport {
        score: session.score(),
        won: false,
        opponent: None,
        summary,
    };
    print_game_report(&report);
    Ok(Some(report))
}

/// One line of player input
///
/// Commands carry a ':' prefix so that every word stays submittable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand<'a> {
    Empty,
    Quit,
    ShowPool,
    Unknown(&'a str),
    Word(&'a str),
}

impl<'a> LineCommand<'a> {
    fn parse(input: &'a str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return if input.is_empty() { Self::Empty } else { Self::Word(input) };
        };
        match command.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "pool" | "p" => Self::ShowPool,
            _ => Self::Unknown(command),
        }
    }
}

/// Apply one tick per whole second elapsed since `last_tick`
fn catch_up<O: WordOracle + ?Sized>(session: &mut Session<'_, O>, last_tick: &mut Instant) {
    let due = last_tick.elapsed().as_secs();
    for _ in 0..due {
        if session.is_ended() {
            break;
        }
        session.tick();
    }
    *last_tick += Duration::from_secs(due);
}

fn print_status<O: WordOracle + ?Sized>(session: &Session<'_, O>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Pool: {}   Time: {}   Score: {}",
        letter_tiles(session.pool()).bright_yellow().bold(),
        format_time(session.time_remaining()),
        session.score()
    );
    println!("────────────────────────────────────────────────────────────");
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
