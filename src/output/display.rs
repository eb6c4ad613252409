//! Display functions for command results

use super::formatters::{create_progress_bar, letter_tiles, rank_badge};
use crate::commands::{PoolAnalysis, SurveyStatistics};
use crate::game::GameReport;
use crate::leaderboard::{Metric, PlayerRecord};
use colored::Colorize;

/// Missed words shown before the list is cut short
const MISSED_SHOWN: usize = 15;

/// Print every word a pool allows
pub fn print_pool_analysis(result: &PoolAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POOL ANALYSIS:".bright_cyan().bold(),
        letter_tiles(&result.pool).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be made from these letters.".yellow());
        return;
    }

    println!(
        "\n📊 {} words, {} points if all were found",
        result.words.len().to_string().bright_yellow(),
        result.total_points.to_string().bright_yellow()
    );
    if let Some((word, points)) = result.best_word() {
        println!("   Best word:   {} ({points} pts)", word.bright_green().bold());
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let max_count = result.by_length.values().copied().max().unwrap_or(1);
    for (len, &count) in result.by_length.iter().rev() {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {len} letters: {} {count:4}", bar.green());
    }

    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for (word, points) in &result.words {
        println!("   {:<10} {points:>3}", word.bright_white());
    }
}

/// Print pool survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} difficulty {} ",
        "POOL SURVEY:".bright_cyan().bold(),
        stats.difficulty.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Settings:".bright_cyan().bold());
    println!("   Pools surveyed:   {}", stats.pools);
    println!("   Letters per pool: {}", stats.pool_len);
    println!("   Time limit:       {}s", stats.time_limit);

    println!("\n📈 {}", "Possible words per pool:".bright_cyan().bold());
    println!("   Fewest:  {}", stats.min_words.to_string().yellow());
    println!("   Most:    {}", stats.max_words.to_string().green());
    println!(
        "   Mean:    {}",
        format!("{:.1}", stats.mean_words).bright_yellow().bold()
    );
    if stats.dead_pools > 0 {
        println!(
            "   Dead pools:  {}",
            format!("{} (no words at all)", stats.dead_pools).red()
        );
    }
    if let Some((pool, count)) = &stats.richest {
        println!("   Richest: {} ({count} words)", pool.bright_white().bold());
    }
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());
}

/// Print a ranked leaderboard
pub fn print_leaderboard(records: &[PlayerRecord], metric: Metric) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} by {} ",
        "LEADERBOARD".bright_cyan().bold(),
        metric.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if records.is_empty() {
        println!("\n{}", "No games recorded yet.".yellow());
        return;
    }

    println!(
        "\n   {:<5} {:<16} {:>6} {:>6} {:>7} {:>7}",
        "", "Player", "Best", "Wins", "Games", "Avg"
    );
    for (i, record) in records.iter().enumerate() {
        println!(
            "   {:<5} {:<16} {:>6} {:>6} {:>7} {:>7.1}",
            rank_badge(i + 1),
            record.username,
            record.best_score,
            record.wins,
            record.games_played,
            record.average_score
        );
    }
}

/// Print the end-of-game results for one player
pub fn print_game_report(report: &GameReport) {
    let summary = &report.summary;

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    🏁  G A M E   O V E R  🏁    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    if let Some(opponent) = &report.opponent {
        let verdict = if report.won {
            "🏆 Victory!".bright_green().bold()
        } else if report.score == opponent.score {
            "🤝 It's a tie!".bright_yellow().bold()
        } else {
            "😅 Good try!".yellow().bold()
        };
        println!("\n  {verdict}");
        println!(
            "  You {}  vs  {} {}",
            report.score.to_string().bright_yellow().bold(),
            opponent.username,
            opponent.score.to_string().bright_yellow()
        );
    } else {
        println!(
            "\n  Final score: {}",
            report.score.to_string().bright_yellow().bold()
        );
    }

    println!(
        "  Words found: {} of {}",
        summary.found.len(),
        summary.possible.len()
    );
    let bar = create_progress_bar(f64::from(summary.accuracy), 100.0, 30);
    println!("  Accuracy:    {} {}%", bar.green(), summary.accuracy);

    if !summary.found.is_empty() {
        println!("\n  {}", "Your words:".bright_cyan().bold());
        println!("    {}", summary.found.join(", ").bright_white());
    }

    if !summary.missed.is_empty() {
        println!("\n  {}", "You missed:".bright_cyan().bold());
        let shown: Vec<&str> = summary
            .missed
            .iter()
            .take(MISSED_SHOWN)
            .map(String::as_str)
            .collect();
        print!("    {}", shown.join(", ").bright_black());
        if summary.missed.len() > MISSED_SHOWN {
            print!(" ... and {} more", summary.missed.len() - MISSED_SHOWN);
        }
        println!();
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
}
