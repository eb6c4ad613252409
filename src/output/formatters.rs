//! Formatting utilities for terminal output

use crate::core::LetterPool;

/// Render pool letters as tiles, e.g. `[C] [A] [T]`
#[must_use]
pub fn letter_tiles(pool: &LetterPool) -> String {
    pool.letters()
        .iter()
        .map(|&l| format!("[{}]", l as char))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format seconds as `m:ss`
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Medal for the top three places, `#n` after that
#[must_use]
pub fn rank_badge(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_pool_order() {
        let pool = LetterPool::parse("cat").unwrap();
        assert_eq!(letter_tiles(&pool), "[C] [A] [T]");
    }

    #[test]
    fn time_is_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(75), "1:15");
        assert_eq!(format_time(120), "2:00");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn badges() {
        assert_eq!(rank_badge(1), "🥇");
        assert_eq!(rank_badge(4), "#4");
    }
}
