//! TUI rendering with ratatui
//!
//! Pool tiles, the word in progress, the clock and the found-word list.

use super::app::{App, Game, InputMode, MessageStyle};
use crate::output::formatters::format_time;
use crate::wordlists::WordOracle;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let title = match app.game {
        Game::Solo(ref session) => format!("⚡ WORD RUSH - Solo (difficulty {})", session.difficulty()),
        Game::Duel { .. } => "⚔️  WORD RUSH - Head to Head".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Clock
            Constraint::Length(5), // Tiles
            Constraint::Min(4),    // Scores
        ])
        .split(area);

    render_clock(f, app, chunks[0]);
    render_tiles(f, app, chunks[1]);
    render_scores(f, app, chunks[2]);
}

fn render_clock<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let (remaining, limit) = app.clock();
    let percent = if limit == 0 {
        0
    } else {
        u16::try_from(u64::from(remaining) * 100 / u64::from(limit)).unwrap_or(100)
    };
    let color = match remaining {
        0..=10 => Color::Red,
        11..=30 => Color::Yellow,
        _ => Color::Green,
    };

    let label = if app.is_waiting() {
        "Waiting for opponent...".to_string()
    } else {
        format!("{} left", format_time(remaining))
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_tiles<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let block = Block::default()
        .title(" Letters ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match (app.pool(), app.selection()) {
        _ if app.is_waiting() => vec![Line::from("Letters appear when the match starts")],
        (Some(pool), Some(selection)) => {
            let tiles: Vec<Span> = pool
                .letters()
                .iter()
                .enumerate()
                .flat_map(|(i, &letter)| {
                    let style = if selection.is_used(i) {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    };
                    [
                        Span::styled(format!(" {} ", letter as char), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            vec![Line::from(""), Line::from(tiles).alignment(Alignment::Center)]
        }
        _ => vec![Line::from("No letters")],
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_scores<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{:<12}", app.player.username)),
        Span::styled(
            app.score().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(multiplier) = app.multiplier() {
        let style = if multiplier > 1 {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", "Combo")),
            Span::styled(format!("x{multiplier}"), style),
        ]));
    }

    if let Some(opponent) = app.opponent() {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", opponent.username)),
            Span::styled(opponent.score.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_side_panel<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_found_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found_words<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let words = app.my_words();
    let items: Vec<ListItem> = words
        .iter()
        .rev()
        .map(|w| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", w.text), Style::default().fg(Color::Green)),
                Span::styled(format!(" +{}", w.points), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found ({}) ", words.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let word = app.current_word();
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (" 🏁 GAME OVER | Enter or q to exit ", String::new(), Color::Green),
        InputMode::Playing if app.is_waiting() => (" Finding opponent... ", String::new(), Color::DarkGray),
        InputMode::Playing => (" Your word | Enter to submit ", word, Color::Yellow),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<O: WordOracle + ?Sized>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "Enter/q: Exit",
        InputMode::Playing => "Letters: Type | Backspace: Undo letter | Esc: Clear | Ctrl+C: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
