//! TUI application state and logic

use crate::core::{LetterPool, PlayerId, Selection};
use crate::game::{
    FoundWord, GameReport, GameSummary, Match, MatchDriver, MatchRegistry, MatchStatus, OpponentBot,
    Outcome, Player, Rejection, Session, SessionStatus, SimulatedMatchmaker, TickReport,
};
use crate::wordlists::WordOracle;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// One second of game time per tick
const TICK: Duration = Duration::from_secs(1);

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 6;

/// The game being played
pub enum Game<'a, O: WordOracle + ?Sized> {
    Solo(Session<'a, O>),
    Duel {
        registry: MatchRegistry<'a, O>,
        driver: MatchDriver<SimulatedMatchmaker>,
    },
}

/// Application state
pub struct App<'a, O: WordOracle + ?Sized> {
    pub game: Game<'a, O>,
    pub player: Player,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub report: Option<GameReport>,
    oracle: &'a O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, O: WordOracle + ?Sized> App<'a, O> {
    /// Solo game at `difficulty` with a fresh random pool
    #[must_use]
    pub fn solo(difficulty: i32, player: Player, oracle: &'a O) -> Self {
        let session = Session::start(difficulty, player.id.clone(), oracle, &mut rand::rng());
        Self::from_session(session, player)
    }

    /// Solo game over an existing session
    #[must_use]
    pub fn from_session(session: Session<'a, O>, player: Player) -> Self {
        let oracle = session.oracle();
        let mut app = Self::with_game(Game::Solo(session), player, oracle);
        app.add_message(
            "Type letters from the pool and press Enter to submit.",
            MessageStyle::Info,
        );
        app.add_message("Longer words score more. 6+ letters build a combo!", MessageStyle::Info);
        app
    }

    /// Match against the simulated opponent
    ///
    /// The opponent joins after `join_after` seconds and plays a word every
    /// `opponent_pace` seconds (0 for a passive opponent).
    #[must_use]
    pub fn duel(player: Player, oracle: &'a O, join_after: u32, opponent_pace: u32) -> Self {
        let mut registry = MatchRegistry::new(oracle);
        let id = registry.find_match(player.clone());
        let driver = MatchDriver::new(
            id,
            SimulatedMatchmaker::new(join_after),
            OpponentBot::new(opponent_pace),
        );

        let mut app = Self::with_game(Game::Duel { registry, driver }, player, oracle);
        app.add_message("Waiting for opponent to join...", MessageStyle::Info);
        app
    }

    fn with_game(game: Game<'a, O>, player: Player, oracle: &'a O) -> Self {
        Self {
            game,
            player,
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            should_quit: false,
            report: None,
            oracle,
        }
    }

    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        &self.player.id
    }

    /// The match, in duel mode
    #[must_use]
    pub fn current_match(&self) -> Option<&Match> {
        match &self.game {
            Game::Solo(_) => None,
            Game::Duel { registry, driver } => registry.get(driver.match_id()),
        }
    }

    /// True while a duel still waits for its opponent
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.current_match()
            .is_some_and(|m| m.status() == MatchStatus::Waiting)
    }

    #[must_use]
    pub fn pool(&self) -> Option<&LetterPool> {
        match &self.game {
            Game::Solo(session) => Some(session.pool()),
            Game::Duel { .. } => self.current_match().map(Match::pool),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        match &self.game {
            Game::Solo(session) => Some(session.selection()),
            Game::Duel { .. } => self.current_match()?.selection(&self.player.id),
        }
    }

    #[must_use]
    pub fn current_word(&self) -> String {
        self.selection().map(Selection::word).unwrap_or_default()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        match &self.game {
            Game::Solo(session) => session.score(),
            Game::Duel { .. } => self
                .current_match()
                .and_then(|m| m.player(&self.player.id))
                .map_or(0, |p| p.score),
        }
    }

    /// Combo multiplier (solo only)
    #[must_use]
    pub fn multiplier(&self) -> Option<u8> {
        match &self.game {
            Game::Solo(session) => Some(session.multiplier()),
            Game::Duel { .. } => None,
        }
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&Player> {
        self.current_match()?.opponent_of(&self.player.id)
    }

    /// Seconds left and the full limit
    #[must_use]
    pub fn clock(&self) -> (u32, u32) {
        match &self.game {
            Game::Solo(session) => (session.time_remaining(), session.time_limit()),
            Game::Duel { .. } => self
                .current_match()
                .map_or((0, 0), |m| (m.time_remaining(), m.time_limit())),
        }
    }

    /// Words this player has found, oldest first
    #[must_use]
    pub fn my_words(&self) -> Vec<&FoundWord> {
        match &self.game {
            Game::Solo(session) => session.found_words().iter().collect(),
            Game::Duel { .. } => self
                .current_match()
                .map(|m| m.found_by(&self.player.id).collect())
                .unwrap_or_default(),
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_mode != InputMode::Playing || !c.is_ascii_alphabetic() {
            return;
        }
        let letter = c.to_ascii_uppercase() as u8;

        let result = match &mut self.game {
            Game::Solo(session) => session.push_letter(letter).map(|_| ()).map_err(Rejection::from),
            Game::Duel { registry, driver } => registry
                .get_mut(driver.match_id())
                .map_or(Ok(()), |m| {
                    m.push_letter(&self.player.id, letter).map(|_| ())
                }),
        };
        if let Err(e) = result {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.game {
            Game::Solo(session) => session.pop_letter(),
            Game::Duel { registry, driver } => {
                if let Some(m) = registry.get_mut(driver.match_id()) {
                    m.pop_letter(&self.player.id);
                }
            }
        }
    }

    pub fn clear_word(&mut self) {
        let result = match &mut self.game {
            Game::Solo(session) => {
                session.clear();
                Ok(())
            }
            Game::Duel { registry, driver } => registry.clear(driver.match_id(), &self.player.id),
        };
        if let Err(e) = result {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    /// Submit the word in progress
    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Playing || self.current_word().is_empty() {
            return;
        }

        let result = match &mut self.game {
            Game::Solo(session) => session.submit_selection(),
            Game::Duel { registry, driver } => {
                registry.submit_selection(driver.match_id(), &self.player.id)
            }
        };

        match result {
            Ok(accepted) => {
                let combo = self
                    .multiplier()
                    .filter(|&m| m > 1)
                    .map(|m| format!(" combo x{m}"))
                    .unwrap_or_default();
                self.add_message(
                    &format!("✓ {} +{}{combo}", accepted.word, accepted.points),
                    MessageStyle::Success,
                );
            }
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                if matches!(
                    rejection,
                    Rejection::SessionEnded | Rejection::MatchNotActive(_)
                ) && !self.is_waiting()
                {
                    self.finish();
                }
            }
        }
    }

    /// One second of game time
    pub fn on_tick(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        match &mut self.game {
            Game::Solo(session) => {
                if session.tick() == SessionStatus::Ended {
                    self.add_message("⏰ Time's up!", MessageStyle::Info);
                    self.finish();
                }
            }
            Game::Duel { registry, driver } => match driver.tick(registry) {
                Ok(TickReport::Waiting | TickReport::Running { opponent_word: None, .. }) => {}
                Ok(TickReport::Joined(opponent)) => {
                    let text = format!("{} joined! Game starting...", opponent.username);
                    self.add_message(&text, MessageStyle::Success);
                }
                Ok(TickReport::Running {
                    opponent_word: Some(accepted),
                    ..
                }) => {
                    let name = self.opponent().map_or("Opponent", |p| p.username.as_str());
                    let text = format!("{name} found {} (+{})", accepted.word, accepted.points);
                    self.add_message(&text, MessageStyle::Info);
                }
                Ok(TickReport::Completed(outcome)) => {
                    let text = match outcome {
                        Some(Outcome::Winner(id)) if id == self.player.id => "🏆 You win!",
                        Some(Outcome::Winner(_)) => "Time's up! Your opponent wins.",
                        _ => "🤝 It's a tie!",
                    };
                    self.add_message(text, MessageStyle::Info);
                    self.finish();
                }
                Err(e) => {
                    warn!(error = %e, "match tick failed");
                    self.add_message(&e.to_string(), MessageStyle::Error);
                    self.finish();
                }
            },
        }
    }

    /// Close the game and build the report
    fn finish(&mut self) {
        if self.report.is_some() {
            return;
        }
        self.input_mode = InputMode::GameOver;

        let report = match &self.game {
            Game::Solo(session) => GameReport {
                score: session.score(),
                won: false,
                opponent: None,
                summary: GameSummary::new(session.pool(), session.found_words(), self.oracle),
            },
            Game::Duel { .. } => {
                let Some(m) = self.current_match() else {
                    return;
                };
                let me = &self.player.id;
                GameReport {
                    score: m.player(me).map_or(0, |p| p.score),
                    won: matches!(m.outcome(), Some(Outcome::Winner(ref id)) if id == me),
                    opponent: m.opponent_of(me).cloned(),
                    summary: GameSummary::new(m.pool(), m.found_by(me), self.oracle),
                }
            }
        };

        let summary = &report.summary;
        let text = format!(
            "Found {} of {} possible words ({}%). Press Enter or q to exit.",
            summary.found.len(),
            summary.possible.len(),
            summary.accuracy
        );
        self.report = Some(report);
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the game report once time has run out, or `None` if the player
/// quit early.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<O: WordOracle + ?Sized>(mut app: App<'_, O>) -> Result<Option<GameReport>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.report)
}

fn run_app<B: ratatui::backend::Backend, O: WordOracle + ?Sized>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, O>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let timeout = TICK.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c' | 'q')) if ctrl => app.should_quit = true,
                (InputMode::GameOver, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc) => {
                    app.should_quit = true;
                }
                (InputMode::Playing, KeyCode::Char(c)) => app.type_letter(c),
                (InputMode::Playing, KeyCode::Backspace) => app.backspace(),
                (InputMode::Playing, KeyCode::Esc) => app.clear_word(),
                (InputMode::Playing, KeyCode::Enter) => app.submit(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            last_tick += TICK;
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["cat", "act", "cats", "scat"]))
    }

    fn solo_app(dict: &Dictionary, time_limit: u32) -> App<'_, Dictionary> {
        let config = SessionConfig {
            time_limit,
            ..SessionConfig::for_difficulty(0)
        };
        let session = Session::new(config, LetterPool::parse("CATS").unwrap(), "1".into(), dict);
        App::from_session(session, Player::unnamed("1".into()))
    }

    fn type_word<O: WordOracle + ?Sized>(app: &mut App<'_, O>, word: &str) {
        for c in word.chars() {
            app.type_letter(c);
        }
    }

    #[test]
    fn typing_and_submitting() {
        let dict = dictionary();
        let mut app = solo_app(&dict, 60);

        type_word(&mut app, "cat");
        assert_eq!(app.current_word(), "CAT");
        app.submit();

        assert_eq!(app.score(), 3);
        assert_eq!(app.current_word(), "");
        assert_eq!(app.my_words().len(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn unavailable_letter_reports_error() {
        let dict = dictionary();
        let mut app = solo_app(&dict, 60);

        app.type_letter('z');
        assert_eq!(app.current_word(), "");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn backspace_and_clear() {
        let dict = dictionary();
        let mut app = solo_app(&dict, 60);

        type_word(&mut app, "cats");
        app.backspace();
        assert_eq!(app.current_word(), "CAT");
        app.clear_word();
        assert_eq!(app.current_word(), "");
    }

    #[test]
    fn solo_time_out_builds_report() {
        let dict = dictionary();
        let mut app = solo_app(&dict, 2);

        type_word(&mut app, "scat");
        app.submit();
        app.on_tick();
        assert_eq!(app.input_mode, InputMode::Playing);
        app.on_tick();
        assert_eq!(app.input_mode, InputMode::GameOver);

        let report = app.report.as_ref().unwrap();
        assert_eq!(report.score, 4);
        assert!(!report.won);
        assert_eq!(report.summary.found, vec!["SCAT"]);
        assert_eq!(report.summary.possible.len(), 4);
        assert_eq!(report.summary.accuracy, 25);

        // Typing after the end does nothing
        app.type_letter('c');
        assert_eq!(app.current_word(), "");
    }

    #[test]
    fn duel_waits_then_plays() {
        let dict = dictionary();
        let mut app = App::duel(Player::unnamed("1".into()), &dict, 2, 0);

        assert!(app.is_waiting());
        app.on_tick();
        assert!(app.is_waiting());
        app.on_tick();
        assert!(!app.is_waiting());
        assert_eq!(app.opponent().unwrap().username, "Challenger");
        assert_eq!(app.clock(), (120, 120));

        app.on_tick();
        assert_eq!(app.clock().0, 119);
    }

    #[test]
    fn duel_completes_with_report() {
        let dict = dictionary();
        let mut app = App::duel(Player::unnamed("1".into()), &dict, 0, 0);
        app.on_tick();

        for _ in 0..120 {
            app.on_tick();
        }
        assert_eq!(app.input_mode, InputMode::GameOver);

        let report = app.report.as_ref().unwrap();
        assert_eq!(report.opponent.as_ref().unwrap().username, "Challenger");
        assert_eq!(report.score, 0);
        assert!(!report.won);

        // Finished match stays readable for the game-over screen
        assert_eq!(app.current_match().unwrap().status(), MatchStatus::Completed);
        assert_eq!(app.clock().0, 0);
    }

    #[test]
    fn clear_on_missing_match_reports_error() {
        let dict = dictionary();
        let mut app = App::duel(Player::unnamed("1".into()), &dict, 0, 0);
        if let Game::Duel { registry, driver } = &mut app.game {
            assert!(registry.remove(driver.match_id()).is_some());
        }

        app.clear_word();
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("match_1"));
    }
}
