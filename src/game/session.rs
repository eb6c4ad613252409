//! Solo session engine
//!
//! A single-player timed run over one letter pool. All state changes go
//! through `&mut self`, so a tick can never interleave with a submission.

use super::generator::{self, PoolMode};
use super::{Accepted, FoundWord, MIN_WORD_LEN, Rejection, validate};
use crate::core::{LetterPool, PlayerId, SelectError, Selection, next_multiplier};
use crate::wordlists::WordOracle;
use rand::Rng;
use tracing::{debug, info};

/// Settings for a solo session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub difficulty: i32,
    /// Seconds on the clock at the start
    pub time_limit: u32,
    pub min_word_len: usize,
}

impl SessionConfig {
    /// Standard settings for a difficulty level
    #[must_use]
    pub fn for_difficulty(difficulty: i32) -> Self {
        Self {
            difficulty,
            time_limit: generator::time_limit(difficulty),
            min_word_len: MIN_WORD_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Ended,
}

/// A solo timed session
pub struct Session<'a, O: WordOracle + ?Sized> {
    oracle: &'a O,
    owner: PlayerId,
    config: SessionConfig,
    pool: LetterPool,
    found_words: Vec<FoundWord>,
    score: u32,
    multiplier: u8,
    time_remaining: u32,
    status: SessionStatus,
    selection: Selection,
}

impl<'a, O: WordOracle + ?Sized> Session<'a, O> {
    /// Create a session over an existing pool
    pub fn new(config: SessionConfig, pool: LetterPool, owner: PlayerId, oracle: &'a O) -> Self {
        info!(
            player = %owner,
            difficulty = config.difficulty,
            pool = %pool,
            time_limit = config.time_limit,
            "solo session started"
        );

        // No time on the clock means the session is over before it starts
        let status = if config.time_limit == 0 {
            SessionStatus::Ended
        } else {
            SessionStatus::Active
        };

        Self {
            oracle,
            owner,
            time_remaining: config.time_limit,
            config,
            pool,
            found_words: Vec::new(),
            score: 0,
            multiplier: 1,
            status,
            selection: Selection::new(),
        }
    }

    /// Start a session with a freshly generated pool for `difficulty`
    pub fn start<R: Rng + ?Sized>(
        difficulty: i32,
        owner: PlayerId,
        oracle: &'a O,
        rng: &mut R,
    ) -> Self {
        let pool = generator::generate(PoolMode::Solo { difficulty }, rng);
        Self::new(SessionConfig::for_difficulty(difficulty), pool, owner, oracle)
    }

    /// Submit a word
    ///
    /// On success the word is recorded, its points are added to the score,
    /// the combo multiplier is updated and the word in progress is cleared.
    ///
    /// # Errors
    /// Returns a [`Rejection`] describing why the word was not accepted; the
    /// session is unchanged in that case.
    pub fn submit(&mut self, word: &str) -> Result<Accepted, Rejection> {
        if self.status == SessionStatus::Ended {
            return Err(Rejection::SessionEnded);
        }

        let found = &self.found_words;
        let outcome = validate(
            word,
            self.config.min_word_len,
            |w| found.iter().any(|f| f.text == w),
            self.oracle,
            &self.pool,
        );

        let (text, points) = match outcome {
            Ok(valid) => valid,
            Err(rejection) => {
                debug!(player = %self.owner, %rejection, "submission rejected");
                return Err(rejection);
            }
        };

        self.score += points;
        self.multiplier = next_multiplier(self.multiplier, text.len());
        self.found_words.push(FoundWord {
            text: text.clone(),
            points,
            owner: self.owner.clone(),
            found_at: self.elapsed(),
        });
        self.selection.clear();

        debug!(
            player = %self.owner,
            word = %text,
            points,
            score = self.score,
            multiplier = self.multiplier,
            "word accepted"
        );

        Ok(Accepted {
            word: text,
            points,
            score: self.score,
        })
    }

    /// Submit the word currently spelled by the selected pool slots
    ///
    /// # Errors
    /// Same as [`Session::submit`].
    pub fn submit_selection(&mut self) -> Result<Accepted, Rejection> {
        let word = self.selection.word();
        self.submit(&word)
    }

    /// Add the first unused copy of `letter` to the word in progress
    ///
    /// # Errors
    /// Fails if no unused copy of the letter remains.
    pub fn push_letter(&mut self, letter: u8) -> Result<usize, SelectError> {
        self.selection.push_letter(&self.pool, letter)
    }

    /// Add the pool slot at `index` to the word in progress
    ///
    /// # Errors
    /// Fails if the slot does not exist or is already used.
    pub fn select(&mut self, index: usize) -> Result<u8, SelectError> {
        self.selection.select(&self.pool, index)
    }

    /// Remove the last letter of the word in progress
    pub fn pop_letter(&mut self) {
        self.selection.pop();
    }

    /// Reset the word in progress; found words and score are untouched
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Advance the clock by one second
    ///
    /// Reaching zero ends the session for good; further ticks are no-ops.
    pub fn tick(&mut self) -> SessionStatus {
        if self.status == SessionStatus::Ended {
            return self.status;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.status = SessionStatus::Ended;
            self.selection.clear();
            info!(
                player = %self.owner,
                score = self.score,
                words = self.found_words.len(),
                "solo session ended"
            );
        }
        self.status
    }

    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub fn owner(&self) -> &PlayerId {
        &self.owner
    }

    #[must_use]
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn multiplier(&self) -> u8 {
        self.multiplier
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub const fn time_limit(&self) -> u32 {
        self.config.time_limit
    }

    #[must_use]
    pub const fn difficulty(&self) -> i32 {
        self.config.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status == SessionStatus::Ended
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    const fn elapsed(&self) -> u32 {
        self.config.time_limit.saturating_sub(self.time_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "cat", "act", "rates", "stare", "garden", "danger", "gardens", "rat", "tar",
        ]))
    }

    fn session<'a>(dict: &'a Dictionary, letters: &str, time_limit: u32) -> Session<'a, Dictionary> {
        let config = SessionConfig {
            difficulty: 1,
            time_limit,
            min_word_len: MIN_WORD_LEN,
        };
        Session::new(config, LetterPool::parse(letters).unwrap(), "1".into(), dict)
    }

    #[test]
    fn config_for_difficulty() {
        let config = SessionConfig::for_difficulty(2);
        assert_eq!(config.time_limit, 90);
        assert_eq!(config.min_word_len, 3);
    }

    #[test]
    fn start_generates_pool_for_difficulty() {
        use rand::SeedableRng;

        let dict = dictionary();
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let session = Session::start(3, "1".into(), &dict, &mut rng);
        assert_eq!(session.pool().len(), 7);
        assert_eq!(session.time_remaining(), 75);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.multiplier(), 1);
    }

    #[test]
    fn submit_valid_word_scores() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 60);

        let accepted = s.submit("cat").unwrap();
        assert_eq!(accepted.word, "CAT");
        assert_eq!(accepted.points, 3);
        assert_eq!(accepted.score, 3);
        assert_eq!(s.score(), 3);
        assert_eq!(s.found_words().len(), 1);
        assert_eq!(s.found_words()[0].owner, PlayerId::from("1"));
    }

    #[test]
    fn duplicate_rejected_and_score_unchanged() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 60);

        s.submit("rates").unwrap();
        assert_eq!(
            s.submit("RATES"),
            Err(Rejection::DuplicateWord("RATES".into()))
        );
        assert_eq!(s.score(), 5);
        assert_eq!(s.found_words().len(), 1);
    }

    #[test]
    fn rejections_leave_session_active() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 60);

        assert_eq!(s.submit("ca"), Err(Rejection::TooShort { min: 3 }));
        assert_eq!(s.submit("xyz"), Err(Rejection::NotAWord("XYZ".into())));
        assert_eq!(
            s.submit("garden"),
            Err(Rejection::CannotForm("GARDEN".into()))
        );
        assert_eq!(s.status(), SessionStatus::Active);
        assert!(s.submit("act").is_ok());
    }

    #[test]
    fn multiplier_follows_word_length() {
        let dict = dictionary();
        let mut s = session(&dict, "GARDENST", 60);

        s.submit("garden").unwrap();
        assert_eq!(s.multiplier(), 2);
        s.submit("danger").unwrap();
        assert_eq!(s.multiplier(), 3);
        s.submit("gardens").unwrap();
        assert_eq!(s.multiplier(), 4);
        // Rejected words leave the combo alone
        s.submit("cat").unwrap_err();
        assert_eq!(s.multiplier(), 4);
        s.submit("rat").unwrap();
        assert_eq!(s.multiplier(), 1);
    }

    #[test]
    fn multiplier_caps_at_five() {
        let dict = dictionary();
        let mut s = session(&dict, "GARDENS", 60);
        s.multiplier = 5;
        s.submit("garden").unwrap();
        assert_eq!(s.multiplier(), 5);
    }

    #[test]
    fn multiplier_does_not_scale_points() {
        let dict = dictionary();
        let mut s = session(&dict, "GARDENS", 60);
        s.submit("garden").unwrap();
        let accepted = s.submit("danger").unwrap();
        assert_eq!(accepted.points, 12);
        assert_eq!(s.score(), 24);
    }

    #[test]
    fn tick_ends_session_exactly_once() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 3);

        assert_eq!(s.tick(), SessionStatus::Active);
        assert_eq!(s.tick(), SessionStatus::Active);
        assert_eq!(s.tick(), SessionStatus::Ended);
        assert_eq!(s.time_remaining(), 0);

        assert_eq!(s.tick(), SessionStatus::Ended);
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(s.submit("cat"), Err(Rejection::SessionEnded));
    }

    #[test]
    fn zero_time_limit_starts_ended() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 0);
        assert_eq!(s.status(), SessionStatus::Ended);
        assert_eq!(s.submit("cat"), Err(Rejection::SessionEnded));
        assert_eq!(s.tick(), SessionStatus::Ended);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn found_at_tracks_elapsed_seconds() {
        let dict = dictionary();
        let mut s = session(&dict, "CATRES", 10);
        s.tick();
        s.tick();
        s.submit("cat").unwrap();
        assert_eq!(s.found_words()[0].found_at, 2);
    }

    #[test]
    fn selection_builds_and_submits_word() {
        let dict = dictionary();
        let mut s = session(&dict, "TACRES", 60);

        s.push_letter(b'c').unwrap();
        s.push_letter(b'a').unwrap();
        s.select(0).unwrap();
        assert_eq!(s.selection().word(), "CAT");
        assert_eq!(s.select(0), Err(SelectError::AlreadyUsed(0)));

        let accepted = s.submit_selection().unwrap();
        assert_eq!(accepted.word, "CAT");
        assert!(s.selection().is_empty());
    }

    #[test]
    fn clear_keeps_score() {
        let dict = dictionary();
        let mut s = session(&dict, "TACRES", 60);
        s.submit("cat").unwrap();
        s.push_letter(b'r').unwrap();
        s.push_letter(b'a').unwrap();
        s.pop_letter();
        assert_eq!(s.selection().word(), "R");
        s.clear();
        assert!(s.selection().is_empty());
        assert_eq!(s.score(), 3);
        assert_eq!(s.found_words().len(), 1);
    }

    #[test]
    fn rejected_selection_is_kept() {
        let dict = dictionary();
        let mut s = session(&dict, "TACRES", 60);
        s.push_letter(b's').unwrap();
        s.push_letter(b'e').unwrap();
        s.push_letter(b'a').unwrap();
        assert!(s.submit_selection().is_err());
        assert_eq!(s.selection().word(), "SEA");
    }
}
