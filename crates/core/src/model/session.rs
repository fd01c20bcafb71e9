use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::answer::title_case;
use crate::model::category::Category;
use crate::model::entry::CatalogEntry;
use crate::model::round::RoundRecord;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no entries available for session")]
    Empty,

    #[error("session already finished")]
    Completed,

    #[error("guess cannot be empty")]
    EmptyGuess,
}

//
// ─── MODE ──────────────────────────────────────────────────────────────────────
//

/// Category plus difficulty, chosen on the start screen and fixed for the
/// life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMode {
    category: Category,
    hard: bool,
}

impl GameMode {
    #[must_use]
    pub fn new(category: Category, hard: bool) -> Self {
        Self { category, hard }
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// True when rounds show a randomly rotated image.
    #[must_use]
    pub fn hard(&self) -> bool {
        self.hard
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    pub round_number: u32,
    pub total_rounds: usize,
    pub games_played: u32,
    pub games_won: u32,
    pub accuracy: f64,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state for one play-through of a shuffled entry queue.
///
/// The caller fixes the queue order up front (randomness stays outside the
/// domain layer); the session owns everything after that: advancing through
/// the queue, scoring guesses, and recording history. Once the queue empties
/// the session is finished and only a wholesale reset at the owning layer
/// brings the player back to the menu.
pub struct GameSession {
    mode: GameMode,
    queue: Vec<CatalogEntry>,
    current: Option<CatalogEntry>,
    total_rounds: usize,
    games_played: u32,
    games_won: u32,
    history: Vec<RoundRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Creates a session over `entries`, taking the queue order as given.
    /// The last element becomes the first round shown.
    ///
    /// `started_at` should come from the owning layer's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `entries` is empty.
    pub fn new(
        mode: GameMode,
        mut entries: Vec<CatalogEntry>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let total_rounds = entries.len();
        let Some(first) = entries.pop() else {
            return Err(SessionError::Empty);
        };

        Ok(Self {
            mode,
            queue: entries,
            current: Some(first),
            total_rounds,
            games_played: 0,
            games_won: 0,
            history: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    // Accessors
    #[must_use]
    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    /// The entry currently on screen, or `None` once the queue is exhausted.
    #[must_use]
    pub fn current_entry(&self) -> Option<&CatalogEntry> {
        self.current.as_ref()
    }

    /// Number of rounds this session holds, fixed at start.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The most recent round, or `None` before the first guess.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Number of rounds not yet answered, counting the one on screen.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len() + usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// 1-based number of the round currently on screen; while finished this
    /// sticks at the last played round.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        if self.is_complete() {
            self.games_played
        } else {
            self.games_played + 1
        }
    }

    /// Share of played rounds guessed correctly, as a percentage.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            round_number: self.round_number(),
            total_rounds: self.total_rounds,
            games_played: self.games_played,
            games_won: self.games_won,
            accuracy: self.accuracy(),
            is_complete: self.is_complete(),
        }
    }

    /// Scores a guess against the current entry and advances the queue.
    ///
    /// The guess is trimmed and lowercased, then compared for exact equality
    /// against the canonical answer and the aliases. A round is recorded
    /// either way; when the queue empties the session transitions to
    /// finished.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished
    /// and `SessionError::EmptyGuess` for a whitespace-only guess; neither
    /// mutates any state.
    pub fn submit_guess(
        &mut self,
        raw_guess: &str,
        guessed_at: DateTime<Utc>,
    ) -> Result<&RoundRecord, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        let Some(entry) = self.current.as_ref() else {
            return Err(SessionError::Completed);
        };

        let normalized = raw_guess.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SessionError::EmptyGuess);
        }

        let answer = entry.answer();
        let correct = entry.accepts(&normalized);

        self.history.push(RoundRecord::new(
            self.games_played + 1,
            title_case(&normalized),
            answer.display(),
            correct,
            guessed_at,
        ));
        self.games_played += 1;
        if correct {
            self.games_won += 1;
        }

        self.current = self.queue.pop();
        if self.current.is_none() {
            self.completed_at = Some(guessed_at);
        }

        self.history.last().ok_or(SessionError::Completed)
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("queue_len", &self.queue.len())
            .field("current", &self.current.as_ref().map(CatalogEntry::filename))
            .field("total_rounds", &self.total_rounds)
            .field("games_played", &self.games_played)
            .field("games_won", &self.games_won)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn entry(filename: &str) -> CatalogEntry {
        CatalogEntry::new(
            filename,
            vec![Category::new("us_state_capitals").unwrap()],
            Vec::new(),
        )
        .unwrap()
    }

    fn entry_with_aliases(filename: &str, aliases: &[&str]) -> CatalogEntry {
        CatalogEntry::new(
            filename,
            vec![Category::new("us_state_capitals").unwrap()],
            aliases.iter().map(|a| (*a).to_owned()).collect(),
        )
        .unwrap()
    }

    fn mode() -> GameMode {
        GameMode::new(Category::new("us_state_capitals").unwrap(), false)
    }

    #[test]
    fn empty_session_returns_error() {
        let err = GameSession::new(mode(), Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn new_session_pops_one_entry_into_current() {
        let entries = vec![entry("denver.jpg"), entry("boston.jpg"), entry("austin.jpg")];
        let session = GameSession::new(mode(), entries.clone(), fixed_now()).unwrap();

        assert_eq!(session.total_rounds(), 3);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.games_played(), 0);
        assert!(!session.is_complete());
        assert!(
            entries
                .iter()
                .any(|e| Some(e.filename()) == session.current_entry().map(CatalogEntry::filename))
        );
    }

    #[test]
    fn correct_guess_is_case_and_whitespace_insensitive() {
        let mut session =
            GameSession::new(mode(), vec![entry("new_york_city.jpg")], fixed_now()).unwrap();

        let record = session.submit_guess("  New York City ", fixed_now()).unwrap();
        assert!(record.correct);
        assert_eq!(record.guess, "New York City");
        assert_eq!(record.answer, "New York City");
    }

    #[test]
    fn alias_guess_counts_as_correct() {
        let mut session = GameSession::new(
            mode(),
            vec![entry_with_aliases("new_york_city.jpg", &["nyc", "the big apple"])],
            fixed_now(),
        )
        .unwrap();

        let record = session.submit_guess("NYC", fixed_now()).unwrap();
        assert!(record.correct);
    }

    #[test]
    fn wrong_guess_records_round_without_a_win() {
        let mut session = GameSession::new(mode(), vec![entry("denver.jpg")], fixed_now()).unwrap();

        let record = session.submit_guess("Boston", fixed_now()).unwrap();
        assert!(!record.correct);
        assert_eq!(record.answer, "Denver");
        assert_eq!(session.games_played(), 1);
        assert_eq!(session.games_won(), 0);
    }

    #[test]
    fn empty_guess_is_rejected_without_recording_a_round() {
        let mut session = GameSession::new(mode(), vec![entry("denver.jpg")], fixed_now()).unwrap();

        let err = session.submit_guess("   ", fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::EmptyGuess);
        assert_eq!(session.games_played(), 0);
        assert!(session.history().is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn single_entry_session_finishes_after_one_guess() {
        let mut session = GameSession::new(mode(), vec![entry("denver.jpg")], fixed_now()).unwrap();

        session.submit_guess("Denver", fixed_now()).unwrap();
        assert!(session.is_complete());
        assert!(session.current_entry().is_none());
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn finished_session_rejects_further_guesses() {
        let mut session = GameSession::new(mode(), vec![entry("denver.jpg")], fixed_now()).unwrap();
        session.submit_guess("Denver", fixed_now()).unwrap();

        let err = session.submit_guess("Denver", fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::Completed);
        assert_eq!(session.games_played(), 1);
    }

    #[test]
    fn counters_track_history() {
        let entries = vec![entry("denver.jpg"), entry("boston.jpg"), entry("austin.jpg")];
        let mut session = GameSession::new(mode(), entries, fixed_now()).unwrap();

        for _ in 0..3 {
            let answer = session.current_entry().unwrap().answer().display().to_owned();
            let guess = if session.games_played() == 1 {
                "wrong".to_owned()
            } else {
                answer
            };
            session.submit_guess(&guess, fixed_now()).unwrap();
        }

        assert_eq!(session.games_played(), 3);
        assert_eq!(session.history().len(), 3);
        let wins = session.history().iter().filter(|r| r.correct).count();
        assert_eq!(session.games_won() as usize, wins);
        assert_eq!(session.games_won(), 2);
        assert!(session.is_complete());
    }

    #[test]
    fn progress_reflects_round_and_accuracy() {
        let entries = vec![entry("denver.jpg"), entry("boston.jpg")];
        let mut session = GameSession::new(mode(), entries, fixed_now()).unwrap();

        let before = session.progress();
        assert_eq!(before.round_number, 1);
        assert_eq!(before.total_rounds, 2);
        assert!((before.accuracy - 0.0).abs() < f64::EPSILON);

        let answer = session.current_entry().unwrap().answer().display().to_owned();
        session.submit_guess(&answer, fixed_now()).unwrap();

        let after = session.progress();
        assert_eq!(after.round_number, 2);
        assert_eq!(after.games_played, 1);
        assert!((after.accuracy - 100.0).abs() < f64::EPSILON);
        assert!(!after.is_complete);
    }

    #[test]
    fn last_round_tracks_most_recent_record() {
        let mut session =
            GameSession::new(mode(), vec![entry("denver.jpg"), entry("boston.jpg")], fixed_now())
                .unwrap();

        assert!(session.last_round().is_none());
        session.submit_guess("guess one", fixed_now()).unwrap();
        assert_eq!(session.last_round().unwrap().round, 1);
        session.submit_guess("guess two", fixed_now()).unwrap();
        assert_eq!(session.last_round().unwrap().round, 2);
    }
}
