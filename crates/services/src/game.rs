use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use catalog::{Catalog, ImageSource, mime_for, rotate_encoded};
use guess_core::Clock;
use guess_core::model::{
    BUILTIN_CATEGORIES, Category, CategoryInfo, GameMode, GameSession, Rotation, RoundRecord,
    SessionProgress,
};

use crate::error::GameError;
use crate::rng::GameRng;
use crate::view::{GamePhase, GameSummary, GuessOutcome, RoundImage, RoundView};

//
// ─── GAME SERVICE ──────────────────────────────────────────────────────────────
//

/// The presentation boundary: one instance per player, owning the catalog,
/// the image source, and at most one live session.
///
/// Every operation is synchronous and atomic. The caller serializes access
/// (one in-flight call at a time); the service performs no locking of its
/// own.
pub struct GameService {
    catalog: Catalog,
    images: Arc<dyn ImageSource>,
    clock: Clock,
    rng: GameRng,
    session: Option<GameSession>,
    rotation: Rotation,
}

impl GameService {
    #[must_use]
    pub fn new(catalog: Catalog, images: Arc<dyn ImageSource>) -> Self {
        Self {
            catalog,
            images,
            clock: Clock::default_clock(),
            rng: GameRng::from_os(),
            session: None,
            rotation: Rotation::R0,
        }
    }

    /// Builder-style override for deterministic time in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builder-style override for deterministic shuffles and rotations.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// The static start-screen menu of `(display name, category id)` pairs.
    #[must_use]
    pub fn list_categories() -> &'static [CategoryInfo] {
        BUILTIN_CATEGORIES
    }

    /// Total number of catalog entries, for the menu caption.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.catalog.len()
    }

    /// Which screen the presentation layer should show.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match &self.session {
            None => GamePhase::NotStarted,
            Some(session) if session.is_complete() => GamePhase::Finished,
            Some(_) => GamePhase::Playing,
        }
    }

    /// Starts a fresh session over the entries tagged with `category`.
    ///
    /// Any previous session is replaced only once the filter turns out to
    /// be non-empty, so a failed start leaves prior state untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCategory` when no entry carries the tag.
    pub fn start_session(
        &mut self,
        category: &Category,
        hard_mode: bool,
    ) -> Result<SessionProgress, GameError> {
        let mut entries = self.catalog.filter_by_category(category);
        if entries.is_empty() {
            return Err(GameError::EmptyCategory {
                category: category.to_string(),
            });
        }
        self.rng.shuffle(&mut entries);

        let mode = GameMode::new(category.clone(), hard_mode);
        let session = GameSession::new(mode, entries, self.clock.now())?;
        let progress = session.progress();
        info!(
            category = %category,
            hard_mode,
            rounds = session.total_rounds(),
            "session started"
        );

        self.rotation = self.roll_rotation(hard_mode);
        self.session = Some(session);
        Ok(progress)
    }

    /// The round currently on screen. `None` covers both the menu and the
    /// finished sentinel; `phase()` distinguishes them.
    #[must_use]
    pub fn current_round(&self) -> Option<RoundView> {
        let session = self.session.as_ref()?;
        let entry = session.current_entry()?;
        Some(RoundView {
            filename: entry.filename().to_owned(),
            rotation: self.rotation,
            hard_mode: session.mode().hard(),
            round_number: session.round_number(),
            total_rounds: session.total_rounds(),
        })
    }

    /// Loads (and in hard mode rotates) the image for the current round.
    ///
    /// A missing or unreadable file halts the round rather than skipping to
    /// the next one, so round counts stay truthful.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` outside a round and
    /// `GameError::Image` when the bytes cannot be read or re-encoded.
    pub fn round_image(&self) -> Result<RoundImage, GameError> {
        let round = self.current_round().ok_or(GameError::NotPlaying)?;
        let bytes = self.images.read(&round.filename)?;
        let mime = if round.rotation.is_upright() {
            mime_for(&round.filename)
        } else {
            "image/png"
        };
        let bytes = rotate_encoded(bytes, round.rotation)?;
        Ok(RoundImage { bytes, mime })
    }

    /// Scores one guess, records the round, and advances the queue. A fresh
    /// rotation is rolled for the next round.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` when no session exists; empty
    /// guesses and guesses after the final round surface as
    /// `GameError::Session` without consuming a round.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<GuessOutcome, GameError> {
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return Err(GameError::NotPlaying);
        };

        let record = session.submit_guess(raw_guess, now)?.clone();
        let is_complete = session.is_complete();
        let hard_mode = session.mode().hard();
        debug!(round = record.round, correct = record.correct, "guess scored");

        self.rotation = if is_complete {
            Rotation::R0
        } else {
            self.roll_rotation(hard_mode)
        };
        Ok(GuessOutcome {
            record,
            is_complete,
        })
    }

    /// Score and history, valid in every phase.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        match &self.session {
            Some(session) => GameSummary {
                games_played: session.games_played(),
                games_won: session.games_won(),
                accuracy: session.accuracy(),
                history: session.history().to_vec(),
            },
            None => GameSummary {
                games_played: 0,
                games_won: 0,
                accuracy: 0.0,
                history: Vec::new(),
            },
        }
    }

    /// The most recent round, for the previous-result banner.
    #[must_use]
    pub fn last_round(&self) -> Option<RoundRecord> {
        self.session
            .as_ref()
            .and_then(GameSession::last_round)
            .cloned()
    }

    /// Session progress, when a session exists.
    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.session.as_ref().map(GameSession::progress)
    }

    /// Discards the session wholesale and returns to the menu. Idempotent;
    /// the next start re-filters by whatever category the player picks.
    pub fn reset_to_menu(&mut self) {
        if self.session.take().is_some() {
            info!("session reset to menu");
        }
        self.rotation = Rotation::R0;
    }

    fn roll_rotation(&mut self, hard_mode: bool) -> Rotation {
        if hard_mode {
            self.rng.rotation()
        } else {
            Rotation::R0
        }
    }
}

impl fmt::Debug for GameService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameService")
            .field("catalog_len", &self.catalog.len())
            .field("images_len", &self.images.len())
            .field("phase", &self.phase())
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
