use guess_core::model::{Rotation, RoundRecord};

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Finished,
}

/// What the play screen needs to render one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub filename: String,
    pub rotation: Rotation,
    pub hard_mode: bool,
    pub round_number: u32,
    pub total_rounds: usize,
}

/// Encoded image payload for the current round, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

/// Result of one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub record: RoundRecord,
    pub is_complete: bool,
}

/// Overall score for the play screen scorecard and the end screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub games_played: u32,
    pub games_won: u32,
    pub accuracy: f64,
    pub history: Vec<RoundRecord>,
}
