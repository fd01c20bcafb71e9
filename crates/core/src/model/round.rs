use chrono::{DateTime, Utc};

/// Record of one answered round, as it appears in the history table.
///
/// `guess` holds the title-cased normalized guess and `answer` the display
/// answer, both shaped for presentation so the table never re-derives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub guess: String,
    pub answer: String,
    pub correct: bool,
    pub played_at: DateTime<Utc>,
}

impl RoundRecord {
    #[must_use]
    pub fn new(
        round: u32,
        guess: impl Into<String>,
        answer: impl Into<String>,
        correct: bool,
        played_at: DateTime<Utc>,
    ) -> Self {
        Self {
            round,
            guess: guess.into(),
            answer: answer.into(),
            correct,
            played_at,
        }
    }
}
