use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use guess_core::model::RoundRecord;
use services::{GameSummary, RoundImage};

/// One row of the history table, shaped for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub round: u32,
    pub guess: String,
    pub answer: String,
    pub result_icon: &'static str,
}

impl From<&RoundRecord> for HistoryRowVm {
    fn from(record: &RoundRecord) -> Self {
        Self {
            round: record.round,
            guess: record.guess.clone(),
            answer: record.answer.clone(),
            result_icon: if record.correct { "✅" } else { "❌" },
        }
    }
}

/// Maps a summary's history into table rows, newest last.
#[must_use]
pub fn map_history_rows(summary: &GameSummary) -> Vec<HistoryRowVm> {
    summary.history.iter().map(HistoryRowVm::from).collect()
}

/// Formats a percentage the way the scorecard shows it.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Encodes a round image as a data URL the webview renders directly.
#[must_use]
pub fn image_data_url(image: &RoundImage) -> String {
    format!("data:{};base64,{}", image.mime, BASE64.encode(&image.bytes))
}
