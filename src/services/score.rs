use crate::models::mood::MoodLabel;
use crate::services::lexicon::MOOD_SCORES;

/// Score for any label outside the table, including the empty string.
pub const DEFAULT_SCORE: u8 = 5;

impl MoodLabel {
    pub fn score(&self) -> u8 {
        if !self.is_recognized() {
            return DEFAULT_SCORE;
        }
        MOOD_SCORES
            .iter()
            .find(|(label, _)| *label == self.as_str())
            .map(|(_, score)| *score)
            .unwrap_or(DEFAULT_SCORE)
    }
}
