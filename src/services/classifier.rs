//! Keyword-count mood classifier for free-text feelings.
//!
//! Matching is plain substring search on the lower-cased text: no tokenization
//! and no word boundaries, so "bad" inside "badminton" counts as negative.

use serde::Serialize;

use crate::models::mood::MoodLabel;
use crate::services::lexicon::{NEGATIVE_KEYWORDS, NEUTRAL_KEYWORDS, POSITIVE_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Positive,
    Supportive,
    Balanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodAnalysis {
    pub mood: MoodLabel,
    pub emoji: &'static str,
    pub message: &'static str,
    pub theme: Theme,
    pub suggested_activities: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl KeywordCounts {
    pub fn tally(text: &str) -> Self {
        let lower = text.to_lowercase();
        let hits = |list: &[&str]| list.iter().filter(|kw| lower.contains(*kw)).count();
        Self {
            positive: hits(POSITIVE_KEYWORDS),
            negative: hits(NEGATIVE_KEYWORDS),
            neutral: hits(NEUTRAL_KEYWORDS),
        }
    }

    /// Strict majority wins; every tie falls through to `Balanced`.
    pub fn theme(&self) -> Theme {
        if self.positive > self.negative && self.positive > self.neutral {
            Theme::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Theme::Supportive
        } else {
            Theme::Balanced
        }
    }
}

/// Classify free text. Callers reject empty input before getting here.
pub fn classify(text: &str) -> MoodAnalysis {
    let theme = KeywordCounts::tally(text).theme();
    analysis_for(theme)
}

fn analysis_for(theme: Theme) -> MoodAnalysis {
    let (mood, emoji, message, activities): (MoodLabel, _, _, [&str; 4]) = match theme {
        Theme::Positive => (
            MoodLabel::Great,
            "😊",
            "You're feeling positive today! That's wonderful to see.",
            [
                "Continue doing what makes you happy",
                "Share your positive energy with others",
                "Try a new hobby or activity",
                "Spend time in nature",
            ],
        ),
        Theme::Supportive => (
            MoodLabel::Poor,
            "😔",
            "It sounds like you're going through a tough time. Remember, this feeling will pass.",
            [
                "Take deep breaths and practice mindfulness",
                "Talk to someone you trust",
                "Do something kind for yourself",
                "Try gentle exercise like walking",
            ],
        ),
        Theme::Balanced => (
            MoodLabel::Okay,
            "😐",
            "You seem to be in a neutral state today. That's perfectly normal.",
            [
                "Try something new to spark interest",
                "Connect with friends or family",
                "Practice gratitude",
                "Do a small creative activity",
            ],
        ),
    };

    MoodAnalysis {
        mood,
        emoji,
        message,
        theme,
        suggested_activities: activities.iter().map(|a| a.to_string()).collect(),
    }
}
