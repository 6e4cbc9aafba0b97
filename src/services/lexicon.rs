//! Static classification tables. Read-only for the life of the process.

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy",
    "joy",
    "great",
    "amazing",
    "wonderful",
    "excited",
    "love",
    "good",
    "fantastic",
    "awesome",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "angry",
    "frustrated",
    "terrible",
    "awful",
    "hate",
    "bad",
    "horrible",
    "depressed",
    "upset",
];

pub const NEUTRAL_KEYWORDS: &[&str] = &["okay", "fine", "alright", "normal", "usual"];

/// Mood label to chart score, lowest to highest.
pub const MOOD_SCORES: [(&str, u8); 10] = [
    ("terrible", 1),
    ("bad", 2),
    ("poor", 3),
    ("okay", 4),
    ("neutral", 5),
    ("good", 6),
    ("great", 7),
    ("excellent", 8),
    ("amazing", 9),
    ("perfect", 10),
];

/// Glyph shown for an entry that was stored without one.
pub const FALLBACK_EMOJI_BY_SCORE: [&str; 10] = [
    "😭", "😢", "😔", "🙁", "😐", "🙂", "😊", "😄", "🤩", "🌟",
];

/// Used when the score is somehow outside 1..=10.
pub const UNKNOWN_SCORE_GLYPH: &str = "●";

pub fn fallback_emoji(score: u8) -> &'static str {
    match score {
        1..=10 => FALLBACK_EMOJI_BY_SCORE[usize::from(score - 1)],
        _ => UNKNOWN_SCORE_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lists_are_lowercase() {
        for kw in POSITIVE_KEYWORDS
            .iter()
            .chain(NEGATIVE_KEYWORDS)
            .chain(NEUTRAL_KEYWORDS)
        {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_scores_cover_one_to_ten() {
        let scores: Vec<u8> = MOOD_SCORES.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_fallback_emoji_bounds() {
        assert_eq!(fallback_emoji(1), "😭");
        assert_eq!(fallback_emoji(5), "😐");
        assert_eq!(fallback_emoji(10), "🌟");
        assert_eq!(fallback_emoji(0), UNKNOWN_SCORE_GLYPH);
        assert_eq!(fallback_emoji(11), UNKNOWN_SCORE_GLYPH);
    }
}
