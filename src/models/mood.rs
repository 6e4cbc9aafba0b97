use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

/// A mood label as stored on an entry.
///
/// The classifier only ever produces `Great`, `Poor` and `Okay`; the remaining
/// levels exist so that stored labels from other sources still map to a score.
/// Anything else is kept verbatim in `Unrecognized` and scores as the default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodLabel {
    Terrible,
    Bad,
    Poor,
    Okay,
    Neutral,
    Good,
    Great,
    Excellent,
    Amazing,
    Perfect,
    Unrecognized(String),
}

impl MoodLabel {
    /// Case-insensitive parse. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "terrible" => Self::Terrible,
            "bad" => Self::Bad,
            "poor" => Self::Poor,
            "okay" => Self::Okay,
            "neutral" => Self::Neutral,
            "good" => Self::Good,
            "great" => Self::Great,
            "excellent" => Self::Excellent,
            "amazing" => Self::Amazing,
            "perfect" => Self::Perfect,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Terrible => "terrible",
            Self::Bad => "bad",
            Self::Poor => "poor",
            Self::Okay => "okay",
            Self::Neutral => "neutral",
            Self::Good => "good",
            Self::Great => "great",
            Self::Excellent => "excellent",
            Self::Amazing => "amazing",
            Self::Perfect => "perfect",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MoodLabel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<MoodLabel> for String {
    fn from(label: MoodLabel) -> Self {
        match label {
            MoodLabel::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

// Stored as plain TEXT so unrecognized labels survive a round trip.
impl Type<Postgres> for MoodLabel {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for MoodLabel {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<Postgres>>::decode(value)?;
        Ok(Self::parse(raw))
    }
}

impl Encode<'_, Postgres> for MoodLabel {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// Optional weather tag on an entry. Has no effect on classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "weather_tag", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Stormy => "stormy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MoodLabel::parse("GREAT"), MoodLabel::Great);
        assert_eq!(MoodLabel::parse("Terrible"), MoodLabel::Terrible);
        assert_eq!(MoodLabel::parse(" okay "), MoodLabel::Okay);
    }

    #[test]
    fn test_unrecognized_keeps_raw_text() {
        let label = MoodLabel::parse("Meh");
        assert_eq!(label, MoodLabel::Unrecognized("Meh".into()));
        assert_eq!(label.as_str(), "Meh");
        assert!(!label.is_recognized());
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_value(MoodLabel::Poor).unwrap();
        assert_eq!(json, "poor");

        let back: MoodLabel = serde_json::from_str(r#""perfect""#).unwrap();
        assert_eq!(back, MoodLabel::Perfect);

        let odd: MoodLabel = serde_json::from_str(r#""sleepy""#).unwrap();
        assert_eq!(serde_json::to_value(odd).unwrap(), "sleepy");
    }

    #[test]
    fn test_weather_serde() {
        let w: Weather = serde_json::from_str(r#""stormy""#).unwrap();
        assert_eq!(w, Weather::Stormy);
        assert!(serde_json::from_str::<Weather>(r#""foggy""#).is_err());
    }
}
