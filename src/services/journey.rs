//! Daily journey check-in: a quick structured recap of the day that answers
//! with a support message. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::models::mood::Weather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyMood {
    Excellent,
    Good,
    Okay,
    Poor,
    Terrible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Companion {
    Alone,
    Family,
    Friends,
    Partner,
    Colleagues,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

pub const DEFAULT_DAY_QUALITY: u8 = 5;

#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    pub mood: Option<JourneyMood>,
    pub partner: Option<Companion>,
    pub weather: Option<Weather>,
    pub sleep: Option<SleepQuality>,
    pub day_quality: Option<u8>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JourneyCheckIn {
    pub mood: JourneyMood,
    pub partner: Option<Companion>,
    pub weather: Weather,
    pub sleep: SleepQuality,
    pub day_quality: u8,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    pub support_message: &'static str,
    pub check_in: JourneyCheckIn,
}

impl JourneyMood {
    pub fn support_message(&self) -> &'static str {
        match self {
            Self::Excellent => "What a wonderful day! Your positive energy is inspiring. Keep up the great work! ✨",
            Self::Good => "You're doing great! It's lovely to see you taking care of yourself and staying positive. 🌟",
            Self::Okay => "Every day doesn't have to be perfect. You're doing your best, and that's enough. 💙",
            Self::Poor => "It's okay to have difficult days. Remember, you're stronger than you think and tomorrow is a new opportunity. 🌈",
            Self::Terrible => "I'm sorry you're having such a tough time. Please be gentle with yourself and consider reaching out for support. 💜",
        }
    }
}

impl JourneyRequest {
    /// Mood, weather and sleep are required; day quality defaults to 5.
    pub fn into_check_in(self) -> Result<JourneyCheckIn, String> {
        let mood = self.mood.ok_or("Please choose how your day went")?;
        let weather = self.weather.ok_or("Please choose the weather")?;
        let sleep = self.sleep.ok_or("Please tell us how you slept")?;
        let day_quality = self.day_quality.unwrap_or(DEFAULT_DAY_QUALITY);
        if !(1..=10).contains(&day_quality) {
            return Err("Day quality must be between 1 and 10".into());
        }
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(JourneyCheckIn {
            mood,
            partner: self.partner,
            weather,
            sleep,
            day_quality,
            notes,
        })
    }
}

impl From<JourneyCheckIn> for JourneyResponse {
    fn from(check_in: JourneyCheckIn) -> Self {
        Self {
            support_message: check_in.mood.support_message(),
            check_in,
        }
    }
}
