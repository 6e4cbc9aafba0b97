use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::mood::{MoodLabel, Weather};
use crate::services::classifier::MoodAnalysis;

/// A persisted mood entry. Never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: MoodLabel,
    pub emoji: Option<String>,
    pub feelings_text: String,
    pub weather: Option<Weather>,
    pub message: String,
    pub suggested_activities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Entry handed to storage; `id` and `created_at` are assigned there.
#[derive(Debug, Clone)]
pub struct NewMoodEntry {
    pub user_id: Uuid,
    pub mood: MoodLabel,
    pub emoji: String,
    pub feelings_text: String,
    pub weather: Option<Weather>,
    pub message: String,
    pub suggested_activities: Vec<String>,
}

impl NewMoodEntry {
    pub fn from_analysis(
        user_id: Uuid,
        feelings_text: String,
        weather: Option<Weather>,
        analysis: &MoodAnalysis,
    ) -> Self {
        Self {
            user_id,
            mood: analysis.mood.clone(),
            emoji: analysis.emoji.to_string(),
            feelings_text,
            weather,
            message: analysis.message.to_string(),
            suggested_activities: analysis.suggested_activities.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub feelings_text: String,
    pub weather: Option<Weather>,
}
