//! Storage boundary for mood entries. Rows are inserted once and never updated.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mood_entry::{MoodEntry, NewMoodEntry};

pub async fn insert_mood_entry(db: &PgPool, entry: &NewMoodEntry) -> Result<MoodEntry, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries
            (id, user_id, mood, emoji, feelings_text, weather, message, suggested_activities)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.user_id)
    .bind(&entry.mood)
    .bind(&entry.emoji)
    .bind(&entry.feelings_text)
    .bind(entry.weather)
    .bind(&entry.message)
    .bind(&entry.suggested_activities)
    .fetch_one(db)
    .await
}

/// All of a user's entries, newest first.
pub async fn list_mood_entries(db: &PgPool, user_id: Uuid) -> Result<Vec<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
