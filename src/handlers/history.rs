use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde::Deserialize;

use crate::auth::middleware::AuthUser;
use crate::db::mood_entries::list_mood_entries;
use crate::error::{AppError, AppResult};
use crate::services::history::{
    calendar_view, day_lookup, summarize, CalendarMonth, CalendarView, DayMood, HistorySummary,
    TimeRange,
};
use crate::AppState;

/// Widest real-world UTC offset, in minutes (UTC+14 / UTC-14).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub range: Option<TimeRange>,
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
    pub tz_offset_minutes: Option<i32>,
}

/// Viewer's zone from minutes east of UTC; absent means UTC.
pub fn viewer_offset(minutes: Option<i32>) -> AppResult<FixedOffset> {
    let minutes = minutes.unwrap_or(0);
    if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        return Err(AppError::Validation(format!(
            "tz_offset_minutes must be between -{MAX_OFFSET_MINUTES} and {MAX_OFFSET_MINUTES}"
        )));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| AppError::Validation("Invalid timezone offset".into()))
}

fn requested_month(query: &CalendarQuery, tz: FixedOffset) -> AppResult<CalendarMonth> {
    match (query.year, query.month) {
        (None, None) => Ok(CalendarMonth::containing(
            Utc::now().with_timezone(&tz).date_naive(),
        )),
        (Some(year), Some(month)) => CalendarMonth::new(year, month)
            .ok_or_else(|| AppError::Validation("Invalid year or month".into())),
        _ => Err(AppError::Validation(
            "year and month must be given together".into(),
        )),
    }
}

pub async fn summary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistorySummary>> {
    let tz = viewer_offset(query.tz_offset_minutes)?;
    let range = query.range.unwrap_or_default();
    let entries = list_mood_entries(&state.db, auth_user.id).await?;

    let summary = summarize(&entries, range, Utc::now(), tz);
    tracing::debug!(
        user_id = %auth_user.id,
        range = ?range,
        entry_count = summary.entry_count,
        "History summary computed"
    );
    Ok(Json(summary))
}

pub async fn calendar(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarView>> {
    let tz = viewer_offset(query.tz_offset_minutes)?;
    let month = requested_month(&query, tz)?;
    let entries = list_mood_entries(&state.db, auth_user.id).await?;
    Ok(Json(calendar_view(&entries, month, tz)))
}

pub async fn day(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Option<DayMood>>> {
    let tz = viewer_offset(query.tz_offset_minutes)?;
    let entries = list_mood_entries(&state.db, auth_user.id).await?;
    Ok(Json(day_lookup(&entries, query.date, tz)))
}
