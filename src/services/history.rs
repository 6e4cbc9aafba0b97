//! Derived views over a user's mood entries: time-window filtering, chart
//! projection, average, trend and calendar lookups.
//!
//! Every function here takes entries as a read-only slice ordered newest
//! first (`created_at DESC`, as storage returns them) and recomputes its
//! result from scratch. Calendar days are evaluated in the viewer's offset.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodLabel;
use crate::models::mood_entry::MoodEntry;
use crate::services::lexicon::fallback_emoji;

/// Points per trend window.
pub const TREND_WINDOW: usize = 7;

pub const UNKNOWN_WEATHER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Year,
}

impl TimeRange {
    pub fn days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub mood_score: u8,
    pub weather_tag: String,
    pub formatted_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub range: TimeRange,
    pub entry_count: usize,
    pub points: Vec<ChartPoint>,
    pub average: f64,
    pub average_display: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMood {
    pub score: u8,
    pub emoji: String,
    pub mood: MoodLabel,
}

/// Entries created at or after the range cutoff, input order preserved.
pub fn filter_by_range(entries: &[MoodEntry], range: TimeRange, now: DateTime<Utc>) -> Vec<&MoodEntry> {
    let cutoff = range.cutoff(now);
    entries.iter().filter(|e| e.created_at >= cutoff).collect()
}

/// Oldest-first projection of newest-first entries.
pub fn chart_points(filtered: &[&MoodEntry], tz: FixedOffset) -> Vec<ChartPoint> {
    filtered
        .iter()
        .rev()
        .map(|entry| ChartPoint {
            date: entry.created_at,
            mood_score: entry.mood.score(),
            weather_tag: entry
                .weather
                .map(|w| w.as_str().to_string())
                .unwrap_or_else(|| UNKNOWN_WEATHER.to_string()),
            formatted_date: entry.created_at.with_timezone(&tz).format("%b %-d").to_string(),
        })
        .collect()
}

pub fn average(points: &[ChartPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: u32 = points.iter().map(|p| u32::from(p.mood_score)).sum();
    f64::from(total) / points.len() as f64
}

/// One decimal, exact halves rounded up (4.25 shows as "4.3").
pub fn format_average(avg: f64) -> String {
    format!("{:.1}", (avg * 10.0).round() / 10.0)
}

/// Compares the last seven points with the seven before them.
pub fn trend(points: &[ChartPoint]) -> Trend {
    if points.len() < TREND_WINDOW {
        return Trend::Stable;
    }
    let split = points.len() - TREND_WINDOW;
    let recent = &points[split..];
    let older = &points[split.saturating_sub(TREND_WINDOW)..split];
    if older.len() < TREND_WINDOW {
        return Trend::Stable;
    }

    // equal-sized windows, so comparing sums compares means exactly
    let sum = |window: &[ChartPoint]| window.iter().map(|p| u32::from(p.mood_score)).sum::<u32>();
    match sum(recent).cmp(&sum(older)) {
        std::cmp::Ordering::Greater => Trend::Improving,
        std::cmp::Ordering::Less => Trend::Declining,
        std::cmp::Ordering::Equal => Trend::Stable,
    }
}

pub fn summarize(
    entries: &[MoodEntry],
    range: TimeRange,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> HistorySummary {
    let filtered = filter_by_range(entries, range, now);
    let points = chart_points(&filtered, tz);
    let avg = average(&points);
    HistorySummary {
        range,
        entry_count: filtered.len(),
        trend: trend(&points),
        average: avg,
        average_display: format_average(avg),
        points,
    }
}

/// First entry (newest, given storage order) whose local day is `date`.
pub fn day_lookup(entries: &[MoodEntry], date: NaiveDate, tz: FixedOffset) -> Option<DayMood> {
    let entry = entries
        .iter()
        .find(|e| e.created_at.with_timezone(&tz).date_naive() == date)?;
    let score = entry.mood.score();
    let emoji = entry
        .emoji
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| fallback_emoji(score))
        .to_string();
    Some(DayMood {
        score,
        emoji,
        mood: entry.mood.clone(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.pred_opt().map(|d| d.day()).unwrap_or(28)
    }

    /// Leading blanks up to the first's weekday (Sunday = 0), then every day.
    /// No trailing padding.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let first = self.first_day();
        let blanks = first.weekday().num_days_from_sunday() as usize;
        let days = (1..=self.days_in_month())
            .filter_map(|d| NaiveDate::from_ymd_opt(self.year, self.month, d))
            .map(Some);
        std::iter::repeat(None).take(blanks).chain(days).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub mood: Option<DayMood>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<CalendarCell>>,
    pub prev: CalendarMonth,
    pub next: CalendarMonth,
}

pub fn calendar_view(entries: &[MoodEntry], month: CalendarMonth, tz: FixedOffset) -> CalendarView {
    let cells = month
        .grid()
        .into_iter()
        .map(|slot| {
            slot.map(|date| CalendarCell {
                date,
                mood: day_lookup(entries, date, tz),
            })
        })
        .collect();
    CalendarView {
        year: month.year,
        month: month.month,
        cells,
        prev: month.prev(),
        next: month.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::Weather;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn entry(mood: &str, created_at: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            mood: MoodLabel::parse(mood),
            emoji: None,
            feelings_text: String::new(),
            weather: None,
            message: String::new(),
            suggested_activities: Vec::new(),
            created_at,
        }
    }

    fn point(score: u8) -> ChartPoint {
        ChartPoint {
            date: now(),
            mood_score: score,
            weather_tag: UNKNOWN_WEATHER.into(),
            formatted_date: String::new(),
        }
    }

    #[test]
    fn test_range_defaults_to_month() {
        assert_eq!(TimeRange::default(), TimeRange::Month);
        let r: TimeRange = serde_json::from_str(r#""year""#).unwrap();
        assert_eq!(r.days(), 365);
    }

    #[test]
    fn test_eight_days_ago_only_in_month() {
        let entries = vec![entry("good", now() - Duration::days(8))];
        assert!(filter_by_range(&entries, TimeRange::Week, now()).is_empty());
        assert_eq!(filter_by_range(&entries, TimeRange::Month, now()).len(), 1);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let entries = vec![entry("good", now() - Duration::days(7))];
        assert_eq!(filter_by_range(&entries, TimeRange::Week, now()).len(), 1);
    }

    #[test]
    fn test_chart_points_are_oldest_first() {
        let mut newest = entry("great", now() - Duration::days(1));
        newest.weather = Some(Weather::Rainy);
        let entries = vec![newest, entry("poor", now() - Duration::days(3))];
        let filtered = filter_by_range(&entries, TimeRange::Week, now());
        let points = chart_points(&filtered, utc());

        assert_eq!(points[0].mood_score, 3);
        assert_eq!(points[0].weather_tag, "unknown");
        assert_eq!(points[0].formatted_date, "Oct 16");
        assert_eq!(points[1].mood_score, 7);
        assert_eq!(points[1].weather_tag, "rainy");
    }

    #[test]
    fn test_average() {
        let points = vec![point(2), point(4), point(6)];
        assert_eq!(average(&points), 4.0);
        assert_eq!(format_average(average(&points)), "4.0");
        assert_eq!(average(&[]), 0.0);
        assert_eq!(format_average(average(&[point(7), point(4), point(4)])), "5.0");

        let quarter = [point(4), point(4), point(4), point(5)];
        assert_eq!(average(&quarter), 4.25);
        assert_eq!(format_average(average(&quarter)), "4.3");
        assert_eq!(format_average(6.25), "6.3");
        assert_eq!(format_average(4.75), "4.8");
    }

    #[test]
    fn test_unrecognized_labels_average_as_five() {
        let entries = vec![
            entry("mystery", now() - Duration::hours(1)),
            entry("", now() - Duration::hours(2)),
        ];
        let summary = summarize(&entries, TimeRange::Week, now(), utc());
        assert_eq!(summary.average, 5.0);
    }

    #[test]
    fn test_trend_needs_seven_points() {
        let points: Vec<ChartPoint> = (1..=6).map(point).collect();
        assert_eq!(trend(&points), Trend::Stable);
    }

    #[test]
    fn test_trend_improving_and_declining() {
        let mut points: Vec<ChartPoint> = (0..7).map(|_| point(3)).collect();
        points.extend((0..7).map(|_| point(8)));
        assert_eq!(trend(&points), Trend::Improving);

        points.reverse();
        assert_eq!(trend(&points), Trend::Declining);

        let flat: Vec<ChartPoint> = (0..14).map(|_| point(5)).collect();
        assert_eq!(trend(&flat), Trend::Stable);
    }

    #[test]
    fn test_trend_uses_only_last_fourteen() {
        // an old dip outside the window is ignored
        let mut points: Vec<ChartPoint> = (0..5).map(|_| point(1)).collect();
        points.extend((0..14).map(|_| point(6)));
        assert_eq!(trend(&points), Trend::Stable);
    }

    #[test]
    fn test_trend_short_older_window_is_stable() {
        let mut points: Vec<ChartPoint> = (0..3).map(|_| point(1)).collect();
        points.extend((0..7).map(|_| point(9)));
        assert_eq!(trend(&points), Trend::Stable);
    }

    #[test]
    fn test_day_lookup_returns_most_recent_of_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut later = entry("great", Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap());
        later.emoji = Some("😊".into());
        let earlier = entry("poor", Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap());
        let entries = vec![later, earlier];

        let found = day_lookup(&entries, day, utc()).unwrap();
        assert_eq!(found.mood, MoodLabel::Great);
        assert_eq!(found.score, 7);
        assert_eq!(found.emoji, "😊");
    }

    #[test]
    fn test_day_lookup_falls_back_to_score_emoji() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut e = entry("terrible", Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());
        e.emoji = Some(String::new());
        let found = day_lookup(&[e], day, utc()).unwrap();
        assert_eq!(found.emoji, "😭");

        let other_day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert!(day_lookup(&[], other_day, utc()).is_none());
    }

    #[test]
    fn test_day_lookup_uses_viewer_offset() {
        // 02:00 UTC on the 19th is still the 18th at UTC-5
        let e = entry("good", Utc.with_ymd_and_hms(2026, 10, 19, 2, 0, 0).unwrap());
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let entries = vec![e];
        assert!(day_lookup(&entries, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), west).is_some());
        assert!(day_lookup(&entries, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), utc()).is_none());
    }

    #[test]
    fn test_grid_leading_blanks() {
        // 1 Oct 2026 is a Thursday
        let grid = CalendarMonth::new(2026, 10).unwrap().grid();
        assert_eq!(grid.len(), 4 + 31);
        assert!(grid[..4].iter().all(Option::is_none));
        assert_eq!(grid[4], NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(grid.last().copied().flatten(), NaiveDate::from_ymd_opt(2026, 10, 31));

        // 1 Feb 2026 is a Sunday
        let feb = CalendarMonth::new(2026, 2).unwrap().grid();
        assert_eq!(feb.len(), 28);
        assert!(feb[0].is_some());
    }

    #[test]
    fn test_month_navigation_and_leap_year() {
        let jan = CalendarMonth::new(2027, 1).unwrap();
        assert_eq!(jan.prev(), CalendarMonth { year: 2026, month: 12 });
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(CalendarMonth::new(2028, 2).unwrap().days_in_month(), 29);
        assert!(CalendarMonth::new(2026, 13).is_none());
    }

    #[test]
    fn test_calendar_view_attaches_lookups() {
        let entries = vec![entry("amazing", Utc.with_ymd_and_hms(2026, 10, 2, 10, 0, 0).unwrap())];
        let view = calendar_view(&entries, CalendarMonth::new(2026, 10).unwrap(), utc());
        let second = view.cells[5].as_ref().unwrap();
        assert_eq!(second.date.day(), 2);
        assert_eq!(second.mood.as_ref().unwrap().score, 9);
        assert!(view.cells[4].as_ref().unwrap().mood.is_none());
        assert_eq!(view.next, CalendarMonth { year: 2026, month: 11 });
    }

    #[test]
    fn test_input_is_not_mutated() {
        let entries = vec![
            entry("good", now() - Duration::days(1)),
            entry("bad", now() - Duration::days(2)),
        ];
        let ids: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        let _ = summarize(&entries, TimeRange::Month, now(), utc());
        assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
    }
}
