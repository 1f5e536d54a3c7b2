//! Ledger aggregate derivation
//!
//! Everything here is pure: given the same record snapshot and the same
//! `now`, the derived values are identical. Callers recompute on every
//! read rather than caching.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use common::models::{DiagnosisRecord, LedgerStats, LevelInfo};

const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;
const MONTH_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Streak scan horizon in days
const STREAK_SCAN_DAYS: i64 = 365;

/// Gamification level as a step function of the total diagnosis count
pub fn level_for(total_diagnoses: usize) -> LevelInfo {
    let (level, name, next) = if total_diagnoses >= 100 {
        (5, "Plant Expert", None)
    } else if total_diagnoses >= 50 {
        (4, "Plant Specialist", Some(100))
    } else if total_diagnoses >= 20 {
        (3, "Plant Enthusiast", Some(50))
    } else if total_diagnoses >= 5 {
        (2, "Plant Lover", Some(20))
    } else {
        (1, "Plant Beginner", Some(5))
    };

    LevelInfo {
        level,
        name: name.to_string(),
        next,
    }
}

/// Mean confidence over all records; 0 for an empty ledger
pub fn average_confidence(records: &[DiagnosisRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.confidence).sum::<f64>() / records.len() as f64
}

/// Count of records with a timestamp within `[now - window_ms, now]`
pub fn window_count(records: &[DiagnosisRecord], now_ms: i64, window_ms: i64) -> usize {
    records
        .iter()
        .filter(|r| now_ms - r.timestamp < window_ms)
        .count()
}

/// Consecutive-day streak over a set of active calendar days.
///
/// Walks backward from `today`: each active day extends the streak,
/// and the first inactive day ends the scan, with one exception: an
/// inactive `today` does not end it. A record only two days ago with
/// nothing since still yields a streak of 0. The day-zero exemption is
/// load-bearing; keep it.
pub fn streak_from_days(active: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    for i in 0..STREAK_SCAN_DAYS {
        let day = today - Duration::days(i);
        if active.contains(&day) {
            streak += 1;
        } else if i > 0 {
            break;
        }
    }
    streak
}

/// Streak in days for a record snapshot, using `now`'s calendar
pub fn streak_days<Tz: TimeZone>(records: &[DiagnosisRecord], now: &DateTime<Tz>) -> u32 {
    streak_from_days(&active_days(records, now), now.date_naive())
}

fn active_days<Tz: TimeZone>(
    records: &[DiagnosisRecord],
    now: &DateTime<Tz>,
) -> HashSet<NaiveDate> {
    records
        .iter()
        .filter_map(|r| {
            now.timezone()
                .timestamp_millis_opt(r.timestamp)
                .single()
                .map(|dt| dt.date_naive())
        })
        .collect()
}

/// Compute all aggregates for a ledger snapshot
pub fn ledger_stats<Tz: TimeZone>(records: &[DiagnosisRecord], now: &DateTime<Tz>) -> LedgerStats {
    let now_ms = now.timestamp_millis();
    let total_diagnoses = records.len();
    let healthy_count = records.iter().filter(|r| r.is_healthy()).count();

    LedgerStats {
        total_diagnoses,
        healthy_count,
        problem_count: total_diagnoses - healthy_count,
        average_confidence: average_confidence(records),
        this_week: window_count(records, now_ms, WEEK_MS),
        this_month: window_count(records, now_ms, MONTH_MS),
        streak_days: streak_days(records, now),
        level: level_for(total_diagnoses),
    }
}
