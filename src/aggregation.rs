// ABOUTME: Aggregates raw training sessions into ISO-week and daily load buckets
// ABOUTME: Produces the sparse series consumed by the ACWR calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rolling-window load aggregation.
//!
//! Week bucketing uses the ISO-8601 week-numbering calendar (weeks start
//! Monday; week 1 contains the year's first Thursday) so identifiers stay
//! unambiguous across year boundaries. Buckets with no sessions are absent
//! from the maps, not present with a zero value.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{DailyLoad, TrainingSession, WeeklyLoad};

/// ISO-8601 year-week identifier for a date, e.g. `"2025-W21"`
///
/// Zero-padded so lexicographic order equals chronological order.
#[must_use]
pub fn iso_week_identifier(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{:04}-W{:02}", week.year(), week.week())
}

/// Sessions with non-positive duration or RPE never reach a bucket
fn qualifies(session: &TrainingSession) -> bool {
    session.duration_minutes > 0.0 && session.effort_level_rpe > 0.0
}

/// Bucket sessions into ISO weeks
///
/// Weeks with no qualifying sessions are absent from the map.
#[must_use]
pub fn bucket_by_week(sessions: &[TrainingSession]) -> BTreeMap<String, Vec<TrainingSession>> {
    let mut buckets: BTreeMap<String, Vec<TrainingSession>> = BTreeMap::new();
    for session in sessions {
        if !qualifies(session) {
            continue;
        }
        buckets
            .entry(iso_week_identifier(session.date))
            .or_default()
            .push(session.clone());
    }
    buckets
}

/// Sum session loads per calendar day
///
/// Days with no qualifying sessions are absent from the map.
#[must_use]
pub fn bucket_by_day(sessions: &[TrainingSession]) -> BTreeMap<NaiveDate, f64> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for session in sessions {
        if !qualifies(session) {
            continue;
        }
        *buckets.entry(session.date).or_insert(0.0) += session.load();
    }
    buckets
}

/// Sum session loads per ISO week, oldest week first
#[must_use]
pub fn weekly_loads(sessions: &[TrainingSession]) -> Vec<WeeklyLoad> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for session in sessions {
        if !qualifies(session) {
            continue;
        }
        *totals
            .entry(iso_week_identifier(session.date))
            .or_insert(0.0) += session.load();
    }
    totals
        .into_iter()
        .map(|(week, total_load)| WeeklyLoad { week, total_load })
        .collect()
}

/// Sum session loads per calendar day, oldest day first
#[must_use]
pub fn daily_loads(sessions: &[TrainingSession]) -> Vec<DailyLoad> {
    bucket_by_day(sessions)
        .into_iter()
        .map(|(date, total_load)| DailyLoad { date, total_load })
        .collect()
}
