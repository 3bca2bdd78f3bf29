// ABOUTME: Unit tests for the weekly and rolling-daily ACWR calculators
// ABOUTME: Covers guards, rounding, monotonicity, and end-to-end assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeMap;

use acwr_engine::{
    quick_estimate, AcwrCalculator, ErrorCode, RiskZone, TrainingSession, TrainingType,
    WeeklyLoad, ZoneColor,
};
use chrono::{Duration, NaiveDate};

fn week(identifier: &str, total_load: f64) -> WeeklyLoad {
    WeeklyLoad {
        week: identifier.to_owned(),
        total_load,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Constant-load series covering `newest_offset..=oldest_offset` days before the target
fn daily_series(
    target: NaiveDate,
    newest_offset: i64,
    oldest_offset: i64,
    load: f64,
) -> BTreeMap<NaiveDate, f64> {
    let mut series = BTreeMap::new();
    for offset in newest_offset..=oldest_offset {
        series.insert(target - Duration::days(offset), load);
    }
    series
}

#[test]
fn test_weekly_end_to_end_scenario() {
    let weeks = vec![
        week("2025-W18", 3800.0),
        week("2025-W19", 4200.0),
        week("2025-W20", 4000.0),
        week("2025-W21", 5000.0),
    ];

    let ratio = AcwrCalculator::new().compute_weekly_acwr(&weeks);
    assert_eq!(ratio, Some(1.25));
}

#[test]
fn test_weekly_input_order_does_not_matter() {
    let weeks = vec![
        week("2025-W21", 5000.0),
        week("2025-W19", 4200.0),
        week("2025-W18", 3800.0),
        week("2025-W20", 4000.0),
    ];

    let ratio = AcwrCalculator::new().compute_weekly_acwr(&weeks);
    assert_eq!(ratio, Some(1.25));
}

#[test]
fn test_weekly_minimum_weeks_boundary() {
    let calculator = AcwrCalculator::new();

    let three_weeks = vec![
        week("2025-W19", 4000.0),
        week("2025-W20", 4000.0),
        week("2025-W21", 4000.0),
    ];
    assert_eq!(calculator.compute_weekly_acwr(&three_weeks), None);

    let four_weeks = vec![
        week("2025-W18", 4000.0),
        week("2025-W19", 4000.0),
        week("2025-W20", 4000.0),
        week("2025-W21", 4000.0),
    ];
    assert_eq!(calculator.compute_weekly_acwr(&four_weeks), Some(1.0));
}

#[test]
fn test_weekly_zero_load_weeks_do_not_qualify() {
    // Four weeks present, but one carries no load, leaving three qualifying
    let weeks = vec![
        week("2025-W18", 4000.0),
        week("2025-W19", 0.0),
        week("2025-W20", 4000.0),
        week("2025-W21", 4000.0),
    ];

    assert_eq!(AcwrCalculator::new().compute_weekly_acwr(&weeks), None);
}

#[test]
fn test_weekly_ratio_monotonic_in_acute_load() {
    let calculator = AcwrCalculator::new();
    let mut previous = f64::MIN;

    for acute in [2000.0, 3000.0, 4000.0, 5000.0, 6000.0] {
        let weeks = vec![
            week("2025-W18", 4000.0),
            week("2025-W19", 4000.0),
            week("2025-W20", 4000.0),
            week("2025-W21", acute),
        ];
        let ratio = calculator.compute_weekly_acwr(&weeks).unwrap();
        assert!(ratio > previous, "ratio {ratio} not above {previous}");
        previous = ratio;
    }
}

#[test]
fn test_weekly_ratio_rounds_to_two_decimals() {
    let third = 100.0 / 3.0;
    let weeks = vec![
        week("2025-W18", third),
        week("2025-W19", third),
        week("2025-W20", third),
        week("2025-W21", 100.0),
    ];

    let ratio = AcwrCalculator::new().compute_weekly_acwr(&weeks);
    assert_eq!(ratio, Some(3.0));
}

#[test]
fn test_daily_acwr_computation() {
    let target = date(2025, 6, 28);
    // Last 7 days at 120 AU/day, the 21 days before at 100 AU/day
    let mut series = daily_series(target, 0, 6, 120.0);
    series.extend(daily_series(target, 7, 27, 100.0));

    let ratio = AcwrCalculator::new().compute_daily_acwr(&series, target);
    // acute avg 120, chronic avg 105, 120/105 = 1.142857...
    assert_eq!(ratio, Some(1.14));
}

#[test]
fn test_daily_minimum_observed_days_boundary() {
    let calculator = AcwrCalculator::new();
    let target = date(2025, 6, 28);

    let twenty_days = daily_series(target, 0, 19, 100.0);
    assert_eq!(calculator.compute_daily_acwr(&twenty_days, target), None);

    let twenty_one_days = daily_series(target, 0, 20, 100.0);
    assert_eq!(
        calculator.compute_daily_acwr(&twenty_one_days, target),
        Some(1.0)
    );
}

#[test]
fn test_daily_zero_chronic_average_is_guarded() {
    let target = date(2025, 6, 28);
    let series = daily_series(target, 0, 27, 0.0);

    assert_eq!(AcwrCalculator::new().compute_daily_acwr(&series, target), None);
}

#[test]
fn test_daily_rest_week_yields_zero_ratio() {
    let target = date(2025, 6, 28);
    // 21 observed days, none of them inside the acute window
    let series = daily_series(target, 7, 27, 100.0);

    let ratio = AcwrCalculator::new().compute_daily_acwr(&series, target);
    assert_eq!(ratio, Some(0.0));
}

#[test]
fn test_daily_entries_outside_window_are_ignored() {
    let target = date(2025, 6, 28);
    let mut series = daily_series(target, 0, 27, 100.0);
    // Ancient history and future entries must not shift either window
    series.insert(target - Duration::days(200), 10_000.0);
    series.insert(target + Duration::days(1), 10_000.0);

    let ratio = AcwrCalculator::new().compute_daily_acwr(&series, target);
    assert_eq!(ratio, Some(1.0));
}

#[test]
fn test_quick_estimate_is_unguarded() {
    assert!((quick_estimate(500.0, 400.0) - 1.25).abs() < f64::EPSILON);
    // Zero chronic divides by 1 instead of reporting a sentinel
    assert!((quick_estimate(500.0, 0.0) - 500.0).abs() < f64::EPSILON);
    assert!((quick_estimate(0.0, 0.0)).abs() < f64::EPSILON);
}

#[test]
fn test_with_windows_validation() {
    let err = AcwrCalculator::with_windows(0, 28).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = AcwrCalculator::with_windows(14, 7).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    assert!(AcwrCalculator::with_windows(7, 28).is_ok());
}

#[test]
fn test_with_windows_scales_minimum_data_guard() {
    // ceil(3/4 x 4) = 3 observed days required
    let calculator = AcwrCalculator::with_windows(2, 4).unwrap();
    let target = date(2025, 6, 28);

    let two_days = daily_series(target, 0, 1, 100.0);
    assert_eq!(calculator.compute_daily_acwr(&two_days, target), None);

    let three_days = daily_series(target, 0, 2, 100.0);
    assert_eq!(calculator.compute_daily_acwr(&three_days, target), Some(1.0));
}

#[test]
fn test_assess_weekly_insufficient_data() {
    let sessions = vec![TrainingSession {
        date: date(2025, 6, 2),
        training_type: TrainingType::Field,
        effort_level_rpe: 7.0,
        duration_minutes: 90.0,
        emotional_load: 3.0,
    }];

    let assessment = AcwrCalculator::new().assess_weekly(&sessions);
    assert_eq!(assessment.acwr, None);
    assert_eq!(assessment.zone, RiskZone::Unknown);
    assert_eq!(assessment.status, "Insufficient data");
    assert_eq!(assessment.color, ZoneColor::Gray);
    assert_eq!(assessment.weekly_loads.len(), 1);

    let json = serde_json::to_value(&assessment).unwrap();
    assert!(json["acwr"].is_null());
    assert_eq!(json["zone"], "unknown");
    assert_eq!(json["color"], "gray");
}

#[test]
fn test_assess_weekly_end_to_end() {
    // One gym session per week at emotional load 1: load = rpe x duration
    let mondays = [
        (date(2025, 6, 2), 380.0),
        (date(2025, 6, 9), 420.0),
        (date(2025, 6, 16), 400.0),
        (date(2025, 6, 23), 500.0),
    ];
    let sessions: Vec<TrainingSession> = mondays
        .iter()
        .map(|&(on, duration_minutes)| TrainingSession {
            date: on,
            training_type: TrainingType::Gym,
            effort_level_rpe: 10.0,
            duration_minutes,
            emotional_load: 1.0,
        })
        .collect();

    let assessment = AcwrCalculator::new().assess_weekly(&sessions);
    assert_eq!(assessment.acwr, Some(1.25));
    assert_eq!(assessment.zone, RiskZone::Caution);
    assert_eq!(assessment.status, "Caution Zone");
    assert_eq!(assessment.color, ZoneColor::Yellow);
    assert_eq!(assessment.weekly_loads.len(), 4);
    assert!((assessment.weekly_loads[0].total_load - 3800.0).abs() < f64::EPSILON);

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["zone"], "caution");
    assert_eq!(json["acwr"], 1.25);
}
