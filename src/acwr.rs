// ABOUTME: Acute:Chronic Workload Ratio calculators, weekly lookback and rolling daily variants
// ABOUTME: Guards insufficient history and zero chronic load with a None sentinel, never NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ACWR Calculation
//!
//! Two deliberately separate ratio variants answer different product
//! questions and must never be conflated:
//!
//! - **Weekly lookback** ([`AcwrCalculator::compute_weekly_acwr`]): most
//!   recent qualifying ISO week against the mean of the next three.
//! - **Rolling daily** ([`AcwrCalculator::compute_daily_acwr`]): 7-day
//!   acute average against a 28-day chronic average, each taken over
//!   observed days only.
//!
//! Both return `None` when history is too short or the chronic baseline is
//! zero. The UI renders that sentinel as a placeholder; it must never be
//! coerced to `0.0`. The unguarded [`quick_estimate`] exists only for
//! optimistic previews.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregation::weekly_loads;
use crate::errors::{AppError, AppResult};
use crate::load_constants::acwr as defaults;
use crate::models::{TrainingSession, WeeklyLoad};
use crate::zones::{classify, RiskZone, ZoneColor};

/// Calculator for acute:chronic workload ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcwrCalculator {
    acute_window_days: i64,
    chronic_window_days: i64,
    min_chronic_observed_days: usize,
    chronic_baseline_weeks: usize,
}

impl Default for AcwrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AcwrCalculator {
    /// Create a calculator with the standard 7/28-day windows and the
    /// 4-week weekly lookback
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acute_window_days: defaults::ACUTE_WINDOW_DAYS,
            chronic_window_days: defaults::CHRONIC_WINDOW_DAYS,
            min_chronic_observed_days: defaults::MIN_CHRONIC_OBSERVED_DAYS,
            chronic_baseline_weeks: defaults::CHRONIC_BASELINE_WEEKS,
        }
    }

    /// Create a calculator with custom daily windows
    ///
    /// The minimum-data guard scales with the chronic window: at least
    /// three quarters of its days (rounded up) must have recorded load
    /// before a daily ratio is reported. The standard 28-day window
    /// reproduces the 21-of-28 rule.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either window is non-positive or
    /// the acute window exceeds the chronic window.
    pub fn with_windows(acute_days: i64, chronic_days: i64) -> AppResult<Self> {
        if acute_days <= 0 || chronic_days <= 0 {
            return Err(AppError::invalid_input(format!(
                "Window sizes must be positive, got acute={acute_days}, chronic={chronic_days}"
            )));
        }
        if acute_days > chronic_days {
            return Err(AppError::invalid_input(format!(
                "Acute window ({acute_days}d) must not exceed chronic window ({chronic_days}d)"
            )));
        }

        Ok(Self {
            acute_window_days: acute_days,
            chronic_window_days: chronic_days,
            min_chronic_observed_days: ((chronic_days * 3 + 3) / 4) as usize,
            chronic_baseline_weeks: defaults::CHRONIC_BASELINE_WEEKS,
        })
    }

    /// Weekly ACWR: most recent qualifying week vs the mean of the next three
    ///
    /// Weeks with zero total load do not qualify. Returns `None` when fewer
    /// than four weeks qualify or the chronic baseline is zero; callers must
    /// render the sentinel as a placeholder, not as `0.0`.
    #[must_use]
    pub fn compute_weekly_acwr(&self, weekly: &[WeeklyLoad]) -> Option<f64> {
        let mut qualifying: Vec<&WeeklyLoad> =
            weekly.iter().filter(|w| w.total_load > 0.0).collect();
        // Zero-padded identifiers sort chronologically, newest first here
        qualifying.sort_by(|a, b| b.week.cmp(&a.week));

        let required = self.chronic_baseline_weeks + 1;
        if qualifying.len() < required {
            warn!(
                qualifying = qualifying.len(),
                required, "insufficient qualifying weeks for weekly ACWR"
            );
            return None;
        }

        let acute = qualifying[0].total_load;
        let chronic = qualifying[1..=self.chronic_baseline_weeks]
            .iter()
            .map(|w| w.total_load)
            .sum::<f64>()
            / self.chronic_baseline_weeks as f64;

        if chronic <= 0.0 {
            warn!(chronic, "zero chronic baseline, weekly ACWR undefined");
            return None;
        }

        let ratio = round_to_hundredths(acute / chronic);
        debug!(acute, chronic, ratio, "weekly ACWR computed");
        Some(ratio)
    }

    /// Rolling daily ACWR for a target date
    ///
    /// Acute and chronic averages are taken over days that actually have an
    /// entry in their window, not over the fixed window length. Returns
    /// `None` when fewer than the minimum chronic days are observed or the
    /// chronic average is zero. A target window with no recorded acute days
    /// yields a `0.0` acute average, not a sentinel.
    #[must_use]
    pub fn compute_daily_acwr(
        &self,
        daily_loads: &BTreeMap<NaiveDate, f64>,
        target_date: NaiveDate,
    ) -> Option<f64> {
        let (chronic_sum, chronic_observed) =
            window_stats(daily_loads, target_date, self.chronic_window_days);
        if chronic_observed < self.min_chronic_observed_days {
            warn!(
                observed = chronic_observed,
                required = self.min_chronic_observed_days,
                "insufficient chronic history for daily ACWR"
            );
            return None;
        }

        let chronic_average = chronic_sum / chronic_observed as f64;
        if chronic_average <= 0.0 {
            warn!(chronic_average, "zero chronic average, daily ACWR undefined");
            return None;
        }

        let (acute_sum, acute_observed) =
            window_stats(daily_loads, target_date, self.acute_window_days);
        let acute_average = if acute_observed == 0 {
            0.0
        } else {
            acute_sum / acute_observed as f64
        };

        let ratio = round_to_hundredths(acute_average / chronic_average);
        debug!(
            acute_average,
            chronic_average, ratio, "daily ACWR computed"
        );
        Some(ratio)
    }

    /// Aggregate sessions, compute the weekly ratio, and classify it
    #[must_use]
    pub fn assess_weekly(&self, sessions: &[TrainingSession]) -> AcwrAssessment {
        let weekly = weekly_loads(sessions);
        let ratio = self.compute_weekly_acwr(&weekly);
        let assessment = classify(ratio);

        AcwrAssessment {
            acwr: ratio,
            zone: assessment.zone,
            status: assessment.status.to_owned(),
            color: assessment.color,
            weekly_loads: weekly,
        }
    }
}

/// Unguarded instantaneous estimate: `acute / chronic`, a zero chronic
/// treated as 1
///
/// For optimistic previews (e.g. live duration editing) only. Health-risk
/// facing displays must use the guarded calculator variants, which report
/// insufficient data instead of a rough number.
#[must_use]
pub fn quick_estimate(acute_load: f64, chronic_load: f64) -> f64 {
    let denominator = if chronic_load > 0.0 { chronic_load } else { 1.0 };
    acute_load / denominator
}

/// Full ACWR assessment for dashboard serialization
#[derive(Debug, Clone, Serialize)]
pub struct AcwrAssessment {
    /// Ratio rounded to two decimals; `None` means insufficient history and
    /// must render as a placeholder, never as `0.0`
    pub acwr: Option<f64>,
    /// Risk zone
    pub zone: RiskZone,
    /// Human-readable status message
    pub status: String,
    /// Display color token
    pub color: ZoneColor,
    /// Weekly totals, oldest week first, for chart rendering
    pub weekly_loads: Vec<WeeklyLoad>,
}

/// Sum and observed-day count over an inclusive trailing window
fn window_stats(
    daily_loads: &BTreeMap<NaiveDate, f64>,
    target_date: NaiveDate,
    window_days: i64,
) -> (f64, usize) {
    let start = target_date - Duration::days(window_days - 1);
    let mut sum = 0.0;
    let mut observed = 0;
    for load in daily_loads.range(start..=target_date).map(|(_, load)| load) {
        sum += load;
        observed += 1;
    }
    (sum, observed)
}

/// Round to two decimal places (round-half-away-from-zero)
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
