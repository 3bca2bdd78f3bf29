// ABOUTME: Library entry point for the ACWR training-load engine
// ABOUTME: Pure synchronous analytics: session load, aggregation, ratios, risk zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # ACWR Engine
//!
//! Acute:Chronic Workload Ratio analytics for athlete training-load
//! monitoring. The crate turns recorded training sessions into calendar-week
//! and daily load series, computes acute/chronic ratios over them, and
//! classifies the result into an injury-risk zone for dashboard display.
//!
//! Everything here is a pure, synchronous function over in-memory data:
//! no I/O, no shared mutable state, safe to call from any thread. The HTTP,
//! persistence, and UI layers live elsewhere and consume these results.
//!
//! ## Pipeline
//!
//! 1. [`compute_session_load`] scores one session (session-RPE formula)
//! 2. [`aggregation`] buckets sessions into ISO weeks and days
//! 3. [`AcwrCalculator`] computes the weekly or rolling-daily ratio
//! 4. [`classify`] maps the ratio (or its absence) to a risk zone
//!
//! ## Example
//!
//! ```rust
//! use acwr_engine::{classify, AcwrCalculator, RiskZone, WeeklyLoad};
//!
//! let weeks = vec![
//!     WeeklyLoad { week: "2025-W18".into(), total_load: 3800.0 },
//!     WeeklyLoad { week: "2025-W19".into(), total_load: 4200.0 },
//!     WeeklyLoad { week: "2025-W20".into(), total_load: 4000.0 },
//!     WeeklyLoad { week: "2025-W21".into(), total_load: 5000.0 },
//! ];
//!
//! let calculator = AcwrCalculator::new();
//! let ratio = calculator.compute_weekly_acwr(&weeks);
//! assert_eq!(ratio, Some(1.25));
//! assert_eq!(classify(ratio).zone, RiskZone::Caution);
//! ```

/// ACWR calculators (weekly lookback, rolling daily, quick estimate)
pub mod acwr;
/// ISO-week and daily load aggregation
pub mod aggregation;
/// Unified error types
pub mod errors;
/// Immutable coefficient and threshold tables
pub mod load_constants;
/// Domain models for sessions and derived series
pub mod models;
/// Session-RPE load formula
pub mod session_load;
/// Risk-zone classification
pub mod zones;

pub use acwr::{quick_estimate, AcwrAssessment, AcwrCalculator};
pub use aggregation::{
    bucket_by_day, bucket_by_week, daily_loads, iso_week_identifier, weekly_loads,
};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{DailyLoad, TrainingSession, TrainingType, WeeklyLoad};
pub use session_load::compute_session_load;
pub use zones::{
    classify, classify_value, zone_boundaries, RiskZone, ZoneAssessment, ZoneBoundaries, ZoneColor,
};
