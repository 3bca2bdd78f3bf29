// ABOUTME: Domain models for recorded training sessions and derived load series
// ABOUTME: Serde-serializable types shared with the API and dashboard layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data structures for training-load analysis.
//!
//! `TrainingSession` is the external input recorded by the athlete form
//! layer; the remaining types are derived series recomputed on demand and
//! never persisted by this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::AppError;
use crate::load_constants::session_rpe;
use crate::session_load::compute_session_load;

/// Training modality for a recorded session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// On-field training session
    Field,
    /// Gym or strength session
    Gym,
    /// Competitive match
    Match,
}

impl TrainingType {
    /// Wire name of the modality
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Gym => "gym",
            Self::Match => "match",
        }
    }

    /// Load multiplier applied by the session-RPE formula
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        match self {
            Self::Field => session_rpe::FIELD_TYPE_COEFFICIENT,
            Self::Gym => session_rpe::GYM_TYPE_COEFFICIENT,
            Self::Match => session_rpe::MATCH_TYPE_COEFFICIENT,
        }
    }
}

impl FromStr for TrainingType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(Self::Field),
            "gym" => Ok(Self::Gym),
            "match" => Ok(Self::Match),
            other => Err(AppError::invalid_input(format!(
                "Unknown training type: '{other}'. Valid options: field, gym, match"
            ))),
        }
    }
}

/// A single recorded training session
///
/// Immutable once recorded; created by the athlete form layer, which owns
/// range validation for RPE (1..=10) and emotional load (1..=5).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Training modality
    pub training_type: TrainingType,
    /// Rate of Perceived Exertion, athlete-reported on a 1..=10 scale
    pub effort_level_rpe: f64,
    /// Session duration in minutes
    pub duration_minutes: f64,
    /// Emotional load, athlete-reported on a 1..=5 scale
    pub emotional_load: f64,
}

impl TrainingSession {
    /// Session load in arbitrary units (AU) via the session-RPE formula
    #[must_use]
    pub fn load(&self) -> f64 {
        compute_session_load(
            self.effort_level_rpe,
            self.duration_minutes,
            self.emotional_load,
            self.training_type,
        )
    }
}

/// Total load for one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    /// ISO year-week identifier, e.g. `"2025-W21"`
    pub week: String,
    /// Sum of session loads recorded in that week (AU)
    pub total_load: f64,
}

/// Total load for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyLoad {
    /// Calendar date
    pub date: NaiveDate,
    /// Sum of session loads recorded on that day (AU)
    pub total_load: f64,
}
