// ABOUTME: Session-RPE training load formula with modality and emotional scaling
// ABOUTME: Converts a session's RPE, duration, emotional load, and type into AU
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::load_constants::session_rpe;
use crate::models::TrainingType;

/// Compute the load of a single session in arbitrary units (AU)
///
/// Formula: `rpe x duration x emotional_coeff x type_coeff`, where the
/// emotional coefficient maps the 1..=5 scale linearly onto 1.0..=1.5 and
/// the type coefficient comes from [`TrainingType::coefficient`].
///
/// This function does not validate ranges; the form layer owns validation.
/// Any finite inputs produce a finite result, and no rounding is applied
/// here (rounding happens at display time).
///
/// # Example
///
/// ```rust
/// use acwr_engine::{compute_session_load, TrainingType};
///
/// let load = compute_session_load(7.0, 90.0, 3.0, TrainingType::Field);
/// assert!((load - 945.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn compute_session_load(
    rpe: f64,
    duration_minutes: f64,
    emotional_load: f64,
    training_type: TrainingType,
) -> f64 {
    let emotional_coeff = (emotional_load - 1.0).mul_add(
        session_rpe::EMOTIONAL_STEP_COEFFICIENT,
        session_rpe::EMOTIONAL_BASE_COEFFICIENT,
    );

    rpe * duration_minutes * emotional_coeff * training_type.coefficient()
}
