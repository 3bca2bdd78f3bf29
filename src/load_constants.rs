// ABOUTME: Immutable coefficient and threshold tables for training-load calculations
// ABOUTME: Single canonical source so preview and authoritative paths cannot drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Training-load constants based on sports science research
//!
//! Every coefficient and threshold used by the engine lives here as an
//! immutable `const`. Both the authoritative calculation path and any
//! client-side preview must import these values rather than carrying their
//! own copies.

/// Session-RPE load formula coefficients
///
/// References:
/// - Foster, C. et al. (2001). A new approach to monitoring exercise training.
///   *Journal of Strength and Conditioning Research*, 15(1), 109-115.
pub mod session_rpe {
    /// Emotional-load coefficient at the scale minimum (emotional load 1)
    pub const EMOTIONAL_BASE_COEFFICIENT: f64 = 1.0;

    /// Coefficient increase per emotional-load unit above 1
    ///
    /// Maps the athlete-reported 1..=5 scale linearly onto 1.0..=1.5.
    pub const EMOTIONAL_STEP_COEFFICIENT: f64 = 0.125;

    /// Load multiplier for field training sessions
    pub const FIELD_TYPE_COEFFICIENT: f64 = 1.2;

    /// Load multiplier for gym training sessions
    pub const GYM_TYPE_COEFFICIENT: f64 = 1.0;

    /// Load multiplier for matches
    pub const MATCH_TYPE_COEFFICIENT: f64 = 1.5;
}

/// Acute and chronic window parameters for the ACWR calculation
///
/// References:
/// - Gabbett, T.J. (2016). The training-injury prevention paradox: should
///   athletes be training smarter and harder? *BJSM*, 50(5), 273-280.
///   <https://bjsm.bmj.com/content/50/5/273>
/// - Hulin, B.T. et al. (2016). The acute:chronic workload ratio predicts
///   injury. *BJSM*, 50(4), 231-236.
pub mod acwr {
    /// Acute window for the rolling daily ratio, in days (inclusive of the target date)
    pub const ACUTE_WINDOW_DAYS: i64 = 7;

    /// Chronic window for the rolling daily ratio, in days (inclusive of the target date)
    pub const CHRONIC_WINDOW_DAYS: i64 = 28;

    /// Minimum observed days inside the chronic window before a daily ratio is reported
    pub const MIN_CHRONIC_OBSERVED_DAYS: usize = 21;

    /// Weeks averaged into the chronic baseline of the weekly variant
    pub const CHRONIC_BASELINE_WEEKS: usize = 3;

    /// Qualifying weeks required by the weekly variant (1 acute + 3 chronic)
    pub const MIN_QUALIFYING_WEEKS: usize = CHRONIC_BASELINE_WEEKS + 1;
}

/// Canonical ACWR risk-zone boundaries
///
/// The optimal band follows the Gabbett "sweet spot" (0.8-1.2); ratios up to
/// 1.3 are treated as a caution band before the injury-risk threshold.
/// Boundaries are half-open and contiguous: `[0, 0.8)` undertraining,
/// `[0.8, 1.2]` optimal, `(1.2, 1.3]` caution, `(1.3, inf)` injury risk.
pub mod zones {
    /// Upper bound of the undertraining zone (exclusive)
    pub const UNDERTRAINING_UPPER_BOUND: f64 = 0.8;

    /// Upper bound of the optimal zone (inclusive)
    pub const OPTIMAL_UPPER_BOUND: f64 = 1.2;

    /// Upper bound of the caution zone (inclusive); above it is injury risk
    pub const CAUTION_UPPER_BOUND: f64 = 1.3;
}
