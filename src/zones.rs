// ABOUTME: ACWR risk-zone classification with status messages and display color tokens
// ABOUTME: Canonical boundaries: <0.8 undertraining, 0.8-1.2 optimal, 1.2-1.3 caution, >1.3 risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::load_constants::zones;

/// ACWR risk zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskZone {
    /// ACWR below 0.8: load can be increased safely
    Undertraining,
    /// ACWR 0.8 to 1.2 inclusive: the training sweet spot
    Optimal,
    /// ACWR above 1.2 up to 1.3 inclusive: elevated risk, monitor closely
    Caution,
    /// ACWR above 1.3: injury risk
    InjuryRisk,
    /// Not enough history to compute a ratio
    Unknown,
}

impl RiskZone {
    /// Wire name of the zone
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Undertraining => "undertraining",
            Self::Optimal => "optimal",
            Self::Caution => "caution",
            Self::InjuryRisk => "injury_risk",
            Self::Unknown => "unknown",
        }
    }

    /// Status message shown next to the ratio
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Undertraining => "Underload — safely increase training gradually",
            Self::Optimal => "Optimal Zone",
            Self::Caution => "Caution Zone",
            Self::InjuryRisk => "High Risk Zone",
            Self::Unknown => "Insufficient data",
        }
    }

    /// Display color token for dashboards
    #[must_use]
    pub const fn color(&self) -> ZoneColor {
        match self {
            Self::Undertraining => ZoneColor::Blue,
            Self::Optimal => ZoneColor::Green,
            Self::Caution => ZoneColor::Yellow,
            Self::InjuryRisk => ZoneColor::Red,
            Self::Unknown => ZoneColor::Gray,
        }
    }

    /// Numeric range covered by the zone, as a display string
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Undertraining => "ACWR below 0.8",
            Self::Optimal => "ACWR 0.8 to 1.2",
            Self::Caution => "ACWR above 1.2 up to 1.3",
            Self::InjuryRisk => "ACWR above 1.3",
            Self::Unknown => "No ratio available",
        }
    }
}

/// Symbolic display color for a risk zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneColor {
    /// Undertraining
    Blue,
    /// Optimal
    Green,
    /// Caution
    Yellow,
    /// Injury risk
    Red,
    /// Unknown / insufficient data
    Gray,
}

/// Zone classification bundle for one computed ratio
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneAssessment {
    /// Risk zone
    pub zone: RiskZone,
    /// Human-readable status message
    pub status: &'static str,
    /// Display color token
    pub color: ZoneColor,
}

/// Boundary display labels for dashboard captions
///
/// One canonical source for the `zones` field of API responses, so chart
/// captions cannot drift from the classifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneBoundaries {
    /// Optimal band label
    pub ok: &'static str,
    /// Caution band label
    pub caution: &'static str,
    /// Injury-risk band label
    pub high_risk: &'static str,
}

/// Display labels matching the canonical zone boundaries
#[must_use]
pub const fn zone_boundaries() -> ZoneBoundaries {
    ZoneBoundaries {
        ok: "≤ 1.2",
        caution: "1.2 – 1.3",
        high_risk: "> 1.3",
    }
}

/// Map a computed ACWR to its risk zone
///
/// Total over every finite ratio plus the `None` sentinel; `None` (not
/// enough history) maps to [`RiskZone::Unknown`], never to a numeric zone.
#[must_use]
pub fn classify(acwr: Option<f64>) -> ZoneAssessment {
    let zone = acwr.map_or(RiskZone::Unknown, classify_value);
    ZoneAssessment {
        zone,
        status: zone.status(),
        color: zone.color(),
    }
}

/// Risk zone for a concrete ratio value
#[must_use]
pub fn classify_value(acwr: f64) -> RiskZone {
    if acwr < zones::UNDERTRAINING_UPPER_BOUND {
        RiskZone::Undertraining
    } else if acwr <= zones::OPTIMAL_UPPER_BOUND {
        RiskZone::Optimal
    } else if acwr <= zones::CAUTION_UPPER_BOUND {
        RiskZone::Caution
    } else {
        RiskZone::InjuryRisk
    }
}
