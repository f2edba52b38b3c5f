//! Metabolic stress estimation for sets and sessions.
//!
//! Each rep contributes `intensity × e^(−0.215 × reps_remaining_to_failure)`,
//! so reps close to failure cost more than early reps. Inputs are trusted:
//! NaN or negative values produce meaningless output and callers filter them
//! before invoking.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decay constant of the rep-cost model.
pub const DECAY_RATE: f64 = 0.215;

/// Lower bound of the productive hypertrophy band.
pub const MODERATE_FLOOR: f64 = 500.0;

/// Upper bound (exclusive) of the productive hypertrophy band.
pub const MODERATE_HIGH_CEILING: f64 = 1100.0;

/// One working set described for load estimation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MetabolicSet {
    /// Load as a percentage of one-rep max (0-100)
    pub intensity_pct: f64,
    pub reps: u32,
    /// Rate of perceived exertion (1-10)
    pub rpe: f64,
}

/// Stress band a load falls into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MetabolicZone {
    Light,
    Moderate,
    ModerateHigh,
    High,
    Extreme,
}

impl MetabolicZone {
    /// Every zone, lightest first.
    pub const ALL: [MetabolicZone; 5] = [
        MetabolicZone::Light,
        MetabolicZone::Moderate,
        MetabolicZone::ModerateHigh,
        MetabolicZone::High,
        MetabolicZone::Extreme,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetabolicZone::Light => "light",
            MetabolicZone::Moderate => "moderate",
            MetabolicZone::ModerateHigh => "moderate-high",
            MetabolicZone::High => "high",
            MetabolicZone::Extreme => "extreme",
        }
    }

    /// Human-readable description of the zone.
    pub fn label(&self) -> &'static str {
        match self {
            MetabolicZone::Light => "Light - below the productive threshold",
            MetabolicZone::Moderate => "Moderate - hypertrophy sweet spot",
            MetabolicZone::ModerateHigh => "Moderate-High - productive, recovery cost rising",
            MetabolicZone::High => "High - diminishing returns",
            MetabolicZone::Extreme => "Extreme - excessive fatigue",
        }
    }

    /// Inclusive lower and exclusive upper bound; `None` means unbounded.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            MetabolicZone::Light => (0.0, Some(MODERATE_FLOOR)),
            MetabolicZone::Moderate => (MODERATE_FLOOR, Some(800.0)),
            MetabolicZone::ModerateHigh => (800.0, Some(MODERATE_HIGH_CEILING)),
            MetabolicZone::High => (MODERATE_HIGH_CEILING, Some(1500.0)),
            MetabolicZone::Extreme => (1500.0, None),
        }
    }

    /// Zones that drive growth without excessive fatigue.
    pub fn is_productive(&self) -> bool {
        matches!(self, MetabolicZone::Moderate | MetabolicZone::ModerateHigh)
    }
}

impl FromStr for MetabolicZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str() == needle)
            .ok_or_else(|| format!("Invalid metabolic zone: {s}"))
    }
}

/// Zone classification result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneClassification {
    pub zone: MetabolicZone,
    pub label: &'static str,
}

/// Metabolic load of a single set.
///
/// Zero reps is an empty sum and yields `0.0`. RPE values at either end of the
/// 1-10 scale are fine; RPE 10 means zero reps in reserve.
///
/// # Examples
///
/// ```rust
/// use periodize_core::metabolic::calculate_set_metabolic_load;
///
/// assert_eq!(calculate_set_metabolic_load(75.0, 0, 8.0), 0.0);
/// assert!(calculate_set_metabolic_load(75.0, 8, 9.0) > calculate_set_metabolic_load(75.0, 8, 7.0));
/// ```
pub fn calculate_set_metabolic_load(intensity_pct: f64, reps: u32, rpe: f64) -> f64 {
    let rir = 10.0 - rpe;
    let reps_f = f64::from(reps);
    (1..=reps)
        .map(|i| intensity_pct * (-DECAY_RATE * (rir + reps_f - f64::from(i))).exp())
        .sum()
}

/// Metabolic load of a whole session: the sum of its set loads.
pub fn calculate_session_metabolic_load(sets: &[MetabolicSet]) -> f64 {
    sets.iter()
        .map(|set| calculate_set_metabolic_load(set.intensity_pct, set.reps, set.rpe))
        .sum()
}

/// Classifies a total load into a zone.
///
/// # Examples
///
/// ```rust
/// use periodize_core::metabolic::{get_metabolic_zone, MetabolicZone};
///
/// assert_eq!(get_metabolic_zone(500.0).zone, MetabolicZone::Moderate);
/// assert_eq!(get_metabolic_zone(1100.0).zone, MetabolicZone::High);
/// ```
pub fn get_metabolic_zone(total_load: f64) -> ZoneClassification {
    let zone = MetabolicZone::ALL
        .into_iter()
        .find(|zone| match zone.bounds() {
            (_, Some(upper)) => total_load < upper,
            (_, None) => true,
        })
        .unwrap_or(MetabolicZone::Extreme);

    ZoneClassification {
        zone,
        label: zone.label(),
    }
}
