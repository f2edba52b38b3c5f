//! Phase, split pattern and focus-level enumerations.
//!
//! These are closed string sets on the wire. Deserializing an unknown value
//! fails, and every lookup table keyed by them is an exhaustive `match`.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of training phase within a block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum TrainingPhase {
    /// General physical preparedness
    Gpp,
    Hypertrophy,
    Accumulation,
    Strength,
    Intensification,
    Power,
    Realization,
    Peaking,
    Deload,
}

impl TrainingPhase {
    /// Every phase, in declaration order.
    pub const ALL: [TrainingPhase; 9] = [
        TrainingPhase::Gpp,
        TrainingPhase::Hypertrophy,
        TrainingPhase::Accumulation,
        TrainingPhase::Strength,
        TrainingPhase::Intensification,
        TrainingPhase::Power,
        TrainingPhase::Realization,
        TrainingPhase::Peaking,
        TrainingPhase::Deload,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingPhase::Gpp => "gpp",
            TrainingPhase::Hypertrophy => "hypertrophy",
            TrainingPhase::Accumulation => "accumulation",
            TrainingPhase::Strength => "strength",
            TrainingPhase::Intensification => "intensification",
            TrainingPhase::Power => "power",
            TrainingPhase::Realization => "realization",
            TrainingPhase::Peaking => "peaking",
            TrainingPhase::Deload => "deload",
        }
    }

    /// Human-readable name used in workout labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            TrainingPhase::Gpp => "GPP",
            TrainingPhase::Hypertrophy => "Hypertrophy",
            TrainingPhase::Accumulation => "Accumulation",
            TrainingPhase::Strength => "Strength",
            TrainingPhase::Intensification => "Intensification",
            TrainingPhase::Power => "Power",
            TrainingPhase::Realization => "Realization",
            TrainingPhase::Peaking => "Peaking",
            TrainingPhase::Deload => "Deload",
        }
    }

    /// Phases whose primary adaptation target is muscle growth / work capacity.
    pub fn is_hypertrophy_leaning(&self) -> bool {
        match self {
            TrainingPhase::Gpp | TrainingPhase::Hypertrophy | TrainingPhase::Accumulation => true,
            TrainingPhase::Strength
            | TrainingPhase::Intensification
            | TrainingPhase::Power
            | TrainingPhase::Realization
            | TrainingPhase::Peaking
            | TrainingPhase::Deload => false,
        }
    }
}

impl FromStr for TrainingPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == needle)
            .ok_or_else(|| format!("Invalid training phase: {s}"))
    }
}

/// Weekly rotation of session focuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SplitPattern {
    FullBody,
    UpperLower,
    PushPullLegs,
    SquatBenchDeadlift,
    Custom,
}

impl SplitPattern {
    /// Every split pattern, in declaration order.
    pub const ALL: [SplitPattern; 5] = [
        SplitPattern::FullBody,
        SplitPattern::UpperLower,
        SplitPattern::PushPullLegs,
        SplitPattern::SquatBenchDeadlift,
        SplitPattern::Custom,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitPattern::FullBody => "full-body",
            SplitPattern::UpperLower => "upper-lower",
            SplitPattern::PushPullLegs => "push-pull-legs",
            SplitPattern::SquatBenchDeadlift => "squat-bench-deadlift",
            SplitPattern::Custom => "custom",
        }
    }
}

impl FromStr for SplitPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == needle)
            .ok_or_else(|| format!("Invalid split pattern: {s}"))
    }
}

/// Five-step scale shared by intensity and volume focus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum FocusLevel {
    Minimal,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl FocusLevel {
    /// Every focus level, lowest first.
    pub const ALL: [FocusLevel; 5] = [
        FocusLevel::Minimal,
        FocusLevel::Low,
        FocusLevel::Moderate,
        FocusLevel::High,
        FocusLevel::VeryHigh,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusLevel::Minimal => "minimal",
            FocusLevel::Low => "low",
            FocusLevel::Moderate => "moderate",
            FocusLevel::High => "high",
            FocusLevel::VeryHigh => "very-high",
        }
    }
}

impl FromStr for FocusLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == needle)
            .ok_or_else(|| format!("Invalid focus level: {s}"))
    }
}
