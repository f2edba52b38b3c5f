//! Athlete profile, optimizer configuration and training history records.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Discrete training emphasis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TrainingGoal {
    Hypertrophy,
    Strength,
    #[default]
    General,
}

impl TrainingGoal {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingGoal::Hypertrophy => "hypertrophy",
            TrainingGoal::Strength => "strength",
            TrainingGoal::General => "general",
        }
    }
}

impl FromStr for TrainingGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hypertrophy" => Ok(TrainingGoal::Hypertrophy),
            "strength" => Ok(TrainingGoal::Strength),
            "general" => Ok(TrainingGoal::General),
            _ => Err(format!("Invalid training goal: {s}")),
        }
    }
}

/// What the optimizer knows about the athlete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Nominal stated goal; a block's goal bias overrides it
    #[serde(default)]
    pub goal: TrainingGoal,

    /// Latest self-reported sleep quality, 1 (poor) to 5 (excellent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,
}

/// Per-athlete optimizer switches and working-set assumptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    pub enabled: bool,

    /// Working intensity used to estimate per-set metabolic load, %1RM
    pub working_intensity_pct: f64,

    pub working_reps: u32,

    pub working_rpe: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            working_intensity_pct: 70.0,
            working_reps: 10,
            working_rpe: 8.0,
        }
    }
}

/// One completed session from the athlete's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompletedSession {
    /// Completion time, epoch milliseconds
    pub completed_at: i64,

    /// Total weight moved (load x reps summed over working sets)
    #[serde(default)]
    pub tonnage: f64,

    #[serde(default)]
    pub total_sets: u32,

    /// Session RPE, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_rpe: Option<f64>,
}
