//! Optimizer coefficients.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every coefficient the optimizer uses. Loaded from the config file; any
/// omitted field keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerTuning {
    /// Goal bias strictly below this leans hypertrophy
    pub hypertrophy_bias_below: u8,
    /// Goal bias strictly above this leans strength
    pub strength_bias_above: u8,

    /// Upper bound for the metabolic target-set search
    pub max_metabolic_sets: u32,

    pub recent_window_days: u32,
    pub acute_window_days: u32,
    /// Days before the acute window used as the tonnage baseline
    pub baseline_window_days: u32,

    /// Sessions inside the recent window that count as dense training
    pub dense_recent_sessions: u32,
    pub dense_recent_points: f64,
    pub busy_recent_sessions: u32,
    pub busy_recent_points: f64,

    /// More sessions than this inside the acute window adds points
    pub acute_session_limit: u32,
    pub acute_session_points: f64,

    pub tonnage_spike_ratio: f64,
    pub tonnage_spike_points: f64,
    pub tonnage_elevated_ratio: f64,
    pub tonnage_elevated_points: f64,

    /// Acute working sets above this multiple of the baseline add points
    pub set_spike_ratio: f64,
    pub set_spike_points: f64,

    /// Session RPE at or above this counts as hard
    pub hard_session_rpe: f64,
    pub hard_streak_points: f64,
    pub hard_streak_cap: f64,

    /// Sleep quality at or below this counts as poor
    pub poor_sleep_max: u8,
    pub poor_sleep_points: f64,

    /// Largest fraction of volume fatigue may remove, in [0, 1]
    pub max_damping: f64,

    pub min_tolerance: f64,
    pub max_tolerance: f64,
    pub neutral_tolerance: f64,
    /// Volume factor change per tolerance point away from neutral
    pub tolerance_step: f64,

    /// Final volume never exceeds `ceil(nominal * max_volume_multiplier)`
    pub max_volume_multiplier: f64,
}

impl Default for OptimizerTuning {
    fn default() -> Self {
        Self {
            hypertrophy_bias_below: 30,
            strength_bias_above: 70,
            max_metabolic_sets: 20,
            recent_window_days: 3,
            acute_window_days: 7,
            baseline_window_days: 21,
            dense_recent_sessions: 3,
            dense_recent_points: 20.0,
            busy_recent_sessions: 2,
            busy_recent_points: 10.0,
            acute_session_limit: 5,
            acute_session_points: 15.0,
            tonnage_spike_ratio: 1.3,
            tonnage_spike_points: 20.0,
            tonnage_elevated_ratio: 1.15,
            tonnage_elevated_points: 10.0,
            set_spike_ratio: 1.3,
            set_spike_points: 10.0,
            hard_session_rpe: 8.5,
            hard_streak_points: 10.0,
            hard_streak_cap: 30.0,
            poor_sleep_max: 2,
            poor_sleep_points: 15.0,
            max_damping: 0.5,
            min_tolerance: 1.0,
            max_tolerance: 5.0,
            neutral_tolerance: 3.0,
            tolerance_step: 0.25,
            max_volume_multiplier: 2.0,
        }
    }
}

impl OptimizerTuning {
    /// Damping clamped into `[0, 1]`, so the adjustment stays in `[0, 1]`
    /// even with a hand-edited config.
    pub fn effective_damping(&self) -> f64 {
        if self.max_damping.is_finite() {
            self.max_damping.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
