//! Volume, intensity and fatigue recommendations.
//!
//! The optimizer combines the current phase's prescription with the athlete's
//! recent history. Everything is recomputed per call from the inputs; nothing
//! is cached between calls.
//!
//! Volume is derived in three steps:
//!
//! 1. **Base**: the phase's nominal sets, or for hypertrophy-leaning phases
//!    the number of working sets that lands in the moderate metabolic zone,
//!    clamped into the phase's set range.
//! 2. **Damping**: scaled down by the fatigue adjustment, never up.
//! 3. **Tolerance**: scaled by the athlete's volume tolerance, then clamped to
//!    `[1, ceil(nominal * max_volume_multiplier)]`.

use serde::Serialize;

use crate::{
    metabolic::{
        calculate_set_metabolic_load, get_metabolic_zone, ZoneClassification, MODERATE_FLOOR,
        MODERATE_HIGH_CEILING,
    },
    models::{AthleteProfile, CompletedSession, FocusLevel, OptimizerConfig, TrainingGoal},
    skeleton::{intensity_prescription, volume_prescription},
    timeline::PhaseContext,
};

mod fatigue;
mod tuning;

pub use fatigue::{assess_fatigue, FatigueAssessment, FatigueLevel};
pub use tuning::OptimizerTuning;

/// Inputs for one recommendation.
#[derive(Debug, Clone, Copy)]
pub struct OptimizerRequest<'a> {
    pub config: &'a OptimizerConfig,
    pub profile: &'a AthleteProfile,
    pub history: &'a [CompletedSession],
    /// Where "now" falls in the active block, if there is one
    pub phase_context: Option<&'a PhaseContext>,
    /// The active block's goal bias (0 hypertrophy .. 100 strength)
    pub goal_bias: Option<u8>,
    pub volume_tolerance: Option<f64>,
    pub now_ms: i64,
}

/// Recommended %1RM window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityTarget {
    pub min_pct: u8,
    pub max_pct: u8,
}

/// Optimizer output.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerRecommendations {
    /// Working sets per exercise
    pub target_volume: u32,
    pub target_intensity: IntensityTarget,
    pub target_rep_range: String,
    /// Multiplier in `[1 - max_damping, 1]` applied to volume for fatigue
    pub fatigue_adjustment: f64,
    pub fatigue: FatigueAssessment,
    /// Sets needed to reach the moderate metabolic zone, for
    /// hypertrophy-leaning training only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metabolic_target_sets: Option<u32>,
    /// Metabolic load of `target_volume` working sets
    pub projected_load: f64,
    pub zone: ZoneClassification,
    pub training_goal_focus: TrainingGoal,
    pub rationale: String,
}

/// Maps a block's goal bias onto a discrete goal.
///
/// Without a bias, the profile's stated goal stands.
///
/// # Examples
///
/// ```rust
/// use periodize_core::{models::TrainingGoal, optimizer::{goal_focus_from_bias, OptimizerTuning}};
///
/// let tuning = OptimizerTuning::default();
/// assert_eq!(goal_focus_from_bias(Some(10), TrainingGoal::Strength, &tuning), TrainingGoal::Hypertrophy);
/// assert_eq!(goal_focus_from_bias(Some(50), TrainingGoal::Strength, &tuning), TrainingGoal::General);
/// assert_eq!(goal_focus_from_bias(None, TrainingGoal::Strength, &tuning), TrainingGoal::Strength);
/// ```
pub fn goal_focus_from_bias(
    goal_bias: Option<u8>,
    fallback: TrainingGoal,
    tuning: &OptimizerTuning,
) -> TrainingGoal {
    match goal_bias {
        Some(bias) if bias < tuning.hypertrophy_bias_below => TrainingGoal::Hypertrophy,
        Some(bias) if bias > tuning.strength_bias_above => TrainingGoal::Strength,
        Some(_) => TrainingGoal::General,
        None => fallback,
    }
}

/// Smallest number of sets whose total load reaches the moderate zone.
///
/// When the first set count reaching the floor already overshoots the
/// moderate-high ceiling, one fewer set is returned (at least 1). If the floor
/// is not reached within `max_sets`, `max_sets` is returned. `None` for a
/// non-positive per-set load or a zero cap.
///
/// # Examples
///
/// ```rust
/// use periodize_core::optimizer::metabolic_target_sets;
///
/// assert_eq!(metabolic_target_sets(200.0, 20), Some(3));
/// assert_eq!(metabolic_target_sets(1200.0, 20), Some(1));
/// assert_eq!(metabolic_target_sets(0.0, 20), None);
/// ```
pub fn metabolic_target_sets(per_set_load: f64, max_sets: u32) -> Option<u32> {
    if !per_set_load.is_finite() || per_set_load <= 0.0 || max_sets == 0 {
        return None;
    }

    for sets in 1..=max_sets {
        let load = per_set_load * f64::from(sets);
        if load >= MODERATE_FLOOR {
            if load < MODERATE_HIGH_CEILING {
                return Some(sets);
            }
            return Some(sets.saturating_sub(1).max(1));
        }
    }

    Some(max_sets)
}

/// Computes volume, intensity and fatigue recommendations.
pub fn compute_optimizer_recommendations(
    request: &OptimizerRequest<'_>,
    tuning: &OptimizerTuning,
) -> OptimizerRecommendations {
    let config = request.config;
    let focus = goal_focus_from_bias(request.goal_bias, request.profile.goal, tuning);

    let mut notes = Vec::new();
    let (intensity_level, volume_level) = match request.phase_context {
        Some(ctx) => {
            notes.push(format!(
                "{} week {} of {} (block week {})",
                ctx.phase.phase.display_name(),
                ctx.week_in_phase,
                ctx.total_weeks_in_phase,
                ctx.block_week
            ));
            (ctx.phase.intensity_focus, ctx.phase.volume_focus)
        }
        None => {
            notes.push(format!(
                "no active block; using {} defaults",
                focus.as_str()
            ));
            default_levels(focus)
        }
    };

    let intensity = intensity_prescription(intensity_level);
    let volume = volume_prescription(volume_level);
    let nominal = volume.nominal_sets();
    let per_set_load = calculate_set_metabolic_load(
        config.working_intensity_pct,
        config.working_reps,
        config.working_rpe,
    );

    let target_intensity = IntensityTarget {
        min_pct: intensity.min_pct,
        max_pct: intensity.max_pct,
    };

    if !config.enabled {
        notes.push(format!(
            "optimizer disabled; nominal {} prescription",
            volume.label
        ));
        let projected_load = per_set_load * f64::from(nominal);
        return OptimizerRecommendations {
            target_volume: nominal,
            target_intensity,
            target_rep_range: intensity.rep_range_label(),
            fatigue_adjustment: 1.0,
            fatigue: FatigueAssessment::rested(),
            metabolic_target_sets: None,
            projected_load,
            zone: get_metabolic_zone(projected_load),
            training_goal_focus: focus,
            rationale: build_rationale(&notes),
        };
    }

    if let Some(bias) = request.goal_bias {
        notes.push(format!("goal bias {bias} favors {}", focus.as_str()));
    }

    let hypertrophy_leaning = match request.phase_context {
        Some(ctx) => ctx.phase.phase.is_hypertrophy_leaning(),
        None => focus == TrainingGoal::Hypertrophy,
    };
    let metabolic_sets = if hypertrophy_leaning {
        metabolic_target_sets(per_set_load, tuning.max_metabolic_sets)
    } else {
        None
    };

    let base = match metabolic_sets {
        Some(sets) => {
            notes.push(format!(
                "{sets} sets of {}x{} @ RPE {} reach the moderate metabolic zone",
                config.working_reps, config.working_intensity_pct, config.working_rpe
            ));
            sets.clamp(volume.min_sets, volume.max_sets)
        }
        None => nominal,
    };

    let fatigue = assess_fatigue(request.history, request.profile, request.now_ms, tuning);
    let fatigue_adjustment = 1.0 - fatigue.score / 100.0 * tuning.effective_damping();
    if fatigue.factors.is_empty() {
        if fatigue.poor_sleep {
            notes.push(
                "poor sleep reported with no training history; volume not damped".to_string(),
            );
        } else {
            notes.push("no fatigue signals".to_string());
        }
    } else {
        notes.push(format!(
            "fatigue {:.0}/100 ({}) scales volume by {fatigue_adjustment:.2}",
            fatigue.score,
            fatigue.factors.join(", ")
        ));
    }

    let tolerance = request
        .volume_tolerance
        .filter(|t| t.is_finite())
        .unwrap_or(tuning.neutral_tolerance)
        .max(tuning.min_tolerance)
        .min(tuning.max_tolerance);
    let tolerance_factor = 1.0 + (tolerance - tuning.neutral_tolerance) * tuning.tolerance_step;
    if (tolerance - tuning.neutral_tolerance).abs() > f64::EPSILON {
        notes.push(format!(
            "volume tolerance {tolerance} scales volume by {tolerance_factor:.2}"
        ));
    }

    let damped = f64::from(base) * fatigue_adjustment;
    let ceiling = ((f64::from(nominal) * tuning.max_volume_multiplier).ceil() as u32).max(1);
    let target_volume = ((damped * tolerance_factor).round() as u32).clamp(1, ceiling);
    let projected_load = per_set_load * f64::from(target_volume);

    OptimizerRecommendations {
        target_volume,
        target_intensity,
        target_rep_range: intensity.rep_range_label(),
        fatigue_adjustment,
        fatigue,
        metabolic_target_sets: metabolic_sets,
        projected_load,
        zone: get_metabolic_zone(projected_load),
        training_goal_focus: focus,
        rationale: build_rationale(&notes),
    }
}

/// Intensity and volume focus used when no block is active.
fn default_levels(focus: TrainingGoal) -> (FocusLevel, FocusLevel) {
    match focus {
        TrainingGoal::Hypertrophy => (FocusLevel::Moderate, FocusLevel::High),
        TrainingGoal::Strength => (FocusLevel::High, FocusLevel::Moderate),
        TrainingGoal::General => (FocusLevel::Moderate, FocusLevel::Moderate),
    }
}

/// Joins rationale notes, replacing control characters with spaces.
fn build_rationale(notes: &[String]) -> String {
    notes
        .join("; ")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
