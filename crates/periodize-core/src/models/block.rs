//! Training block and phase definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ExercisePreferences, FocusLevel, SplitPattern, TrainingPhase};
use crate::error::{PlanError, Result};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Milliseconds in one week.
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// Longest block the scheduler accepts, in weeks (ten years).
pub const MAX_BLOCK_WEEKS: u32 = 520;

/// Allowed range for `sessionsPerWeek`.
pub const SESSIONS_PER_WEEK_RANGE: std::ops::RangeInclusive<u32> = 2..=7;

/// A multi-week periodized training cycle composed of ordered phases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrainingBlock {
    pub id: String,

    pub name: String,

    /// Start of week one, epoch milliseconds
    pub start_date: i64,

    /// Ordered, contiguous phases; the source of truth for block length
    #[serde(default)]
    pub phases: Vec<TrainingBlockPhase>,

    /// Preferred weekdays (0 = Sunday .. 6 = Saturday)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_days: Option<Vec<u8>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_preferences: Option<ExercisePreferences>,

    /// 0 = pure hypertrophy, 100 = pure strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_bias: Option<u8>,

    /// Athlete-specific volume multiplier, typically 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_tolerance: Option<f64>,

    /// Legacy length for blocks authored without a phase list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_weeks: Option<u32>,

    #[serde(default)]
    pub is_active: bool,
}

/// A contiguous span of weeks sharing one focus and split pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrainingBlockPhase {
    pub phase: TrainingPhase,

    pub week_count: u32,

    pub sessions_per_week: u32,

    pub split_pattern: SplitPattern,

    pub intensity_focus: FocusLevel,

    pub volume_focus: FocusLevel,

    #[serde(default)]
    pub primary_archetypes: Vec<String>,

    #[serde(default)]
    pub description: String,
}

impl TrainingBlock {
    /// Total block length in weeks.
    ///
    /// Phases are authoritative; `length_weeks` is only consulted when the
    /// block has no authored phases. Saturates at `u32::MAX` for blocks that
    /// would fail validation.
    pub fn total_weeks(&self) -> u32 {
        if self.phases.is_empty() {
            self.length_weeks.unwrap_or(0)
        } else {
            self.phases
                .iter()
                .fold(0u32, |acc, p| acc.saturating_add(p.week_count))
        }
    }

    /// Zero-based block week on which phase `index` begins.
    pub fn phase_start_week(&self, index: usize) -> u32 {
        self.phases
            .iter()
            .take(index)
            .fold(0u32, |acc, p| acc.saturating_add(p.week_count))
    }

    /// Total number of sessions the block schedules, saturating like
    /// [`total_weeks`](Self::total_weeks).
    pub fn total_sessions(&self) -> u32 {
        self.phases.iter().fold(0u32, |acc, p| {
            acc.saturating_add(p.week_count.saturating_mul(p.sessions_per_week))
        })
    }

    /// First instant after the final week, epoch milliseconds.
    pub fn end_date(&self) -> i64 {
        i64::from(self.total_weeks())
            .saturating_mul(WEEK_MS)
            .saturating_add(self.start_date)
    }

    /// Checks the structural invariants the scheduler relies on.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let mut weeks_so_far: u32 = 0;
        for (index, phase) in self.phases.iter().enumerate() {
            if !SESSIONS_PER_WEEK_RANGE.contains(&phase.sessions_per_week) {
                return Err(
                    PlanError::invalid_input(format!("phases[{index}].sessionsPerWeek"))
                        .with_reason(format!(
                            "must be between {} and {}, got {}",
                            SESSIONS_PER_WEEK_RANGE.start(),
                            SESSIONS_PER_WEEK_RANGE.end(),
                            phase.sessions_per_week
                        )),
                );
            }

            weeks_so_far = weeks_so_far
                .checked_add(phase.week_count)
                .filter(|weeks| *weeks <= MAX_BLOCK_WEEKS)
                .ok_or_else(|| {
                    PlanError::invalid_input(format!("phases[{index}].weekCount")).with_reason(
                        format!(
                            "block would exceed {MAX_BLOCK_WEEKS} weeks, got {} for this phase",
                            phase.week_count
                        ),
                    )
                })?;
        }

        if let Some(length) = self.length_weeks.filter(|l| *l > MAX_BLOCK_WEEKS) {
            return Err(PlanError::invalid_input("lengthWeeks")
                .with_reason(format!("must be at most {MAX_BLOCK_WEEKS}, got {length}")));
        }

        for instant in [self.start_date, self.end_date()] {
            Timestamp::from_millisecond(instant).map_err(|e| {
                PlanError::invalid_input("startDate")
                    .with_reason(format!("block dates fall outside the supported range: {e}"))
            })?;
        }

        if let Some(days) = &self.training_days {
            if let Some(day) = days.iter().find(|d| **d > 6) {
                return Err(PlanError::invalid_input("trainingDays")
                    .with_reason(format!("weekday indices must be 0-6, got {day}")));
            }
        }

        if let Some(bias) = self.goal_bias {
            if bias > 100 {
                return Err(PlanError::invalid_input("goalBias")
                    .with_reason(format!("must be between 0 and 100, got {bias}")));
            }
        }

        if let Some(tolerance) = self.volume_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(PlanError::invalid_input("volumeTolerance")
                    .with_reason(format!("must be a positive number, got {tolerance}")));
            }
        }

        if let Some(length) = self.length_weeks {
            let phase_sum = weeks_so_far;
            if !self.phases.is_empty() && length != phase_sum {
                return Err(PlanError::invalid_input("lengthWeeks").with_reason(format!(
                    "{length} does not match the phase total of {phase_sum} weeks"
                )));
            }
        }

        Ok(())
    }
}

/// Returns the single active block, if any.
///
/// # Errors
///
/// Returns `PlanError::MultipleActiveBlocks` when more than one block is
/// flagged active.
pub fn active_block(blocks: &[TrainingBlock]) -> Result<Option<&TrainingBlock>> {
    let mut active = blocks.iter().filter(|b| b.is_active);
    let first = active.next();
    let extra = active.count();
    if extra > 0 {
        return Err(PlanError::MultipleActiveBlocks { count: extra + 1 });
    }
    Ok(first)
}
