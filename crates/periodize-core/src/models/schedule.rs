//! Scheduled workout skeletons produced from a training block.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{SlotTier, TrainingPhase, WorkoutStatus};
use crate::{
    catalog::ExerciseLookup,
    error::{PlanError, Result},
};

/// Session focus label assigned by the split rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SessionFocus {
    #[serde(rename = "Full Body")]
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    #[serde(rename = "Squat Day")]
    SquatDay,
    #[serde(rename = "Bench Day")]
    BenchDay,
    #[serde(rename = "Deadlift Day")]
    DeadliftDay,
    Session,
}

impl SessionFocus {
    /// Label as shown to athletes and sent downstream.
    pub fn label(&self) -> &'static str {
        match self {
            SessionFocus::FullBody => "Full Body",
            SessionFocus::Upper => "Upper",
            SessionFocus::Lower => "Lower",
            SessionFocus::Push => "Push",
            SessionFocus::Pull => "Pull",
            SessionFocus::Legs => "Legs",
            SessionFocus::SquatDay => "Squat Day",
            SessionFocus::BenchDay => "Bench Day",
            SessionFocus::DeadliftDay => "Deadlift Day",
            SessionFocus::Session => "Session",
        }
    }
}

/// Tier of a resolved exercise within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonTier {
    Primary,
    Secondary,
    Tertiary,
    Accessory,
}

impl SkeletonTier {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonTier::Primary => "primary",
            SkeletonTier::Secondary => "secondary",
            SkeletonTier::Tertiary => "tertiary",
            SkeletonTier::Accessory => "accessory",
        }
    }
}

impl From<SlotTier> for SkeletonTier {
    fn from(tier: SlotTier) -> Self {
        match tier {
            SlotTier::Primary => SkeletonTier::Primary,
            SlotTier::Secondary => SkeletonTier::Secondary,
            SlotTier::Tertiary => SkeletonTier::Tertiary,
            SlotTier::AntiFlexion
            | SlotTier::AntiExtension
            | SlotTier::AntiRotation
            | SlotTier::Slot1
            | SlotTier::Slot2
            | SlotTier::Slot3 => SkeletonTier::Accessory,
        }
    }
}

/// A resolved, ordered slot within one scheduled session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonExercise {
    pub exercise_id: String,
    pub exercise_name: String,
    pub tier: SkeletonTier,
}

/// A dated session with resolved exercises but no literal prescriptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkout {
    pub id: String,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: Date,

    pub label: String,

    pub phase: TrainingPhase,

    /// Back-reference to the generating block
    pub training_block_id: String,

    /// Zero-based index of the phase within the block
    pub phase_index: usize,

    /// Zero-based week within the phase
    pub week_index: u32,

    /// Zero-based session within the week
    pub day_index: u32,

    pub session_focus: SessionFocus,

    #[serde(default)]
    pub skeleton_exercises: Vec<SkeletonExercise>,

    /// Prescriptive %1RM range, e.g. `70-80% 1RM`
    pub target_intensity: String,

    /// Volume label, e.g. `moderate volume`
    pub target_volume: String,

    pub target_sets_per_exercise: u32,

    /// Rep range, e.g. `6-10`
    pub target_rep_range: String,

    #[serde(default)]
    pub status: WorkoutStatus,
}

impl ScheduledWorkout {
    /// Replaces the exercise at `position` with another catalog exercise.
    ///
    /// The slot keeps its tier; only the exercise changes.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ExercisePositionOutOfRange` for a bad position and
    /// `PlanError::ExerciseNotFound` when the id is not in the catalog.
    pub fn reassign_exercise(
        &mut self,
        position: usize,
        exercise_id: &str,
        catalog: &dyn ExerciseLookup,
    ) -> Result<()> {
        let len = self.skeleton_exercises.len();
        let slot = self
            .skeleton_exercises
            .get_mut(position)
            .ok_or(PlanError::ExercisePositionOutOfRange { position, len })?;
        let exercise = catalog
            .exercise(exercise_id)
            .ok_or_else(|| PlanError::ExerciseNotFound {
                id: exercise_id.to_string(),
            })?;

        slot.exercise_id = exercise.id.clone();
        slot.exercise_name = exercise.name.clone();
        Ok(())
    }

    /// Marks a planned workout as completed.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidTransition` unless the workout is planned.
    pub fn complete(&mut self) -> Result<()> {
        self.transition(WorkoutStatus::Completed)
    }

    /// Marks a planned workout as skipped.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidTransition` unless the workout is planned.
    pub fn skip(&mut self) -> Result<()> {
        self.transition(WorkoutStatus::Skipped)
    }

    fn transition(&mut self, to: WorkoutStatus) -> Result<()> {
        if self.status.is_terminal() {
            return Err(PlanError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
