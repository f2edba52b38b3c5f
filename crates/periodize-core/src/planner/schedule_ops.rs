//! Scheduling operations: where a block stands and what it schedules.

use log::info;

use super::Planner;
use crate::{
    error::Result,
    models::{active_block, ScheduledWorkout, TrainingBlock},
    params::ReassignExercise,
    skeleton,
    timeline::{self, BlockPosition, PhaseContext},
};

impl Planner {
    /// Resolves the phase and week containing `now_ms`.
    pub fn resolve_current_phase(&self, block: &TrainingBlock, now_ms: i64) -> Option<PhaseContext> {
        timeline::resolve_current_phase(block, now_ms)
    }

    /// Whether `now_ms` is before, inside or after the block.
    pub fn block_position(&self, block: &TrainingBlock, now_ms: i64) -> BlockPosition {
        timeline::block_position(block, now_ms)
    }

    /// Expands a block into dated session skeletons.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` when the block fails validation.
    pub fn generate_block_skeleton(&self, block: &TrainingBlock) -> Result<Vec<ScheduledWorkout>> {
        let workouts = skeleton::generate_block_skeleton(
            block,
            &self.catalog,
            self.ids.as_ref(),
            &self.time_zone,
        )?;
        info!(
            "Generated {} workouts for block '{}' ({} weeks)",
            workouts.len(),
            block.id,
            block.total_weeks()
        );
        Ok(workouts)
    }

    /// Picks the single active block from a list.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::MultipleActiveBlocks` when more than one is active.
    pub fn active_block<'a>(&self, blocks: &'a [TrainingBlock]) -> Result<Option<&'a TrainingBlock>> {
        active_block(blocks)
    }

    /// Swaps one resolved exercise of a workout for another catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ExercisePositionOutOfRange` or
    /// `PlanError::ExerciseNotFound`.
    pub fn reassign_exercise(
        &self,
        workout: &mut ScheduledWorkout,
        params: &ReassignExercise,
    ) -> Result<()> {
        workout.reassign_exercise(params.position, &params.exercise_id, &self.catalog)
    }
}
