//! Data models for training blocks, schedules and athlete history.
//!
//! All records are plain serde structures with camelCase field names, so the
//! JSON exchanged with the planning UI and the downstream generation payload
//! maps onto them directly. Display implementations live in
//! [`crate::display::models`] to keep data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use periodize_core::models::{TrainingBlock, TrainingPhase};
//!
//! let block: TrainingBlock = serde_json::from_str(r#"{
//!     "id": "blk-1",
//!     "name": "Spring cycle",
//!     "startDate": 1704067200000,
//!     "phases": [{
//!         "phase": "hypertrophy",
//!         "weekCount": 4,
//!         "sessionsPerWeek": 3,
//!         "splitPattern": "push-pull-legs",
//!         "intensityFocus": "moderate",
//!         "volumeFocus": "high"
//!     }],
//!     "isActive": true
//! }"#).unwrap();
//!
//! assert_eq!(block.phases[0].phase, TrainingPhase::Hypertrophy);
//! assert_eq!(block.total_weeks(), 4);
//! ```

pub mod athlete;
pub mod block;
pub mod phase;
pub mod schedule;
pub mod slot;
pub mod status;

#[cfg(test)]
mod tests;

pub use athlete::{AthleteProfile, CompletedSession, OptimizerConfig, TrainingGoal};
pub use block::{
    active_block, TrainingBlock, TrainingBlockPhase, DAY_MS, MAX_BLOCK_WEEKS, WEEK_MS,
};
pub use phase::{FocusLevel, SplitPattern, TrainingPhase};
pub use schedule::{ScheduledWorkout, SessionFocus, SkeletonExercise, SkeletonTier};
pub use slot::{ExercisePreferences, ExerciseSlot, SlotCategory, SlotTier};
pub use status::WorkoutStatus;
