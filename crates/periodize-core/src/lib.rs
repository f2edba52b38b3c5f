//! Core library for the periodization scheduler and load optimizer.
//!
//! This crate turns a multi-week training block into a dated workout
//! skeleton and recommends per-session training targets from metabolic load
//! arithmetic, phase context and recent fatigue.
//!
//! Every operation is synchronous and deterministic: the current instant is
//! passed in as epoch milliseconds, and workout ids come from an injectable
//! [`skeleton::IdSource`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Schedules, catalog listings and
//!   reports rendered as markdown
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use periodize_core::{params::Recommend, PlannerBuilder, Settings, TrainingBlock};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_settings(Settings::default())
//!     .build()?;
//!
//! let block: TrainingBlock = serde_json::from_str(r#"{
//!     "id": "blk-1",
//!     "name": "Spring cycle",
//!     "startDate": 1704067200000,
//!     "phases": [{
//!         "phase": "strength",
//!         "weekCount": 2,
//!         "sessionsPerWeek": 3,
//!         "splitPattern": "full-body",
//!         "intensityFocus": "high",
//!         "volumeFocus": "moderate"
//!     }],
//!     "isActive": true
//! }"#)?;
//!
//! let workouts = planner.generate_block_skeleton(&block)?;
//! assert_eq!(workouts.len(), 6);
//!
//! let params = Recommend {
//!     block: Some(block),
//!     ..Recommend::default()
//! };
//! let recs = planner.recommend(&params, 1704067200000)?;
//! println!("{recs}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod metabolic;
pub mod models;
pub mod optimizer;
pub mod params;
pub mod planner;
pub mod skeleton;
pub mod timeline;

// Re-export commonly used types
pub use catalog::{Exercise, ExerciseCatalog, ExerciseLookup, MovementPattern, MuscleGroup};
pub use config::Settings;
pub use display::{Exercises, LoadReport, LocalDateTime, PhaseReport, Schedule};
pub use error::{PlanError, Result};
pub use metabolic::{MetabolicSet, MetabolicZone, ZoneClassification};
pub use models::{
    AthleteProfile, CompletedSession, OptimizerConfig, ScheduledWorkout, TrainingBlock,
    TrainingBlockPhase, TrainingGoal, TrainingPhase, WorkoutStatus,
};
pub use optimizer::{FatigueAssessment, OptimizerRecommendations, OptimizerTuning};
pub use params::{CatalogQuery, ReassignExercise, Recommend};
pub use planner::{Planner, PlannerBuilder};
pub use skeleton::{IdSource, SequentialIds, UuidIds};
pub use timeline::{BlockPosition, PhaseContext};
