//! High-level planner API.
//!
//! [`Planner`] bundles the pieces every operation needs (exercise catalog,
//! configuration, time zone, id source) and exposes the scheduling and load
//! operations over them. All operations are synchronous and take the current
//! time as a parameter; the planner never reads a clock.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │  PlannerBuilder  │    │     Planner      │    │   Components     │
//! │ (config, catalog,│───▶│ (schedule_ops,   │───▶│ timeline,        │
//! │  tz, id source)  │    │  load_ops)       │    │ skeleton,        │
//! └──────────────────┘    └──────────────────┘    │ optimizer,       │
//!                                                 │ metabolic        │
//!                                                 └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances
//! - [`schedule_ops`]: Phase resolution, skeleton generation, workout edits
//! - [`load_ops`]: Recommendations, metabolic load, catalog queries
//!
//! # Usage
//!
//! ```rust
//! use periodize_core::{PlannerBuilder, config::Settings, models::TrainingBlock};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_settings(Settings::default())
//!     .build()?;
//!
//! let block: TrainingBlock = serde_json::from_str(r#"{
//!     "id": "spring", "name": "Spring", "startDate": 1704067200000,
//!     "phases": [{"phase": "hypertrophy", "weekCount": 2, "sessionsPerWeek": 3,
//!                 "splitPattern": "push-pull-legs", "intensityFocus": "moderate",
//!                 "volumeFocus": "high"}]
//! }"#)?;
//!
//! let workouts = planner.generate_block_skeleton(&block)?;
//! assert_eq!(workouts.len(), 6);
//!
//! let ctx = planner.resolve_current_phase(&block, block.start_date).unwrap();
//! assert_eq!(ctx.week_in_phase, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::tz::TimeZone;

use crate::{catalog::ExerciseCatalog, config::Settings, skeleton::IdSource};

pub mod builder;
pub mod load_ops;
pub mod schedule_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface.
pub struct Planner {
    pub(crate) catalog: ExerciseCatalog,
    pub(crate) settings: Settings,
    pub(crate) time_zone: TimeZone,
    pub(crate) ids: Box<dyn IdSource>,
}

impl Planner {
    pub(crate) fn new(
        catalog: ExerciseCatalog,
        settings: Settings,
        time_zone: TimeZone,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            catalog,
            settings,
            time_zone,
            ids,
        }
    }

    /// The exercise catalog in use.
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Effective settings, after config file loading.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Time zone used to place session dates.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("exercises", &self.catalog.len())
            .field("settings", &self.settings)
            .field("time_zone", &self.time_zone.iana_name())
            .finish_non_exhaustive()
    }
}
