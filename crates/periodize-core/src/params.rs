//! Parameter structures for planner operations.
//!
//! These are shared by every interface over the core. Structures that
//! interfaces read from files derive `JsonSchema` behind the `schema` feature
//! so the CLI can publish their shape; the rest carry no framework derives.
//!
//! Interface layers wrap or convert into these types:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct CatalogArgs {
//!     #[arg(long)]
//!     pub pattern: Option<MovementPattern>,
//!     // ...
//! }
//!
//! impl From<CatalogArgs> for CatalogQuery {
//!     fn from(args: CatalogArgs) -> Self { /* ... */ }
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{MovementPattern, MuscleGroup},
    models::{AthleteProfile, CompletedSession, OptimizerConfig, TrainingBlock},
};

/// Inputs for an optimizer recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recommend {
    #[serde(default)]
    pub profile: AthleteProfile,

    /// Completed sessions, any order
    #[serde(default)]
    pub history: Vec<CompletedSession>,

    /// The athlete's active block; without one, goal defaults apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<TrainingBlock>,

    /// Overrides the planner's default optimizer config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<OptimizerConfig>,

    /// Overrides the block's volume tolerance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_tolerance: Option<f64>,
}

/// Filters for catalog listings. Both filters must match when given.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogQuery {
    pub pattern: Option<MovementPattern>,
    pub muscle: Option<MuscleGroup>,
}

/// Swap one resolved exercise of a scheduled workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReassignExercise {
    /// Zero-based position within `skeletonExercises`
    pub position: usize,
    pub exercise_id: String,
}
