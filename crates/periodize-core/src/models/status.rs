//! Status enumeration for scheduled workouts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of scheduled workout statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    /// Generated and not yet performed
    #[default]
    Planned,

    /// Performed by the athlete
    Completed,

    /// Deliberately not performed
    Skipped,
}

impl FromStr for WorkoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(WorkoutStatus::Planned),
            "completed" | "done" => Ok(WorkoutStatus::Completed),
            "skipped" => Ok(WorkoutStatus::Skipped),
            _ => Err(format!("Invalid workout status: {s}")),
        }
    }
}

impl WorkoutStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Planned => "planned",
            WorkoutStatus::Completed => "completed",
            WorkoutStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use periodize_core::models::WorkoutStatus;
    ///
    /// assert_eq!(WorkoutStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(WorkoutStatus::Skipped.with_icon(), "✗ Skipped");
    /// assert_eq!(WorkoutStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            WorkoutStatus::Completed => "✓ Completed",
            WorkoutStatus::Skipped => "✗ Skipped",
            WorkoutStatus::Planned => "○ Planned",
        }
    }

    /// Whether the workout can still move to another status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkoutStatus::Planned)
    }
}
