//! Display implementations for domain models.
//!
//! Enumerations display as their wire names. Records display as markdown
//! fragments for the CLI's terminal renderer.

use std::fmt;

use crate::{
    catalog::{Exercise, MovementPattern, MuscleGroup},
    metabolic::{MetabolicZone, ZoneClassification},
    models::{
        FocusLevel, ScheduledWorkout, SessionFocus, SkeletonTier, SplitPattern, TrainingGoal,
        TrainingPhase, WorkoutStatus,
    },
    optimizer::{FatigueLevel, OptimizerRecommendations},
    timeline::PhaseContext,
};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    TrainingPhase,
    SplitPattern,
    FocusLevel,
    WorkoutStatus,
    SkeletonTier,
    TrainingGoal,
    MetabolicZone,
    FatigueLevel,
    MovementPattern,
    MuscleGroup,
);

impl fmt::Display for SessionFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

impl fmt::Display for ScheduledWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {} ({})",
            self.date,
            self.label,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Targets**: {} x {} reps at {}, {}",
            self.target_sets_per_exercise,
            self.target_rep_range,
            self.target_intensity,
            self.target_volume
        )?;

        if self.skeleton_exercises.is_empty() {
            writeln!(f, "- *No exercises assigned*")?;
        } else {
            for exercise in &self.skeleton_exercises {
                writeln!(f, "- {} *({})*", exercise.exercise_name, exercise.tier)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** `{}` {}", self.name, self.id, self.movement_pattern)?;
        if !self.muscle_groups.is_empty() {
            let muscles: Vec<&str> = self.muscle_groups.iter().map(MuscleGroup::as_str).collect();
            write!(f, " ({})", muscles.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PhaseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = &self.phase;
        writeln!(
            f,
            "## {} (phase {}), week {} of {}",
            phase.phase.display_name(),
            self.phase_index + 1,
            self.week_in_phase,
            self.total_weeks_in_phase
        )?;
        writeln!(f)?;
        writeln!(f, "- **Block week**: {}", self.block_week)?;
        writeln!(
            f,
            "- **Split**: {} x {}/week",
            phase.split_pattern, phase.sessions_per_week
        )?;
        writeln!(f, "- **Intensity focus**: {}", phase.intensity_focus)?;
        writeln!(f, "- **Volume focus**: {}", phase.volume_focus)?;
        if !phase.primary_archetypes.is_empty() {
            writeln!(f, "- **Archetypes**: {}", phase.primary_archetypes.join(", "))?;
        }
        if !phase.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", phase.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for OptimizerRecommendations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Recommendation ({} focus)", self.training_goal_focus)?;
        writeln!(f)?;
        writeln!(f, "- **Volume**: {} sets per exercise", self.target_volume)?;
        writeln!(
            f,
            "- **Intensity**: {}-{}% 1RM",
            self.target_intensity.min_pct, self.target_intensity.max_pct
        )?;
        writeln!(f, "- **Reps**: {}", self.target_rep_range)?;
        if let Some(sets) = self.metabolic_target_sets {
            writeln!(f, "- **Metabolic target**: {sets} sets")?;
        }
        writeln!(
            f,
            "- **Projected load**: {:.0} ({})",
            self.projected_load, self.zone.zone
        )?;

        writeln!(f)?;
        writeln!(f, "### Fatigue")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Score**: {:.0}/100 ({})",
            self.fatigue.score, self.fatigue.level
        )?;
        writeln!(f, "- **Adjustment**: x{:.2}", self.fatigue_adjustment)?;
        for factor in &self.fatigue.factors {
            writeln!(f, "- {factor}")?;
        }

        writeln!(f)?;
        writeln!(f, "### Rationale")?;
        writeln!(f)?;
        writeln!(f, "{}", self.rationale)
    }
}
