//! Exercise catalog lookup.
//!
//! The catalog is external reference data: the scheduler only needs to ask
//! whether an id exists and what it is called. A built-in catalog of common
//! barbell movements ships with the crate and is built once on first use;
//! callers can load their own from JSON instead.

use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Fundamental movement pattern of an exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MovementPattern {
    Squat,
    Hinge,
    HorizontalPush,
    VerticalPush,
    HorizontalPull,
    VerticalPull,
    Lunge,
    Carry,
    Core,
    Isolation,
}

impl MovementPattern {
    const ALL: [MovementPattern; 10] = [
        MovementPattern::Squat,
        MovementPattern::Hinge,
        MovementPattern::HorizontalPush,
        MovementPattern::VerticalPush,
        MovementPattern::HorizontalPull,
        MovementPattern::VerticalPull,
        MovementPattern::Lunge,
        MovementPattern::Carry,
        MovementPattern::Core,
        MovementPattern::Isolation,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPattern::Squat => "squat",
            MovementPattern::Hinge => "hinge",
            MovementPattern::HorizontalPush => "horizontal-push",
            MovementPattern::VerticalPush => "vertical-push",
            MovementPattern::HorizontalPull => "horizontal-pull",
            MovementPattern::VerticalPull => "vertical-pull",
            MovementPattern::Lunge => "lunge",
            MovementPattern::Carry => "carry",
            MovementPattern::Core => "core",
            MovementPattern::Isolation => "isolation",
        }
    }
}

impl FromStr for MovementPattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == needle)
            .ok_or_else(|| format!("Invalid movement pattern: {s}"))
    }
}

/// Muscle group trained by an exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleGroup {
    Quads,
    Hamstrings,
    Glutes,
    Adductors,
    Chest,
    Lats,
    UpperBack,
    LowerBack,
    Shoulders,
    Triceps,
    Biceps,
    Abs,
    Obliques,
}

impl MuscleGroup {
    const ALL: [MuscleGroup; 13] = [
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Adductors,
        MuscleGroup::Chest,
        MuscleGroup::Lats,
        MuscleGroup::UpperBack,
        MuscleGroup::LowerBack,
        MuscleGroup::Shoulders,
        MuscleGroup::Triceps,
        MuscleGroup::Biceps,
        MuscleGroup::Abs,
        MuscleGroup::Obliques,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Adductors => "adductors",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Lats => "lats",
            MuscleGroup::UpperBack => "upper-back",
            MuscleGroup::LowerBack => "lower-back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Obliques => "obliques",
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == needle)
            .ok_or_else(|| format!("Invalid muscle group: {s}"))
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub movement_pattern: MovementPattern,
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroup>,
}

/// Read-only exercise lookup by id.
pub trait ExerciseLookup: Send + Sync {
    /// Returns the exercise with the given id, if present.
    fn exercise(&self, id: &str) -> Option<&Exercise>;
}

/// In-memory exercise catalog keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<String, Exercise>,
}

static BUILTIN_CATALOG: LazyLock<ExerciseCatalog> = LazyLock::new(build_builtin_catalog);

impl ExerciseCatalog {
    /// Builds a catalog from a list of exercises. Later duplicates win.
    pub fn from_exercises(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        Self {
            exercises: exercises
                .into_iter()
                .map(|exercise| (exercise.id.clone(), exercise))
                .collect(),
        }
    }

    /// Parses a JSON array of exercises.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Serialization` for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let exercises: Vec<Exercise> = serde_json::from_str(json)?;
        if let Some(blank) = exercises.iter().position(|e| e.id.trim().is_empty()) {
            return Err(PlanError::invalid_input(format!("catalog[{blank}].id"))
                .with_reason("exercise id must not be empty"));
        }
        Ok(Self::from_exercises(exercises))
    }

    /// Shared built-in catalog of common barbell movements.
    pub fn builtin() -> &'static ExerciseCatalog {
        &BUILTIN_CATALOG
    }

    /// Exercises ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    /// Exercises following a movement pattern.
    pub fn by_pattern(&self, pattern: MovementPattern) -> Vec<&Exercise> {
        self.iter()
            .filter(|e| e.movement_pattern == pattern)
            .collect()
    }

    /// Exercises training a muscle group.
    pub fn by_muscle(&self, muscle: MuscleGroup) -> Vec<&Exercise> {
        self.iter()
            .filter(|e| e.muscle_groups.contains(&muscle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseLookup for ExerciseCatalog {
    fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.get(id)
    }
}

fn entry(
    id: &str,
    name: &str,
    movement_pattern: MovementPattern,
    muscle_groups: &[MuscleGroup],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        movement_pattern,
        muscle_groups: muscle_groups.to_vec(),
    }
}

fn build_builtin_catalog() -> ExerciseCatalog {
    use MovementPattern as P;
    use MuscleGroup as M;

    ExerciseCatalog::from_exercises([
        // Squat family
        entry("back-squat", "Back Squat", P::Squat, &[M::Quads, M::Glutes, M::Adductors]),
        entry("front-squat", "Front Squat", P::Squat, &[M::Quads, M::UpperBack]),
        entry("pause-squat", "Pause Squat", P::Squat, &[M::Quads, M::Glutes]),
        entry("safety-bar-squat", "Safety Bar Squat", P::Squat, &[M::Quads, M::UpperBack]),
        entry("box-squat", "Box Squat", P::Squat, &[M::Glutes, M::Hamstrings]),
        entry("bulgarian-split-squat", "Bulgarian Split Squat", P::Lunge, &[M::Quads, M::Glutes]),
        // Bench family
        entry("bench-press", "Bench Press", P::HorizontalPush, &[M::Chest, M::Triceps, M::Shoulders]),
        entry("close-grip-bench", "Close-Grip Bench Press", P::HorizontalPush, &[M::Triceps, M::Chest]),
        entry("incline-bench", "Incline Bench Press", P::HorizontalPush, &[M::Chest, M::Shoulders]),
        entry("larsen-press", "Larsen Press", P::HorizontalPush, &[M::Chest, M::Triceps]),
        entry("spoto-press", "Spoto Press", P::HorizontalPush, &[M::Chest, M::Triceps]),
        // Deadlift family
        entry("deadlift", "Conventional Deadlift", P::Hinge, &[M::Hamstrings, M::Glutes, M::LowerBack]),
        entry("sumo-deadlift", "Sumo Deadlift", P::Hinge, &[M::Glutes, M::Adductors, M::Quads]),
        entry("romanian-deadlift", "Romanian Deadlift", P::Hinge, &[M::Hamstrings, M::Glutes]),
        entry("deficit-deadlift", "Deficit Deadlift", P::Hinge, &[M::Hamstrings, M::LowerBack]),
        entry("block-pull", "Block Pull", P::Hinge, &[M::Glutes, M::UpperBack]),
        // Overhead
        entry("overhead-press", "Overhead Press", P::VerticalPush, &[M::Shoulders, M::Triceps]),
        entry("push-press", "Push Press", P::VerticalPush, &[M::Shoulders, M::Quads]),
        entry("seated-db-press", "Seated Dumbbell Press", P::VerticalPush, &[M::Shoulders]),
        // Pulls and accessories
        entry("barbell-row", "Barbell Row", P::HorizontalPull, &[M::UpperBack, M::Lats, M::Biceps]),
        entry("pull-up", "Pull-up", P::VerticalPull, &[M::Lats, M::Biceps]),
        entry("lat-pulldown", "Lat Pulldown", P::VerticalPull, &[M::Lats]),
        entry("dumbbell-row", "Dumbbell Row", P::HorizontalPull, &[M::Lats, M::UpperBack]),
        entry("face-pull", "Face Pull", P::HorizontalPull, &[M::UpperBack, M::Shoulders]),
        entry("dips", "Dips", P::VerticalPush, &[M::Triceps, M::Chest]),
        entry("barbell-curl", "Barbell Curl", P::Isolation, &[M::Biceps]),
        entry("leg-curl", "Leg Curl", P::Isolation, &[M::Hamstrings]),
        // Core
        entry("back-extension", "Back Extension", P::Core, &[M::LowerBack, M::Glutes]),
        entry("ab-wheel", "Ab Wheel Rollout", P::Core, &[M::Abs]),
        entry("plank", "Plank", P::Core, &[M::Abs]),
        entry("pallof-press", "Pallof Press", P::Core, &[M::Obliques, M::Abs]),
        entry("suitcase-carry", "Suitcase Carry", P::Carry, &[M::Obliques]),
    ])
}
