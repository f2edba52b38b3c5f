use std::fs;

use tempfile::TempDir;

use super::*;
use crate::{
    catalog::{Exercise, MovementPattern, MuscleGroup},
    error::PlanError,
    metabolic::{MetabolicSet, MetabolicZone},
    models::{
        AthleteProfile, ExercisePreferences, ExerciseSlot, FocusLevel, SlotCategory, SlotTier,
        SplitPattern, TrainingBlock, TrainingBlockPhase, TrainingGoal, TrainingPhase, WEEK_MS,
    },
    params::{CatalogQuery, ReassignExercise, Recommend},
    skeleton::SequentialIds,
    timeline::BlockPosition,
};

const T: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z

fn planner() -> Planner {
    PlannerBuilder::new()
        .with_settings(Settings::default())
        .with_id_source(SequentialIds::new("wo"))
        .build()
        .expect("Failed to build planner")
}

fn block() -> TrainingBlock {
    TrainingBlock {
        id: "block-1".to_string(),
        name: "Spring".to_string(),
        start_date: T,
        phases: vec![
            TrainingBlockPhase {
                phase: TrainingPhase::Hypertrophy,
                week_count: 2,
                sessions_per_week: 3,
                split_pattern: SplitPattern::PushPullLegs,
                intensity_focus: FocusLevel::Moderate,
                volume_focus: FocusLevel::High,
                primary_archetypes: vec![],
                description: String::new(),
            },
            TrainingBlockPhase {
                phase: TrainingPhase::Strength,
                week_count: 1,
                sessions_per_week: 3,
                split_pattern: SplitPattern::PushPullLegs,
                intensity_focus: FocusLevel::High,
                volume_focus: FocusLevel::Moderate,
                primary_archetypes: vec![],
                description: String::new(),
            },
        ],
        training_days: None,
        exercise_preferences: Some(ExercisePreferences {
            slots: vec![
                ExerciseSlot {
                    category: SlotCategory::Bench,
                    tier: SlotTier::Primary,
                    exercise_id: Some("bench-press".to_string()),
                },
                ExerciseSlot {
                    category: SlotCategory::Ohp,
                    tier: SlotTier::Primary,
                    exercise_id: Some("overhead-press".to_string()),
                },
            ],
        }),
        goal_bias: None,
        volume_tolerance: None,
        length_weeks: None,
        is_active: true,
    }
}

#[test]
fn test_builder_defaults() {
    let planner = planner();
    assert_eq!(planner.time_zone().iana_name(), Some("UTC"));
    assert_eq!(planner.catalog().len(), crate::catalog::ExerciseCatalog::builtin().len());
    assert!(planner.settings().optimizer.enabled);
}

#[test]
fn test_builder_reads_config_and_catalog_files() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"timeZone": "America/New_York", "optimizer": {"workingReps": 8}}"#)
        .unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"[{"id": "goblet-squat", "name": "Goblet Squat", "movementPattern": "squat"}]"#,
    )
    .unwrap();

    let planner = PlannerBuilder::new()
        .with_config_path(Some(&config))
        .with_catalog_path(Some(&catalog))
        .build()
        .unwrap();

    assert_eq!(planner.settings().optimizer.working_reps, 8);
    assert_eq!(planner.time_zone().iana_name(), Some("America/New_York"));
    assert_eq!(planner.catalog().len(), 1);
}

#[test]
fn test_explicit_time_zone_overrides_config() {
    let planner = PlannerBuilder::new()
        .with_settings(Settings {
            time_zone: Some("Asia/Tokyo".to_string()),
            ..Default::default()
        })
        .with_time_zone(Some("Europe/Oslo"))
        .build()
        .unwrap();
    assert_eq!(planner.time_zone().iana_name(), Some("Europe/Oslo"));
}

#[test]
fn test_builder_rejects_unknown_time_zone() {
    let result = PlannerBuilder::new()
        .with_settings(Settings::default())
        .with_time_zone(Some("Nowhere/Special"))
        .build();
    assert!(matches!(result, Err(PlanError::Configuration { .. })));
}

#[test]
fn test_generate_block_skeleton_through_planner() {
    let planner = planner();
    let workouts = planner.generate_block_skeleton(&block()).unwrap();

    assert_eq!(workouts.len(), 9);
    assert_eq!(workouts[0].id, "wo-1");
    assert_eq!(workouts[8].id, "wo-9");
    assert_eq!(workouts[0].skeleton_exercises[0].exercise_id, "bench-press");
    assert_eq!(workouts[0].skeleton_exercises[1].exercise_id, "overhead-press");
}

#[test]
fn test_resolve_and_position() {
    let planner = planner();
    let b = block();

    let ctx = planner.resolve_current_phase(&b, T + 2 * WEEK_MS).unwrap();
    assert_eq!(ctx.phase.phase, TrainingPhase::Strength);
    assert_eq!(ctx.block_week, 3);

    assert_eq!(planner.block_position(&b, T - 1), BlockPosition::NotStarted);
    assert_eq!(planner.block_position(&b, T + 3 * WEEK_MS), BlockPosition::Ended);
}

#[test]
fn test_active_block_selection() {
    let planner = planner();
    let mut inactive = block();
    inactive.id = "old".to_string();
    inactive.is_active = false;
    let blocks = vec![inactive, block()];

    assert_eq!(planner.active_block(&blocks).unwrap().unwrap().id, "block-1");

    let both = vec![block(), block()];
    assert!(matches!(
        planner.active_block(&both),
        Err(PlanError::MultipleActiveBlocks { count: 2 })
    ));
}

#[test]
fn test_reassign_and_complete_workout() {
    let planner = planner();
    let mut workouts = planner.generate_block_skeleton(&block()).unwrap();
    let workout = &mut workouts[0];

    planner
        .reassign_exercise(
            workout,
            &ReassignExercise {
                position: 0,
                exercise_id: "larsen-press".to_string(),
            },
        )
        .unwrap();
    assert_eq!(workout.skeleton_exercises[0].exercise_name, "Larsen Press");

    let err = planner
        .reassign_exercise(
            workout,
            &ReassignExercise {
                position: 0,
                exercise_id: "zercher-squat".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, PlanError::ExerciseNotFound { .. }));

    workout.complete().unwrap();
    assert!(workout.skip().is_err());
}

#[test]
fn test_recommend_inside_block() {
    let planner = planner();
    let params = Recommend {
        block: Some(block()),
        ..Default::default()
    };

    let recs = planner.recommend(&params, T + WEEK_MS).unwrap();
    // hypertrophy, high volume: metabolic target 3 clamped up to 4
    assert_eq!(recs.metabolic_target_sets, Some(3));
    assert_eq!(recs.target_volume, 4);
    assert!(recs.rationale.starts_with("Hypertrophy week 2 of 2"));
}

#[test]
fn test_recommend_after_block_ends() {
    let planner = planner();
    let params = Recommend {
        profile: AthleteProfile {
            goal: TrainingGoal::Strength,
            sleep_quality: None,
        },
        block: Some(block()),
        ..Default::default()
    };

    let recs = planner.recommend(&params, T + 10 * WEEK_MS).unwrap();
    assert!(recs.rationale.contains("no active block"));
    assert_eq!(recs.training_goal_focus, TrainingGoal::Strength);
}

#[test]
fn test_recommend_uses_block_tolerance_and_bias() {
    let planner = planner();
    let mut b = block();
    b.goal_bias = Some(90);
    b.volume_tolerance = Some(5.0);
    let params = Recommend {
        block: Some(b),
        ..Default::default()
    };

    // strength week: moderate volume, nominal 4, tolerance 5 -> 6
    let recs = planner.recommend(&params, T + 2 * WEEK_MS).unwrap();
    assert_eq!(recs.training_goal_focus, TrainingGoal::Strength);
    assert_eq!(recs.target_volume, 6);

    let params = Recommend {
        volume_tolerance: Some(3.0),
        ..params
    };
    assert_eq!(planner.recommend(&params, T + 2 * WEEK_MS).unwrap().target_volume, 4);
}

#[test]
fn test_recommend_validation() {
    let planner = planner();

    let params = Recommend {
        profile: AthleteProfile {
            goal: TrainingGoal::General,
            sleep_quality: Some(9),
        },
        ..Default::default()
    };
    let err = planner.recommend(&params, T).unwrap_err();
    assert_eq!(err.field(), Some("profile.sleepQuality"));

    let mut bad_block = block();
    bad_block.phases[1].sessions_per_week = 1;
    let params = Recommend {
        block: Some(bad_block),
        ..Default::default()
    };
    let err = planner.recommend(&params, T).unwrap_err();
    assert_eq!(err.field(), Some("phases[1].sessionsPerWeek"));
}

#[test]
fn test_load_operations() {
    let planner = planner();
    let set = MetabolicSet {
        intensity_pct: 70.0,
        reps: 10,
        rpe: 8.0,
    };

    let single = planner.set_load(&set).unwrap();
    let session = planner.session_load(&[set, set, set]).unwrap();
    assert!((session - single * 3.0).abs() < 1e-9);
    assert_eq!(planner.zone(session).unwrap().zone, MetabolicZone::Moderate);

    let bad = MetabolicSet { rpe: 11.0, ..set };
    let err = planner.session_load(&[set, bad]).unwrap_err();
    assert_eq!(err.field(), Some("sets[1].rpe"));
    assert!(planner.zone(-1.0).is_err());
}

#[test]
fn test_list_exercises_filters() {
    let planner = PlannerBuilder::new()
        .with_settings(Settings::default())
        .with_catalog(crate::catalog::ExerciseCatalog::from_exercises([
            Exercise {
                id: "a".to_string(),
                name: "A".to_string(),
                movement_pattern: MovementPattern::Squat,
                muscle_groups: vec![MuscleGroup::Quads],
            },
            Exercise {
                id: "b".to_string(),
                name: "B".to_string(),
                movement_pattern: MovementPattern::Hinge,
                muscle_groups: vec![MuscleGroup::Quads, MuscleGroup::Hamstrings],
            },
        ]))
        .build()
        .unwrap();

    assert_eq!(planner.list_exercises(&CatalogQuery::default()).len(), 2);

    let quads = planner.list_exercises(&CatalogQuery {
        pattern: None,
        muscle: Some(MuscleGroup::Quads),
    });
    assert_eq!(quads.len(), 2);

    let hinge_quads = planner.list_exercises(&CatalogQuery {
        pattern: Some(MovementPattern::Hinge),
        muscle: Some(MuscleGroup::Quads),
    });
    assert_eq!(hinge_quads.len(), 1);
    assert_eq!(hinge_quads[0].id, "b");
}
