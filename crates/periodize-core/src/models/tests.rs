#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::civil::date;

    use crate::{
        catalog::ExerciseCatalog,
        error::PlanError,
        models::{
            active_block, ExercisePreferences, ExerciseSlot, FocusLevel, ScheduledWorkout,
            SessionFocus, SkeletonExercise, SkeletonTier, SlotCategory, SlotTier, SplitPattern,
            TrainingBlock, TrainingBlockPhase, TrainingPhase, WorkoutStatus, MAX_BLOCK_WEEKS,
            WEEK_MS,
        },
    };

    fn phase(weeks: u32, sessions: u32) -> TrainingBlockPhase {
        TrainingBlockPhase {
            phase: TrainingPhase::Accumulation,
            week_count: weeks,
            sessions_per_week: sessions,
            split_pattern: SplitPattern::UpperLower,
            intensity_focus: FocusLevel::Moderate,
            volume_focus: FocusLevel::High,
            primary_archetypes: vec!["volume".to_string()],
            description: "Build work capacity".to_string(),
        }
    }

    fn create_test_block() -> TrainingBlock {
        TrainingBlock {
            id: "blk-1".to_string(),
            name: "Test Block".to_string(),
            start_date: 1_704_067_200_000,
            phases: vec![phase(3, 4), phase(2, 3)],
            training_days: Some(vec![1, 3, 5]),
            exercise_preferences: None,
            goal_bias: Some(40),
            volume_tolerance: Some(3.0),
            length_weeks: None,
            is_active: true,
        }
    }

    fn create_test_workout() -> ScheduledWorkout {
        ScheduledWorkout {
            id: "wo-1".to_string(),
            date: date(2024, 1, 1),
            label: "Accumulation W1 D1: Upper".to_string(),
            phase: TrainingPhase::Accumulation,
            training_block_id: "blk-1".to_string(),
            phase_index: 0,
            week_index: 0,
            day_index: 0,
            session_focus: SessionFocus::Upper,
            skeleton_exercises: vec![SkeletonExercise {
                exercise_id: "bench-press".to_string(),
                exercise_name: "Bench Press".to_string(),
                tier: SkeletonTier::Primary,
            }],
            target_intensity: "70-80% 1RM".to_string(),
            target_volume: "high volume".to_string(),
            target_sets_per_exercise: 5,
            target_rep_range: "6-10".to_string(),
            status: WorkoutStatus::Planned,
        }
    }

    #[test]
    fn test_phase_sum_is_block_length() {
        let block = create_test_block();
        assert_eq!(block.total_weeks(), 5);
        assert_eq!(block.total_sessions(), 3 * 4 + 2 * 3);
        assert_eq!(block.phase_start_week(0), 0);
        assert_eq!(block.phase_start_week(1), 3);
        assert_eq!(block.end_date(), block.start_date + 5 * WEEK_MS);
    }

    #[test]
    fn test_length_weeks_only_without_phases() {
        let mut block = create_test_block();
        block.length_weeks = Some(5);
        assert_eq!(block.total_weeks(), 5);
        assert!(block.validate().is_ok());

        block.length_weeks = Some(8);
        let err = block.validate().unwrap_err();
        assert_eq!(err.field(), Some("lengthWeeks"));

        block.phases.clear();
        assert_eq!(block.total_weeks(), 8);
        assert!(block.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut block = create_test_block();
        block.phases[1].sessions_per_week = 8;
        assert_eq!(
            block.validate().unwrap_err().field(),
            Some("phases[1].sessionsPerWeek")
        );

        let mut block = create_test_block();
        block.training_days = Some(vec![0, 7]);
        assert_eq!(block.validate().unwrap_err().field(), Some("trainingDays"));

        let mut block = create_test_block();
        block.goal_bias = Some(101);
        assert_eq!(block.validate().unwrap_err().field(), Some("goalBias"));

        let mut block = create_test_block();
        block.volume_tolerance = Some(f64::INFINITY);
        assert_eq!(block.validate().unwrap_err().field(), Some("volumeTolerance"));
    }

    #[test]
    fn test_validate_bounds_block_length() {
        let mut block = create_test_block();
        block.phases = vec![phase(700_000_000, 7)];
        assert_eq!(block.total_sessions(), u32::MAX);
        let err = block.validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { .. }));
        assert_eq!(err.field(), Some("phases[0].weekCount"));

        // the running total, not the single phase, crosses the limit
        block.phases = vec![phase(MAX_BLOCK_WEEKS, 3), phase(1, 3)];
        assert_eq!(block.validate().unwrap_err().field(), Some("phases[1].weekCount"));

        block.phases = vec![phase(u32::MAX, 3), phase(u32::MAX, 3)];
        assert_eq!(block.total_weeks(), u32::MAX);
        assert_eq!(block.validate().unwrap_err().field(), Some("phases[0].weekCount"));

        block.phases = vec![phase(MAX_BLOCK_WEEKS, 2)];
        assert!(block.validate().is_ok());

        block.phases.clear();
        block.length_weeks = Some(MAX_BLOCK_WEEKS + 1);
        assert_eq!(block.validate().unwrap_err().field(), Some("lengthWeeks"));
    }

    #[test]
    fn test_validate_rejects_unrepresentable_dates() {
        let mut block = create_test_block();
        block.start_date = i64::MAX - WEEK_MS;
        assert_eq!(block.end_date(), i64::MAX);
        assert_eq!(block.validate().unwrap_err().field(), Some("startDate"));
    }

    #[test]
    fn test_block_json_shape() {
        let block = create_test_block();
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["startDate"], 1_704_067_200_000_i64);
        assert_eq!(json["phases"][0]["splitPattern"], "upper-lower");
        assert_eq!(json["phases"][0]["volumeFocus"], "high");
        assert_eq!(json["trainingDays"], serde_json::json!([1, 3, 5]));
        assert!(json.get("lengthWeeks").is_none());

        let back: TrainingBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_negative_week_count_fails_to_parse() {
        let json = r#"{"id": "b", "name": "n", "startDate": 0, "phases": [{
            "phase": "power", "weekCount": -1, "sessionsPerWeek": 3,
            "splitPattern": "full-body", "intensityFocus": "high", "volumeFocus": "low"}]}"#;
        assert!(serde_json::from_str::<TrainingBlock>(json).is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        assert!(serde_json::from_str::<TrainingPhase>(r#""recovery""#).is_err());
        assert!(serde_json::from_str::<FocusLevel>(r#""extreme""#).is_err());
        assert_eq!(
            serde_json::from_str::<FocusLevel>(r#""very-high""#).unwrap(),
            FocusLevel::VeryHigh
        );
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!(TrainingPhase::from_str("GPP").unwrap(), TrainingPhase::Gpp);
        assert_eq!(
            SplitPattern::from_str("squat_bench_deadlift").unwrap(),
            SplitPattern::SquatBenchDeadlift
        );
        assert_eq!(SlotTier::from_str("anti-rotation").unwrap(), SlotTier::AntiRotation);
        assert_eq!(SlotCategory::from_str("OHP").unwrap(), SlotCategory::Ohp);
        assert_eq!(WorkoutStatus::from_str("done").unwrap(), WorkoutStatus::Completed);
        assert!(FocusLevel::from_str("maximal").is_err());
    }

    #[test]
    fn test_hypertrophy_leaning_phases() {
        let leaning: Vec<_> = TrainingPhase::ALL
            .into_iter()
            .filter(TrainingPhase::is_hypertrophy_leaning)
            .collect();
        assert_eq!(
            leaning,
            vec![
                TrainingPhase::Gpp,
                TrainingPhase::Hypertrophy,
                TrainingPhase::Accumulation
            ]
        );
    }

    #[test]
    fn test_slot_tier_collapses_to_skeleton_tier() {
        assert_eq!(SkeletonTier::from(SlotTier::Secondary), SkeletonTier::Secondary);
        assert_eq!(SkeletonTier::from(SlotTier::AntiFlexion), SkeletonTier::Accessory);
        assert_eq!(SkeletonTier::from(SlotTier::Slot3), SkeletonTier::Accessory);
    }

    #[test]
    fn test_exercise_for_skips_null_bindings() {
        let prefs = ExercisePreferences {
            slots: vec![
                ExerciseSlot {
                    category: SlotCategory::Squat,
                    tier: SlotTier::Primary,
                    exercise_id: None,
                },
                ExerciseSlot {
                    category: SlotCategory::Squat,
                    tier: SlotTier::Primary,
                    exercise_id: Some("front-squat".to_string()),
                },
            ],
        };
        assert_eq!(
            prefs.exercise_for(SlotCategory::Squat, SlotTier::Primary),
            Some("front-squat")
        );
        assert_eq!(prefs.exercise_for(SlotCategory::Squat, SlotTier::Secondary), None);
    }

    #[test]
    fn test_active_block() {
        let mut inactive = create_test_block();
        inactive.is_active = false;

        assert!(active_block(&[]).unwrap().is_none());
        assert!(active_block(&[inactive.clone()]).unwrap().is_none());
        assert!(active_block(&[inactive, create_test_block()]).unwrap().is_some());
        assert!(matches!(
            active_block(&[create_test_block(), create_test_block(), create_test_block()]),
            Err(PlanError::MultipleActiveBlocks { count: 3 })
        ));
    }

    #[test]
    fn test_workout_json_uses_iso_date() {
        let json = serde_json::to_value(create_test_workout()).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["sessionFocus"], "Upper");
        assert_eq!(json["status"], "planned");
        assert_eq!(json["skeletonExercises"][0]["tier"], "primary");
    }

    #[test]
    fn test_status_transitions() {
        let mut workout = create_test_workout();
        workout.skip().unwrap();
        assert_eq!(workout.status, WorkoutStatus::Skipped);

        let err = workout.complete().unwrap_err();
        assert!(matches!(err, PlanError::InvalidTransition { .. }));
        assert_eq!(err.to_string(), "Cannot move workout from 'skipped' to 'completed'");
    }

    #[test]
    fn test_reassign_exercise() {
        let catalog = ExerciseCatalog::builtin();
        let mut workout = create_test_workout();

        workout.reassign_exercise(0, "spoto-press", catalog).unwrap();
        assert_eq!(workout.skeleton_exercises[0].exercise_id, "spoto-press");
        assert_eq!(workout.skeleton_exercises[0].tier, SkeletonTier::Primary);

        assert!(matches!(
            workout.reassign_exercise(3, "bench-press", catalog),
            Err(PlanError::ExercisePositionOutOfRange { position: 3, len: 1 })
        ));
        assert!(matches!(
            workout.reassign_exercise(0, "unknown", catalog),
            Err(PlanError::ExerciseNotFound { .. })
        ));
    }
}
