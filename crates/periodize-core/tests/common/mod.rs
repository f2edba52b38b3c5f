#![allow(dead_code)]

use periodize_core::{
    models::{
        CompletedSession, ExercisePreferences, ExerciseSlot, FocusLevel, SlotCategory, SlotTier,
        SplitPattern, TrainingBlock, TrainingBlockPhase, TrainingPhase, DAY_MS,
    },
    Planner, PlannerBuilder, SequentialIds, Settings,
};

/// 2024-01-01T00:00:00Z, a Monday.
pub const JAN_1_2024: i64 = 1_704_067_200_000;

/// Planner with default settings, UTC and sequential ids.
pub fn create_test_planner() -> Planner {
    create_planner_in(None)
}

pub fn create_planner_in(tz: Option<&str>) -> Planner {
    PlannerBuilder::new()
        .with_settings(Settings::default())
        .with_time_zone(tz)
        .with_id_source(SequentialIds::new("wo"))
        .build()
        .expect("Failed to create planner")
}

pub fn phase(
    kind: TrainingPhase,
    weeks: u32,
    sessions: u32,
    split: SplitPattern,
    intensity: FocusLevel,
    volume: FocusLevel,
) -> TrainingBlockPhase {
    TrainingBlockPhase {
        phase: kind,
        week_count: weeks,
        sessions_per_week: sessions,
        split_pattern: split,
        intensity_focus: intensity,
        volume_focus: volume,
        primary_archetypes: Vec::new(),
        description: String::new(),
    }
}

pub fn block(phases: Vec<TrainingBlockPhase>) -> TrainingBlock {
    TrainingBlock {
        id: "block-1".to_string(),
        name: "Test Block".to_string(),
        start_date: JAN_1_2024,
        phases,
        training_days: None,
        exercise_preferences: Some(main_lift_preferences()),
        goal_bias: None,
        volume_tolerance: None,
        length_weeks: None,
        is_active: true,
    }
}

/// Two hypertrophy weeks then two strength weeks, push/pull/legs x 3.
pub fn ppl_block() -> TrainingBlock {
    block(vec![
        phase(
            TrainingPhase::Hypertrophy,
            2,
            3,
            SplitPattern::PushPullLegs,
            FocusLevel::Moderate,
            FocusLevel::High,
        ),
        phase(
            TrainingPhase::Strength,
            2,
            3,
            SplitPattern::PushPullLegs,
            FocusLevel::High,
            FocusLevel::Moderate,
        ),
    ])
}

pub fn main_lift_preferences() -> ExercisePreferences {
    let bind = |category, tier, id: &str| ExerciseSlot {
        category,
        tier,
        exercise_id: Some(id.to_string()),
    };
    ExercisePreferences {
        slots: vec![
            bind(SlotCategory::Squat, SlotTier::Primary, "back-squat"),
            bind(SlotCategory::Squat, SlotTier::Secondary, "pause-squat"),
            bind(SlotCategory::Bench, SlotTier::Primary, "bench-press"),
            bind(SlotCategory::Bench, SlotTier::Secondary, "close-grip-bench"),
            bind(SlotCategory::Deadlift, SlotTier::Primary, "deadlift"),
            bind(SlotCategory::Ohp, SlotTier::Primary, "overhead-press"),
        ],
    }
}

/// A completed session `days_ago` days before `now`.
pub fn session(now: i64, days_ago: f64, tonnage: f64, rpe: Option<f64>) -> CompletedSession {
    CompletedSession {
        completed_at: now - (days_ago * DAY_MS as f64) as i64,
        tonnage,
        total_sets: 20,
        session_rpe: rpe,
    }
}
