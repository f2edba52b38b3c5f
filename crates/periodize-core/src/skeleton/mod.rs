//! Block skeleton generation.
//!
//! Expands a [`TrainingBlock`] into one dated [`ScheduledWorkout`] per session.
//! Each workout carries its resolved exercises and the phase's intensity and
//! volume targets, but no literal sets, reps or weights.
//!
//! ```text
//! TrainingBlock ──▶ phases ──▶ weeks ──▶ session dates ──▶ ScheduledWorkout
//!                     │                        │
//!               split rotation          slot keys → catalog
//! ```
//!
//! The split rotation is driven by one counter for the whole block, so a
//! push/pull/legs rotation continues across a phase boundary instead of
//! restarting at `Push`.

use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};
use log::debug;

use crate::{
    catalog::ExerciseLookup,
    error::{PlanError, Result},
    models::{
        ExercisePreferences, ScheduledWorkout, SessionFocus, SkeletonExercise, TrainingBlock,
        WorkoutStatus,
    },
};

pub mod ids;
pub mod tables;

pub use ids::{IdSource, SequentialIds, UuidIds};
pub use tables::{
    focus_rotation, intensity_prescription, slot_keys, volume_prescription,
    IntensityPrescription, VolumePrescription,
};

/// Generates the full calendar of session skeletons for a block.
///
/// The block is validated once up front. Slots that are unbound or refer to
/// exercises missing from the catalog are left out of the session rather than
/// reported. Only `block.start_date` anchors the calendar; `tz` decides which
/// calendar day that instant falls on.
///
/// # Errors
///
/// Returns `PlanError::InvalidInput` when the block fails validation or its
/// dates fall outside the supported calendar range.
pub fn generate_block_skeleton(
    block: &TrainingBlock,
    catalog: &dyn ExerciseLookup,
    ids: &dyn IdSource,
    tz: &TimeZone,
) -> Result<Vec<ScheduledWorkout>> {
    block.validate()?;

    let start = Timestamp::from_millisecond(block.start_date)
        .map_err(|e| PlanError::invalid_input("startDate").with_reason(e.to_string()))?
        .to_zoned(tz.clone())
        .date();
    let training_days = normalized_training_days(block.training_days.as_deref());
    let preferences = block.exercise_preferences.clone().unwrap_or_default();

    let mut workouts = Vec::with_capacity(block.total_sessions() as usize);
    let mut session_counter: usize = 0;
    let mut weeks_before: u32 = 0;

    for (phase_index, phase) in block.phases.iter().enumerate() {
        let rotation = focus_rotation(phase.split_pattern);
        let intensity = intensity_prescription(phase.intensity_focus);
        let volume = volume_prescription(phase.volume_focus);

        for week_index in 0..phase.week_count {
            let week_start = add_days(start, 7 * i64::from(weeks_before + week_index))?;
            let offsets = session_offsets(week_start, phase.sessions_per_week, &training_days);

            for (day_index, offset) in (0u32..).zip(offsets) {
                let focus = rotation[session_counter % rotation.len()];
                session_counter += 1;

                workouts.push(ScheduledWorkout {
                    id: ids.next_id(),
                    date: add_days(week_start, offset)?,
                    label: format!(
                        "{} W{} D{}: {}",
                        phase.phase.display_name(),
                        week_index + 1,
                        day_index + 1,
                        focus.label()
                    ),
                    phase: phase.phase,
                    training_block_id: block.id.clone(),
                    phase_index,
                    week_index,
                    day_index,
                    session_focus: focus,
                    skeleton_exercises: resolve_exercises(focus, &preferences, catalog),
                    target_intensity: intensity.intensity_label(),
                    target_volume: volume.label.to_string(),
                    target_sets_per_exercise: volume.nominal_sets(),
                    target_rep_range: intensity.rep_range_label(),
                    status: WorkoutStatus::Planned,
                });
            }
        }

        weeks_before += phase.week_count;
    }

    debug!(
        "generated {} sessions for block '{}' over {} weeks",
        workouts.len(),
        block.id,
        weeks_before
    );
    Ok(workouts)
}

/// Resolves a session focus's slot keys against the block's preferences.
pub fn resolve_exercises(
    focus: SessionFocus,
    preferences: &ExercisePreferences,
    catalog: &dyn ExerciseLookup,
) -> Vec<SkeletonExercise> {
    slot_keys(focus)
        .iter()
        .filter_map(|&(category, tier)| {
            let Some(id) = preferences.exercise_for(category, tier) else {
                debug!(
                    "{}: no exercise bound to {}/{}",
                    focus.label(),
                    category.as_str(),
                    tier.as_str()
                );
                return None;
            };
            let Some(exercise) = catalog.exercise(id) else {
                debug!("{}: exercise '{id}' not in catalog", focus.label());
                return None;
            };
            Some(SkeletonExercise {
                exercise_id: exercise.id.clone(),
                exercise_name: exercise.name.clone(),
                tier: tier.into(),
            })
        })
        .collect()
}

/// Sorted, de-duplicated weekday preferences.
fn normalized_training_days(days: Option<&[u8]>) -> Vec<u8> {
    let mut days = days.map(<[u8]>::to_vec).unwrap_or_default();
    days.sort_unstable();
    days.dedup();
    days
}

/// Day offsets from `week_start` for each session of one week, ascending.
///
/// Uses the first `sessions` preferred weekdays when enough are given;
/// otherwise spaces sessions `floor(7 / sessions)` days apart.
fn session_offsets(week_start: Date, sessions: u32, training_days: &[u8]) -> Vec<i64> {
    let sessions = sessions as usize;

    if training_days.len() >= sessions {
        let first_weekday = i64::from(week_start.weekday().to_sunday_zero_offset());
        let mut offsets: Vec<i64> = training_days[..sessions]
            .iter()
            .map(|day| (i64::from(*day) - first_weekday).rem_euclid(7))
            .collect();
        offsets.sort_unstable();
        return offsets;
    }

    if !training_days.is_empty() {
        debug!(
            "{} training days cannot host {sessions} sessions; spacing evenly",
            training_days.len()
        );
    }
    let spacing = (7 / sessions.max(1)) as i64;
    (0..sessions as i64).map(|i| i * spacing).collect()
}

fn add_days(date: Date, days: i64) -> Result<Date> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .map_err(|e| PlanError::invalid_input("startDate").with_reason(e.to_string()))
}
