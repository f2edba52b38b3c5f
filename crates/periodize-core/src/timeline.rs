//! Phase timeline resolution.
//!
//! Answers "which phase and week of the block does this instant fall in".
//! The current time is always passed in; nothing here reads a clock.

use serde::Serialize;

use crate::models::{TrainingBlock, TrainingBlockPhase, WEEK_MS};

/// Where an instant falls within a block.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseContext {
    /// Zero-based index of the phase within the block
    pub phase_index: usize,

    pub phase: TrainingBlockPhase,

    /// One-based week within the phase
    pub week_in_phase: u32,

    pub total_weeks_in_phase: u32,

    /// One-based week within the whole block
    pub block_week: u32,
}

/// Coarse position of an instant relative to a block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockPosition {
    NotStarted,
    Active(PhaseContext),
    Ended,
}

/// Whole weeks elapsed since the block start; negative before the start.
/// `None` when the distance does not fit in an `i64`.
fn elapsed_weeks(block: &TrainingBlock, now_ms: i64) -> Option<i64> {
    now_ms
        .checked_sub(block.start_date)
        .map(|elapsed| elapsed.div_euclid(WEEK_MS))
}

/// Resolves the phase and week containing `now_ms`.
///
/// Returns `None` when the block has not started, has ended, or has no
/// phases. Zero-week phases never match.
///
/// # Examples
///
/// ```rust
/// use periodize_core::{models::{TrainingBlock, WEEK_MS}, timeline::resolve_current_phase};
///
/// # let block: TrainingBlock = serde_json::from_str(r#"{"id": "b", "name": "n", "startDate": 0,
/// #   "phases": [{"phase": "strength", "weekCount": 4, "sessionsPerWeek": 3,
/// #   "splitPattern": "full-body", "intensityFocus": "high", "volumeFocus": "moderate"}]}"#).unwrap();
/// let ctx = resolve_current_phase(&block, block.start_date + 2 * WEEK_MS).unwrap();
/// assert_eq!(ctx.week_in_phase, 3);
/// assert!(resolve_current_phase(&block, block.start_date + 5 * WEEK_MS).is_none());
/// ```
pub fn resolve_current_phase(block: &TrainingBlock, now_ms: i64) -> Option<PhaseContext> {
    let elapsed = elapsed_weeks(block, now_ms)?;
    if elapsed < 0 {
        return None;
    }

    let mut cum_weeks: i64 = 0;
    for (phase_index, phase) in block.phases.iter().enumerate() {
        let week_count = i64::from(phase.week_count);
        if elapsed < cum_weeks + week_count {
            let week_in_phase = elapsed - cum_weeks + 1;
            return Some(PhaseContext {
                phase_index,
                phase: phase.clone(),
                week_in_phase: u32::try_from(week_in_phase).ok()?,
                total_weeks_in_phase: phase.week_count,
                block_week: u32::try_from(elapsed + 1).ok()?,
            });
        }
        cum_weeks += week_count;
    }

    None
}

/// First instant after the block's final week, epoch milliseconds.
pub fn block_end_ms(block: &TrainingBlock) -> i64 {
    block.end_date()
}

/// Disambiguates the `None` cases of [`resolve_current_phase`].
pub fn block_position(block: &TrainingBlock, now_ms: i64) -> BlockPosition {
    if now_ms < block.start_date {
        return BlockPosition::NotStarted;
    }
    match resolve_current_phase(block, now_ms) {
        Some(ctx) => BlockPosition::Active(ctx),
        None => BlockPosition::Ended,
    }
}
