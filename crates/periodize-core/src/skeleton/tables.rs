//! Static lookup tables used by the skeleton generator and the optimizer.
//!
//! Every table is an exhaustive `match`, so a new split pattern, session focus
//! or focus level fails to compile until it is given an entry here.

use serde::Serialize;

use crate::models::{FocusLevel, SessionFocus, SlotCategory, SlotTier, SplitPattern};

/// Session focus rotation for a split pattern.
pub fn focus_rotation(pattern: SplitPattern) -> &'static [SessionFocus] {
    match pattern {
        SplitPattern::FullBody => &[SessionFocus::FullBody],
        SplitPattern::UpperLower => &[SessionFocus::Upper, SessionFocus::Lower],
        SplitPattern::PushPullLegs => &[SessionFocus::Push, SessionFocus::Pull, SessionFocus::Legs],
        SplitPattern::SquatBenchDeadlift => &[
            SessionFocus::SquatDay,
            SessionFocus::BenchDay,
            SessionFocus::DeadliftDay,
        ],
        SplitPattern::Custom => &[SessionFocus::Session],
    }
}

/// Ordered slot keys a session focus draws from.
pub fn slot_keys(focus: SessionFocus) -> &'static [(SlotCategory, SlotTier)] {
    use SlotCategory as C;
    use SlotTier as T;

    match focus {
        SessionFocus::FullBody => &[
            (C::Squat, T::Primary),
            (C::Bench, T::Primary),
            (C::Deadlift, T::Secondary),
            (C::Accessory, T::Slot1),
            (C::Core, T::AntiExtension),
        ],
        SessionFocus::Upper => &[
            (C::Bench, T::Primary),
            (C::Bench, T::Secondary),
            (C::Ohp, T::Primary),
            (C::Accessory, T::Slot1),
        ],
        SessionFocus::Lower => &[
            (C::Squat, T::Primary),
            (C::Deadlift, T::Primary),
            (C::Squat, T::Secondary),
            (C::Core, T::AntiRotation),
        ],
        SessionFocus::Push => &[
            (C::Bench, T::Primary),
            (C::Ohp, T::Primary),
            (C::Bench, T::Secondary),
            (C::Accessory, T::Slot1),
        ],
        SessionFocus::Pull => &[
            (C::Deadlift, T::Primary),
            (C::Deadlift, T::Secondary),
            (C::Accessory, T::Slot2),
            (C::Accessory, T::Slot3),
        ],
        SessionFocus::Legs => &[
            (C::Squat, T::Primary),
            (C::Squat, T::Secondary),
            (C::Deadlift, T::Tertiary),
            (C::Core, T::AntiExtension),
        ],
        SessionFocus::SquatDay => &[
            (C::Squat, T::Primary),
            (C::Squat, T::Secondary),
            (C::Squat, T::Tertiary),
            (C::Core, T::AntiFlexion),
        ],
        SessionFocus::BenchDay => &[
            (C::Bench, T::Primary),
            (C::Bench, T::Secondary),
            (C::Ohp, T::Secondary),
            (C::Accessory, T::Slot1),
        ],
        SessionFocus::DeadliftDay => &[
            (C::Deadlift, T::Primary),
            (C::Deadlift, T::Secondary),
            (C::Core, T::AntiRotation),
            (C::Accessory, T::Slot2),
        ],
        SessionFocus::Session => &[
            (C::Squat, T::Primary),
            (C::Bench, T::Primary),
            (C::Deadlift, T::Primary),
        ],
    }
}

/// Intensity prescription for an intensity focus level.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityPrescription {
    /// Lower bound, %1RM
    pub min_pct: u8,
    /// Upper bound, %1RM
    pub max_pct: u8,
    pub min_reps: u32,
    pub max_reps: u32,
}

impl IntensityPrescription {
    /// Formatted %1RM range, e.g. `70-80% 1RM`.
    pub fn intensity_label(&self) -> String {
        format!("{}-{}% 1RM", self.min_pct, self.max_pct)
    }

    /// Formatted rep range, e.g. `6-10`.
    pub fn rep_range_label(&self) -> String {
        format!("{}-{}", self.min_reps, self.max_reps)
    }
}

/// Volume prescription for a volume focus level.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumePrescription {
    pub min_sets: u32,
    pub max_sets: u32,
    pub label: &'static str,
}

impl VolumePrescription {
    /// Nominal sets per exercise: the top of the range.
    pub fn nominal_sets(&self) -> u32 {
        self.max_sets
    }
}

/// Looks up the intensity prescription for a focus level.
pub fn intensity_prescription(level: FocusLevel) -> IntensityPrescription {
    let (min_pct, max_pct, min_reps, max_reps) = match level {
        FocusLevel::Minimal => (50, 60, 8, 12),
        FocusLevel::Low => (60, 70, 8, 12),
        FocusLevel::Moderate => (70, 80, 6, 10),
        FocusLevel::High => (80, 90, 3, 6),
        FocusLevel::VeryHigh => (90, 100, 1, 3),
    };
    IntensityPrescription {
        min_pct,
        max_pct,
        min_reps,
        max_reps,
    }
}

/// Looks up the volume prescription for a focus level.
pub fn volume_prescription(level: FocusLevel) -> VolumePrescription {
    let (min_sets, max_sets, label) = match level {
        FocusLevel::Minimal => (1, 2, "very low volume"),
        FocusLevel::Low => (2, 3, "low volume"),
        FocusLevel::Moderate => (3, 4, "moderate volume"),
        FocusLevel::High => (4, 5, "high volume"),
        FocusLevel::VeryHigh => (5, 6, "very high volume"),
    };
    VolumePrescription {
        min_sets,
        max_sets,
        label,
    }
}
