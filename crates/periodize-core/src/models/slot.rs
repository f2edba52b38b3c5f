//! Exercise slot preferences attached to a training block.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lift family a slot belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Squat,
    Bench,
    Deadlift,
    Ohp,
    Core,
    Accessory,
}

impl SlotCategory {
    /// Every category, in declaration order.
    pub const ALL: [SlotCategory; 6] = [
        SlotCategory::Squat,
        SlotCategory::Bench,
        SlotCategory::Deadlift,
        SlotCategory::Ohp,
        SlotCategory::Core,
        SlotCategory::Accessory,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Squat => "squat",
            SlotCategory::Bench => "bench",
            SlotCategory::Deadlift => "deadlift",
            SlotCategory::Ohp => "ohp",
            SlotCategory::Core => "core",
            SlotCategory::Accessory => "accessory",
        }
    }
}

impl FromStr for SlotCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| format!("Invalid slot category: {s}"))
    }
}

/// Position of a slot within its category.
///
/// Main lifts use `primary`/`secondary`/`tertiary`, core work uses the
/// anti-movement tiers, and accessories use numbered slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SlotTier {
    Primary,
    Secondary,
    Tertiary,
    AntiFlexion,
    AntiExtension,
    AntiRotation,
    #[serde(rename = "slot-1")]
    Slot1,
    #[serde(rename = "slot-2")]
    Slot2,
    #[serde(rename = "slot-3")]
    Slot3,
}

impl SlotTier {
    /// Every tier, in declaration order.
    pub const ALL: [SlotTier; 9] = [
        SlotTier::Primary,
        SlotTier::Secondary,
        SlotTier::Tertiary,
        SlotTier::AntiFlexion,
        SlotTier::AntiExtension,
        SlotTier::AntiRotation,
        SlotTier::Slot1,
        SlotTier::Slot2,
        SlotTier::Slot3,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotTier::Primary => "primary",
            SlotTier::Secondary => "secondary",
            SlotTier::Tertiary => "tertiary",
            SlotTier::AntiFlexion => "anti-flexion",
            SlotTier::AntiExtension => "anti-extension",
            SlotTier::AntiRotation => "anti-rotation",
            SlotTier::Slot1 => "slot-1",
            SlotTier::Slot2 => "slot-2",
            SlotTier::Slot3 => "slot-3",
        }
    }
}

impl FromStr for SlotTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == needle)
            .ok_or_else(|| format!("Invalid slot tier: {s}"))
    }
}

/// A `(category, tier)` pair, optionally bound to a catalog exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSlot {
    pub category: SlotCategory,

    pub tier: SlotTier,

    /// Catalog exercise id; `None` leaves the choice to downstream generation
    #[serde(default)]
    pub exercise_id: Option<String>,
}

impl ExerciseSlot {
    /// Returns true if this slot is keyed by `(category, tier)`.
    pub fn matches(&self, category: SlotCategory, tier: SlotTier) -> bool {
        self.category == category && self.tier == tier
    }
}

/// Slot bindings authored for a block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExercisePreferences {
    #[serde(default)]
    pub slots: Vec<ExerciseSlot>,
}

impl ExercisePreferences {
    /// Exercise id bound to `(category, tier)`, if one was chosen.
    ///
    /// The first matching slot with a non-null id wins.
    pub fn exercise_for(&self, category: SlotCategory, tier: SlotTier) -> Option<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.matches(category, tier))
            .find_map(|slot| slot.exercise_id.as_deref())
    }
}
