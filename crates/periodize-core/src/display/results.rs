//! Report wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::tz::TimeZone;
use serde::Serialize;

use super::datetime::LocalDateTime;
use crate::{
    metabolic::ZoneClassification,
    models::TrainingBlock,
    timeline::{block_end_ms, BlockPosition},
};

/// Where "now" falls in a block, with the block's dates.
///
/// # Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use periodize_core::{display::PhaseReport, models::TrainingBlock, timeline::BlockPosition};
///
/// # let block: TrainingBlock = serde_json::from_str(r#"{"id": "b", "name": "Winter", "startDate": 0, "phases": []}"#).unwrap();
/// let tz = TimeZone::UTC;
/// let report = PhaseReport::new(&block, BlockPosition::NotStarted, &tz);
/// assert!(report.to_string().contains("has not started"));
/// ```
pub struct PhaseReport<'a> {
    pub block: &'a TrainingBlock,
    pub position: BlockPosition,
    pub tz: &'a TimeZone,
}

impl<'a> PhaseReport<'a> {
    pub fn new(block: &'a TrainingBlock, position: BlockPosition, tz: &'a TimeZone) -> Self {
        Self {
            block,
            position,
            tz,
        }
    }
}

impl fmt::Display for PhaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.block.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Runs**: {} to {} ({} weeks)",
            LocalDateTime::new(self.block.start_date, self.tz),
            LocalDateTime::new(block_end_ms(self.block), self.tz),
            self.block.total_weeks()
        )?;
        writeln!(f)?;

        match &self.position {
            BlockPosition::NotStarted => writeln!(f, "Block has not started yet."),
            BlockPosition::Ended => writeln!(f, "Block has ended."),
            BlockPosition::Active(ctx) => write!(f, "{ctx}"),
        }
    }
}

/// A computed metabolic load and its zone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadReport {
    pub load: f64,
    pub zone: ZoneClassification,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Metabolic load**: {:.1}", self.load)?;
        writeln!(f, "- **Zone**: {} ({})", self.zone.zone, self.zone.label)
    }
}
