//! Configuration file loading.
//!
//! Settings live in a single JSON file, looked up in this order:
//!
//! 1. An explicit path (the CLI's `--config`)
//! 2. `$XDG_CONFIG_HOME/periodize/config.json`
//!
//! A missing default file is not an error; built-in defaults apply. Every
//! field is optional.
//!
//! ```json
//! {
//!   "timeZone": "Europe/Oslo",
//!   "optimizer": { "workingIntensityPct": 72.5, "workingReps": 8 },
//!   "tuning": { "maxDamping": 0.4, "hardSessionRpe": 9.0 }
//! }
//! ```

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanError, Result},
    models::OptimizerConfig,
    optimizer::OptimizerTuning,
};

/// XDG prefix for configuration lookups.
pub const APP_PREFIX: &str = "periodize";

/// Configuration file name within the XDG config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// IANA time zone used to place session dates; UTC when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Default optimizer switches and working-set assumptions
    pub optimizer: OptimizerConfig,

    pub tuning: OptimizerTuning,
}

impl Settings {
    /// Loads settings from `explicit`, falling back to the XDG default.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if an explicit file cannot be read and
    /// `PlanError::Configuration` if any file found is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and validates one settings file.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` when the file cannot be read and
    /// `PlanError::Configuration` when it is not valid settings JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings = Self::from_json(&raw).map_err(|e| {
            PlanError::configuration(format!("{}: {e}", path.display()))
        })?;
        debug!("loaded config from {}", path.display());
        Ok(settings)
    }

    /// Parses and validates settings JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Serialization` for malformed JSON and
    /// `PlanError::Configuration` for inconsistent values.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Existing config file under the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE_NAME)
    }

    /// Resolves the configured time zone, defaulting to UTC.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Configuration` for an unknown zone name.
    pub fn resolve_time_zone(&self) -> Result<TimeZone> {
        match &self.time_zone {
            Some(name) => resolve_time_zone(name),
            None => Ok(TimeZone::UTC),
        }
    }

    fn validate(&self) -> Result<()> {
        let tuning = &self.tuning;
        if tuning.min_tolerance > tuning.max_tolerance {
            return Err(PlanError::configuration(format!(
                "tuning.minTolerance ({}) exceeds tuning.maxTolerance ({})",
                tuning.min_tolerance, tuning.max_tolerance
            )));
        }
        if tuning.hypertrophy_bias_below > tuning.strength_bias_above {
            return Err(PlanError::configuration(
                "tuning.hypertrophyBiasBelow must not exceed tuning.strengthBiasAbove",
            ));
        }
        if tuning.recent_window_days > tuning.acute_window_days {
            return Err(PlanError::configuration(
                "tuning.recentWindowDays must not exceed tuning.acuteWindowDays",
            ));
        }
        if !(self.optimizer.working_intensity_pct.is_finite()
            && self.optimizer.working_rpe.is_finite())
        {
            return Err(PlanError::configuration(
                "optimizer working intensity and RPE must be finite",
            ));
        }
        Ok(())
    }
}

/// Looks up an IANA time zone by name.
///
/// # Errors
///
/// Returns `PlanError::Configuration` for an unknown zone name.
pub fn resolve_time_zone(name: &str) -> Result<TimeZone> {
    TimeZone::get(name)
        .map_err(|e| PlanError::configuration(format!("unknown time zone '{name}': {e}")))
}
