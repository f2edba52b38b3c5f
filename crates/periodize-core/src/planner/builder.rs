//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Planner;
use crate::{
    catalog::ExerciseCatalog,
    config::{resolve_time_zone, Settings},
    error::{PlanError, Result},
    skeleton::{IdSource, UuidIds},
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    config_path: Option<PathBuf>,
    settings: Option<Settings>,
    catalog_path: Option<PathBuf>,
    catalog: Option<ExerciseCatalog>,
    time_zone: Option<String>,
    ids: Option<Box<dyn IdSource>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom config file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/periodize/config.json`, when it exists.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given settings instead of reading any config file.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Loads the exercise catalog from a JSON file instead of the built-in
    /// one.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an in-memory exercise catalog.
    pub fn with_catalog(mut self, catalog: ExerciseCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Overrides the configured time zone with an IANA name.
    pub fn with_time_zone(mut self, name: Option<impl Into<String>>) -> Self {
        if let Some(name) = name {
            self.time_zone = Some(name.into());
        }
        self
    }

    /// Overrides the workout id source (random UUIDs by default).
    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if a config or catalog file cannot be
    /// read, `PlanError::Configuration` if the config or time zone is invalid,
    /// and `PlanError::Serialization` or `PlanError::InvalidInput` for a
    /// malformed catalog
    pub fn build(self) -> Result<Planner> {
        let settings = match self.settings {
            Some(settings) => settings,
            None => Settings::load(self.config_path.as_deref())?,
        };

        let time_zone = match &self.time_zone {
            Some(name) => resolve_time_zone(name)?,
            None => settings.resolve_time_zone()?,
        };

        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => Self::load_catalog(&path)?,
            (None, None) => ExerciseCatalog::builtin().clone(),
        };
        debug!("planner ready with {} exercises", catalog.len());

        let ids = self.ids.unwrap_or_else(|| Box::new(UuidIds));

        Ok(Planner::new(catalog, settings, time_zone, ids))
    }

    fn load_catalog(path: &Path) -> Result<ExerciseCatalog> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        ExerciseCatalog::from_json(&raw)
    }
}
