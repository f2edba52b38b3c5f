//! Command handlers and their clap argument wrappers.
//!
//! Argument structures carry the clap derives and convert into the core's
//! parameter types, so the core stays free of CLI framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Arguments that only need reshaping implement `From`; arguments that point
//! at input files provide a fallible `into_params` that reads and parses them.

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;
use log::debug;
use periodize_core::{
    catalog::{MovementPattern, MuscleGroup},
    display::{Exercises, LoadReport, PhaseReport, Schedule},
    metabolic::MetabolicSet,
    models::{AthleteProfile, CompletedSession, TrainingBlock},
    params::{CatalogQuery, Recommend},
    timeline::{BlockPosition, PhaseContext},
    Planner, Settings,
};
use schemars::schema_for;
use serde::{de::DeserializeOwned, Serialize};

use crate::renderer::TerminalRenderer;

/// Reads and parses a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse '{}'", path.display()))
}

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Show which phase and week of a block a date falls in
#[derive(Args)]
pub struct PhaseArgs {
    /// Training block JSON file
    pub block: PathBuf,
    /// Instant to resolve, RFC 3339 (defaults to now)
    #[arg(long, help = "Instant to resolve, e.g. 2024-01-15T09:00:00Z")]
    pub at: Option<Timestamp>,
}

/// Generate the dated workout skeleton for a block
#[derive(Args)]
pub struct SkeletonArgs {
    /// Training block JSON file
    pub block: PathBuf,
}

/// Recommend volume and intensity for the next session
#[derive(Args)]
pub struct RecommendArgs {
    /// Athlete profile JSON file
    #[arg(long)]
    pub profile: PathBuf,
    /// JSON array of completed sessions
    #[arg(long)]
    pub history: Option<PathBuf>,
    /// Active training block JSON file
    #[arg(long)]
    pub block: Option<PathBuf>,
    /// Volume tolerance override, typically 1-5
    #[arg(long, help = "Volume tolerance override (1 = low, 3 = neutral, 5 = high)")]
    pub tolerance: Option<f64>,
    /// Instant to recommend for, RFC 3339 (defaults to now)
    #[arg(long)]
    pub at: Option<Timestamp>,
}

impl RecommendArgs {
    /// Reads the referenced files into core parameters.
    pub fn into_params(self) -> Result<Recommend> {
        let profile: AthleteProfile = read_json(&self.profile)?;
        let history: Vec<CompletedSession> = match &self.history {
            Some(path) => read_json(path)?,
            None => Vec::new(),
        };
        let block: Option<TrainingBlock> = match &self.block {
            Some(path) => Some(read_json(path)?),
            None => None,
        };

        Ok(Recommend {
            profile,
            history,
            block,
            config: None,
            volume_tolerance: self.tolerance,
        })
    }
}

/// One working set
#[derive(Args)]
pub struct SetArgs {
    /// Load as a percentage of one-rep max
    #[arg(long)]
    pub intensity: f64,
    /// Repetitions performed
    #[arg(long)]
    pub reps: u32,
    /// Rate of perceived exertion, 1-10
    #[arg(long)]
    pub rpe: f64,
}

impl From<SetArgs> for MetabolicSet {
    fn from(val: SetArgs) -> Self {
        MetabolicSet {
            intensity_pct: val.intensity,
            reps: val.reps,
            rpe: val.rpe,
        }
    }
}

/// A whole session's sets
#[derive(Args)]
pub struct SessionArgs {
    /// JSON array of sets
    pub sets: PathBuf,
}

impl SessionArgs {
    pub fn into_params(self) -> Result<Vec<MetabolicSet>> {
        read_json(&self.sets)
    }
}

/// A precomputed load
#[derive(Args)]
pub struct ZoneArgs {
    /// Total metabolic load
    pub load: f64,
}

#[derive(Subcommand)]
pub enum LoadCommands {
    /// Metabolic load of a single set
    Set(SetArgs),
    /// Metabolic load of a session's sets
    Session(SessionArgs),
    /// Zone a total load falls into
    Zone(ZoneArgs),
}

/// List catalog exercises
#[derive(Args)]
pub struct CatalogArgs {
    /// Only exercises with this movement pattern (e.g. hinge, horizontal-push)
    #[arg(long)]
    pub pattern: Option<MovementPattern>,
    /// Only exercises training this muscle group (e.g. lats, quads)
    #[arg(long)]
    pub muscle: Option<MuscleGroup>,
}

impl From<CatalogArgs> for CatalogQuery {
    fn from(val: CatalogArgs) -> Self {
        CatalogQuery {
            pattern: val.pattern,
            muscle: val.muscle,
        }
    }
}

/// Input files with a published schema
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Training block
    Block,
    /// Completed session history
    History,
    /// Athlete profile
    Profile,
    /// Config file
    Config,
    /// Session sets for `load session`
    Sets,
}

/// Print the JSON Schema of an input file
#[derive(Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

/// Prints the JSON Schema for one kind of input file.
pub fn print_schema(args: &SchemaArgs) -> Result<()> {
    let schema = match args.kind {
        SchemaKind::Block => schema_for!(TrainingBlock),
        SchemaKind::History => schema_for!(Vec<CompletedSession>),
        SchemaKind::Profile => schema_for!(AthleteProfile),
        SchemaKind::Config => schema_for!(Settings),
        SchemaKind::Sets => schema_for!(Vec<MetabolicSet>),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// Machine-readable form of `phase` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhaseOutput<'a> {
    block_id: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a PhaseContext>,
}

/// Runs commands against a planner and prints the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    json: bool,
    now: Timestamp,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, json: bool, now: Timestamp) -> Self {
        Self {
            planner,
            renderer,
            json,
            now,
        }
    }

    fn output(&self, value: &impl Serialize, markdown: impl Display) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    fn now_ms(&self, at: Option<Timestamp>) -> i64 {
        at.unwrap_or(self.now).as_millisecond()
    }

    pub fn phase(&self, args: PhaseArgs) -> Result<()> {
        let block: TrainingBlock = read_json(&args.block)?;
        block.validate().context("Invalid training block")?;

        let now_ms = self.now_ms(args.at);
        let position = self.planner.block_position(&block, now_ms);
        debug!("block '{}' at {now_ms}: {position:?}", block.id);

        let (status, context) = match &position {
            BlockPosition::NotStarted => ("not-started", None),
            BlockPosition::Active(ctx) => ("active", Some(ctx)),
            BlockPosition::Ended => ("ended", None),
        };
        let output = PhaseOutput {
            block_id: &block.id,
            status,
            context,
        };
        let report = PhaseReport::new(&block, position.clone(), self.planner.time_zone());
        self.output(&output, report)
    }

    pub fn skeleton(&self, args: SkeletonArgs) -> Result<()> {
        let block: TrainingBlock = read_json(&args.block)?;
        let workouts = self
            .planner
            .generate_block_skeleton(&block)
            .context("Failed to generate block skeleton")?;
        let schedule = Schedule(workouts);
        self.output(&schedule.0, &schedule)
    }

    pub fn recommend(&self, args: RecommendArgs) -> Result<()> {
        let now_ms = self.now_ms(args.at);
        let params = args.into_params()?;
        let recommendations = self
            .planner
            .recommend(&params, now_ms)
            .context("Failed to compute recommendations")?;
        self.output(&recommendations, &recommendations)
    }

    pub fn load(&self, command: LoadCommands) -> Result<()> {
        let load = match command {
            LoadCommands::Set(args) => self
                .planner
                .set_load(&args.into())
                .context("Failed to compute set load")?,
            LoadCommands::Session(args) => self
                .planner
                .session_load(&args.into_params()?)
                .context("Failed to compute session load")?,
            LoadCommands::Zone(args) => args.load,
        };
        let zone = self.planner.zone(load).context("Failed to classify load")?;
        let report = LoadReport { load, zone };
        self.output(&report, report)
    }

    pub fn catalog(&self, args: CatalogArgs) -> Result<()> {
        let exercises = Exercises(self.planner.list_exercises(&args.into()));
        self.output(&exercises.0, &exercises)
    }
}
