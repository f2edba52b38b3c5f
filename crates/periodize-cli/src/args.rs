use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CatalogArgs, LoadCommands, PhaseArgs, RecommendArgs, SchemaArgs, SkeletonArgs,
};

/// Periodization planner for strength training blocks
///
/// Expands a multi-week training block into dated workout skeletons, reports
/// where a date falls within the block, and recommends per-session volume and
/// intensity from metabolic load estimates and recent fatigue. All inputs are
/// JSON files in the same camelCase shape the planning UI exchanges.
#[derive(Parser)]
#[command(version, about, name = "pz")]
pub struct Args {
    /// Path to the JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/periodize/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a JSON exercise catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// IANA time zone used to turn block start instants into calendar days
    #[arg(long, global = true)]
    pub tz: Option<String>,

    /// Print JSON instead of formatted markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show which phase and week of a block a date falls in
    #[command(alias = "p")]
    Phase(PhaseArgs),
    /// Generate the dated workout skeleton for a block
    #[command(alias = "s")]
    Skeleton(SkeletonArgs),
    /// Recommend volume and intensity for the next session
    #[command(alias = "r")]
    Recommend(RecommendArgs),
    /// Compute metabolic loads and zones
    #[command(alias = "l")]
    Load {
        #[command(subcommand)]
        command: LoadCommands,
    },
    /// List catalog exercises
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Print the JSON Schema of an input file
    Schema(SchemaArgs),
}
