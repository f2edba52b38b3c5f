//! Periodize CLI Application
//!
//! Command-line interface over the periodization planner. Reads training
//! blocks, profiles and histories from JSON files and prints markdown or
//! JSON.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::Timestamp;
use log::info;
use periodize_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        catalog,
        tz,
        json,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_config_path(config)
        .with_catalog_path(catalog)
        .with_time_zone(tz)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer, json, Timestamp::now());

    info!("Periodize started");

    match command {
        Phase(args) => cli.phase(args),
        Skeleton(args) => cli.skeleton(args),
        Recommend(args) => cli.recommend(args),
        Load { command } => cli.load(command),
        Catalog(args) => cli.catalog(args),
        Schema(args) => cli::print_schema(&args),
    }
}
