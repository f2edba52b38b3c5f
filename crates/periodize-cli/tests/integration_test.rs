//! Integration tests comparing CLI output with the core Display implementations
//!
//! With `--no-color` the CLI prints the same markdown the core renders, so
//! each command's stdout must match formatting the planner's results
//! directly.

use std::process::Command;

use jiff::Timestamp;
use periodize_core::{
    display::{Exercises, LoadReport, PhaseReport},
    metabolic::MetabolicSet,
    params::CatalogQuery,
    MovementPattern, Planner, PlannerBuilder, Settings, TrainingBlock,
};
use tempfile::TempDir;

const BLOCK_JSON: &str = r#"{
    "id": "block-1",
    "name": "Meet Prep",
    "startDate": 1704067200000,
    "phases": [
        {"phase": "accumulation", "weekCount": 3, "sessionsPerWeek": 4,
         "splitPattern": "upper-lower", "intensityFocus": "moderate",
         "volumeFocus": "very-high", "primaryArchetypes": ["volume"]},
        {"phase": "peaking", "weekCount": 1, "sessionsPerWeek": 3,
         "splitPattern": "squat-bench-deadlift", "intensityFocus": "very-high",
         "volumeFocus": "low"}
    ],
    "isActive": true
}"#;

fn create_test_planner() -> Planner {
    PlannerBuilder::new()
        .with_settings(Settings::default())
        .build()
        .expect("Failed to create planner")
}

/// Run a CLI command and capture its output
fn run_cli_command(env: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pz"));
    cmd.env("XDG_CONFIG_HOME", env.path()).arg("--no-color");

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "pz {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_phase_report_consistency() {
    let env = TempDir::new().expect("Failed to create temporary directory");
    let block_path = env.path().join("block.json");
    std::fs::write(&block_path, BLOCK_JSON).unwrap();

    let at = "2024-01-24T10:30:00Z";
    let cli_output = run_cli_command(&env, &["phase", block_path.to_str().unwrap(), "--at", at]);

    let planner = create_test_planner();
    let block: TrainingBlock = serde_json::from_str(BLOCK_JSON).unwrap();
    let now_ms = at.parse::<Timestamp>().unwrap().as_millisecond();
    let position = planner.block_position(&block, now_ms);
    let expected = PhaseReport::new(&block, position, planner.time_zone()).to_string();

    assert_eq!(cli_output, expected);
    assert!(cli_output.contains("Peaking (phase 2), week 1 of 1"));
}

#[test]
fn test_catalog_listing_consistency() {
    let env = TempDir::new().expect("Failed to create temporary directory");
    let cli_output = run_cli_command(&env, &["catalog", "--pattern", "vertical-pull"]);

    let planner = create_test_planner();
    let query = CatalogQuery {
        pattern: Some(MovementPattern::VerticalPull),
        muscle: None,
    };
    let expected = Exercises(planner.list_exercises(&query)).to_string();

    assert_eq!(cli_output, expected);
}

#[test]
fn test_load_report_consistency() {
    let env = TempDir::new().expect("Failed to create temporary directory");
    let cli_output = run_cli_command(
        &env,
        &["load", "set", "--intensity", "85", "--reps", "5", "--rpe", "9.5"],
    );

    let planner = create_test_planner();
    let set = MetabolicSet {
        intensity_pct: 85.0,
        reps: 5,
        rpe: 9.5,
    };
    let load = planner.set_load(&set).unwrap();
    let expected = LoadReport {
        load,
        zone: planner.zone(load).unwrap(),
    }
    .to_string();

    assert_eq!(cli_output, expected);
}

#[test]
fn test_skeleton_json_matches_planner() {
    let env = TempDir::new().expect("Failed to create temporary directory");
    let block_path = env.path().join("block.json");
    std::fs::write(&block_path, BLOCK_JSON).unwrap();

    let cli_output = run_cli_command(&env, &["--json", "skeleton", block_path.to_str().unwrap()]);
    let mut from_cli: Vec<serde_json::Value> = serde_json::from_str(&cli_output).unwrap();

    let planner = create_test_planner();
    let block: TrainingBlock = serde_json::from_str(BLOCK_JSON).unwrap();
    let direct = planner.generate_block_skeleton(&block).unwrap();
    let mut from_core: Vec<serde_json::Value> = direct
        .iter()
        .map(|w| serde_json::to_value(w).unwrap())
        .collect();

    // ids are random per run
    for workout in from_cli.iter_mut().chain(from_core.iter_mut()) {
        workout["id"] = serde_json::Value::Null;
    }
    assert_eq!(from_cli.len(), 3 * 4 + 3);
    assert_eq!(from_cli, from_core);
}
