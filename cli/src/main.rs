//! `worldsim`: the command-line entry point.
//!
//! A thin collaborator: arg parsing, override merging, and process exit
//! codes, with no simulation logic of its own.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use worldsim_cards::{assemble_search_space, resolve_cards_with_space};
use worldsim_harness::{validate, SolverRegistry};
use worldsim_kernel::model::World;

/// Deterministic physics-simulation kernel: run a World against its
/// resolved LawCards and emit a provenance lockfile.
#[derive(Parser)]
#[command(name = "worldsim")]
struct Cli {
    /// Path to the world document (JSON).
    world: PathBuf,

    /// Override `config.dtSeconds`.
    #[arg(long)]
    dt: Option<f64>,

    /// Override `config.steps`.
    #[arg(long)]
    steps: Option<u64>,

    /// Path to write the provenance lockfile.
    #[arg(long, default_value = "run.lock.json")]
    lock: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if std::env::var_os("RULEGRAPH_DEBUG").is_some() {
        let space = assemble_search_space();
        eprintln!("resolver search directories:");
        for dir in &space.directories {
            eprintln!("  {}", dir.display());
        }
    }

    let text = match std::fs::read_to_string(&cli.world) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error reading world file '{}': {e}", cli.world.display());
            return ExitCode::FAILURE;
        }
    };
    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error parsing world file '{}': {e}", cli.world.display());
            return ExitCode::FAILURE;
        }
    };
    let mut world = match World::from_json_value(&value) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    apply_overrides(&mut world, cli.dt, cli.steps);

    let refs: Vec<String> = world.dynamics.iter().map(|d| d.law_ref.clone()).collect();
    let cards = match resolve_cards_with_space(&refs, &assemble_search_space()) {
        Ok(cards) => cards,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let report = validate(&world, &cards);
    if !report.ok {
        for issue in &report.issues {
            println!("VALIDATION: {}: {}", issue.path, issue.message);
        }
        return ExitCode::from(2);
    }

    let registry = SolverRegistry::default();
    let result = match worldsim_harness::simulate(&mut world, &cards, &registry) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = worldsim_harness::provenance::write_lockfile(&cli.lock, result.dt_seconds, result.steps, &cards, &result.drifts) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!("Steps={} dt={} drifts={} lock={}", result.steps, result.dt_seconds, format_drifts(&result.drifts), cli.lock.display());
    ExitCode::SUCCESS
}

/// Merge `--dt`/`--steps` CLI overrides into `world.config`, creating the
/// config map if the world document omitted it.
fn apply_overrides(world: &mut World, dt: Option<f64>, steps: Option<u64>) {
    if dt.is_none() && steps.is_none() {
        return;
    }
    let config = world.config.get_or_insert_with(BTreeMap::new);
    if let Some(dt) = dt {
        config.insert("dtSeconds".to_string(), serde_json::json!(dt));
    }
    if let Some(steps) = steps {
        config.insert("steps".to_string(), serde_json::json!(steps));
    }
}

fn format_drifts(drifts: &BTreeMap<String, f64>) -> String {
    let entries: Vec<String> = drifts.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_world() -> World {
        let v = json!({
            "id": "w1",
            "version": "1.0.0",
            "type": "rg:World",
            "frames": [],
            "entities": [],
            "dynamics": [],
        });
        World::from_json_value(&v).unwrap()
    }

    #[test]
    fn apply_overrides_creates_config_when_absent() {
        let mut world = minimal_world();
        apply_overrides(&mut world, Some(120.0), Some(100));
        assert_eq!(world.dt_seconds(), 120.0);
        assert_eq!(world.steps(), 100);
    }

    #[test]
    fn apply_overrides_is_noop_when_nothing_given() {
        let mut world = minimal_world();
        apply_overrides(&mut world, None, None);
        assert!(world.config.is_none());
    }

    #[test]
    fn apply_overrides_merges_partial_override() {
        let mut world = minimal_world();
        world.config = Some(BTreeMap::from([("dtSeconds".to_string(), json!(30.0)), ("steps".to_string(), json!(5))]));
        apply_overrides(&mut world, None, Some(99));
        assert_eq!(world.dt_seconds(), 30.0, "dt untouched when only steps overridden");
        assert_eq!(world.steps(), 99);
    }
}
