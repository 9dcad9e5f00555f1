use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use tutor_core::snapshot::Snapshot;
use tutor_core::{catalog, persist};

pub fn run(root: &Path, snapshot_path: &Path, json: bool) -> anyhow::Result<()> {
    let mut activity = persist::load(root);

    let data = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("failed to read snapshot '{}'", snapshot_path.display()))?;
    let snapshot = Snapshot::from_json(&data)
        .with_context(|| format!("invalid snapshot '{}'", snapshot_path.display()))?;

    let completed = activity.advance(&snapshot);
    if !completed.is_empty() {
        persist::save(root, &activity).context("failed to save progress")?;
        tracing::debug!(newly_completed = completed.len(), "progress saved");
    }

    if json {
        #[derive(serde::Serialize)]
        struct CheckResult {
            completed: Vec<&'static str>,
            current: Option<&'static str>,
            done: usize,
            total: usize,
        }
        print_json(&CheckResult {
            completed: completed.iter().map(|id| id.as_str()).collect(),
            current: activity.current_step().map(|def| def.id.as_str()),
            done: activity.done_count(),
            total: activity.steps().len(),
        })?;
        return Ok(());
    }

    if completed.is_empty() {
        println!("No steps completed.");
    } else {
        for id in &completed {
            println!("Completed: {}", catalog::definition(*id).name);
        }
    }
    match activity.current_step() {
        Some(def) => println!("Next: {}", def.name),
        None => println!("All steps complete."),
    }

    Ok(())
}
