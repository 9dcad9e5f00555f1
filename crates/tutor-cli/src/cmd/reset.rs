use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use tutor_core::persist;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut activity = persist::load(root);
    activity.reset_all();
    persist::save(root, &activity).context("failed to save progress")?;

    if json {
        print_json(&serde_json::json!({
            "reset": true,
            "total": activity.steps().len(),
        }))?;
    } else {
        println!("Progress cleared.");
    }
    Ok(())
}
