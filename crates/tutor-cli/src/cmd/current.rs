use crate::output::print_json;
use std::path::Path;
use tutor_core::persist;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let activity = persist::load(root);
    let done = activity.done_count();
    let total = activity.steps().len();

    match activity.current_step() {
        Some(def) => {
            if json {
                #[derive(serde::Serialize)]
                struct Current {
                    id: &'static str,
                    name: &'static str,
                    description: &'static str,
                    done: usize,
                    total: usize,
                }
                print_json(&Current {
                    id: def.id.as_str(),
                    name: def.name,
                    description: def.description,
                    done,
                    total,
                })?;
            } else {
                println!("Step {} of {}: {}", done + 1, total, def.name);
                println!("  {}", def.description);
            }
        }
        None => {
            if json {
                print_json(&serde_json::json!({ "done": done, "total": total }))?;
            } else {
                println!("All {total} steps complete.");
            }
        }
    }

    Ok(())
}
