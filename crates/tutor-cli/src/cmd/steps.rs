use crate::output::{print_json, print_table};
use std::path::Path;
use tutor_core::persist;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let activity = persist::load(root);
    let current = activity.current_step().map(|def| def.id);

    if json {
        #[derive(serde::Serialize)]
        struct StepRow {
            id: &'static str,
            name: &'static str,
            description: &'static str,
            done: bool,
            timestamp: Option<i64>,
            current: bool,
        }

        let rows: Vec<StepRow> = activity
            .steps()
            .iter()
            .map(|s| {
                let def = tutor_core::catalog::definition(s.id);
                StepRow {
                    id: def.id.as_str(),
                    name: def.name,
                    description: def.description,
                    done: s.completion.done,
                    timestamp: s.completion.timestamp,
                    current: current == Some(s.id),
                }
            })
            .collect();
        print_json(&rows)?;
    } else {
        let rows: Vec<Vec<String>> = activity
            .steps()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let def = tutor_core::catalog::definition(s.id);
                let marker = if s.completion.done {
                    "x"
                } else if current == Some(s.id) {
                    ">"
                } else {
                    ""
                };
                vec![
                    format!("{}", i + 1),
                    marker.to_string(),
                    def.id.as_str().to_string(),
                    def.name.to_string(),
                ]
            })
            .collect();
        print_table(&["#", "", "ID", "NAME"], rows);
        println!();
        println!("{}/{} steps complete", activity.done_count(), activity.steps().len());
    }

    Ok(())
}
