use crate::activity::{Activity, Completion};
use crate::error::Result;
use crate::io::atomic_write;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Persisted shapes
// ---------------------------------------------------------------------------

// The on-disk layout mirrors the key-value blob the UI shell stores:
// { "activity": { "steps": [ { "completion": { "done", "timestamp" } } ] } }.
// Step identity is positional, not keyed by id; reconciliation below applies
// entry i to catalog step i.

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PersistedState {
    activity: PersistedActivity,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PersistedActivity {
    steps: Vec<PersistedStep>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PersistedStep {
    completion: Completion,
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Rehydrate progress from `.tutor/activity.json`. A missing, unreadable, or
/// malformed file yields fresh progress; an incomplete tutorial is an
/// expected state, never an error. A persisted list shorter than the catalog
/// leaves the tail fresh; a longer one is truncated.
pub fn load(root: &Path) -> Activity {
    let mut activity = Activity::new();
    let Ok(data) = std::fs::read_to_string(paths::state_path(root)) else {
        return activity;
    };
    let Ok(persisted) = serde_json::from_str::<PersistedState>(&data) else {
        return activity;
    };
    let total = activity.steps().len();
    for (index, step) in persisted.activity.steps.into_iter().take(total).enumerate() {
        activity.set_completion(index, step.completion);
    }
    activity
}

pub fn save(root: &Path, activity: &Activity) -> Result<()> {
    let persisted = PersistedState {
        activity: PersistedActivity {
            steps: activity
                .steps()
                .iter()
                .map(|s| PersistedStep {
                    completion: s.completion.clone(),
                })
                .collect(),
        },
    };
    let data = serde_json::to_string_pretty(&persisted)?;
    atomic_write(&paths::state_path(root), data.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
