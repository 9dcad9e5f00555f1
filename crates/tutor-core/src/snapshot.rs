use crate::action::ActionList;
use crate::error::Result;
use crate::pose::ArmPose;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One coherent view of application state at an evaluation instant.
/// `arm_pose` is `None` until the first telemetry arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub arm_pose: Option<ArmPose>,
    pub action_list: ActionList,
}

impl Snapshot {
    /// Decode a snapshot and check the action-list reference invariant, so
    /// predicates downstream can index the store without guards.
    pub fn from_json(data: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(data)?;
        snapshot.action_list.validate()?;
        Ok(snapshot)
    }
}
