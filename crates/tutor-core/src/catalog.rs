use crate::predicate::PredicateKey;
use crate::snapshot::Snapshot;
use crate::types::StepId;
use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// StepDefinition
// ---------------------------------------------------------------------------

/// Immutable catalog entry binding a step to its display text and the
/// predicate that detects completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDefinition {
    pub id: StepId,
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: PredicateKey,
}

impl StepDefinition {
    pub fn evaluate_at(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> bool {
        self.predicate.evaluate(snapshot, now)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed tutorial sequence. Order matters: it defines which step is
/// "current". `CATALOG[id.index()]` is the entry for `id`.
pub fn catalog() -> &'static [StepDefinition] {
    &CATALOG
}

pub fn definition(id: StepId) -> &'static StepDefinition {
    &CATALOG[id.index()]
}

static CATALOG: [StepDefinition; 20] = [
    StepDefinition {
        id: StepId::HomeArm,
        name: "Home the arm",
        description: "Press the Home Arm button",
        predicate: PredicateKey::ArmHomed,
    },
    StepDefinition {
        id: StepId::MoveJoint3,
        name: "Move Joint 3",
        description: "Go to the control panel and move joint 3",
        predicate: PredicateKey::JointMoved { joint: 2 },
    },
    StepDefinition {
        id: StepId::AddMoveToActionList,
        name: "Add Move to action list",
        description: "Press or drag the green Move button in the toolbar",
        predicate: PredicateKey::FirstActionIsMove,
    },
    StepDefinition {
        id: StepId::MoveJoint1,
        name: "Move Joint 1",
        description: "Go to the control panel and move joint 1",
        predicate: PredicateKey::JointMoved { joint: 0 },
    },
    StepDefinition {
        id: StepId::AddMoveToActionList2,
        name: "Add another Move to the action list",
        description: "Press or drag the green Move button in the toolbar",
        predicate: PredicateKey::MoveCount { at_least: 2 },
    },
    StepDefinition {
        id: StepId::RunActionList,
        name: "Run the action list",
        description: "Press the Play button",
        predicate: PredicateKey::RanRecently,
    },
    StepDefinition {
        id: StepId::AddSleepToActionList,
        name: "Add Sleep to the action list",
        description: "Press or drag the blue Sleep button in the toolbar",
        predicate: PredicateKey::SleepPresent,
    },
    StepDefinition {
        id: StepId::SetSleepDurationTo1,
        name: "Set the sleep duration to 1",
        description: "Set the duration of the sleep action to 1 second",
        predicate: PredicateKey::SleepDurationIs { seconds: 1.0 },
    },
    StepDefinition {
        id: StepId::RunActionList2,
        name: "Run the action list again",
        description: "Press the Play button",
        predicate: PredicateKey::RanRecently,
    },
    StepDefinition {
        id: StepId::MoveToolInControlPanel,
        name: "Move the tool in the control panel",
        description: "Move the tool using the control panel",
        predicate: PredicateKey::ToolMoved,
    },
    StepDefinition {
        id: StepId::AddToolMoveToActionList,
        name: "Add Tool Move to the action list",
        description: "Press or drag the orange Tool button in the toolbar",
        predicate: PredicateKey::ToolMovePresent,
    },
    StepDefinition {
        id: StepId::RunActionList3,
        name: "Run the action list again",
        description: "Press the Play button",
        predicate: PredicateKey::RanRecently,
    },
    StepDefinition {
        id: StepId::GoToPosition,
        name: "Go to position",
        description: "Move to x: 370, y: 100, z: 100, roll: 0, pitch: 60, yaw: 15 using the axis controls",
        predicate: PredicateKey::AtPosition,
    },
    StepDefinition {
        id: StepId::AddMoveToActionList3,
        name: "Add another Move to the action list",
        description: "Press or drag the green Move button in the toolbar",
        predicate: PredicateKey::MoveCount { at_least: 3 },
    },
    StepDefinition {
        id: StepId::RunActionList4,
        name: "Run the action list",
        description: "Run the action list again",
        predicate: PredicateKey::RanRecently,
    },
    StepDefinition {
        id: StepId::AddActionSetToActionList,
        name: "Add an Action Set to the action list",
        description: "Add an action set to the action list",
        predicate: PredicateKey::ActionSetPresent,
    },
    StepDefinition {
        id: StepId::MoveAllToActionSet,
        name: "Move everything into the action set",
        description: "Move all actions into the action set (drag them!)",
        predicate: PredicateKey::FirstIsSetWith { min_children: 3 },
    },
    StepDefinition {
        id: StepId::RunActionList5,
        name: "Run the action list",
        description: "Run the action list again",
        predicate: PredicateKey::RanRecently,
    },
    StepDefinition {
        id: StepId::RenameActionSet,
        name: "Rename the action set",
        description: "Give the action set a name",
        predicate: PredicateKey::FirstSetNamed,
    },
    StepDefinition {
        id: StepId::DuplicateActionSet,
        name: "Duplicate the action set",
        description: "Create a duplicate of the action set",
        predicate: PredicateKey::ActionSetCount { at_least: 2 },
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_aligns_with_step_ids() {
        assert_eq!(catalog().len(), StepId::all().len());
        for (entry, id) in catalog().iter().zip(StepId::all()) {
            assert_eq!(entry.id, *id);
            assert_eq!(definition(*id).id, *id);
        }
    }

    #[test]
    fn run_steps_share_the_freshness_predicate() {
        for id in [
            StepId::RunActionList,
            StepId::RunActionList2,
            StepId::RunActionList3,
            StepId::RunActionList4,
            StepId::RunActionList5,
        ] {
            assert_eq!(definition(id).predicate, PredicateKey::RanRecently);
        }
    }

    #[test]
    fn every_entry_has_display_text() {
        for entry in catalog() {
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}
