use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StepId
// ---------------------------------------------------------------------------

/// The twenty tutorial steps, in catalog order. The discriminant doubles as
/// the step's position in the catalog and the progress list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    HomeArm,
    MoveJoint3,
    AddMoveToActionList,
    MoveJoint1,
    AddMoveToActionList2,
    RunActionList,
    AddSleepToActionList,
    SetSleepDurationTo1,
    RunActionList2,
    MoveToolInControlPanel,
    AddToolMoveToActionList,
    RunActionList3,
    GoToPosition,
    AddMoveToActionList3,
    RunActionList4,
    AddActionSetToActionList,
    MoveAllToActionSet,
    RunActionList5,
    RenameActionSet,
    DuplicateActionSet,
}

impl StepId {
    pub fn all() -> &'static [StepId] {
        &[
            StepId::HomeArm,
            StepId::MoveJoint3,
            StepId::AddMoveToActionList,
            StepId::MoveJoint1,
            StepId::AddMoveToActionList2,
            StepId::RunActionList,
            StepId::AddSleepToActionList,
            StepId::SetSleepDurationTo1,
            StepId::RunActionList2,
            StepId::MoveToolInControlPanel,
            StepId::AddToolMoveToActionList,
            StepId::RunActionList3,
            StepId::GoToPosition,
            StepId::AddMoveToActionList3,
            StepId::RunActionList4,
            StepId::AddActionSetToActionList,
            StepId::MoveAllToActionSet,
            StepId::RunActionList5,
            StepId::RenameActionSet,
            StepId::DuplicateActionSet,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::HomeArm => "home_arm",
            StepId::MoveJoint3 => "move_joint_3",
            StepId::AddMoveToActionList => "add_move_to_action_list",
            StepId::MoveJoint1 => "move_joint_1",
            StepId::AddMoveToActionList2 => "add_move_to_action_list_2",
            StepId::RunActionList => "run_action_list",
            StepId::AddSleepToActionList => "add_sleep_to_action_list",
            StepId::SetSleepDurationTo1 => "set_sleep_duration_to_1",
            StepId::RunActionList2 => "run_action_list_2",
            StepId::MoveToolInControlPanel => "move_tool_in_control_panel",
            StepId::AddToolMoveToActionList => "add_tool_move_to_action_list",
            StepId::RunActionList3 => "run_action_list_3",
            StepId::GoToPosition => "go_to_position",
            StepId::AddMoveToActionList3 => "add_move_to_action_list_3",
            StepId::RunActionList4 => "run_action_list_4",
            StepId::AddActionSetToActionList => "add_action_set_to_action_list",
            StepId::MoveAllToActionSet => "move_all_to_action_set",
            StepId::RunActionList5 => "run_action_list_5",
            StepId::RenameActionSet => "rename_action_set",
            StepId::DuplicateActionSet => "duplicate_action_set",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepId {
    type Err = crate::error::TutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::all()
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::TutorError::InvalidStep(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn all_has_twenty_steps() {
        assert_eq!(StepId::all().len(), 20);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, id) in StepId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn step_id_roundtrip() {
        for id in StepId::all() {
            let parsed = StepId::from_str(id.as_str()).unwrap();
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn unknown_step_rejected() {
        assert!(StepId::from_str("bogus_step").is_err());
    }

    #[test]
    fn catalog_ordering() {
        assert!(StepId::HomeArm < StepId::MoveJoint3);
        assert!(StepId::RenameActionSet < StepId::DuplicateActionSet);
    }
}
