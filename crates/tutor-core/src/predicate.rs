use crate::action::ActionKind;
use crate::pose::ArmPose;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// A recorded run only satisfies a "run the action list" step for this long.
/// The run timestamp persists indefinitely, so without a window any past run
/// would satisfy every later "run it again" step.
pub const RUN_FRESHNESS_MS: i64 = 10_000;

pub const POSITION_TOLERANCE: f64 = 5.0;

/// Target for the go-to-position step, same units as the pose.
pub const POSITION_TARGET: PoseTarget = PoseTarget {
    x: 370.0,
    y: 100.0,
    z: 100.0,
    roll: 0.0,
    pitch: 60.0,
    yaw: 15.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTarget {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

// ---------------------------------------------------------------------------
// PredicateKey
// ---------------------------------------------------------------------------

/// The statically registered predicate table. Each key is a pure, total
/// function over a snapshot: anything the snapshot is missing reads as
/// "not yet complete", never as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum PredicateKey {
    ArmHomed,
    JointMoved { joint: usize },
    /// Only the first top-level action is inspected; a Move further down the
    /// list does not count. See DESIGN.md.
    FirstActionIsMove,
    MoveCount { at_least: usize },
    RanRecently,
    SleepPresent,
    SleepDurationIs { seconds: f64 },
    ToolMoved,
    ToolMovePresent,
    AtPosition,
    ActionSetPresent,
    FirstIsSetWith { min_children: usize },
    FirstSetNamed,
    ActionSetCount { at_least: usize },
}

impl PredicateKey {
    pub fn evaluate(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> bool {
        let pose = snapshot.arm_pose.as_ref();
        let list = &snapshot.action_list;

        match *self {
            PredicateKey::ArmHomed => pose.is_some_and(|p| p.is_homed),

            PredicateKey::JointMoved { joint } => pose
                .and_then(|p| p.current_angles.get(joint))
                .is_some_and(|angle| *angle != 0.0),

            PredicateKey::FirstActionIsMove => {
                list.first().is_some_and(|action| action.kind.is_move())
            }

            PredicateKey::MoveCount { at_least } => list.count(|a| a.kind.is_move()) >= at_least,

            PredicateKey::RanRecently => match list.first().and_then(|a| a.last_run) {
                Some(last_run) => now.timestamp_millis() - last_run <= RUN_FRESHNESS_MS,
                None => false,
            },

            PredicateKey::SleepPresent => list.count(|a| a.kind.is_sleep()) >= 1,

            PredicateKey::SleepDurationIs { seconds } => list
                .ordered()
                .any(|a| matches!(a.kind, ActionKind::Sleep { duration } if duration == seconds)),

            PredicateKey::ToolMoved => pose
                .and_then(|p| p.tool_value.first())
                .is_some_and(|v| *v != 0.0),

            PredicateKey::ToolMovePresent => list.count(|a| a.kind.is_tool_move()) >= 1,

            PredicateKey::AtPosition => {
                pose.is_some_and(|p| within_tolerance(p, &POSITION_TARGET, POSITION_TOLERANCE))
            }

            PredicateKey::ActionSetPresent => list.count(|a| a.kind.is_action_set()) >= 1,

            PredicateKey::FirstIsSetWith { min_children } => match list.first() {
                Some(action) => match &action.kind {
                    ActionKind::ActionSet { children, .. } => children.len() >= min_children,
                    _ => false,
                },
                None => false,
            },

            PredicateKey::FirstSetNamed => match list.first() {
                Some(action) => match &action.kind {
                    ActionKind::ActionSet { name: Some(name), .. } => !name.is_empty(),
                    _ => false,
                },
                None => false,
            },

            PredicateKey::ActionSetCount { at_least } => {
                list.count(|a| a.kind.is_action_set()) >= at_least
            }
        }
    }
}

fn within_tolerance(pose: &ArmPose, target: &PoseTarget, tolerance: f64) -> bool {
    let deltas = [
        pose.x - target.x,
        pose.y - target.y,
        pose.z - target.z,
        pose.roll - target.roll,
        pose.pitch - target.pitch,
        pose.yaw - target.yaw,
    ];
    deltas.iter().all(|d| d.abs() <= tolerance)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
