use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ArmPose
// ---------------------------------------------------------------------------

/// Observed arm telemetry. Angle units must match the go-to-position
/// tolerance basis (the shipped controller reports degrees).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmPose {
    pub is_homed: bool,
    pub current_angles: Vec<f64>,
    pub tool_value: Vec<f64>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}
