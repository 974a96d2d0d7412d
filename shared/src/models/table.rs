//! Table Model

use serde::{Deserialize, Serialize};

/// Table entity (桌台：房间画布上的一个可拖拽桌位)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Natural key, unique within its room
    pub name: String,
    /// Icon asset reference (opaque to the server)
    pub src: String,
    /// Canvas coordinates
    pub x: f64,
    pub y: f64,
    /// Capacity bounds, min <= max (enforced by the API layer, not here)
    pub min: i32,
    pub max: i32,
    #[serde(default)]
    pub online: bool,
    /// Rotation in degrees, normalized to [0, 360) on submission
    #[serde(default)]
    pub rotation: i32,
}
