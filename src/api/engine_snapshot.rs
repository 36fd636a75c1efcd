use serde::{Deserialize, Serialize};

use crate::core::{ContainerSize, Dimensions};
use crate::interaction::InteractionMode;

use super::{AnimationState, ArcDatum, EngineLifecycle};

/// Tick position as placed on the arc, without styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub value: f64,
    pub percentage: f64,
    /// Label-only rotation applied by auto-spacing, in radians.
    pub angular_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    pub mode: InteractionMode,
    pub tooltip_owner: Option<usize>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub lifecycle: EngineLifecycle,
    pub container: ContainerSize,
    pub dimensions: Dimensions,
    pub arc_data: Vec<ArcDatum>,
    pub ticks: Vec<TickSnapshot>,
    pub pointers: Vec<AnimationState>,
    pub value_labels: Vec<String>,
    pub interaction: InteractionSnapshot,
}
