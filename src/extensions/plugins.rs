use serde::{Deserialize, Serialize};

use crate::core::{ContainerSize, GaugeType};
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub container: ContainerSize,
    pub gauge_type: GaugeType,
    pub value_range: (f64, f64),
    pub outer_radius: f64,
    pub pointer_count: usize,
    /// Current (possibly mid-animation) percentage of the first pointer.
    pub primary_percentage: f64,
    pub animating: bool,
    pub interaction_mode: InteractionMode,
    pub tooltip_owner: Option<usize>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GaugeEvent {
    ConfigCommitted { full_rebuild: bool },
    Resized { width: f64, height: f64 },
    AnimationStarted { pointer_index: usize },
    AnimationFinished { pointer_index: usize },
    SegmentHovered { segment_index: usize },
    SegmentLeft { segment_index: usize },
    SegmentClicked { segment_index: usize },
    DragStarted { pointer_index: usize },
    ValueDragged { pointer_index: usize, value: f64 },
    DragEnded { pointer_index: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating gauge
/// internals directly.
pub trait GaugePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GaugeEvent, context: PluginContext);
}
