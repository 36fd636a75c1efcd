mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod tooltip;

pub use crate::core::Color;
pub use frame::GaugeFrame;
pub use layer_stack::SceneLayerKind;
pub use layered_frame::{LayerPrimitives, PatchMode, ScenePatch};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Fill, GradientStop, LinePrimitive, PathCommand, PathPrimitive, Stroke,
    TextAnchor, TextPrimitive,
};
pub use tooltip::TooltipCommand;

use crate::error::GaugeResult;

/// Contract implemented by any rendering backend.
///
/// Sinks receive deterministic, fully materialized layer patches so drawing code
/// stays isolated from gauge geometry, animation and change detection.
pub trait SceneSink {
    fn apply(&mut self, patch: &ScenePatch) -> GaugeResult<()>;

    /// Shared tooltip updates. Backends without tooltips can ignore them.
    fn tooltip(&mut self, command: &TooltipCommand) -> GaugeResult<()> {
        let _ = command;
        Ok(())
    }
}
