use crate::core::{ContainerSize, Dimensions};
use crate::interaction::InteractionMode;
use crate::render::SceneSink;

use super::{
    ArcSegmentation, GaugeConfig, PointerAnimations, Tick,
    engine_core::{EngineCore, EngineLifecycle},
};

/// Callback receiving `(pointer_index, value)` whenever a drag changes a value.
pub type ValueChangeCallback = Box<dyn FnMut(usize, f64)>;

/// Main orchestration facade consumed by host applications.
///
/// `GaugeEngine` owns the committed configuration, derived geometry, pointer
/// animation state and interaction state, and pushes layer patches into the
/// injected scene sink.
pub struct GaugeEngine<S: SceneSink> {
    pub(super) sink: S,
    pub(super) core: EngineCore,
}

impl<S: SceneSink> GaugeEngine<S> {
    /// Creates an engine for a container of the given size.
    ///
    /// Nothing is painted until the first `set_config`.
    #[must_use]
    pub fn new(sink: S, container: ContainerSize) -> Self {
        Self {
            sink,
            core: EngineCore::new(container.sanitized()),
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> EngineLifecycle {
        self.core.lifecycle
    }

    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        &self.core.config
    }

    #[must_use]
    pub fn container(&self) -> ContainerSize {
        self.core.container
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.core.dimensions
    }

    #[must_use]
    pub fn segmentation(&self) -> &ArcSegmentation {
        &self.core.segmentation
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.core.ticks
    }

    #[must_use]
    pub fn animations(&self) -> &PointerAnimations {
        &self.core.animations
    }

    /// Texts of the value label as last painted.
    #[must_use]
    pub fn value_labels(&self) -> &[String] {
        &self.core.value_labels
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.interaction.mode()
    }

    /// Segment currently owning the shared tooltip.
    #[must_use]
    pub fn tooltip_owner(&self) -> Option<usize> {
        self.core.interaction.tooltip_owner()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Registers the drag value-change callback, replacing any previous one.
    pub fn set_value_change_callback(&mut self, callback: impl FnMut(usize, f64) + 'static) {
        self.core.value_change_callback = Some(Box::new(callback));
    }
}
