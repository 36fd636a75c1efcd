use crate::core::{ContainerSize, Dimensions, LayoutInput};
use crate::extensions::GaugePlugin;
use crate::interaction::InteractionState;

use super::{
    ArcSegmentation, GaugeConfig, LabelFormatters, PointerAnimations, Tick,
    ValueChangeCallback,
};

/// Lifecycle of one gauge instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EngineLifecycle {
    /// No configuration delivered yet.
    Uninitialized,
    Ready,
}

/// Internal engine state used by the public facade (`GaugeEngine`).
///
/// Derived data (dimensions, arc data, ticks) is always rebuilt whole from the
/// committed config; only painting is conditional.
pub(super) struct EngineCore {
    pub(super) lifecycle: EngineLifecycle,
    pub(super) container: ContainerSize,
    /// Last committed configuration, kept for diffing.
    pub(super) config: GaugeConfig,
    pub(super) dimensions: Dimensions,
    pub(super) segmentation: ArcSegmentation,
    pub(super) ticks: Vec<Tick>,
    pub(super) animations: PointerAnimations,
    pub(super) value_labels: Vec<String>,
    pub(super) interaction: InteractionState,
    pub(super) formatters: LabelFormatters,
    pub(super) plugins: Vec<Box<dyn GaugePlugin>>,
    pub(super) value_change_callback: Option<ValueChangeCallback>,
}

impl EngineCore {
    pub(super) fn new(container: ContainerSize) -> Self {
        let config = GaugeConfig::default();
        let dimensions = Dimensions::compute(layout_input(&config, container));
        let segmentation = ArcSegmentation::build(&config.arc, config.min_value, config.max_value);
        Self {
            lifecycle: EngineLifecycle::Uninitialized,
            container,
            config,
            dimensions,
            segmentation,
            ticks: Vec::new(),
            animations: PointerAnimations::default(),
            value_labels: Vec::new(),
            interaction: InteractionState::default(),
            formatters: LabelFormatters::default(),
            plugins: Vec::new(),
            value_change_callback: None,
        }
    }
}

pub(super) fn layout_input(config: &GaugeConfig, container: ContainerSize) -> LayoutInput {
    LayoutInput {
        container,
        gauge_type: config.gauge_type,
        angles: config.angle_override_radians(),
        margins: config.margins,
        arc_width: config.arc.width,
    }
}
