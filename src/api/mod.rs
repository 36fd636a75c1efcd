//! Public gauge API: configuration types, derived geometry builders and the
//! `GaugeEngine` facade that ties them to a scene sink.

mod arc_config;
mod arc_scene_builder;
mod arc_segmentation;
mod change_detection;
mod engine;
mod engine_core;
mod engine_snapshot;
mod frame_controller;
mod gauge_config;
mod interaction_controller;
mod json_contract;
mod label_config;
mod label_format;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_animation;
mod pointer_config;
mod pointer_scene_builder;
mod snapshot_controller;
mod tick_placement;
mod update_controller;
mod validation;
mod value_label_builder;

pub use arc_config::{
    ArcConfig, DEFAULT_EMPTY_COLOR, DEFAULT_SEGMENT_PALETTE, SubArcConfig, TooltipConfig,
};
pub use arc_scene_builder::{
    Ring, annular_sector, build_arc_layer, build_progress_paths, progress_ring, segment_ring,
};
pub use arc_segmentation::{ArcDatum, ArcSegmentation, build_arc_data};
pub use change_detection::{ChangeFlags, ChangeTopic, detect_changes};
pub use engine::{GaugeEngine, ValueChangeCallback};
pub use engine_core::EngineLifecycle;
pub use engine_snapshot::{EngineSnapshot, InteractionSnapshot, TickSnapshot};
pub use gauge_config::{GaugeConfig, InteractionConfig};
pub use json_contract::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1, GAUGE_CONFIG_JSON_SCHEMA_V1,
    GaugeConfigJsonContractV1,
};
pub use label_config::{
    LabelsConfig, MultiPointerLabelMode, TickConfig, TickLabelsConfig, TickLineConfig,
    TickLineStyle, TickPlacement, TickValueConfig, TickValueStyle, ValueLabelConfig,
};
pub use label_format::{LabelFormatters, ValueFormatter, format_decimal};
pub use pointer_animation::{AnimationState, FRAME_SKIP_EPSILON, FrameStep, PointerAnimations};
pub use pointer_config::{DEFAULT_POINTER_COLOR, PointerConfig, PointerEntry};
pub use pointer_scene_builder::build_pointer_layer;
pub use tick_placement::{
    AUTO_SPACE_THRESHOLD_RATIO, Tick, apply_auto_spacing, build_tick_layer, collect_ticks,
    text_anchor,
};
pub use validation::sanitize_config;
pub use value_label_builder::{
    ValueLabelInput, build_value_label_layer, estimate_text_width, fit_font_size,
    stacked_font_multiplier,
};
