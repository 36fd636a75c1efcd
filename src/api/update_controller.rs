use tracing::{debug, warn};

use crate::core::{ContainerSize, Dimensions, GaugeType, TweenTiming, ValueScale};
use crate::error::GaugeResult;
use crate::extensions::GaugeEvent;
use crate::render::{LayerPrimitives, ScenePatch, SceneSink, TooltipCommand};

use super::arc_scene_builder::build_arc_layer;
use super::change_detection::{ChangeFlags, ChangeTopic, detect_changes};
use super::engine_core::{EngineLifecycle, layout_input};
use super::pointer_scene_builder::build_pointer_layer;
use super::tick_placement::{apply_auto_spacing, build_tick_layer, collect_ticks};
use super::validation::sanitize_config;
use super::value_label_builder::{ValueLabelInput, build_value_label_layer};
use super::{ArcSegmentation, GaugeConfig, GaugeEngine, LabelFormatters};

impl<S: SceneSink> GaugeEngine<S> {
    /// Delivers a whole configuration and repaints what changed.
    ///
    /// The first delivery moves the engine to `Ready` and animates pointers
    /// from the start of the range. Later deliveries are diffed against the
    /// previous config; unchanged sub-objects are neither rebuilt nor repainted,
    /// and running pointer animations are only replaced when their target moves.
    pub fn set_config(&mut self, config: GaugeConfig) -> GaugeResult<ChangeFlags> {
        self.commit_config(config, None)
    }

    /// Changes the single-pointer value, or the first pointer in multi-pointer mode.
    pub fn set_value(&mut self, value: f64) -> GaugeResult<ChangeFlags> {
        self.set_pointer_value(0, value)
    }

    /// Changes the value of pointer `index`. Out-of-range indices are ignored.
    pub fn set_pointer_value(&mut self, index: usize, value: f64) -> GaugeResult<ChangeFlags> {
        match self.config_with_pointer_value(index, value) {
            Some(config) => self.commit_config(config, None),
            None => Ok(ChangeFlags::none()),
        }
    }

    /// Applies a new container size.
    ///
    /// A resize preempts running animations: every pointer jumps to its target
    /// at the new dimensions and no frame of the interrupted tween is applied.
    pub fn resize(&mut self, container: ContainerSize) -> GaugeResult<()> {
        let container = container.sanitized();
        if container == self.core.container {
            return Ok(());
        }
        self.core.container = container;
        if self.core.lifecycle == EngineLifecycle::Uninitialized {
            self.core.dimensions =
                Dimensions::compute(layout_input(&self.core.config, container));
            return Ok(());
        }

        for state in self.core.animations.iter_mut() {
            let target = state.target_percentage;
            state.jump_to(target);
        }
        self.rebuild_geometry();
        debug!(
            width = container.width,
            height = container.height,
            outer_radius = self.core.dimensions.outer_radius,
            "gauge resized"
        );
        self.paint(ChangeFlags::all())?;
        self.emit_plugin_event(GaugeEvent::Resized {
            width: container.width,
            height: container.height,
        });
        Ok(())
    }

    /// Installs custom label formatters and repaints ticks and value label.
    pub fn set_formatters(&mut self, formatters: LabelFormatters) -> GaugeResult<()> {
        self.core.formatters = formatters;
        if self.core.lifecycle == EngineLifecycle::Uninitialized {
            return Ok(());
        }
        let layers = vec![self.tick_layer(), self.value_label_layer()];
        self.apply_patch(ScenePatch::partial(self.core.container, layers))
    }

    pub(super) fn config_with_pointer_value(&self, index: usize, value: f64) -> Option<GaugeConfig> {
        let mut config = self.core.config.clone();
        if config.is_multi_pointer() {
            config.pointers.get_mut(index)?.value = value;
        } else if index == 0 {
            config.value = value;
        } else {
            return None;
        }
        Some(config)
    }

    /// Commits `config`; `timing_override` replaces every pointer's timing.
    pub(super) fn commit_config(
        &mut self,
        config: GaugeConfig,
        timing_override: Option<TweenTiming>,
    ) -> GaugeResult<ChangeFlags> {
        let config = sanitize_config(config);
        let first_render = self.core.lifecycle == EngineLifecycle::Uninitialized;
        let previous = (!first_render).then_some(&self.core.config);
        let flags = detect_changes(previous, &config);
        self.core.config = config;
        if flags.is_none() {
            debug!("config unchanged, nothing to repaint");
            return Ok(flags);
        }
        self.core.lifecycle = EngineLifecycle::Ready;

        if flags.is_full_rebuild() {
            self.rebuild_geometry();
        } else if flags.contains(ChangeTopic::Arc) {
            self.rebuild_arc();
        }
        let started = if flags.is_full_rebuild() || flags.contains(ChangeTopic::Pointer) {
            self.retarget_pointers(first_render, timing_override)
        } else {
            Vec::new()
        };
        debug!(
            full_rebuild = flags.is_full_rebuild(),
            arc = flags.contains(ChangeTopic::Arc),
            pointer = flags.contains(ChangeTopic::Pointer),
            value_label = flags.contains(ChangeTopic::ValueLabel),
            "config committed"
        );

        self.paint(flags)?;
        self.emit_plugin_event(GaugeEvent::ConfigCommitted {
            full_rebuild: flags.is_full_rebuild(),
        });
        for pointer_index in started {
            self.emit_plugin_event(GaugeEvent::AnimationStarted { pointer_index });
        }
        Ok(flags)
    }

    fn rebuild_geometry(&mut self) {
        self.core.dimensions =
            Dimensions::compute(layout_input(&self.core.config, self.core.container));
        self.rebuild_arc();
    }

    fn rebuild_arc(&mut self) {
        let owner = self.core.interaction.tooltip_owner();
        let shown_tooltip = owner.and_then(|index| self.segment_tooltip(index));
        let config = &self.core.config;
        self.core.segmentation =
            ArcSegmentation::build(&config.arc, config.min_value, config.max_value);
        let tick_labels = &config.labels.tick_labels;
        let mut ticks = collect_ticks(
            tick_labels,
            &self.core.segmentation,
            config.min_value,
            config.max_value,
        );
        if tick_labels.auto_space_tick_labels {
            apply_auto_spacing(
                &mut ticks,
                config.min_value,
                config.max_value,
                self.core.dimensions.angle_span(),
            );
        }
        self.core.ticks = ticks;

        // The owner must go when its segment vanished or its text changed.
        let stale = owner.is_some_and(|index| {
            index >= self.core.segmentation.data.len()
                || self.segment_tooltip(index) != shown_tooltip
        });
        if stale {
            if let Some(segment_index) = self.core.interaction.on_pointer_leave() {
                if let Err(err) = self.sink.tooltip(&TooltipCommand::Hide { segment_index }) {
                    warn!(error = %err, segment_index, "failed to hide stale tooltip");
                }
            }
        }
    }

    fn segment_tooltip(&self, segment_index: usize) -> Option<String> {
        self.core
            .segmentation
            .data
            .get(segment_index)
            .and_then(|datum| datum.tooltip.clone())
    }

    /// Points every pointer state at its configured value and returns the
    /// indices whose animation started.
    fn retarget_pointers(
        &mut self,
        first_render: bool,
        timing_override: Option<TweenTiming>,
    ) -> Vec<usize> {
        let config = &self.core.config;
        let scale = ValueScale::new(config.min_value, config.max_value, 0.0, 1.0);
        let values = config.pointer_values();
        let pointers = config.resolved_pointers();
        let known = if first_render {
            0
        } else {
            self.core.animations.len()
        };
        self.core.animations.resize(values.len());
        if self
            .core
            .interaction
            .drag()
            .is_some_and(|drag| drag.pointer_index >= values.len())
        {
            self.core.interaction.on_drag_end();
        }

        let mut started = Vec::new();
        for (index, (value, pointer)) in values.into_iter().zip(&pointers).enumerate() {
            let Some(state) = self.core.animations.get_mut(index) else {
                continue;
            };
            let target = scale.value_to_percentage(value);
            if index < known && target == state.target_percentage {
                continue;
            }
            let timing = timing_override.unwrap_or_else(|| pointer.timing());
            state.start_transition(target, timing);
            if state.is_animating() {
                started.push(index);
            }
        }
        started
    }

    /// Paints the layers implied by `flags`.
    fn paint(&mut self, flags: ChangeFlags) -> GaugeResult<()> {
        if flags.is_full_rebuild() {
            let layers = vec![
                self.arc_layer(),
                self.tick_layer(),
                self.pointer_layer(),
                self.value_label_layer(),
            ];
            return self.apply_patch(ScenePatch::full(self.core.container, layers));
        }

        let arc_changed = flags.contains(ChangeTopic::Arc);
        let mut layers = Vec::with_capacity(4);
        if arc_changed {
            layers.push(self.arc_layer());
            layers.push(self.tick_layer());
        }
        if flags.contains(ChangeTopic::Pointer)
            || (arc_changed && self.core.dimensions.gauge_type == GaugeType::Grafana)
        {
            layers.push(self.pointer_layer());
        }
        if flags.contains(ChangeTopic::ValueLabel)
            || (arc_changed && self.core.config.labels.value_label.match_color_with_arc)
        {
            layers.push(self.value_label_layer());
        }
        if layers.is_empty() {
            return Ok(());
        }
        self.apply_patch(ScenePatch::partial(self.core.container, layers))
    }

    pub(super) fn apply_patch(&mut self, patch: ScenePatch) -> GaugeResult<()> {
        self.sink.apply(&patch)?;
        self.emit_plugin_event(GaugeEvent::Rendered);
        Ok(())
    }

    fn arc_layer(&self) -> LayerPrimitives {
        build_arc_layer(
            &self.core.dimensions,
            &self.core.segmentation,
            &self.core.config.arc,
        )
    }

    fn tick_layer(&self) -> LayerPrimitives {
        build_tick_layer(
            &self.core.dimensions,
            &self.core.ticks,
            &self.core.config.labels.tick_labels,
            &self.core.formatters,
        )
    }

    pub(super) fn pointer_layer(&self) -> LayerPrimitives {
        build_pointer_layer(
            &self.core.dimensions,
            &self.core.config,
            &self.core.segmentation,
            &self.core.animations.current_percentages(),
        )
    }

    fn value_label_layer(&mut self) -> LayerPrimitives {
        let layer = build_value_label_layer(ValueLabelInput {
            dimensions: &self.core.dimensions,
            config: &self.core.config,
            segmentation: &self.core.segmentation,
            formatters: &self.core.formatters,
        });
        self.core.value_labels = layer.texts.iter().map(|text| text.text.clone()).collect();
        layer
    }
}
