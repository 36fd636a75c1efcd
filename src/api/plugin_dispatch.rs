use crate::extensions::{GaugeEvent, PluginContext};
use crate::render::SceneSink;

use super::GaugeEngine;

impl<S: SceneSink> GaugeEngine<S> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let core = &self.core;
        PluginContext {
            container: core.container,
            gauge_type: core.config.gauge_type,
            value_range: (core.config.min_value, core.config.max_value),
            outer_radius: core.dimensions.outer_radius,
            pointer_count: core.animations.len(),
            primary_percentage: core
                .animations
                .get(0)
                .map_or(0.0, |state| state.current_percentage),
            animating: core.animations.any_animating(),
            interaction_mode: core.interaction.mode(),
            tooltip_owner: core.interaction.tooltip_owner(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: GaugeEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(event, context);
        }
    }
}
