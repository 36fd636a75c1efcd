use crate::error::{GaugeError, GaugeResult};
use crate::render::SceneSink;

use super::{EngineSnapshot, GaugeEngine, InteractionSnapshot, TickSnapshot};

impl<S: SceneSink> GaugeEngine<S> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let core = &self.core;
        EngineSnapshot {
            lifecycle: core.lifecycle,
            container: core.container,
            dimensions: core.dimensions,
            arc_data: core.segmentation.data.clone(),
            ticks: core
                .ticks
                .iter()
                .map(|tick| TickSnapshot {
                    value: tick.value,
                    percentage: tick.percentage,
                    angular_offset: tick.angular_offset,
                })
                .collect(),
            pointers: core.animations.states().to_vec(),
            value_labels: core.value_labels.clone(),
            interaction: InteractionSnapshot {
                mode: core.interaction.mode(),
                tooltip_owner: core.interaction.tooltip_owner(),
            },
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> GaugeResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GaugeError::InvalidConfig(format!("failed to serialize snapshot: {e}")))
    }
}
