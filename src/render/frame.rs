use serde::{Deserialize, Serialize};

use crate::core::ContainerSize;

use super::{LayerPrimitives, PatchMode, SceneLayerKind, ScenePatch};

/// Backend-agnostic scene for the whole gauge, in canonical layer order.
///
/// Retained-mode sinks such as `NullRenderer` fold every patch into one of
/// these, layer by layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeFrame {
    pub container: ContainerSize,
    pub layers: Vec<LayerPrimitives>,
}

impl GaugeFrame {
    #[must_use]
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container,
            layers: SceneLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: SceneLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Applies a patch: full patches reset every layer first.
    pub fn apply(&mut self, patch: &ScenePatch) {
        if patch.mode == PatchMode::Full {
            *self = Self::new(patch.container);
        }
        self.container = patch.container;
        for incoming in &patch.layers {
            if let Some(layer) = self.layers.iter_mut().find(|l| l.kind == incoming.kind) {
                *layer = incoming.clone();
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
