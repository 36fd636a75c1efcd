use serde::{Deserialize, Serialize};

use crate::core::ContainerSize;
use crate::error::GaugeResult;

use super::{CirclePrimitive, LinePrimitive, PathPrimitive, SceneLayerKind, TextPrimitive};

/// Primitives of one paint layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: SceneLayerKind,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: SceneLayerKind) -> Self {
        Self {
            kind,
            paths: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.paths.len() + self.lines.len() + self.circles.len() + self.texts.len()
    }

    pub fn validate(&self) -> GaugeResult<()> {
        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatchMode {
    /// Every layer is replaced; sinks should drop anything not in the patch.
    Full,
    /// Only the listed layers are replaced; other layers keep their paint.
    Partial,
}

/// Paint operations produced by one update, handed to a `SceneSink`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePatch {
    pub mode: PatchMode,
    pub container: ContainerSize,
    pub layers: Vec<LayerPrimitives>,
}

impl ScenePatch {
    #[must_use]
    pub fn full(container: ContainerSize, layers: Vec<LayerPrimitives>) -> Self {
        Self {
            mode: PatchMode::Full,
            container,
            layers,
        }
    }

    #[must_use]
    pub fn partial(container: ContainerSize, layers: Vec<LayerPrimitives>) -> Self {
        Self {
            mode: PatchMode::Partial,
            container,
            layers,
        }
    }

    #[must_use]
    pub fn layer(&self, kind: SceneLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn touches(&self, kind: SceneLayerKind) -> bool {
        self.layer(kind).is_some()
    }

    pub fn validate(&self) -> GaugeResult<()> {
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}
