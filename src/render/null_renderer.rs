use crate::error::GaugeResult;
use crate::render::{GaugeFrame, PatchMode, SceneLayerKind, ScenePatch, SceneSink, TooltipCommand};

/// No-op sink used by tests and headless engine usage.
///
/// It still validates every patch so tests catch invalid geometry, and it keeps
/// the merged frame plus simple counters for assertions.
#[derive(Debug, Clone)]
pub struct NullRenderer {
    pub patch_count: usize,
    pub full_patch_count: usize,
    pub last_patch_layers: Vec<SceneLayerKind>,
    pub tooltip_commands: Vec<TooltipCommand>,
    pub frame: GaugeFrame,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self {
            patch_count: 0,
            full_patch_count: 0,
            last_patch_layers: Vec::new(),
            tooltip_commands: Vec::new(),
            frame: GaugeFrame::new(Default::default()),
        }
    }
}

impl NullRenderer {
    /// Whether the most recent patch replaced `kind`.
    #[must_use]
    pub fn layer_touched_last(&self, kind: SceneLayerKind) -> bool {
        self.last_patch_layers.contains(&kind)
    }
}

impl SceneSink for NullRenderer {
    fn apply(&mut self, patch: &ScenePatch) -> GaugeResult<()> {
        patch.validate()?;
        self.patch_count += 1;
        if patch.mode == PatchMode::Full {
            self.full_patch_count += 1;
        }
        self.last_patch_layers = patch.layers.iter().map(|layer| layer.kind).collect();
        self.frame.apply(patch);
        Ok(())
    }

    fn tooltip(&mut self, command: &TooltipCommand) -> GaugeResult<()> {
        self.tooltip_commands.push(command.clone());
        Ok(())
    }
}
