use tracing::trace;

use crate::error::GaugeResult;
use crate::extensions::GaugeEvent;
use crate::render::{ScenePatch, SceneSink};

use super::GaugeEngine;
use super::pointer_animation::FrameStep;

impl<S: SceneSink> GaugeEngine<S> {
    /// Advances every running pointer animation to `now_ms`.
    ///
    /// Repaints the pointer layer only when at least one pointer moved by more
    /// than the skip epsilon or reached its target. Returns whether a patch was
    /// emitted.
    pub fn advance_frame(&mut self, now_ms: f64) -> GaugeResult<bool> {
        if !self.core.animations.any_animating() {
            return Ok(false);
        }

        let mut painted = false;
        let mut finished = Vec::new();
        for (index, state) in self.core.animations.iter_mut().enumerate() {
            match state.step(now_ms) {
                FrameStep::Finished(_) => {
                    painted = true;
                    finished.push(index);
                }
                FrameStep::Painted(_) => painted = true,
                FrameStep::Idle | FrameStep::Skipped => {}
            }
        }
        trace!(now_ms, painted, finished = finished.len(), "animation frame");

        if painted {
            let layer = self.pointer_layer();
            self.apply_patch(ScenePatch::partial(self.core.container, vec![layer]))?;
        }
        for pointer_index in finished {
            self.emit_plugin_event(GaugeEvent::AnimationFinished { pointer_index });
        }
        Ok(painted)
    }

    /// Whether the host should keep requesting frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.animations.any_animating()
    }
}
