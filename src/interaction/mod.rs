use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Pointer currently being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub pointer_index: usize,
    /// Last value fed back to the host.
    pub value: f64,
}

/// Owner of the single tooltip shared by all arc segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TooltipOwner {
    segment_index: Option<usize>,
}

/// Ownership change produced by a hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// Same owner (or still nobody).
    Unchanged,
    /// `previous` must be cleared before `next` claims the tooltip.
    Switched {
        previous: Option<usize>,
        next: Option<usize>,
    },
}

impl TooltipOwner {
    #[must_use]
    pub fn segment_index(self) -> Option<usize> {
        self.segment_index
    }

    /// Moves ownership to `next`.
    pub fn hover(&mut self, next: Option<usize>) -> HoverTransition {
        if self.segment_index == next {
            return HoverTransition::Unchanged;
        }
        let previous = self.segment_index.take();
        self.segment_index = next;
        HoverTransition::Switched { previous, next }
    }

    /// Clears ownership and returns the previous owner.
    pub fn clear(&mut self) -> Option<usize> {
        self.segment_index.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
    drag: Option<DragState>,
    tooltip: TooltipOwner,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            drag: None,
            tooltip: TooltipOwner::default(),
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn drag(self) -> Option<DragState> {
        self.drag
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn tooltip_owner(self) -> Option<usize> {
        self.tooltip.segment_index()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn hover_segment(&mut self, segment_index: Option<usize>) -> HoverTransition {
        self.tooltip.hover(segment_index)
    }

    pub fn on_pointer_leave(&mut self) -> Option<usize> {
        self.tooltip.clear()
    }

    pub fn on_drag_start(&mut self, pointer_index: usize, value: f64) {
        self.mode = InteractionMode::Dragging;
        self.drag = Some(DragState {
            pointer_index,
            value,
        });
    }

    pub fn on_drag_move(&mut self, value: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.value = value;
        }
    }

    pub fn on_drag_end(&mut self) -> Option<DragState> {
        self.mode = InteractionMode::Idle;
        self.drag.take()
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverTransition, InteractionMode, InteractionState};

    #[test]
    fn tooltip_switch_reports_previous_owner() {
        let mut state = InteractionState::default();
        assert_eq!(
            state.hover_segment(Some(1)),
            HoverTransition::Switched {
                previous: None,
                next: Some(1)
            }
        );
        assert_eq!(state.hover_segment(Some(1)), HoverTransition::Unchanged);
        assert_eq!(
            state.hover_segment(Some(2)),
            HoverTransition::Switched {
                previous: Some(1),
                next: Some(2)
            }
        );
        assert_eq!(state.on_pointer_leave(), Some(2));
        assert_eq!(state.tooltip_owner(), None);
    }

    #[test]
    fn drag_lifecycle() {
        let mut state = InteractionState::default();
        state.on_drag_start(1, 40.0);
        state.on_drag_move(55.0);
        assert_eq!(state.mode(), InteractionMode::Dragging);
        let drag = state.on_drag_end().expect("drag state");
        assert_eq!(drag.pointer_index, 1);
        assert_eq!(drag.value, 55.0);
        assert_eq!(state.mode(), InteractionMode::Idle);
    }
}
