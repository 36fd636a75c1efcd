use tracing::debug;

use crate::core::value_scale::wrap_pi;
use crate::core::{Point, TweenTiming, ValueScale, point_to_angle};
use crate::error::GaugeResult;
use crate::extensions::GaugeEvent;
use crate::interaction::HoverTransition;
use crate::render::{SceneSink, TooltipCommand};

use super::GaugeEngine;
use super::arc_scene_builder::segment_ring;
use super::engine_core::EngineLifecycle;

impl<S: SceneSink> GaugeEngine<S> {
    /// Index of the arc segment under `(x, y)`, in container coordinates.
    #[must_use]
    pub fn segment_at(&self, x: f64, y: f64) -> Option<usize> {
        let dimensions = &self.core.dimensions;
        if self.core.lifecycle == EngineLifecycle::Uninitialized || dimensions.is_degenerate() {
            return None;
        }
        let point = Point::new(x, y);
        if !point.is_finite()
            || !segment_ring(dimensions).contains_radius(point.distance_to(dimensions.center))
        {
            return None;
        }
        let scale = ValueScale::new(0.0, 1.0, dimensions.start_angle, dimensions.end_angle);
        let mid = (dimensions.start_angle + dimensions.end_angle) / 2.0;
        let angle = mid + wrap_pi(point_to_angle(point, dimensions.center) - mid);
        let percentage = scale.angle_to_percentage(angle);
        if !(0.0..=1.0).contains(&percentage) {
            return None;
        }
        self.core.segmentation.segment_at(percentage)
    }

    /// Hover update; drives the shared tooltip and segment hover events.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> GaugeResult<Option<usize>> {
        self.core.interaction.on_pointer_move(x, y);
        let hit = self.segment_at(x, y);
        let position = Point::new(x, y);
        match self.core.interaction.hover_segment(hit) {
            HoverTransition::Unchanged => {
                if let Some(segment_index) = hit.filter(|index| self.has_tooltip(*index)) {
                    self.sink.tooltip(&TooltipCommand::Move {
                        segment_index,
                        position,
                    })?;
                }
            }
            HoverTransition::Switched { previous, next } => {
                if let Some(segment_index) = previous {
                    self.leave_segment(segment_index)?;
                }
                if let Some(segment_index) = next {
                    self.emit_plugin_event(GaugeEvent::SegmentHovered { segment_index });
                    if let Some(text) = self.tooltip_text(segment_index) {
                        self.sink.tooltip(&TooltipCommand::Show {
                            segment_index,
                            text,
                            position,
                        })?;
                    }
                }
            }
        }
        Ok(hit)
    }

    pub fn pointer_leave(&mut self) -> GaugeResult<()> {
        if let Some(segment_index) = self.core.interaction.on_pointer_leave() {
            self.leave_segment(segment_index)?;
        }
        Ok(())
    }

    /// Click on the arc; returns the clicked segment.
    pub fn click(&mut self, x: f64, y: f64) -> Option<usize> {
        let segment_index = self.segment_at(x, y)?;
        self.emit_plugin_event(GaugeEvent::SegmentClicked { segment_index });
        Some(segment_index)
    }

    /// Starts dragging the pointer nearest to `(x, y)` and moves it there.
    ///
    /// Returns the new value, or `None` when dragging is disabled.
    pub fn drag_start(&mut self, x: f64, y: f64) -> GaugeResult<Option<f64>> {
        if !self.core.config.interaction.drag
            || self.core.lifecycle == EngineLifecycle::Uninitialized
        {
            return Ok(None);
        }
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Ok(None);
        }
        let Some(pointer_index) = self.nearest_pointer(point) else {
            return Ok(None);
        };
        let value = self.value_at(point);
        self.core.interaction.on_drag_start(pointer_index, value);
        self.emit_plugin_event(GaugeEvent::DragStarted { pointer_index });
        self.apply_dragged_value(pointer_index, value)?;
        Ok(Some(value))
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> GaugeResult<Option<f64>> {
        let Some(drag) = self.core.interaction.drag() else {
            return Ok(None);
        };
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Ok(Some(drag.value));
        }
        let value = self.value_at(point);
        if value != drag.value {
            self.core.interaction.on_drag_move(value);
            self.apply_dragged_value(drag.pointer_index, value)?;
        }
        Ok(Some(value))
    }

    /// Ends the drag; returns the final value.
    pub fn drag_end(&mut self) -> Option<f64> {
        let drag = self.core.interaction.on_drag_end()?;
        self.emit_plugin_event(GaugeEvent::DragEnded {
            pointer_index: drag.pointer_index,
        });
        Some(drag.value)
    }

    /// Feeds a dragged value back as an instant value change.
    fn apply_dragged_value(&mut self, pointer_index: usize, value: f64) -> GaugeResult<()> {
        let Some(config) = self.config_with_pointer_value(pointer_index, value) else {
            return Ok(());
        };
        self.commit_config(config, Some(TweenTiming::instant()))?;
        debug!(pointer_index, value, "pointer dragged");
        if let Some(callback) = self.core.value_change_callback.as_mut() {
            callback(pointer_index, value);
        }
        self.emit_plugin_event(GaugeEvent::ValueDragged {
            pointer_index,
            value,
        });
        Ok(())
    }

    fn value_at(&self, point: Point) -> f64 {
        let config = &self.core.config;
        ValueScale::from_dimensions(config.min_value, config.max_value, &self.core.dimensions)
            .point_to_value(point, self.core.dimensions.center)
    }

    /// Visible pointer whose current angle is closest to `point`.
    fn nearest_pointer(&self, point: Point) -> Option<usize> {
        let dimensions = &self.core.dimensions;
        let angle = point_to_angle(point, dimensions.center);
        let pointers = self.core.config.resolved_pointers();
        self.core
            .animations
            .iter()
            .enumerate()
            .zip(&pointers)
            .filter(|(_, pointer)| !pointer.hide)
            .map(|((index, state), _)| {
                let pointer_angle =
                    dimensions.start_angle + state.current_percentage * dimensions.angle_span();
                (index, wrap_pi(angle - pointer_angle).abs())
            })
            .min_by(|left, right| left.1.total_cmp(&right.1))
            .map(|(index, _)| index)
    }

    fn has_tooltip(&self, segment_index: usize) -> bool {
        self.tooltip_text(segment_index).is_some()
    }

    fn tooltip_text(&self, segment_index: usize) -> Option<String> {
        if !self.core.config.interaction.tooltips {
            return None;
        }
        self.core
            .segmentation
            .data
            .get(segment_index)
            .and_then(|datum| datum.tooltip.clone())
    }

    fn leave_segment(&mut self, segment_index: usize) -> GaugeResult<()> {
        if self.core.config.interaction.tooltips {
            self.sink.tooltip(&TooltipCommand::Hide { segment_index })?;
        }
        self.emit_plugin_event(GaugeEvent::SegmentLeft { segment_index });
        Ok(())
    }
}
