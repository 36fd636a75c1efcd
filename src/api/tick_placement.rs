use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Dimensions, ValueScale, angle_to_coordinate};
use crate::render::{LayerPrimitives, LinePrimitive, SceneLayerKind, TextAnchor, TextPrimitive};

use super::arc_segmentation::ArcSegmentation;
use super::label_config::{
    TickLabelsConfig, TickLineConfig, TickLineStyle, TickPlacement, TickValueConfig,
    TickValueStyle,
};
use super::label_format::LabelFormatters;

/// Ticks closer than this fraction of the value range get pushed apart.
pub const AUTO_SPACE_THRESHOLD_RATIO: f64 = 0.03;
/// Gap between the end of a tick line and its text, in unscaled pixels.
const TICK_TEXT_PADDING_PX: f64 = 2.0;

/// One resolved tick. Identity is its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub percentage: f64,
    pub line: TickLineStyle,
    pub text: TickValueStyle,
    /// Angular displacement of the text along the arc, in radians.
    pub angular_offset: f64,
}

/// Collects explicit, min/max and sub-arc ticks, deduplicated by value and
/// sorted ascending.
#[must_use]
pub fn collect_ticks(
    labels: &TickLabelsConfig,
    segmentation: &ArcSegmentation,
    min_value: f64,
    max_value: f64,
) -> Vec<Tick> {
    let scale = ValueScale::new(min_value, max_value, 0.0, 1.0);
    let base_line = labels
        .default_tick_line_config
        .overlay(TickLineStyle::default());
    let base_text = labels
        .default_tick_value_config
        .overlay(TickValueStyle::default());

    let mut by_value: IndexMap<OrderedFloat<f64>, Tick> = IndexMap::new();
    let mut insert = |value: f64, line: &TickLineConfig, text: &TickValueConfig| {
        if !value.is_finite() || value < min_value || value > max_value {
            trace!(value, min_value, max_value, "dropping tick outside the range");
            return;
        }
        by_value.entry(OrderedFloat(value)).or_insert_with(|| Tick {
            value,
            percentage: scale.value_to_percentage(value),
            line: line.overlay(base_line),
            text: text.overlay(base_text),
            angular_offset: 0.0,
        });
    };

    for tick in &labels.ticks {
        insert(tick.value, &tick.line_config, &tick.value_config);
    }
    if !labels.hide_min_max {
        let none_line = TickLineConfig::default();
        let none_text = TickValueConfig::default();
        insert(min_value, &none_line, &none_text);
        insert(max_value, &none_line, &none_text);
    }
    for datum in segmentation.data.iter().filter(|datum| datum.show_tick) {
        insert(
            datum.limit,
            &TickLineConfig::default(),
            &TickValueConfig::default(),
        );
    }

    let mut ticks: Vec<Tick> = by_value.into_values().collect();
    ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
    ticks
}

/// Pushes apart adjacent ticks closer than 3% of the range.
///
/// Each close pair moves the earlier tick towards the start and the later one
/// towards the end by half the missing distance. Offsets accumulate, so a tick
/// between two close neighbours can end up where it started.
pub fn apply_auto_spacing(ticks: &mut [Tick], min_value: f64, max_value: f64, angle_span: f64) {
    let range = max_value - min_value;
    if !(range.is_finite() && range > 0.0) || !angle_span.is_finite() {
        return;
    }
    let threshold = AUTO_SPACE_THRESHOLD_RATIO * range;
    ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
    for index in 1..ticks.len() {
        let distance = ticks[index].value - ticks[index - 1].value;
        if distance >= threshold {
            continue;
        }
        let offset = (threshold - distance) / range * angle_span / 2.0;
        ticks[index - 1].angular_offset -= offset;
        ticks[index].angular_offset += offset;
        trace!(
            earlier = ticks[index - 1].value,
            later = ticks[index].value,
            offset,
            "auto-spaced tick pair"
        );
    }
}

/// Builds tick lines and texts. Degenerate radii produce an empty layer.
#[must_use]
pub fn build_tick_layer(
    dimensions: &Dimensions,
    ticks: &[Tick],
    labels: &TickLabelsConfig,
    formatters: &LabelFormatters,
) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(SceneLayerKind::Ticks);
    if dimensions.is_degenerate() {
        trace!(
            outer_radius = dimensions.outer_radius,
            "radius too small, skipping ticks"
        );
        return layer;
    }

    let scale = dimensions.label_scale();
    let center = dimensions.center;
    for tick in ticks {
        let angle = dimensions.start_angle + tick.percentage * dimensions.angle_span();
        let distance = tick.line.distance_from_arc * scale;
        let length = tick.line.length * scale;
        let font_size = tick.text.font_size * scale;

        let (line_start, line_end, text_radius) = match labels.placement {
            TickPlacement::Outer => {
                let start = dimensions.outer_radius + distance;
                let end = start + length;
                (start, end, end + TICK_TEXT_PADDING_PX * scale + font_size / 2.0)
            }
            TickPlacement::Inner => {
                let start = (dimensions.inner_radius - distance).max(0.0);
                let end = (start - length).max(0.0);
                (
                    start,
                    end,
                    (end - TICK_TEXT_PADDING_PX * scale - font_size / 2.0).max(0.0),
                )
            }
        };

        if !tick.line.hide && length > 0.0 && tick.line.width > 0.0 {
            layer.lines.push(LinePrimitive::between(
                angle_to_coordinate(angle, line_start, center),
                angle_to_coordinate(angle, line_end, center),
                tick.line.width * scale,
                tick.line.color,
            ));
        }
        if !tick.text.hide && font_size > 0.0 {
            let text = formatters.format_tick_label(tick.value, tick.text.max_decimal_digits);
            if text.is_empty() {
                continue;
            }
            let anchor_point =
                angle_to_coordinate(angle + tick.angular_offset, text_radius, center);
            layer.texts.push(TextPrimitive::new(
                text,
                anchor_point.x,
                anchor_point.y,
                font_size,
                tick.text.color,
                text_anchor(tick.percentage, labels),
            ));
        }
    }
    layer
}

/// Middle inside the center band; otherwise the side facing away from the dial.
#[must_use]
pub fn text_anchor(percentage: f64, labels: &TickLabelsConfig) -> TextAnchor {
    let (before, after) = match labels.placement {
        TickPlacement::Outer => (TextAnchor::End, TextAnchor::Start),
        TickPlacement::Inner => (TextAnchor::Start, TextAnchor::End),
    };
    if percentage < labels.center_band_start {
        before
    } else if percentage > labels.center_band_end {
        after
    } else {
        TextAnchor::Middle
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_auto_spacing, collect_ticks, text_anchor};
    use crate::api::{
        ArcConfig, ArcSegmentation, SubArcConfig, TickConfig, TickLabelsConfig, TickPlacement,
    };
    use crate::render::TextAnchor;

    fn segmentation() -> ArcSegmentation {
        ArcSegmentation::build(&ArcConfig::default(), 0.0, 100.0)
    }

    #[test]
    fn min_max_are_not_duplicated() {
        let labels = TickLabelsConfig::default().with_ticks([0.0, 50.0, 100.0]);
        let ticks = collect_ticks(&labels, &segmentation(), 0.0, 100.0);
        let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
        assert_eq!(values, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn sub_arc_limits_add_ticks_and_out_of_range_ticks_drop() {
        let arc = ArcConfig::default().with_sub_arcs(vec![
            SubArcConfig::new().with_limit(40.0).with_tick(),
            SubArcConfig::new(),
        ]);
        let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);
        let mut labels = TickLabelsConfig::default().with_ticks([120.0]);
        labels.hide_min_max = true;
        let ticks = collect_ticks(&labels, &segmentation, 0.0, 100.0);
        let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
        assert_eq!(values, vec![40.0]);
    }

    #[test]
    fn per_tick_style_overrides_default_for_all() {
        let mut labels = TickLabelsConfig::default();
        labels.default_tick_value_config.font_size = Some(14.0);
        let mut tick = TickConfig::new(30.0);
        tick.value_config.font_size = Some(20.0);
        labels.ticks = vec![tick];
        let ticks = collect_ticks(&labels, &segmentation(), 0.0, 100.0);
        assert_eq!(ticks[0].text.font_size, 14.0);
        assert_eq!(ticks[1].text.font_size, 20.0);
    }

    #[test]
    fn middle_tick_of_three_close_ticks_cancels_out() {
        let labels = TickLabelsConfig::default().with_ticks([49.0, 50.0, 51.0]);
        let mut ticks = collect_ticks(&labels, &segmentation(), 0.0, 100.0);
        apply_auto_spacing(&mut ticks, 0.0, 100.0, std::f64::consts::PI);
        let middle = ticks.iter().find(|tick| tick.value == 50.0).expect("middle");
        assert!(middle.angular_offset.abs() < 1e-12);
    }

    #[test]
    fn anchors_swap_with_placement() {
        let outer = TickLabelsConfig::default();
        let inner = TickLabelsConfig::default().with_placement(TickPlacement::Inner);
        assert_eq!(text_anchor(0.1, &outer), TextAnchor::End);
        assert_eq!(text_anchor(0.5, &outer), TextAnchor::Middle);
        assert_eq!(text_anchor(0.9, &outer), TextAnchor::Start);
        assert_eq!(text_anchor(0.1, &inner), TextAnchor::Start);
        assert_eq!(text_anchor(0.9, &inner), TextAnchor::End);
    }
}
