use tracing::trace;

use crate::core::{Color, Dimensions, GaugeType, Point, ValueScale};
use crate::render::{LayerPrimitives, SceneLayerKind, TextAnchor, TextPrimitive};

use super::arc_segmentation::ArcSegmentation;
use super::gauge_config::GaugeConfig;
use super::label_config::MultiPointerLabelMode;
use super::label_format::LabelFormatters;
use super::validation::resolve_color;

/// Share of the inner diameter the value label may use.
const VALUE_LABEL_MAX_WIDTH_RATIO: f64 = 0.9;
/// Rough advance width of one glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const STACKED_LINE_HEIGHT: f64 = 1.2;

pub struct ValueLabelInput<'a> {
    pub dimensions: &'a Dimensions,
    pub config: &'a GaugeConfig,
    pub segmentation: &'a ArcSegmentation,
    pub formatters: &'a LabelFormatters,
}

/// Font multiplier for `count` stacked labels, `max(0.5, 1 - 0.15 * (count - 1))`.
#[must_use]
pub fn stacked_font_multiplier(count: usize) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    (1.0 - 0.15 * (count - 1) as f64).max(0.5)
}

/// Estimated rendered width of `text` at `font_size`.
#[must_use]
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
}

/// Largest font size not above `font_size` whose text fits `max_width`.
#[must_use]
pub fn fit_font_size(text: &str, font_size: f64, max_width: f64) -> f64 {
    let width = estimate_text_width(text, font_size);
    if width <= max_width || width <= 0.0 {
        return font_size;
    }
    (font_size * max_width / width).max(0.0)
}

/// Builds the value label layer from the pointers' target values.
#[must_use]
pub fn build_value_label_layer(input: ValueLabelInput<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(SceneLayerKind::ValueLabel);
    let ValueLabelInput {
        dimensions,
        config,
        segmentation,
        formatters,
    } = input;
    let label = &config.labels.value_label;
    if label.hide || dimensions.is_degenerate() {
        return layer;
    }

    let scale = ValueScale::new(config.min_value, config.max_value, 0.0, 1.0);
    let base_color = resolve_color(&label.color, Color::WHITE, "value label color");
    let color_for = |value: f64| {
        if label.match_color_with_arc {
            segmentation
                .color_at(scale.value_to_percentage(value))
                .unwrap_or(base_color)
        } else {
            base_color
        }
    };

    let lines: Vec<(String, f64)> = if config.is_multi_pointer() {
        match label.multi_pointer_display {
            MultiPointerLabelMode::Primary => config
                .pointers
                .first()
                .map(|entry| {
                    (
                        formatters.format_value_label(entry.value, label.max_decimal_digits),
                        entry.value,
                    )
                })
                .into_iter()
                .collect(),
            MultiPointerLabelMode::All => config
                .pointers
                .iter()
                .map(|entry| {
                    let text = formatters.format_value_label(entry.value, label.max_decimal_digits);
                    let text = match &entry.label {
                        Some(caption) => format!("{caption}: {text}"),
                        None => text,
                    };
                    (text, entry.value)
                })
                .collect(),
            MultiPointerLabelMode::None => Vec::new(),
        }
    } else {
        vec![(
            formatters.format_value_label(config.value, label.max_decimal_digits),
            config.value,
        )]
    };
    if lines.is_empty() {
        return layer;
    }

    let base_font =
        label.font_size * dimensions.label_scale() * stacked_font_multiplier(lines.len());
    let max_width = VALUE_LABEL_MAX_WIDTH_RATIO * 2.0 * dimensions.inner_radius;
    let font_size = lines
        .iter()
        .map(|(text, _)| fit_font_size(text, base_font, max_width))
        .fold(base_font, f64::min);
    if !(font_size.is_finite() && font_size > 0.0) {
        trace!(font_size, "value label does not fit, skipping");
        return layer;
    }

    let anchor = label_anchor(dimensions, font_size);
    let line_height = font_size * STACKED_LINE_HEIGHT;
    let first_y = anchor.y - line_height * (lines.len() - 1) as f64 / 2.0;
    for (row, (text, value)) in lines.into_iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        layer.texts.push(TextPrimitive::new(
            text,
            anchor.x + label.offset_x,
            first_y + row as f64 * line_height + label.offset_y,
            font_size,
            color_for(value),
            TextAnchor::Middle,
        ));
    }
    layer
}

fn label_anchor(dimensions: &Dimensions, font_size: f64) -> Point {
    let center = dimensions.center;
    match dimensions.gauge_type {
        // Nothing is drawn below the pivot of a semicircle.
        GaugeType::Semicircle => Point::new(center.x, center.y - font_size * 0.5),
        GaugeType::Radial => Point::new(center.x, center.y + dimensions.inner_radius * 0.3),
        GaugeType::Grafana => center,
    }
}
