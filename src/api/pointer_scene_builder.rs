use crate::core::{Color, Dimensions, GaugeType, PointerShape, ValueScale};
use crate::render::{CirclePrimitive, Fill, LayerPrimitives, PathPrimitive, SceneLayerKind, Stroke};

use super::arc_scene_builder::build_progress_paths;
use super::arc_segmentation::ArcSegmentation;
use super::gauge_config::GaugeConfig;
use super::pointer_config::{DEFAULT_POINTER_COLOR, PointerConfig};
use super::validation::resolve_color;

/// Builds the pointer layer at the given per-pointer percentages.
///
/// Grafana dials get their progress fill here too, since it moves with the
/// first pointer.
#[must_use]
pub fn build_pointer_layer(
    dimensions: &Dimensions,
    config: &GaugeConfig,
    segmentation: &ArcSegmentation,
    percentages: &[f64],
) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(SceneLayerKind::Pointers);
    if dimensions.gauge_type == GaugeType::Grafana {
        let primary = percentages.first().copied().unwrap_or(0.0);
        layer.paths.extend(build_progress_paths(
            dimensions,
            segmentation,
            &config.arc,
            primary,
        ));
    }

    let scale = ValueScale::from_dimensions(config.min_value, config.max_value, dimensions);
    for (pointer, &percentage) in config.resolved_pointers().iter().zip(percentages) {
        if pointer.hide {
            continue;
        }
        push_pointer(&mut layer, dimensions, scale, pointer, percentage);
    }
    layer
}

fn push_pointer(
    layer: &mut LayerPrimitives,
    dimensions: &Dimensions,
    scale: ValueScale,
    pointer: &PointerConfig,
    percentage: f64,
) {
    let fallback = resolve_color(DEFAULT_POINTER_COLOR, Color::BLACK, "default pointer color");
    let color = resolve_color(&pointer.color, fallback, "pointer color");
    let base_color = pointer
        .base_color
        .as_deref()
        .map_or(color, |raw| resolve_color(raw, color, "pointer base color"));
    let stroke = (pointer.stroke_width > 0.0).then(|| Stroke {
        color: resolve_color(&pointer.stroke_color, Color::WHITE, "pointer stroke color"),
        width: pointer.stroke_width,
    });

    let geometry = pointer
        .kind
        .shape(percentage, scale, dimensions, pointer.shape_params());
    for (part_index, part) in geometry.parts.iter().enumerate() {
        match part {
            PointerShape::Polygon { points } => {
                layer.paths.push(
                    PathPrimitive::polygon(points, Fill::Solid(color)).with_stroke(stroke),
                );
            }
            PointerShape::Circle { center, radius } => {
                // The needle hub is the only decoration part.
                let fill = if part_index > 0 { base_color } else { color };
                layer.circles.push(CirclePrimitive {
                    center: *center,
                    radius: *radius,
                    fill,
                    stroke,
                });
            }
        }
    }
}
