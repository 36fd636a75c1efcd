use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::{Color, Dimensions, GaugeType, Point, ValueScale, angle_to_coordinate};
use crate::render::{Fill, LayerPrimitives, PathCommand, PathPrimitive, SceneLayerKind};

use super::arc_config::ArcConfig;
use super::arc_segmentation::ArcSegmentation;
use super::validation::resolve_color;

/// Thin color band of the grafana dial, as a fraction of the band width.
const GRAFANA_COLOR_BAND_RATIO: f64 = 0.15;
/// Gap between the grafana color band and the progress band.
const GRAFANA_BAND_GAP_RATIO: f64 = 0.05;

/// Radial extent of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner: f64,
    pub outer: f64,
}

impl Ring {
    #[must_use]
    pub fn thickness(self) -> f64 {
        (self.outer - self.inner).max(0.0)
    }

    #[must_use]
    pub fn contains_radius(self, radius: f64) -> bool {
        radius >= self.inner && radius <= self.outer
    }
}

/// Ring holding the colored segments.
#[must_use]
pub fn segment_ring(dimensions: &Dimensions) -> Ring {
    let band = dimensions.band_width();
    match dimensions.gauge_type {
        GaugeType::Grafana => Ring {
            inner: dimensions.outer_radius - band * GRAFANA_COLOR_BAND_RATIO,
            outer: dimensions.outer_radius,
        },
        GaugeType::Semicircle | GaugeType::Radial => Ring {
            inner: dimensions.inner_radius,
            outer: dimensions.outer_radius,
        },
    }
}

/// Ring filled up to the pointer on grafana dials.
#[must_use]
pub fn progress_ring(dimensions: &Dimensions) -> Ring {
    let band = dimensions.band_width();
    Ring {
        inner: dimensions.inner_radius,
        outer: (dimensions.outer_radius
            - band * (GRAFANA_COLOR_BAND_RATIO + GRAFANA_BAND_GAP_RATIO))
            .max(dimensions.inner_radius),
    }
}

/// Builds the arc layer: one path per non-empty segment.
#[must_use]
pub fn build_arc_layer(
    dimensions: &Dimensions,
    segmentation: &ArcSegmentation,
    arc: &ArcConfig,
) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(SceneLayerKind::Arc);
    let ring = segment_ring(dimensions);
    let scale = ValueScale::new(0.0, 1.0, dimensions.start_angle, dimensions.end_angle);
    let segments = segmentation.painted_segments();
    let last = segments.len().saturating_sub(1);

    let mut cumulative = 0.0;
    for (index, datum) in segments.iter().enumerate() {
        let start = cumulative;
        cumulative += datum.percentage_length;
        if datum.percentage_length <= 0.0 {
            continue;
        }

        let mut start_angle = scale.percentage_to_angle(start);
        let mut end_angle = scale.percentage_to_angle(cumulative.min(1.0));
        if index > 0 {
            start_angle += arc.padding / 2.0;
        }
        if index < last {
            end_angle -= arc.padding / 2.0;
        }
        if end_angle <= start_angle {
            continue;
        }

        let fill = match &segmentation.gradient {
            Some(stops) => Fill::LinearGradient(stops.clone()),
            None => Fill::Solid(datum.color),
        };
        let path = PathPrimitive::new(
            annular_sector(
                dimensions.center,
                ring,
                start_angle,
                end_angle,
                arc.corner_radius,
            ),
            fill,
        );
        layer.paths.push(if segmentation.gradient.is_none() {
            path.with_segment_index(index)
        } else {
            path
        });
    }
    layer
}

/// Grafana progress fill: value color up to `percentage`, empty color after it.
#[must_use]
pub fn build_progress_paths(
    dimensions: &Dimensions,
    segmentation: &ArcSegmentation,
    arc: &ArcConfig,
    percentage: f64,
) -> Vec<PathPrimitive> {
    let ring = progress_ring(dimensions);
    let percentage = if percentage.is_finite() {
        percentage.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let split_angle = dimensions.start_angle + percentage * dimensions.angle_span();
    let value_fill = match &segmentation.gradient {
        Some(stops) => Fill::LinearGradient(stops.clone()),
        None => Fill::Solid(segmentation.color_at(percentage).unwrap_or(Color::BLACK)),
    };
    let empty_color = resolve_color(
        &arc.empty_color,
        Color::from_rgb8(0x5C, 0x5C, 0x5C),
        "arc empty_color",
    );

    let mut paths = Vec::with_capacity(2);
    if split_angle > dimensions.start_angle {
        paths.push(PathPrimitive::new(
            annular_sector(
                dimensions.center,
                ring,
                dimensions.start_angle,
                split_angle,
                arc.corner_radius,
            ),
            value_fill,
        ));
    }
    if dimensions.end_angle > split_angle {
        paths.push(PathPrimitive::new(
            annular_sector(
                dimensions.center,
                ring,
                split_angle,
                dimensions.end_angle,
                arc.corner_radius,
            ),
            Fill::Solid(empty_color),
        ));
    }
    paths
}

/// Closed outline of a ring sector from `start` to `end` (clockwise), with
/// rounded corners where the sector is long enough to hold them.
#[must_use]
pub fn annular_sector(
    center: Point,
    ring: Ring,
    start: f64,
    end: f64,
    corner_radius: f64,
) -> Vec<PathCommand> {
    let outer = ring.outer.max(0.0);
    let inner = ring.inner.clamp(0.0, outer);
    let corner = if corner_radius.is_finite() {
        corner_radius.clamp(0.0, (outer - inner) / 2.0)
    } else {
        0.0
    };

    if corner > 0.0 && outer - corner > corner {
        let outer_offset = (corner / (outer - corner)).min(1.0).asin();
        let inner_corner = if inner > corner { corner } else { 0.0 };
        let inner_offset = if inner_corner > 0.0 {
            (inner_corner / (inner + inner_corner)).min(1.0).asin()
        } else {
            0.0
        };
        if end - start > 2.0 * outer_offset.max(inner_offset) {
            return rounded_sector(
                center,
                inner,
                outer,
                start,
                end,
                corner,
                inner_corner,
                outer_offset,
                inner_offset,
            );
        }
    }

    vec![
        PathCommand::MoveTo(angle_to_coordinate(start, outer, center)),
        PathCommand::Arc {
            center,
            radius: outer,
            start_angle: start,
            end_angle: end,
            clockwise: true,
        },
        PathCommand::LineTo(angle_to_coordinate(end, inner, center)),
        PathCommand::Arc {
            center,
            radius: inner,
            start_angle: end,
            end_angle: start,
            clockwise: false,
        },
        PathCommand::Close,
    ]
}

#[allow(clippy::too_many_arguments)]
fn rounded_sector(
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
    corner: f64,
    inner_corner: f64,
    outer_offset: f64,
    inner_offset: f64,
) -> Vec<PathCommand> {
    let corner_arc = |corner_center: Point, radius: f64, from: f64, to: f64| PathCommand::Arc {
        center: corner_center,
        radius,
        start_angle: from,
        end_angle: to,
        clockwise: true,
    };
    let outer_corner_distance = outer - corner;
    let outer_edge = (outer_corner_distance.powi(2) - corner.powi(2)).max(0.0).sqrt();

    let mut commands = Vec::with_capacity(10);
    commands.push(PathCommand::MoveTo(angle_to_coordinate(
        start,
        outer_edge,
        center,
    )));
    commands.push(corner_arc(
        angle_to_coordinate(start + outer_offset, outer_corner_distance, center),
        corner,
        start - FRAC_PI_2,
        start + outer_offset,
    ));
    commands.push(PathCommand::Arc {
        center,
        radius: outer,
        start_angle: start + outer_offset,
        end_angle: end - outer_offset,
        clockwise: true,
    });
    commands.push(corner_arc(
        angle_to_coordinate(end - outer_offset, outer_corner_distance, center),
        corner,
        end - outer_offset,
        end + FRAC_PI_2,
    ));

    if inner_corner > 0.0 {
        let inner_corner_distance = inner + inner_corner;
        let inner_edge = (inner_corner_distance.powi(2) - inner_corner.powi(2))
            .max(0.0)
            .sqrt();
        commands.push(PathCommand::LineTo(angle_to_coordinate(
            end, inner_edge, center,
        )));
        commands.push(corner_arc(
            angle_to_coordinate(end - inner_offset, inner_corner_distance, center),
            inner_corner,
            end + FRAC_PI_2,
            end - inner_offset + PI,
        ));
        commands.push(PathCommand::Arc {
            center,
            radius: inner,
            start_angle: end - inner_offset,
            end_angle: start + inner_offset,
            clockwise: false,
        });
        commands.push(corner_arc(
            angle_to_coordinate(start + inner_offset, inner_corner_distance, center),
            inner_corner,
            start + inner_offset + PI,
            start + 3.0 * FRAC_PI_2,
        ));
    } else {
        commands.push(PathCommand::LineTo(angle_to_coordinate(end, inner, center)));
        commands.push(PathCommand::Arc {
            center,
            radius: inner,
            start_angle: end,
            end_angle: start,
            clockwise: false,
        });
    }
    commands.push(PathCommand::Close);
    commands
}
