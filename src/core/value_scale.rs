use serde::{Deserialize, Serialize};

use super::layout::Dimensions;
use super::types::Point;

/// Where along the arc band a coordinate is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadialPosition {
    /// Past the outer radius.
    Outer,
    /// Inside the scaled inner radius.
    Inner,
    /// Midpoint of the arc band.
    Between,
}

/// Inner anchors sit slightly inside the band so text does not touch the arc.
pub const INNER_RADIUS_SCALE: f64 = 0.9;

/// Stateless mapping between values, range percentages, angles and points.
///
/// Angles are radians measured clockwise from 12 o'clock; screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min_value: f64,
    max_value: f64,
    start_angle: f64,
    end_angle: f64,
}

impl ValueScale {
    #[must_use]
    pub fn new(min_value: f64, max_value: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            min_value,
            max_value,
            start_angle,
            end_angle,
        }
    }

    #[must_use]
    pub fn from_dimensions(min_value: f64, max_value: f64, dimensions: &Dimensions) -> Self {
        Self::new(
            min_value,
            max_value,
            dimensions.start_angle,
            dimensions.end_angle,
        )
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }

    #[must_use]
    pub fn angles(self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    /// Span of the value range, or `None` when the range is empty or inverted.
    #[must_use]
    pub fn span(self) -> Option<f64> {
        let span = self.max_value - self.min_value;
        (span.is_finite() && span > 0.0).then_some(span)
    }

    /// Normalizes `value` to `[0, 1]`, clamping out-of-range input.
    ///
    /// An invalid range (`max <= min`) or a non-finite value maps to `0`.
    #[must_use]
    pub fn value_to_percentage(self, value: f64) -> f64 {
        let Some(span) = self.span() else {
            return 0.0;
        };
        let percentage = (value - self.min_value) / span;
        if percentage.is_finite() {
            percentage.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn percentage_to_value(self, percentage: f64) -> f64 {
        let span = self.span().unwrap_or(0.0);
        self.min_value + clamp_unit(percentage) * span
    }

    /// Linear interpolation between the start and end angle. Not clamped, so
    /// elastic overshoot maps past the end stops.
    #[must_use]
    pub fn percentage_to_angle(self, percentage: f64) -> f64 {
        self.start_angle + percentage * (self.end_angle - self.start_angle)
    }

    #[must_use]
    pub fn angle_to_percentage(self, angle: f64) -> f64 {
        let span = self.end_angle - self.start_angle;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (angle - self.start_angle) / span
    }

    #[must_use]
    pub fn value_to_angle(self, value: f64) -> f64 {
        self.percentage_to_angle(self.value_to_percentage(value))
    }

    /// Maps a screen point to a clamped range percentage.
    ///
    /// Points in the dead zone below a partial dial snap to the nearer end stop.
    #[must_use]
    pub fn point_to_percentage(self, point: Point, center: Point) -> f64 {
        let angle = point_to_angle(point, center);
        let mid = (self.start_angle + self.end_angle) / 2.0;
        // Unwrap the angle around the arc midpoint so both stops are reachable.
        let unwrapped = mid + wrap_pi(angle - mid);
        clamp_unit(self.angle_to_percentage(unwrapped))
    }

    #[must_use]
    pub fn point_to_value(self, point: Point, center: Point) -> f64 {
        self.percentage_to_value(self.point_to_percentage(point, center))
    }
}

/// Cartesian point at `radius` from `center` along `angle`.
#[must_use]
pub fn angle_to_coordinate(angle: f64, radius: f64, center: Point) -> Point {
    Point::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// Radius of a band position, pushed outwards (outer) or inwards (inner) by `offset`.
#[must_use]
pub fn band_radius(dimensions: &Dimensions, position: RadialPosition, offset: f64) -> f64 {
    match position {
        RadialPosition::Outer => dimensions.outer_radius + offset,
        RadialPosition::Inner => (dimensions.inner_radius * INNER_RADIUS_SCALE - offset).max(0.0),
        RadialPosition::Between => (dimensions.outer_radius + dimensions.inner_radius) / 2.0,
    }
}

#[must_use]
pub fn band_coordinate(
    angle: f64,
    dimensions: &Dimensions,
    position: RadialPosition,
    offset: f64,
) -> Point {
    angle_to_coordinate(
        angle,
        band_radius(dimensions, position, offset),
        dimensions.center,
    )
}

/// Angle of `point` around `center`, clockwise from 12 o'clock, in `(-pi, pi]`.
#[must_use]
pub fn point_to_angle(point: Point, center: Point) -> f64 {
    (point.x - center.x).atan2(center.y - point.y)
}

pub(crate) fn wrap_pi(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped.is_finite() { wrapped } else { 0.0 }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
