use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use super::types::{ContainerSize, Margins, Point};

/// Gauge layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GaugeType {
    /// Half circle opening downwards.
    Semicircle,
    /// Roughly three quarters of a circle.
    Radial,
    /// Grafana-style dial with a progress fill and a thin color band.
    #[default]
    Grafana,
}

impl GaugeType {
    /// Default `(start, end)` angles in radians, clockwise from 12 o'clock.
    #[must_use]
    pub fn default_angles(self) -> (f64, f64) {
        match self {
            Self::Semicircle => (-FRAC_PI_2, FRAC_PI_2),
            Self::Radial => (-PI / 1.37, PI / 1.37),
            Self::Grafana => (-PI / 1.6, PI / 1.6),
        }
    }
}

/// Ratio of the container reserved on each side before the arc is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginRatios {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl MarginRatios {
    #[must_use]
    pub const fn uniform(ratio: f64) -> Self {
        Self {
            top: ratio,
            right: ratio,
            bottom: ratio,
            left: ratio,
        }
    }
}

impl Default for MarginRatios {
    fn default() -> Self {
        Self::uniform(0.07)
    }
}

/// Inputs of the layout calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub container: ContainerSize,
    pub gauge_type: GaugeType,
    /// Explicit `(start, end)` override in radians.
    pub angles: Option<(f64, f64)>,
    pub margins: MarginRatios,
    /// Arc band thickness as a fraction of the outer radius.
    pub arc_width: f64,
}

/// Derived gauge geometry shared by every other component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub container: ContainerSize,
    pub gauge_type: GaugeType,
    /// Width of the arc bounding box.
    pub width: f64,
    /// Height of the arc bounding box.
    pub height: f64,
    /// Container space left around the arc bounding box.
    pub margins: Margins,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub center: Point,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Below this outer radius ticks and labels are not placed.
pub const MIN_PLACEMENT_RADIUS_PX: f64 = 1.0;

impl Dimensions {
    /// Computes dimensions for the given container and gauge type.
    ///
    /// Pure and idempotent: identical inputs give bit-identical output. A zero or
    /// negative container degrades to a zero radius centered in the container.
    #[must_use]
    pub fn compute(input: LayoutInput) -> Self {
        let container = input.container.sanitized();
        let (start_angle, end_angle) = input
            .angles
            .unwrap_or_else(|| input.gauge_type.default_angles());

        let left = container.width * ratio_or_zero(input.margins.left);
        let right = container.width * ratio_or_zero(input.margins.right);
        let top = container.height * ratio_or_zero(input.margins.top);
        let bottom = container.height * ratio_or_zero(input.margins.bottom);
        let available_width = (container.width - left - right).max(0.0);
        let available_height = (container.height - top - bottom).max(0.0);

        let bounds = UnitArcBounds::for_angles(start_angle, end_angle);
        let width_factor = bounds.width();
        let height_factor = bounds.height();
        let outer_radius = if width_factor > 0.0 && height_factor > 0.0 {
            (available_width / width_factor).min(available_height / height_factor)
        } else {
            0.0
        };
        let outer_radius = if outer_radius.is_finite() {
            outer_radius.max(0.0)
        } else {
            0.0
        };

        let box_width = width_factor * outer_radius;
        let box_height = height_factor * outer_radius;
        let center = Point::new(
            left + (available_width - box_width) / 2.0 - bounds.min_x * outer_radius,
            top + (available_height - box_height) / 2.0 - bounds.min_y * outer_radius,
        );

        let arc_width = if input.arc_width.is_finite() {
            input.arc_width.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            container,
            gauge_type: input.gauge_type,
            width: box_width,
            height: box_height,
            margins: Margins {
                top: center.y + bounds.min_y * outer_radius,
                right: container.width - (center.x + bounds.max_x * outer_radius),
                bottom: container.height - (center.y + bounds.max_y * outer_radius),
                left: center.x + bounds.min_x * outer_radius,
            },
            outer_radius,
            inner_radius: outer_radius * (1.0 - arc_width),
            center,
            start_angle,
            end_angle,
        }
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    #[must_use]
    pub fn angle_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether the radius is too small for ticks and labels.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.outer_radius < MIN_PLACEMENT_RADIUS_PX
    }

    /// Proportional scale for tick and label sizes, `clamp(outer_radius / 100, 0.5, 1.5)`.
    #[must_use]
    pub fn label_scale(&self) -> f64 {
        (self.outer_radius / 100.0).clamp(0.5, 1.5)
    }
}

fn ratio_or_zero(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 0.45)
    } else {
        0.0
    }
}

/// Bounding box of a unit-radius arc plus its center, in screen orientation (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitArcBounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl UnitArcBounds {
    fn for_angles(start: f64, end: f64) -> Self {
        let mut bounds = Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        };
        if !start.is_finite() || !end.is_finite() || end <= start {
            return bounds;
        }

        bounds.include(start);
        bounds.include(end);
        let full_turn = end - start >= TAU;
        for quadrant in 0..4 {
            let cardinal = f64::from(quadrant) * FRAC_PI_2;
            if full_turn || sweep_contains(start, end, cardinal) {
                bounds.include(cardinal);
            }
        }
        bounds
    }

    fn include(&mut self, angle: f64) {
        let x = snap_unit(angle.sin());
        let y = snap_unit(-angle.cos());
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Whether some `cardinal + k * TAU` lies in `[start, end]`; constant time for any magnitude.
fn sweep_contains(start: f64, end: f64, cardinal: f64) -> bool {
    let first_hit = start + (cardinal - start).rem_euclid(TAU);
    first_hit <= end
}

// Keeps cos(pi/2) from leaking 6e-17 into the layout.
fn snap_unit(value: f64) -> f64 {
    if value.abs() < 1e-12 { 0.0 } else { value }
}
