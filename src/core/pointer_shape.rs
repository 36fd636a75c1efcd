use std::f64::consts::FRAC_PI_2;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::GaugeError;

use super::layout::Dimensions;
use super::types::Point;
use super::value_scale::{RadialPosition, ValueScale, angle_to_coordinate, band_radius};

/// Pointer variant, selected once per pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Triangle pivoting on the gauge center with a round hub.
    #[default]
    Needle,
    /// Small triangle riding just inside the arc, pointing outwards.
    Arrow,
    /// Circle travelling along the middle of the arc band.
    Blob,
}

impl FromStr for PointerKind {
    type Err = GaugeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "needle" => Ok(Self::Needle),
            "arrow" => Ok(Self::Arrow),
            "blob" => Ok(Self::Blob),
            _ => Err(GaugeError::UnknownPointerVariant(value.to_owned())),
        }
    }
}

/// Size parameters shared by all pointer variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerShapeParams {
    /// Needle length as a fraction of the inner radius.
    pub length: f64,
    /// Base width in pixels at a 250 px outer radius.
    pub width: f64,
}

/// Reference radius at which `PointerShapeParams::width` is expressed in pixels.
pub const POINTER_WIDTH_REFERENCE_RADIUS_PX: f64 = 250.0;

/// One filled shape of a pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerShape {
    Polygon { points: SmallVec<[Point; 4]> },
    Circle { center: Point, radius: f64 },
}

/// Full geometry of one pointer at one percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerGeometry {
    pub kind: PointerKind,
    pub percentage: f64,
    pub angle: f64,
    /// Main body first, decorations (needle hub) after.
    pub parts: SmallVec<[PointerShape; 2]>,
}

impl PointerKind {
    /// Shape of this variant at `percentage` of the range.
    #[must_use]
    pub fn shape(
        self,
        percentage: f64,
        scale: ValueScale,
        dimensions: &Dimensions,
        params: PointerShapeParams,
    ) -> PointerGeometry {
        let angle = scale.percentage_to_angle(percentage);
        let width_px = pointer_width_px(params.width, dimensions);
        let parts = match self {
            Self::Needle => needle_parts(angle, dimensions, params.length, width_px),
            Self::Arrow => arrow_parts(angle, dimensions, width_px),
            Self::Blob => blob_parts(angle, dimensions),
        };
        PointerGeometry {
            kind: self,
            percentage,
            angle,
            parts,
        }
    }
}

fn pointer_width_px(width: f64, dimensions: &Dimensions) -> f64 {
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    width * dimensions.outer_radius / POINTER_WIDTH_REFERENCE_RADIUS_PX
}

fn needle_parts(
    angle: f64,
    dimensions: &Dimensions,
    length: f64,
    width_px: f64,
) -> SmallVec<[PointerShape; 2]> {
    let center = dimensions.center;
    let length_px = dimensions.inner_radius * length.clamp(0.0, 1.5);
    let half_width = width_px / 2.0;

    let tip = angle_to_coordinate(angle, length_px, center);
    let left = angle_to_coordinate(angle - FRAC_PI_2, half_width, center);
    let right = angle_to_coordinate(angle + FRAC_PI_2, half_width, center);

    smallvec![
        PointerShape::Polygon {
            points: smallvec![left, tip, right],
        },
        PointerShape::Circle {
            center,
            radius: half_width,
        },
    ]
}

fn arrow_parts(angle: f64, dimensions: &Dimensions, width_px: f64) -> SmallVec<[PointerShape; 2]> {
    let center = dimensions.center;
    let tip_radius = band_radius(dimensions, RadialPosition::Inner, 0.0);
    let base_radius = (tip_radius - width_px).max(0.0);
    let base = angle_to_coordinate(angle, base_radius, center);
    let half_width = width_px / 2.0;
    let offset = |direction: f64| {
        Point::new(
            base.x + half_width * (angle + direction).sin(),
            base.y - half_width * (angle + direction).cos(),
        )
    };

    smallvec![PointerShape::Polygon {
        points: smallvec![
            offset(-FRAC_PI_2),
            angle_to_coordinate(angle, tip_radius, center),
            offset(FRAC_PI_2),
        ],
    }]
}

fn blob_parts(angle: f64, dimensions: &Dimensions) -> SmallVec<[PointerShape; 2]> {
    let radius = band_radius(dimensions, RadialPosition::Between, 0.0);
    smallvec![PointerShape::Circle {
        center: angle_to_coordinate(angle, radius, dimensions.center),
        radius: (dimensions.band_width() / 2.0).max(0.0),
    }]
}
