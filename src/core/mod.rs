pub mod animation;
pub mod color;
pub mod layout;
pub mod pointer_shape;
pub mod types;
pub mod value_scale;

pub use animation::{Easing, Tween, TweenSample, TweenTiming};
pub use color::{Color, Hsl, interpolate_hsl, resolve_segment_colors};
pub use layout::{Dimensions, GaugeType, LayoutInput, MIN_PLACEMENT_RADIUS_PX, MarginRatios};
pub use pointer_shape::{PointerGeometry, PointerKind, PointerShape, PointerShapeParams};
pub use types::{ContainerSize, Margins, Point};
pub use value_scale::{
    RadialPosition, ValueScale, angle_to_coordinate, band_coordinate, band_radius, point_to_angle,
};
