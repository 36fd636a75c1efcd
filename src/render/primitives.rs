use serde::{Deserialize, Serialize};

use crate::core::{Color, Point};
use crate::error::{GaugeError, GaugeResult};

/// One color stop of a linear gradient; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Paint used to fill a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Color),
    /// Horizontal linear gradient across the gauge bounding box.
    LinearGradient(Vec<GradientStop>),
}

impl Fill {
    fn validate(&self) -> GaugeResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(stops) => {
                if stops.is_empty() {
                    return Err(GaugeError::InvalidPrimitive(
                        "gradient must have at least one stop".to_owned(),
                    ));
                }
                let mut previous = 0.0;
                for stop in stops {
                    if !stop.offset.is_finite() || !(previous..=1.0).contains(&stop.offset) {
                        return Err(GaugeError::InvalidPrimitive(
                            "gradient stop offsets must be ascending inside [0, 1]".to_owned(),
                        ));
                    }
                    previous = stop.offset;
                    stop.color.validate()?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Path drawing command in pixel space.
///
/// Arc angles are radians measured clockwise from 12 o'clock, matching the
/// rest of the crate; `clockwise` tells the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    Close,
}

/// Filled path, used for arc segments and polygonal pointers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    /// Arc segment this path paints, for hit-testing backends.
    pub segment_index: Option<usize>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: Vec<PathCommand>, fill: Fill) -> Self {
        Self {
            commands,
            fill,
            stroke: None,
            segment_index: None,
        }
    }

    #[must_use]
    pub fn polygon(points: &[Point], fill: Fill) -> Self {
        let mut commands = Vec::with_capacity(points.len() + 1);
        for (index, point) in points.iter().enumerate() {
            commands.push(if index == 0 {
                PathCommand::MoveTo(*point)
            } else {
                PathCommand::LineTo(*point)
            });
        }
        commands.push(PathCommand::Close);
        Self::new(commands, fill)
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Option<Stroke>) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_segment_index(mut self, index: usize) -> Self {
        self.segment_index = Some(index);
        self
    }

    pub fn validate(&self) -> GaugeResult<()> {
        for command in &self.commands {
            let finite = match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point.is_finite(),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    center.is_finite()
                        && radius.is_finite()
                        && radius >= 0.0
                        && start_angle.is_finite()
                        && end_angle.is_finite()
                }
                PathCommand::Close => true,
            };
            if !finite {
                return Err(GaugeError::InvalidPrimitive(
                    "path commands must be finite".to_owned(),
                ));
            }
        }
        if let Some(stroke) = self.stroke {
            validate_stroke_width(stroke.width)?;
            stroke.color.validate()?;
        }
        self.fill.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn between(from: Point, to: Point, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    pub fn validate(self) -> GaugeResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GaugeError::InvalidPrimitive(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl CirclePrimitive {
    pub fn validate(self) -> GaugeResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GaugeError::InvalidPrimitive(
                "circle must have a finite center and non-negative radius".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            validate_stroke_width(stroke.width)?;
            stroke.color.validate()?;
        }
        self.fill.validate()
    }
}

/// Horizontal text anchor relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Draw command for one label in pixel space; `y` is the text's vertical center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            anchor,
        }
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if self.text.is_empty() {
            return Err(GaugeError::InvalidPrimitive(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GaugeError::InvalidPrimitive(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GaugeError::InvalidPrimitive(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(width: f64) -> GaugeResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(GaugeError::InvalidPrimitive(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
