use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses a CSS color string.
    ///
    /// Supported forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` (comma or space separated) and a handful of named colors.
    pub fn parse_css(input: &str) -> GaugeResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| invalid_color(input))?;
            return parse_rgb_function(body).ok_or_else(|| invalid_color(input));
        }

        named_color(&lower).ok_or_else(|| invalid_color(input))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|channel| {
            let clamped = if channel.is_finite() {
                channel.clamp(0.0, 1.0)
            } else {
                0.0
            };
            (clamped * 255.0).round() as u8
        })
    }

    pub fn validate(self) -> GaugeResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GaugeError::InvalidPrimitive(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f64::EPSILON {
            // Achromatic: hue is undefined, and so is saturation at pure black/white.
            let saturation = if lightness > 0.0 && lightness < 1.0 {
                Some(0.0)
            } else {
                None
            };
            return Hsl {
                hue: None,
                saturation,
                lightness,
                alpha: self.alpha,
            };
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        let hue = if max == self.red {
            (self.green - self.blue) / delta + if self.green < self.blue { 6.0 } else { 0.0 }
        } else if max == self.green {
            (self.blue - self.red) / delta + 2.0
        } else {
            (self.red - self.green) / delta + 4.0
        } * 60.0;

        Hsl {
            hue: Some(hue),
            saturation: Some(saturation),
            lightness,
            alpha: self.alpha,
        }
    }
}

/// HSL color where hue/saturation may be undefined for achromatic colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees `[0, 360)`.
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsl {
    #[must_use]
    pub fn to_color(self) -> Color {
        let hue = self.hue.unwrap_or(0.0).rem_euclid(360.0);
        let saturation = self.saturation.unwrap_or(0.0).clamp(0.0, 1.0);
        let lightness = self.lightness.clamp(0.0, 1.0);

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;

        Color::rgba(
            hue_to_channel(hue + 120.0, m1, m2),
            hue_to_channel(hue, m1, m2),
            hue_to_channel(hue - 120.0, m1, m2),
            self.alpha.clamp(0.0, 1.0),
        )
    }
}

fn hue_to_channel(hue: f64, m1: f64, m2: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    if hue < 60.0 {
        m1 + (m2 - m1) * hue / 60.0
    } else if hue < 180.0 {
        m2
    } else if hue < 240.0 {
        m1 + (m2 - m1) * (240.0 - hue) / 60.0
    } else {
        m1
    }
}

/// Interpolates between two colors in HSL space, taking the shortest hue path.
///
/// An undefined hue or saturation on one side borrows the other side's value,
/// so gradients into black or white keep their hue.
#[must_use]
pub fn interpolate_hsl(from: Color, to: Color, t: f64) -> Color {
    let a = from.to_hsl();
    let b = to.to_hsl();
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let hue = match (a.hue, b.hue) {
        (Some(h0), Some(h1)) => {
            let mut delta = h1 - h0;
            if delta > 180.0 {
                delta -= 360.0;
            } else if delta < -180.0 {
                delta += 360.0;
            }
            Some(h0 + delta * t)
        }
        (Some(h), None) | (None, Some(h)) => Some(h),
        (None, None) => None,
    };
    let saturation = match (a.saturation, b.saturation) {
        (Some(s0), Some(s1)) => Some(s0 + (s1 - s0) * t),
        (Some(s), None) | (None, Some(s)) => Some(s),
        (None, None) => None,
    };

    Hsl {
        hue,
        saturation,
        lightness: a.lightness + (b.lightness - a.lightness) * t,
        alpha: a.alpha + (b.alpha - a.alpha) * t,
    }
    .to_color()
}

/// Resolves the per-segment color list for `count` segments.
///
/// When `colors.len() == count` the input is returned unchanged. Otherwise the
/// result is an HSL ramp from the first to the last supplied color whose
/// endpoints are exactly those colors.
#[must_use]
pub fn resolve_segment_colors(colors: &[Color], count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    if colors.len() == count {
        return colors.to_vec();
    }
    let (Some(&first), Some(&last)) = (colors.first(), colors.last()) else {
        return Vec::new();
    };
    if count == 1 || colors.len() == 1 {
        return vec![first; count];
    }

    let steps = (count - 1) as f64;
    (0..count)
        .map(|index| match index {
            0 => first,
            i if i == count - 1 => last,
            i => interpolate_hsl(first, last, i as f64 / steps),
        })
        .collect()
}

fn invalid_color(input: &str) -> GaugeError {
    GaugeError::InvalidConfig(format!("unparseable color `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    let [r, g, b, a] = match hex.len() {
        3 | 4 => {
            let mut channels = [255u8; 4];
            for (slot, index) in channels.iter_mut().zip(0..hex.len()) {
                *slot = nibble(index)? * 17;
            }
            channels
        }
        6 | 8 => {
            let mut channels = [255u8; 4];
            for (slot, index) in channels.iter_mut().zip((0..hex.len()).step_by(2)) {
                *slot = byte(index)?;
            }
            channels
        }
        _ => return None,
    };

    Some(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    // `f64::from_str` accepts "nan" and "inf"; neither is a CSS number.
    let number = |raw: &str| raw.parse::<f64>().ok().filter(|v| v.is_finite());
    let channel = |raw: &str| -> Option<f64> {
        if let Some(percent) = raw.strip_suffix('%') {
            return number(percent).map(|v| (v / 100.0).clamp(0.0, 1.0));
        }
        number(raw).map(|v| (v / 255.0).clamp(0.0, 1.0))
    };
    let alpha = match parts.get(3) {
        Some(raw) => match raw.strip_suffix('%') {
            Some(percent) => number(percent)? / 100.0,
            None => number(raw)?,
        },
        None => 1.0,
    };

    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha.clamp(0.0, 1.0),
    ))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "yellow" => Color::from_rgb8(255, 255, 0),
        "orange" => Color::from_rgb8(255, 165, 0),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        "transparent" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}
