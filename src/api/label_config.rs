use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::validation::resolve_color;

/// Which side of the arc tick marks and their labels are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickPlacement {
    #[default]
    Outer,
    Inner,
}

/// Value label behavior when several pointers are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MultiPointerLabelMode {
    /// Show the first pointer's value only.
    #[default]
    Primary,
    /// Stack one label per pointer.
    All,
    None,
}

/// Tick line overrides; `None` fields fall through to the previous level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickLineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_arc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
}

/// Tick text overrides; `None` fields fall through to the previous level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickValueConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_decimal_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
}

/// Fully resolved tick line style, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLineStyle {
    pub width: f64,
    pub length: f64,
    pub color: Color,
    pub distance_from_arc: f64,
    pub hide: bool,
}

impl Default for TickLineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            length: 7.0,
            color: Color::from_rgb8(173, 172, 171),
            distance_from_arc: 3.0,
            hide: false,
        }
    }
}

/// Fully resolved tick text style, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickValueStyle {
    pub font_size: f64,
    pub color: Color,
    pub max_decimal_digits: u32,
    pub hide: bool,
}

impl Default for TickValueStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            color: Color::from_rgb8(173, 172, 171),
            max_decimal_digits: 2,
            hide: false,
        }
    }
}

impl TickLineConfig {
    /// Applies the explicitly set fields on top of `base`.
    #[must_use]
    pub fn overlay(&self, base: TickLineStyle) -> TickLineStyle {
        TickLineStyle {
            width: self.width.unwrap_or(base.width),
            length: self.length.unwrap_or(base.length),
            color: self
                .color
                .as_deref()
                .map_or(base.color, |raw| resolve_color(raw, base.color, "tick line color")),
            distance_from_arc: self.distance_from_arc.unwrap_or(base.distance_from_arc),
            hide: self.hide.unwrap_or(base.hide),
        }
    }
}

impl TickValueConfig {
    /// Applies the explicitly set fields on top of `base`.
    #[must_use]
    pub fn overlay(&self, base: TickValueStyle) -> TickValueStyle {
        TickValueStyle {
            font_size: self.font_size.unwrap_or(base.font_size),
            color: self
                .color
                .as_deref()
                .map_or(base.color, |raw| resolve_color(raw, base.color, "tick value color")),
            max_decimal_digits: self.max_decimal_digits.unwrap_or(base.max_decimal_digits),
            hide: self.hide.unwrap_or(base.hide),
        }
    }
}

/// One explicitly requested tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickConfig {
    pub value: f64,
    pub value_config: TickValueConfig,
    pub line_config: TickLineConfig,
}

impl TickConfig {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickLabelsConfig {
    #[serde(rename = "type")]
    pub placement: TickPlacement,
    pub hide_min_max: bool,
    pub ticks: Vec<TickConfig>,
    pub default_tick_value_config: TickValueConfig,
    pub default_tick_line_config: TickLineConfig,
    pub auto_space_tick_labels: bool,
    /// Percentages inside `[center_band_start, center_band_end]` get middle-anchored text.
    pub center_band_start: f64,
    pub center_band_end: f64,
}

impl Default for TickLabelsConfig {
    fn default() -> Self {
        Self {
            placement: TickPlacement::Outer,
            hide_min_max: false,
            ticks: Vec::new(),
            default_tick_value_config: TickValueConfig::default(),
            default_tick_line_config: TickLineConfig::default(),
            auto_space_tick_labels: false,
            center_band_start: 0.35,
            center_band_end: 0.65,
        }
    }
}

impl TickLabelsConfig {
    #[must_use]
    pub fn with_ticks<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.ticks = values.into_iter().map(TickConfig::new).collect();
        self
    }

    #[must_use]
    pub fn with_auto_space(mut self, enabled: bool) -> Self {
        self.auto_space_tick_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: TickPlacement) -> Self {
        self.placement = placement;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueLabelConfig {
    pub hide: bool,
    /// Font size in pixels at a 100 px outer radius.
    pub font_size: f64,
    pub color: String,
    /// Paint the label with the color of the segment holding the value.
    pub match_color_with_arc: bool,
    pub max_decimal_digits: u32,
    pub offset_x: f64,
    pub offset_y: f64,
    pub multi_pointer_display: MultiPointerLabelMode,
}

impl Default for ValueLabelConfig {
    fn default() -> Self {
        Self {
            hide: false,
            font_size: 35.0,
            color: "#FFFFFF".to_owned(),
            match_color_with_arc: false,
            max_decimal_digits: 2,
            offset_x: 0.0,
            offset_y: 0.0,
            multi_pointer_display: MultiPointerLabelMode::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LabelsConfig {
    pub value_label: ValueLabelConfig,
    pub tick_labels: TickLabelsConfig,
}
