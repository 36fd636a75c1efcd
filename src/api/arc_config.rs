use serde::{Deserialize, Serialize};

/// Default segment palette: green, yellow, red.
pub const DEFAULT_SEGMENT_PALETTE: [&str; 3] = ["#5BE12C", "#F5CD19", "#EA4228"];
pub const DEFAULT_EMPTY_COLOR: &str = "#5C5C5C";

/// Tooltip content shown while hovering a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub text: String,
}

/// One user-described segment of the arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubArcConfig {
    /// Upper bound of the segment in value units; `None` shares the remainder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Adds a tick at this segment's limit.
    pub show_tick: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
}

impl SubArcConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_tick(mut self) -> Self {
        self.show_tick = true;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(TooltipConfig { text: text.into() });
        self
    }
}

/// Arc band configuration.
///
/// Segments come either from `sub_arcs` with explicit limits, or from a segment
/// count (`nb_sub_arcs`, else the number of sub-arcs or colors). `gradient`
/// paints one continuous band instead of discrete segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    /// Band thickness as a fraction of the outer radius.
    pub width: f64,
    pub corner_radius: f64,
    /// Angular gap between adjacent segments, in radians.
    pub padding: f64,
    pub sub_arcs: Vec<SubArcConfig>,
    pub color_array: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_sub_arcs: Option<usize>,
    pub gradient: bool,
    /// Unfilled part of the grafana progress band.
    pub empty_color: String,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            width: 0.2,
            corner_radius: 7.0,
            padding: 0.05,
            sub_arcs: Vec::new(),
            color_array: Vec::new(),
            nb_sub_arcs: None,
            gradient: false,
            empty_color: DEFAULT_EMPTY_COLOR.to_owned(),
        }
    }
}

impl ArcConfig {
    #[must_use]
    pub fn with_sub_arcs(mut self, sub_arcs: Vec<SubArcConfig>) -> Self {
        self.sub_arcs = sub_arcs;
        self
    }

    #[must_use]
    pub fn with_color_array<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_array = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_nb_sub_arcs(mut self, count: usize) -> Self {
        self.nb_sub_arcs = Some(count);
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Whether segments are generated from a count rather than explicit limits.
    #[must_use]
    pub fn uses_count_mode(&self) -> bool {
        self.nb_sub_arcs.is_some() || self.sub_arcs.is_empty()
    }
}
