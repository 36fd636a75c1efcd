use serde::{Deserialize, Serialize};

use crate::core::{GaugeType, MarginRatios};

use super::{ArcConfig, LabelsConfig, PointerConfig, PointerEntry};

/// Pointer-driven interaction switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Dragging a pointer changes its value.
    pub drag: bool,
    /// Hovering a segment with a tooltip shows it.
    pub tooltips: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag: false,
            tooltips: true,
        }
    }
}

/// Declarative gauge description, delivered whole on every update.
///
/// This type is serializable so host applications can persist or exchange
/// gauge setups without inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    #[serde(rename = "type")]
    pub gauge_type: GaugeType,
    pub value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Start angle override in degrees, clockwise from 12 o'clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    /// End angle override in degrees, clockwise from 12 o'clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    pub margins: MarginRatios,
    pub arc: ArcConfig,
    pub pointer: PointerConfig,
    /// Multi-pointer mode when non-empty; `value` is then ignored.
    pub pointers: Vec<PointerEntry>,
    pub labels: LabelsConfig,
    pub interaction: InteractionConfig,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            gauge_type: GaugeType::default(),
            value: 33.0,
            min_value: 0.0,
            max_value: 100.0,
            start_angle: None,
            end_angle: None,
            margins: MarginRatios::default(),
            arc: ArcConfig::default(),
            pointer: PointerConfig::default(),
            pointers: Vec::new(),
            labels: LabelsConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl GaugeConfig {
    #[must_use]
    pub fn new(gauge_type: GaugeType) -> Self {
        Self {
            gauge_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets explicit start/end angles in degrees.
    #[must_use]
    pub fn with_angles_deg(mut self, start: f64, end: f64) -> Self {
        self.start_angle = Some(start);
        self.end_angle = Some(end);
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: MarginRatios) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcConfig) -> Self {
        self.arc = arc;
        self
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerConfig) -> Self {
        self.pointer = pointer;
        self
    }

    #[must_use]
    pub fn with_pointers(mut self, pointers: Vec<PointerEntry>) -> Self {
        self.pointers = pointers;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelsConfig) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn is_multi_pointer(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Target values of every pointer, in index order.
    #[must_use]
    pub fn pointer_values(&self) -> Vec<f64> {
        if self.pointers.is_empty() {
            vec![self.value]
        } else {
            self.pointers.iter().map(|entry| entry.value).collect()
        }
    }

    /// Resolved pointer configs, in index order.
    #[must_use]
    pub fn resolved_pointers(&self) -> Vec<PointerConfig> {
        if self.pointers.is_empty() {
            vec![self.pointer.clone()]
        } else {
            self.pointers
                .iter()
                .map(|entry| entry.resolve(&self.pointer))
                .collect()
        }
    }

    /// Explicit angle override in radians; a missing end keeps the type default.
    #[must_use]
    pub fn angle_override_radians(&self) -> Option<(f64, f64)> {
        if self.start_angle.is_none() && self.end_angle.is_none() {
            return None;
        }
        let (default_start, default_end) = self.gauge_type.default_angles();
        Some((
            self.start_angle.map_or(default_start, f64::to_radians),
            self.end_angle.map_or(default_end, f64::to_radians),
        ))
    }
}
