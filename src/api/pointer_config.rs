use serde::{Deserialize, Serialize};

use crate::core::{Easing, PointerKind, PointerShapeParams, TweenTiming};

pub const DEFAULT_POINTER_COLOR: &str = "#464A4F";

/// Pointer appearance and animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    #[serde(rename = "type")]
    pub kind: PointerKind,
    pub color: String,
    /// Needle hub color; defaults to `color`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    /// Outline width in pixels; `0` disables the outline.
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Needle length as a fraction of the inner radius.
    pub length: f64,
    /// Base width in pixels at a 250 px outer radius.
    pub width: f64,
    pub animate: bool,
    /// Elastic easing instead of exponential decay.
    pub elastic: bool,
    /// Explicit easing, overriding `elastic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    pub animation_duration_ms: f64,
    pub animation_delay_ms: f64,
    pub hide: bool,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            kind: PointerKind::Needle,
            color: DEFAULT_POINTER_COLOR.to_owned(),
            base_color: None,
            stroke_width: 0.0,
            stroke_color: "#FFFFFF".to_owned(),
            length: 0.70,
            width: 20.0,
            animate: true,
            elastic: false,
            easing: None,
            animation_duration_ms: 3000.0,
            animation_delay_ms: 100.0,
            hide: false,
        }
    }
}

impl PointerConfig {
    #[must_use]
    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration_ms: f64, delay_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self.animation_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_elastic(mut self, elastic: bool) -> Self {
        self.elastic = elastic;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing.unwrap_or(if self.elastic {
            Easing::Elastic
        } else {
            Easing::ExpOut
        })
    }

    /// Timing of value-change transitions; instant when animation is disabled.
    #[must_use]
    pub fn timing(&self) -> TweenTiming {
        if !self.animate {
            return TweenTiming::instant();
        }
        TweenTiming {
            delay_ms: self.animation_delay_ms,
            duration_ms: self.animation_duration_ms,
            easing: self.easing(),
        }
    }

    #[must_use]
    pub fn shape_params(&self) -> PointerShapeParams {
        PointerShapeParams {
            length: self.length,
            width: self.width,
        }
    }
}

/// One pointer of a multi-pointer gauge.
///
/// Unset fields inherit from the gauge-level `PointerConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PointerEntry {
    pub value: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PointerKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Caption used by the stacked value label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub hide: bool,
}

impl PointerEntry {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Gauge-level pointer config with this entry's overrides applied.
    #[must_use]
    pub fn resolve(&self, base: &PointerConfig) -> PointerConfig {
        let mut resolved = base.clone();
        if let Some(kind) = self.kind {
            resolved.kind = kind;
        }
        if let Some(color) = &self.color {
            resolved.color.clone_from(color);
        }
        if let Some(length) = self.length {
            resolved.length = length;
        }
        if let Some(width) = self.width {
            resolved.width = width;
        }
        resolved.hide = base.hide || self.hide;
        resolved
    }
}
