use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Color, ValueScale, resolve_segment_colors};
use crate::render::GradientStop;

use super::arc_config::{ArcConfig, DEFAULT_SEGMENT_PALETTE};
use super::validation::resolve_color;

/// Segment count used when nothing in the config implies one.
const DEFAULT_SEGMENT_COUNT: usize = DEFAULT_SEGMENT_PALETTE.len();

/// One normalized, colored segment of the arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcDatum {
    /// Fraction of the full arc covered by this segment.
    pub percentage_length: f64,
    /// Upper bound in value units.
    pub limit: f64,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Source sub-arc, used to route hover and click events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_arc_index: Option<usize>,
    pub show_tick: bool,
}

/// Output of the segmentation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegmentation {
    /// Normalized data covering the whole range.
    pub data: Vec<ArcDatum>,
    /// Color stops at each datum's cumulative end, set in gradient mode only.
    pub gradient: Option<Vec<GradientStop>>,
}

impl ArcSegmentation {
    /// Builds arc data for `arc` over `[min_value, max_value]`.
    #[must_use]
    pub fn build(arc: &ArcConfig, min_value: f64, max_value: f64) -> Self {
        let data = build_arc_data(arc, min_value, max_value);
        let gradient = arc.gradient.then(|| gradient_stops(&data));
        Self { data, gradient }
    }

    /// Segments actually painted: one full-length band in gradient mode.
    #[must_use]
    pub fn painted_segments(&self) -> Vec<ArcDatum> {
        match &self.gradient {
            Some(_) => {
                let first = self.data.first();
                vec![ArcDatum {
                    percentage_length: 1.0,
                    limit: self.data.last().map_or(0.0, |datum| datum.limit),
                    color: first.map_or(Color::BLACK, |datum| datum.color),
                    tooltip: None,
                    sub_arc_index: None,
                    show_tick: false,
                }]
            }
            None => self.data.clone(),
        }
    }

    /// `(start, end)` percentages of every datum, in order.
    #[must_use]
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        let mut cumulative = 0.0;
        self.data
            .iter()
            .map(|datum| {
                let start = cumulative;
                cumulative += datum.percentage_length;
                (start, cumulative.min(1.0))
            })
            .collect()
    }

    /// Index of the datum containing `percentage`; ends belong to the lower segment.
    #[must_use]
    pub fn segment_at(&self, percentage: f64) -> Option<usize> {
        if self.data.is_empty() || !percentage.is_finite() {
            return None;
        }
        let percentage = percentage.clamp(0.0, 1.0);
        let bounds = self.bounds();
        bounds
            .iter()
            .position(|&(start, end)| end > start && percentage <= end)
            .or(Some(bounds.len() - 1))
    }

    /// Color of the datum containing `percentage`.
    #[must_use]
    pub fn color_at(&self, percentage: f64) -> Option<Color> {
        self.segment_at(percentage)
            .and_then(|index| self.data.get(index))
            .map(|datum| datum.color)
    }
}

/// Normalizes the arc config into data whose lengths sum to one.
#[must_use]
pub fn build_arc_data(arc: &ArcConfig, min_value: f64, max_value: f64) -> Vec<ArcDatum> {
    let scale = ValueScale::new(min_value, max_value, 0.0, 1.0);
    let data = if arc.uses_count_mode() {
        count_mode_data(arc, scale)
    } else {
        explicit_limits_data(arc, scale)
    };
    debug!(
        segments = data.len(),
        count_mode = arc.uses_count_mode(),
        gradient = arc.gradient,
        "arc data rebuilt"
    );
    data
}

fn count_mode_data(arc: &ArcConfig, scale: ValueScale) -> Vec<ArcDatum> {
    let count = arc
        .nb_sub_arcs
        .filter(|count| *count > 0)
        .or_else(|| (!arc.sub_arcs.is_empty()).then_some(arc.sub_arcs.len()))
        .or_else(|| (!arc.color_array.is_empty()).then_some(arc.color_array.len()))
        .unwrap_or(DEFAULT_SEGMENT_COUNT);
    let colors = segment_colors(arc, count);
    let (min_value, max_value) = scale.range();
    let span = scale.span().unwrap_or(0.0);
    let length = 1.0 / count as f64;

    (0..count)
        .map(|index| {
            let sub_arc = arc.sub_arcs.get(index);
            let limit = if index + 1 == count {
                max_value
            } else {
                min_value + (index + 1) as f64 * span / count as f64
            };
            ArcDatum {
                percentage_length: length,
                limit,
                color: colors[index],
                tooltip: sub_arc.and_then(|sub_arc| sub_arc.tooltip.as_ref().map(|t| t.text.clone())),
                sub_arc_index: sub_arc.map(|_| index),
                show_tick: sub_arc.is_some_and(|sub_arc| sub_arc.show_tick),
            }
        })
        .collect()
}

fn explicit_limits_data(arc: &ArcConfig, scale: ValueScale) -> Vec<ArcDatum> {
    let (min_value, max_value) = scale.range();
    let count = arc.sub_arcs.len();
    let colors = segment_colors(arc, count);

    let mut limits: Vec<Option<f64>> = arc
        .sub_arcs
        .iter()
        .map(|sub_arc| sub_arc.limit.map(|limit| clamp_limit(limit, min_value, max_value)))
        .collect();
    sort_explicit_limits(&mut limits);

    let mut data = Vec::with_capacity(count);
    let mut cumulative = 0.0;
    let mut index = 0;
    while index < count {
        if let Some(limit) = limits[index] {
            let end = scale.value_to_percentage(limit).max(cumulative);
            data.push(datum_for(arc, index, end - cumulative, limit, colors[index]));
            cumulative = end;
            index += 1;
            continue;
        }

        // Run of unlimited segments sharing the span up to the next explicit limit.
        let run_end = limits[index..]
            .iter()
            .position(Option::is_some)
            .map_or(count, |offset| index + offset);
        let target = limits
            .get(run_end)
            .copied()
            .flatten()
            .map_or(1.0, |limit| scale.value_to_percentage(limit).max(cumulative));
        let share = (target - cumulative) / (run_end - index) as f64;
        for run_index in index..run_end {
            let end = if run_index + 1 == run_end {
                target
            } else {
                cumulative + share
            };
            let limit = scale.percentage_to_value(end);
            data.push(datum_for(arc, run_index, end - cumulative, limit, colors[run_index]));
            cumulative = end;
        }
        index = run_end;
    }

    // The last segment always closes the range.
    if let Some(last) = data.last_mut() {
        last.percentage_length += 1.0 - cumulative;
        last.limit = max_value;
    }
    if scale.span().is_none() {
        warn!(min_value, max_value, "empty value range, arc collapses to one segment");
        for (position, datum) in data.iter_mut().enumerate() {
            datum.percentage_length = if position + 1 == count { 1.0 } else { 0.0 };
        }
    }
    data
}

fn datum_for(arc: &ArcConfig, index: usize, length: f64, limit: f64, color: Color) -> ArcDatum {
    let sub_arc = &arc.sub_arcs[index];
    ArcDatum {
        percentage_length: length.max(0.0),
        limit,
        color,
        tooltip: sub_arc.tooltip.as_ref().map(|tooltip| tooltip.text.clone()),
        sub_arc_index: Some(index),
        show_tick: sub_arc.show_tick,
    }
}

fn clamp_limit(limit: f64, min_value: f64, max_value: f64) -> f64 {
    if max_value <= min_value {
        return max_value;
    }
    if limit < min_value || limit > max_value {
        warn!(limit, min_value, max_value, "sub-arc limit outside range, clamping");
    }
    limit.clamp(min_value, max_value)
}

/// Re-sorts explicit limits in place, leaving unlimited positions untouched.
fn sort_explicit_limits(limits: &mut [Option<f64>]) {
    let mut explicit: Vec<f64> = limits.iter().flatten().copied().collect();
    if explicit.windows(2).all(|pair| pair[0] <= pair[1]) {
        return;
    }
    warn!("sub-arc limits are not monotonic, re-sorting");
    explicit.sort_by(f64::total_cmp);
    let mut sorted = explicit.into_iter();
    for slot in limits.iter_mut().filter(|slot| slot.is_some()) {
        *slot = sorted.next();
    }
}

/// Segment colors: explicit sub-arc colors win, the rest come from the
/// configured color array (or default palette) resolved to `count` entries.
fn segment_colors(arc: &ArcConfig, count: usize) -> Vec<Color> {
    let explicit: Vec<Option<Color>> = (0..count)
        .map(|index| {
            arc.sub_arcs
                .get(index)
                .and_then(|sub_arc| sub_arc.color.as_deref())
                .map(|raw| resolve_color(raw, Color::BLACK, "sub-arc color"))
        })
        .collect();
    if explicit.iter().all(Option::is_some) {
        return explicit.into_iter().flatten().collect();
    }

    let palette: Vec<Color> = if arc.color_array.is_empty() {
        DEFAULT_SEGMENT_PALETTE
            .iter()
            .map(|raw| resolve_color(raw, Color::BLACK, "default palette"))
            .collect()
    } else {
        arc.color_array
            .iter()
            .map(|raw| resolve_color(raw, Color::BLACK, "arc color_array"))
            .collect()
    };
    let mut resolved = resolve_segment_colors(&palette, count);
    for (slot, color) in resolved.iter_mut().zip(explicit) {
        if let Some(color) = color {
            *slot = color;
        }
    }
    resolved
}

fn gradient_stops(data: &[ArcDatum]) -> Vec<GradientStop> {
    let mut cumulative = 0.0_f64;
    data.iter()
        .map(|datum| {
            cumulative += datum.percentage_length;
            GradientStop {
                offset: cumulative.clamp(0.0, 1.0),
                color: datum.color,
            }
        })
        .collect()
}
