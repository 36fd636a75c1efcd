use tracing::warn;

use crate::core::Color;

use super::{
    GaugeConfig, PointerConfig, TickLabelsConfig, TickLineConfig, TickValueConfig,
    ValueLabelConfig,
};

/// Parses a configured color, falling back to `fallback` on malformed input.
pub(crate) fn resolve_color(raw: &str, fallback: Color, field: &str) -> Color {
    match Color::parse_css(raw) {
        Ok(color) => color,
        Err(err) => {
            warn!(field, error = %err, "falling back to default color");
            fallback
        }
    }
}

/// Repairs a configuration so downstream geometry never sees NaN, negative
/// sizes or inverted angle overrides.
///
/// Every repair is logged; nothing here fails.
#[must_use]
pub fn sanitize_config(mut config: GaugeConfig) -> GaugeConfig {
    let defaults = GaugeConfig::default();
    if !config.min_value.is_finite() || !config.max_value.is_finite() {
        warn!(
            min_value = config.min_value,
            max_value = config.max_value,
            "non-finite range, using default range"
        );
        config.min_value = defaults.min_value;
        config.max_value = defaults.max_value;
    }
    if config.max_value <= config.min_value {
        warn!(
            min_value = config.min_value,
            max_value = config.max_value,
            "empty or inverted range, every value maps to the start"
        );
    }

    if !config.value.is_finite() {
        warn!("non-finite value, using min_value");
        config.value = config.min_value;
    }
    for entry in &mut config.pointers {
        if !entry.value.is_finite() {
            warn!("non-finite pointer value, using min_value");
            entry.value = config.min_value;
        }
        entry.length = entry.length.filter(|length| length.is_finite());
        entry.width = entry.width.filter(|width| width.is_finite());
    }

    sanitize_angles(&mut config);

    let arc = &mut config.arc;
    arc.width = finite_or(arc.width, defaults.arc.width, "arc.width").clamp(0.0, 1.0);
    arc.corner_radius =
        finite_or(arc.corner_radius, defaults.arc.corner_radius, "arc.corner_radius").max(0.0);
    arc.padding = finite_or(arc.padding, defaults.arc.padding, "arc.padding").max(0.0);
    if arc.nb_sub_arcs == Some(0) {
        warn!("arc.nb_sub_arcs is zero, ignoring it");
        arc.nb_sub_arcs = None;
    }
    for sub_arc in &mut arc.sub_arcs {
        if sub_arc.limit.is_some_and(|limit| !limit.is_finite()) {
            warn!("non-finite sub-arc limit, treating it as unset");
            sub_arc.limit = None;
        }
    }

    sanitize_pointer(&mut config.pointer);
    sanitize_tick_labels(&mut config.labels.tick_labels);
    sanitize_value_label(&mut config.labels.value_label);
    config
}

fn sanitize_angles(config: &mut GaugeConfig) {
    for (angle, field) in [
        (&mut config.start_angle, "start_angle"),
        (&mut config.end_angle, "end_angle"),
    ] {
        if angle.is_some_and(|degrees| !degrees.is_finite()) {
            warn!(field, "non-finite angle override, using type default");
            *angle = None;
        }
    }

    let Some((start, end)) = config.angle_override_radians() else {
        return;
    };
    if start == end {
        warn!("start and end angle coincide, using type defaults");
        config.start_angle = None;
        config.end_angle = None;
    } else if start > end {
        warn!("start angle after end angle, swapping");
        config.start_angle = Some(end.to_degrees());
        config.end_angle = Some(start.to_degrees());
    }
}

fn sanitize_pointer(pointer: &mut PointerConfig) {
    let defaults = PointerConfig::default();
    pointer.length = finite_or(pointer.length, defaults.length, "pointer.length").max(0.0);
    pointer.width = finite_or(pointer.width, defaults.width, "pointer.width").max(0.0);
    pointer.stroke_width = finite_or(pointer.stroke_width, 0.0, "pointer.stroke_width").max(0.0);
    pointer.animation_duration_ms = finite_or(
        pointer.animation_duration_ms,
        defaults.animation_duration_ms,
        "pointer.animation_duration_ms",
    )
    .max(0.0);
    pointer.animation_delay_ms = finite_or(
        pointer.animation_delay_ms,
        defaults.animation_delay_ms,
        "pointer.animation_delay_ms",
    )
    .max(0.0);
}

fn sanitize_tick_labels(ticks: &mut TickLabelsConfig) {
    let band_ok = ticks.center_band_start.is_finite()
        && ticks.center_band_end.is_finite()
        && 0.0 <= ticks.center_band_start
        && ticks.center_band_start <= ticks.center_band_end
        && ticks.center_band_end <= 1.0;
    if !band_ok {
        warn!(
            start = ticks.center_band_start,
            end = ticks.center_band_end,
            "invalid tick center band, using defaults"
        );
        let defaults = TickLabelsConfig::default();
        ticks.center_band_start = defaults.center_band_start;
        ticks.center_band_end = defaults.center_band_end;
    }
    ticks.ticks.retain(|tick| {
        let keep = tick.value.is_finite();
        if !keep {
            warn!("dropping non-finite tick value");
        }
        keep
    });

    sanitize_tick_line(&mut ticks.default_tick_line_config);
    sanitize_tick_value(&mut ticks.default_tick_value_config);
    for tick in &mut ticks.ticks {
        sanitize_tick_line(&mut tick.line_config);
        sanitize_tick_value(&mut tick.value_config);
    }
}

fn sanitize_tick_line(line: &mut TickLineConfig) {
    line.width = non_negative_override(line.width, "tick line width");
    line.length = non_negative_override(line.length, "tick line length");
    line.distance_from_arc =
        non_negative_override(line.distance_from_arc, "tick line distance_from_arc");
}

fn sanitize_tick_value(value: &mut TickValueConfig) {
    value.font_size = non_negative_override(value.font_size, "tick value font_size");
}

/// Drops an override that is non-finite or negative so the next precedence level applies.
fn non_negative_override(value: Option<f64>, field: &str) -> Option<f64> {
    value.filter(|v| {
        let keep = v.is_finite() && *v >= 0.0;
        if !keep {
            warn!(field, value = *v, "invalid tick style override, ignoring it");
        }
        keep
    })
}

fn sanitize_value_label(label: &mut ValueLabelConfig) {
    let defaults = ValueLabelConfig::default();
    if !label.font_size.is_finite() || label.font_size <= 0.0 {
        warn!(
            font_size = label.font_size,
            "invalid value label font size, using default"
        );
        label.font_size = defaults.font_size;
    }
    label.offset_x = finite_or(label.offset_x, 0.0, "value_label.offset_x");
    label.offset_y = finite_or(label.offset_y, 0.0, "value_label.offset_y");
}

fn finite_or(value: f64, fallback: f64, field: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(field, "non-finite config value, using default");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_config;
    use crate::api::GaugeConfig;

    #[test]
    fn swapped_angles_are_reordered() {
        let config = sanitize_config(GaugeConfig::default().with_angles_deg(90.0, -90.0));
        assert_eq!(config.start_angle, Some(-90.0));
        assert_eq!(config.end_angle, Some(90.0));
    }

    #[test]
    fn non_finite_numbers_fall_back() {
        let mut config = GaugeConfig::default().with_value(f64::NAN);
        config.arc.width = f64::INFINITY;
        config.pointer.animation_duration_ms = -5.0;
        let config = sanitize_config(config);
        assert_eq!(config.value, 0.0);
        assert_eq!(config.arc.width, 0.2);
        assert_eq!(config.pointer.animation_duration_ms, 0.0);
    }
}
