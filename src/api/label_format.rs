use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::{FromPrimitive, RoundingStrategy};
use rust_decimal::Decimal;

/// Host-provided label formatter.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Optional custom formatters for the value label and tick labels.
#[derive(Clone, Default)]
pub struct LabelFormatters {
    pub value_label: Option<ValueFormatter>,
    pub tick_label: Option<ValueFormatter>,
}

impl fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFormatters")
            .field("value_label", &self.value_label.is_some())
            .field("tick_label", &self.tick_label.is_some())
            .finish()
    }
}

impl LabelFormatters {
    #[must_use]
    pub fn format_value_label(&self, value: f64, max_decimal_digits: u32) -> String {
        match &self.value_label {
            Some(formatter) => formatter(value),
            None => format_decimal(value, max_decimal_digits),
        }
    }

    #[must_use]
    pub fn format_tick_label(&self, value: f64, max_decimal_digits: u32) -> String {
        match &self.tick_label {
            Some(formatter) => formatter(value),
            None => format_decimal(value, max_decimal_digits),
        }
    }
}

/// Rounds to at most `max_decimal_digits` and trims trailing zeros.
///
/// `12.50` renders as `12.5`, `-0.001` with two digits renders as `0`.
#[must_use]
pub fn format_decimal(value: f64, max_decimal_digits: u32) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return if value.is_nan() {
            "NaN".to_owned()
        } else {
            format!("{value}")
        };
    };
    decimal
        .round_dp_with_strategy(max_decimal_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{LabelFormatters, format_decimal};

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_decimal(12.50, 2), "12.5");
        assert_eq!(format_decimal(100.0, 2), "100");
        assert_eq!(format_decimal(33.456, 2), "33.46");
        assert_eq!(format_decimal(-0.001, 2), "0");
    }

    #[test]
    fn custom_formatter_wins() {
        let formatters = LabelFormatters {
            value_label: Some(Arc::new(|value| format!("{value:.0} km/h"))),
            tick_label: None,
        };
        assert_eq!(formatters.format_value_label(88.2, 2), "88 km/h");
        assert_eq!(formatters.format_tick_label(88.25, 1), "88.3");
    }
}
