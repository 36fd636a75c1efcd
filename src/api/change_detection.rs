use serde::{Deserialize, Serialize};

use super::GaugeConfig;

/// What a configuration delivery changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeTopic {
    /// Type, angles, margins, range, band width or container size.
    Dimensions,
    /// Arc segments or tick configuration.
    Arc,
    /// Pointer appearance, pointer list or value.
    Pointer,
    ValueLabel,
}

impl ChangeTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Dimensions => 1 << 0,
            Self::Arc => 1 << 1,
            Self::Pointer => 1 << 2,
            Self::ValueLabel => 1 << 3,
        }
    }
}

/// Bitmask of independent change flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChangeFlags {
    bits: u8,
}

impl ChangeFlags {
    const ALL_BITS: u8 = ChangeTopic::Dimensions.bit()
        | ChangeTopic::Arc.bit()
        | ChangeTopic::Pointer.bit()
        | ChangeTopic::ValueLabel.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: ChangeTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: ChangeTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, topic: ChangeTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// A dimensions change rebuilds everything, so it supersedes the rest.
    #[must_use]
    pub const fn is_full_rebuild(self) -> bool {
        self.contains(ChangeTopic::Dimensions)
    }
}

/// Narrow comparisons between the previous and next configuration.
///
/// Interaction switches never trigger a repaint.
#[must_use]
pub fn detect_changes(previous: Option<&GaugeConfig>, next: &GaugeConfig) -> ChangeFlags {
    let Some(previous) = previous else {
        return ChangeFlags::all();
    };

    let mut flags = ChangeFlags::none();
    if previous.gauge_type != next.gauge_type
        || previous.start_angle != next.start_angle
        || previous.end_angle != next.end_angle
        || previous.margins != next.margins
        || previous.min_value != next.min_value
        || previous.max_value != next.max_value
        || previous.arc.width != next.arc.width
    {
        return ChangeFlags::all();
    }

    let value_changed = previous.value != next.value;
    let pointers_changed = previous.pointers != next.pointers;
    if previous.arc != next.arc || previous.labels.tick_labels != next.labels.tick_labels {
        flags = flags.with_topic(ChangeTopic::Arc);
    }
    if previous.pointer != next.pointer || pointers_changed || value_changed {
        flags = flags.with_topic(ChangeTopic::Pointer);
    }
    if previous.labels.value_label != next.labels.value_label || pointers_changed || value_changed
    {
        flags = flags.with_topic(ChangeTopic::ValueLabel);
    }
    flags
}
