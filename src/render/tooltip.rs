use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Commands for the single tooltip element shared by all arc segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipCommand {
    Show {
        segment_index: usize,
        text: String,
        position: Point,
    },
    /// Reposition while the same segment keeps ownership.
    Move {
        segment_index: usize,
        position: Point,
    },
    /// Clears content and visibility; always sent before another segment claims the tooltip.
    Hide { segment_index: usize },
}

impl TooltipCommand {
    #[must_use]
    pub fn segment_index(&self) -> usize {
        match self {
            Self::Show { segment_index, .. }
            | Self::Move { segment_index, .. }
            | Self::Hide { segment_index } => *segment_index,
        }
    }
}
