use serde::{Deserialize, Serialize};

/// Paint layers of one gauge, each replaced independently by scene patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SceneLayerKind {
    Arc,
    Ticks,
    Pointers,
    ValueLabel,
}

impl SceneLayerKind {
    /// Back-to-front paint order.
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Arc, Self::Ticks, Self::Pointers, Self::ValueLabel];
}
