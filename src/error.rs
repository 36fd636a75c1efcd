use thiserror::Error;

pub type GaugeResult<T> = Result<T, GaugeError>;

#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("invalid gauge config: {0}")]
    InvalidConfig(String),

    #[error("unknown pointer variant: `{0}` (expected needle, arrow or blob)")]
    UnknownPointerVariant(String),

    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("scene sink failure: {0}")]
    Sink(String),
}
