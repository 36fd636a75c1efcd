//! gauge-rs: deterministic gauge chart engine.
//!
//! The crate turns a declarative gauge configuration into layered vector
//! primitives (arc, ticks, pointers, value label) and keeps them current as
//! the configuration, the container size and pointer animations change.
//! Drawing is delegated to a host-provided `SceneSink`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GaugeConfig, GaugeEngine};
pub use error::{GaugeError, GaugeResult};
