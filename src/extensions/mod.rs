//! Observer hooks for host-side extensions.
//!
//! Plugins only observe; they never reach into engine state.

pub mod plugins;

pub use plugins::{GaugeEvent, GaugePlugin, PluginContext};
