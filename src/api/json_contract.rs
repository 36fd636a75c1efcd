use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};
use crate::render::SceneSink;

use super::{ChangeFlags, EngineSnapshot, GaugeConfig, GaugeEngine};

pub const GAUGE_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GaugeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl GaugeConfig {
    /// Parses either a bare config object or a versioned v1 envelope.
    ///
    /// Missing fields take their defaults, so `{}` is a valid config.
    pub fn from_json_str(input: &str) -> GaugeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            GaugeError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if value.get("schema_version").is_some() && value.get("config").is_some() {
            let payload: GaugeConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    GaugeError::InvalidConfig(format!("failed to parse config contract v1: {e}"))
                })?;
            if payload.schema_version != GAUGE_CONFIG_JSON_SCHEMA_V1 {
                return Err(GaugeError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_value(value)
            .map_err(|e| GaugeError::InvalidConfig(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> GaugeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GaugeError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> GaugeResult<String> {
        let payload = GaugeConfigJsonContractV1 {
            schema_version: GAUGE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GaugeError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GaugeResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GaugeError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> GaugeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GaugeError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GaugeError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<S: SceneSink> GaugeEngine<S> {
    /// Parses and commits a JSON config.
    pub fn set_config_json(&mut self, input: &str) -> GaugeResult<ChangeFlags> {
        let config = GaugeConfig::from_json_str(input)?;
        self.set_config(config)
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> GaugeResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
