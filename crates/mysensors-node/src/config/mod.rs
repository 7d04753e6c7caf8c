//! Node config loader (strict parsing).

pub mod schema;

use std::fs;

use mysensors_core::error::{Error, Result};

pub use schema::{NodeConfig, NodeSection, SensorConfig};

pub fn load_from_file(path: &str) -> Result<NodeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| Error::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<NodeConfig> {
    let cfg: NodeConfig =
        serde_yaml::from_str(s).map_err(|e| Error::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
