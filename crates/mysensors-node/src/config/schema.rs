use std::collections::HashSet;

use serde::Deserialize;

use mysensors_core::error::{Error, Result};
use mysensors_core::protocol::catalog::{
    SensorType, BROADCAST_ADDRESS, GATEWAY_ADDRESS, NODE_SENSOR_ID,
};
use mysensors_core::protocol::MAX_PAYLOAD;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub version: u32,

    pub node: NodeSection,

    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

impl NodeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::UnsupportedVersion);
        }

        self.node.validate()?;

        let mut seen = HashSet::new();
        for s in &self.sensors {
            if s.id == NODE_SENSOR_ID {
                return Err(Error::BadConfig(format!(
                    "sensor id {NODE_SENSOR_ID} is reserved for the node itself"
                )));
            }
            if !seen.insert(s.id) {
                return Err(Error::BadConfig(format!("duplicate sensor id: {}", s.id)));
            }
            if let Some(d) = &s.description {
                fits_payload(&format!("sensors[{}].description", s.id), d)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSection {
    pub id: u8,

    #[serde(default = "default_parent")]
    pub parent: u8,

    #[serde(default)]
    pub request_ack: bool,

    #[serde(default)]
    pub sketch_name: Option<String>,

    #[serde(default)]
    pub sketch_version: Option<String>,
}

impl NodeSection {
    pub fn validate(&self) -> Result<()> {
        if self.id == GATEWAY_ADDRESS || self.id == BROADCAST_ADDRESS {
            return Err(Error::BadConfig(format!(
                "node.id must be between 1 and 254, got {}",
                self.id
            )));
        }
        if self.parent == self.id {
            return Err(Error::BadConfig("node.parent must differ from node.id".into()));
        }
        if let Some(name) = &self.sketch_name {
            fits_payload("node.sketch_name", name)?;
        }
        if let Some(version) = &self.sketch_version {
            fits_payload("node.sketch_version", version)?;
        }
        Ok(())
    }
}

fn default_parent() -> u8 {
    GATEWAY_ADDRESS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    pub id: u8,
    pub kind: SensorType,
    #[serde(default)]
    pub description: Option<String>,
}

// Strings sent in one frame would be silently truncated; reject them here instead.
fn fits_payload(field: &str, s: &str) -> Result<()> {
    if s.len() > MAX_PAYLOAD {
        return Err(Error::BadConfig(format!(
            "{field} must fit in {MAX_PAYLOAD} bytes, got {}",
            s.len()
        )));
    }
    Ok(())
}
