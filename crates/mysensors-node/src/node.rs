//! Node identity and outbound message stamping.
//!
//! A `Node` knows who it is. Every message it builds starts out versioned
//! and addressed to the gateway; callers only add the payload. The parent is
//! next-hop information for the transport, never the frame's destination.

use mysensors_core::protocol::catalog::{
    Command, InternalType, SensorType, VariableType, BROADCAST_ADDRESS, GATEWAY_ADDRESS,
    NODE_SENSOR_ID,
};
use mysensors_core::protocol::Message;

use crate::config::{NodeConfig, SensorConfig};

/// Library version announced in the node presentation.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Node {
    id: u8,
    parent: u8,
    request_ack: bool,
    sketch_name: Option<String>,
    sketch_version: Option<String>,
    sensors: Vec<SensorConfig>,
}

impl Node {
    pub fn from_config(cfg: &NodeConfig) -> Self {
        Self {
            id: cfg.node.id,
            parent: cfg.node.parent,
            request_ack: cfg.node.request_ack,
            sketch_name: cfg.node.sketch_name.clone(),
            sketch_version: cfg.node.sketch_version.clone(),
            sensors: cfg.sensors.clone(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Next hop towards the gateway, for the transport.
    pub fn parent(&self) -> u8 {
        self.parent
    }

    pub fn sensors(&self) -> &[SensorConfig] {
        &self.sensors
    }

    /// Empty message from this node to the gateway.
    pub fn message(&self, command: Command, sensor: u8, msg_type: impl Into<u8>) -> Message {
        let mut msg = Message::with_sensor(sensor, msg_type);
        msg.sender = self.id;
        msg.last = self.id;
        msg.set_destination(GATEWAY_ADDRESS)
            .set_command(command)
            .set_ack(self.request_ack);
        msg
    }

    /// Frames announcing the node, its sketch, and every configured sensor.
    pub fn presentation(&self) -> Vec<Message> {
        let mut out = Vec::with_capacity(self.sensors.len() + 3);

        let mut node = self.message(Command::Presentation, NODE_SENSOR_ID, SensorType::ArduinoNode);
        node.set_str(LIBRARY_VERSION);
        out.push(node);

        if let Some(name) = &self.sketch_name {
            let mut msg = self.internal(InternalType::SketchName);
            msg.set_str(name);
            out.push(msg);
        }
        if let Some(version) = &self.sketch_version {
            let mut msg = self.internal(InternalType::SketchVersion);
            msg.set_str(version);
            out.push(msg);
        }

        for s in &self.sensors {
            let mut msg = self.message(Command::Presentation, s.id, s.kind);
            msg.set_str(s.description.as_deref().unwrap_or(""));
            out.push(msg);
        }

        tracing::debug!(node = self.id, frames = out.len(), "presentation built");
        out
    }

    /// Report a value for `sensor`; the caller sets the payload.
    pub fn set_value(&self, sensor: u8, var: VariableType) -> Message {
        self.message(Command::Set, sensor, var)
    }

    /// Ask the controller for the current value of `sensor`.
    pub fn request(&self, sensor: u8, var: VariableType) -> Message {
        self.message(Command::Req, sensor, var)
    }

    /// Internal message about the node itself.
    pub fn internal(&self, kind: InternalType) -> Message {
        self.message(Command::Internal, NODE_SENSOR_ID, kind)
    }

    /// Whether an inbound frame is addressed to this node.
    pub fn accepts(&self, msg: &Message) -> bool {
        msg.destination == self.id || msg.destination == BROADCAST_ADDRESS
    }
}
