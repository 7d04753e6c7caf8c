//! Frame vectors: a received frame in hex plus the header it must decode to,
//! or the error code it must be rejected with.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::Path;

use bytes::Bytes;
use serde::Deserialize;

use mysensors_core::protocol::Message;

const VECTOR_DIR: &str = "tests/vectors";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameVector {
    pub description: String,
    pub frame_hex: String,
    #[serde(default)]
    pub expect: Option<ExpectFrame>,
    #[serde(default)]
    pub expect_error: Option<String>,
}

impl FrameVector {
    pub fn raw(&self) -> Bytes {
        let raw = hex::decode(&self.frame_hex)
            .unwrap_or_else(|e| panic!("{}: invalid frame_hex: {e}", self.description));
        Bytes::from(raw)
    }
}

/// Header fields and display rendering of a decoded frame.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectFrame {
    pub version: u8,
    pub length: u8,
    pub command: u8,
    pub ack: bool,
    pub payload_type: u8,
    pub sender: u8,
    pub last: u8,
    pub destination: u8,
    #[serde(rename = "type")]
    pub msg_type: u8,
    pub sensor: u8,
    pub rendered: String,
}

impl ExpectFrame {
    pub fn of(msg: &Message) -> Self {
        let mut rendered = String::new();
        msg.get_string(&mut rendered);
        Self {
            version: msg.version(),
            length: msg.length(),
            command: msg.command(),
            ack: msg.ack(),
            payload_type: msg.payload_type(),
            sender: msg.sender,
            last: msg.last,
            destination: msg.destination,
            msg_type: msg.msg_type,
            sensor: msg.sensor,
            rendered,
        }
    }
}

/// Every vector in the vector directory, sorted by file name.
pub fn load_all() -> Vec<(String, FrameVector)> {
    let mut names: Vec<String> = fs::read_dir(VECTOR_DIR)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let s = fs::read_to_string(Path::new(VECTOR_DIR).join(&name)).unwrap();
            let v = serde_json::from_str(&s)
                .unwrap_or_else(|e| panic!("{name}: bad vector json: {e}"));
            (name, v)
        })
        .collect()
}
