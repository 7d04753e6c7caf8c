//! MySensors node frame console.
//!
//! - Loads the node config (strict YAML, path from argv, default `mysensors.yaml`)
//! - Writes the node's presentation frames to stdout as hex, one per line
//! - Reads hex frames from stdin, decodes and classifies them, and logs them
//!
//! Logs go to stderr so stdout stays a clean frame stream.

use std::io::{self, BufRead, Write};

use bytes::Bytes;
use tracing_subscriber::{fmt, EnvFilter};

use mysensors_core::error::{Error, Result};
use mysensors_core::protocol::codec::encode_frame;
use mysensors_node::inbound::{self, Inbound};
use mysensors_node::{config, Node};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mysensors.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let node = Node::from_config(&cfg);

    tracing::info!(
        node = node.id(),
        parent = node.parent(),
        sensors = node.sensors().len(),
        "mysensors-node starting"
    );

    let mut stdout = io::stdout().lock();
    for msg in node.presentation() {
        writeln!(stdout, "{}", hex::encode(encode_frame(&msg))).map_err(io_err)?;
    }
    stdout.flush().map_err(io_err)?;

    let mut render = String::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let frame = match read_frame(line) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "dropping frame");
                continue;
            }
        };

        let msg = frame.message();
        if !node.accepts(msg) {
            tracing::debug!(destination = msg.destination, "frame addressed elsewhere");
            continue;
        }

        tracing::info!(
            kind = frame.label(),
            sender = msg.sender,
            last = msg.last,
            sensor = msg.sensor,
            msg_type = msg.msg_type,
            ack = msg.ack(),
            payload = %msg.get_string(&mut render),
            "frame received"
        );
    }

    Ok(())
}

fn read_frame(line: &str) -> Result<Inbound> {
    let raw = hex::decode(line).map_err(|e| Error::BadFrame(format!("invalid hex: {e}")))?;
    inbound::decode(Bytes::from(raw))
}

fn io_err(e: io::Error) -> Error {
    Error::Internal(format!("io failed: {e}"))
}
