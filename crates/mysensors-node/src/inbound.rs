//! Decode-once classification of received frames.
//!
//! - Raw bytes => `Message` (panic-free `bytes::Buf` parsing in the core)
//! - `Message` => `Inbound`, grouped by command so callers can dispatch
//! - Unknown command ids are surfaced, not dropped

use bytes::Bytes;

use mysensors_core::error::Result;
use mysensors_core::protocol::catalog::{Command, InternalType, StreamType};
use mysensors_core::protocol::codec::decode_frame;
use mysensors_core::protocol::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    Presentation(Message),
    Set(Message),
    Request(Message),
    Internal { kind: Option<InternalType>, msg: Message },
    Stream { kind: Option<StreamType>, msg: Message },
    Unknown { command: u8, msg: Message },
}

impl Inbound {
    pub fn message(&self) -> &Message {
        match self {
            Inbound::Presentation(msg) | Inbound::Set(msg) | Inbound::Request(msg) => msg,
            Inbound::Internal { msg, .. }
            | Inbound::Stream { msg, .. }
            | Inbound::Unknown { msg, .. } => msg,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Inbound::Presentation(_) => "presentation",
            Inbound::Set(_) => "set",
            Inbound::Request(_) => "req",
            Inbound::Internal { .. } => "internal",
            Inbound::Stream { .. } => "stream",
            Inbound::Unknown { .. } => "unknown",
        }
    }
}

pub fn classify(msg: Message) -> Inbound {
    match msg.command_kind() {
        Some(Command::Presentation) => Inbound::Presentation(msg),
        Some(Command::Set) => Inbound::Set(msg),
        Some(Command::Req) => Inbound::Request(msg),
        Some(Command::Internal) => Inbound::Internal {
            kind: InternalType::from_u8(msg.msg_type),
            msg,
        },
        Some(Command::Stream) => Inbound::Stream {
            kind: StreamType::from_u8(msg.msg_type),
            msg,
        },
        None => Inbound::Unknown {
            command: msg.command(),
            msg,
        },
    }
}

pub fn decode(raw: Bytes) -> Result<Inbound> {
    let msg = decode_frame(raw)?;
    Ok(classify(msg))
}
