//! Protocol modules (frame layout, catalog, codec).
//!
//! A frame is a packed header followed by a variable payload:
//!
//! ```text
//! byte 0: bits[0:3)=version  bits[3:8)=payload length
//! byte 1: bits[0:3)=command  bit[3]=ack  bits[4:8)=payload type
//! byte 2: sender    byte 3: last hop    byte 4: destination
//! byte 5: type      byte 6: sensor      bytes 7..: payload
//! ```
//!
//! Building and reading a [`Message`] never fails. Decoding received bytes
//! goes through [`codec::decode_frame`], which reports malformed input as
//! `Error` instead of panicking or indexing raw buffers.

pub mod bitfield;
pub mod catalog;
pub mod codec;
pub mod message;

pub use catalog::{Command, InternalType, PayloadType, SensorType, StreamType, VariableType};
pub use message::{IntoPayload, Message};

/// Frame format version carried in the 3-bit version field.
pub const PROTOCOL_VERSION: u8 = 2;
/// Maximum frame length handed to the radio.
pub const MAX_MESSAGE_LENGTH: usize = 32;
/// Header size the payload capacity is derived from.
pub const HEADER_SIZE: usize = 8;
/// Payload capacity in bytes.
pub const MAX_PAYLOAD: usize = MAX_MESSAGE_LENGTH - HEADER_SIZE;
/// Header bytes actually emitted on the wire (bytes 0..=6).
pub const WIRE_HEADER_LEN: usize = 7;
/// Buffer size needed to render any payload with [`Message::get_string`].
pub const STRING_BUFFER_LEN: usize = 2 * MAX_PAYLOAD + 1;
