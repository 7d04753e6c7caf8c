//! Frame encoding and panic-free decoding.
//!
//! Parsing rules:
//! - Never index the input (`buf[0]`): always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//! - Bytes after the declared payload are radio padding and are ignored.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};

use super::message::Message;
use super::{MAX_MESSAGE_LENGTH, MAX_PAYLOAD, PROTOCOL_VERSION, WIRE_HEADER_LEN};

/// Append the wire form of `msg` to `buf`.
///
/// At most `MAX_PAYLOAD` bytes are emitted; the length bits are clamped the
/// same way so an out-of-range length never reaches the air.
pub fn encode_frame_into<B: BufMut>(msg: &Message, buf: &mut B) {
    let payload = msg.get_custom();
    let mut header = *msg;
    header.set_length(payload.len() as u8);

    buf.put_u8(header.version_length);
    buf.put_u8(header.command_ack_payload);
    buf.put_u8(header.sender);
    buf.put_u8(header.last);
    buf.put_u8(header.destination);
    buf.put_u8(header.msg_type);
    buf.put_u8(header.sensor);
    buf.put_slice(payload);
}

/// Encode `msg` into a fresh frame.
pub fn encode_frame(msg: &Message) -> Bytes {
    let mut buf = BytesMut::with_capacity(MAX_MESSAGE_LENGTH);
    encode_frame_into(msg, &mut buf);
    buf.freeze()
}

/// Decode a frame received from the transport.
pub fn decode_frame(mut buf: Bytes) -> Result<Message> {
    if buf.remaining() < WIRE_HEADER_LEN {
        return Err(Error::BadFrame("frame too short".into()));
    }

    let mut msg = Message::new();
    msg.version_length = buf.get_u8();
    msg.command_ack_payload = buf.get_u8();
    msg.sender = buf.get_u8();
    msg.last = buf.get_u8();
    msg.destination = buf.get_u8();
    msg.msg_type = buf.get_u8();
    msg.sensor = buf.get_u8();

    if msg.version() != PROTOCOL_VERSION {
        return Err(Error::UnsupportedVersion);
    }

    let len = usize::from(msg.length());
    if len > MAX_PAYLOAD {
        return Err(Error::PayloadTooLarge);
    }
    if buf.remaining() < len {
        return Err(Error::BadFrame(format!(
            "payload truncated: need {len} bytes, have {}",
            buf.remaining()
        )));
    }

    buf.copy_to_slice(&mut msg.payload_buf_mut()[..len]);

    Ok(msg)
}
