//! The protocol frame as an in-memory value.
//!
//! ```text
//! bytes 0..7: header (bytes 0 and 1 bit-packed)
//! bytes 7..:  payload, 0..=24 bytes
//! in memory:  one terminator byte after the payload, never sent
//! ```
//!
//! The payload is a plain byte buffer with typed views on top. The payload
//! type tag describes what the last setter wrote; getters do not check it and
//! reinterpret whatever bytes are present, exactly like peers on the network.

use std::borrow::Cow;

use super::bitfield::{
    bf_get, bf_prep, bf_set, ACK_LEN, ACK_POS, COMMAND_LEN, COMMAND_POS, LENGTH_LEN, LENGTH_POS,
    PAYLOAD_TYPE_LEN, PAYLOAD_TYPE_POS, VERSION_LEN, VERSION_POS,
};
use super::catalog::{Command, PayloadType};
use super::{MAX_PAYLOAD, PROTOCOL_VERSION, STRING_BUFFER_LEN, WIRE_HEADER_LEN};

/// One protocol frame.
///
/// Multi-byte integers are stored little-endian, which is the verbatim
/// in-memory layout of the reference peers. This is part of the wire
/// contract and is not network byte order.
///
/// The buffer holds `MAX_PAYLOAD + 1` bytes: the extra byte is the string
/// terminator. It is never counted in the length and never transmitted.
/// Every payload setter clears the whole buffer first, so the byte after the
/// payload is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// 3 bit protocol version, 5 bit payload length.
    pub version_length: u8,
    /// 3 bit command, 1 bit ack request, 4 bit payload type.
    pub command_ack_payload: u8,
    /// Id of the originating node.
    pub sender: u8,
    /// Id of the last node this message passed.
    pub last: u8,
    /// Id of the destination node.
    pub destination: u8,
    /// Sub-type; its catalog depends on the command.
    pub msg_type: u8,
    /// Id of the sensor this message concerns.
    pub sensor: u8,
    data: [u8; MAX_PAYLOAD + 1],
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    /// Empty message: every field zero except the protocol version.
    pub const fn new() -> Self {
        Self {
            version_length: bf_prep(PROTOCOL_VERSION, VERSION_POS, VERSION_LEN),
            command_ack_payload: 0,
            sender: 0,
            last: 0,
            destination: 0,
            msg_type: 0,
            sensor: 0,
            data: [0; MAX_PAYLOAD + 1],
        }
    }

    /// Empty message about `sensor` with the given sub-type.
    pub fn with_sensor(sensor: u8, msg_type: impl Into<u8>) -> Self {
        let mut msg = Self::new();
        msg.sensor = sensor;
        msg.msg_type = msg_type.into();
        msg
    }

    // ---- packed header -------------------------------------------------

    pub fn version(&self) -> u8 {
        bf_get(self.version_length, VERSION_POS, VERSION_LEN)
    }

    pub fn set_version(&mut self, version: u8) -> &mut Self {
        self.version_length = bf_set(self.version_length, version, VERSION_POS, VERSION_LEN);
        self
    }

    /// Payload length bits as stored (0..=31).
    pub fn length(&self) -> u8 {
        bf_get(self.version_length, LENGTH_POS, LENGTH_LEN)
    }

    pub fn set_length(&mut self, length: u8) -> &mut Self {
        self.version_length = bf_set(self.version_length, length, LENGTH_POS, LENGTH_LEN);
        self
    }

    /// Number of payload bytes in use, clamped to the buffer capacity.
    pub fn payload_len(&self) -> usize {
        usize::from(self.length()).min(MAX_PAYLOAD)
    }

    /// Bytes this message occupies on the wire.
    pub fn wire_len(&self) -> usize {
        WIRE_HEADER_LEN + self.payload_len()
    }

    pub fn command(&self) -> u8 {
        bf_get(self.command_ack_payload, COMMAND_POS, COMMAND_LEN)
    }

    pub fn command_kind(&self) -> Option<Command> {
        Command::from_u8(self.command())
    }

    pub fn set_command(&mut self, command: impl Into<u8>) -> &mut Self {
        self.command_ack_payload =
            bf_set(self.command_ack_payload, command.into(), COMMAND_POS, COMMAND_LEN);
        self
    }

    /// Whether the receiver is asked to acknowledge delivery.
    pub fn ack(&self) -> bool {
        bf_get(self.command_ack_payload, ACK_POS, ACK_LEN) != 0
    }

    pub fn set_ack(&mut self, ack: bool) -> &mut Self {
        self.command_ack_payload =
            bf_set(self.command_ack_payload, u8::from(ack), ACK_POS, ACK_LEN);
        self
    }

    pub fn payload_type(&self) -> u8 {
        bf_get(self.command_ack_payload, PAYLOAD_TYPE_POS, PAYLOAD_TYPE_LEN)
    }

    pub fn payload_kind(&self) -> Option<PayloadType> {
        PayloadType::from_u8(self.payload_type())
    }

    pub fn set_payload_type(&mut self, payload_type: impl Into<u8>) -> &mut Self {
        self.command_ack_payload = bf_set(
            self.command_ack_payload,
            payload_type.into(),
            PAYLOAD_TYPE_POS,
            PAYLOAD_TYPE_LEN,
        );
        self
    }

    // ---- plain header fields --------------------------------------------

    pub fn set_type(&mut self, msg_type: impl Into<u8>) -> &mut Self {
        self.msg_type = msg_type.into();
        self
    }

    pub fn set_sensor(&mut self, sensor: u8) -> &mut Self {
        self.sensor = sensor;
        self
    }

    pub fn set_destination(&mut self, destination: u8) -> &mut Self {
        self.destination = destination;
        self
    }

    // ---- payload setters ------------------------------------------------

    /// Copy `bytes` into the payload (at most `MAX_PAYLOAD`) and tag it.
    fn write_payload(&mut self, bytes: &[u8], payload_type: PayloadType) -> &mut Self {
        let len = bytes.len().min(MAX_PAYLOAD);
        if len < bytes.len() {
            tracing::trace!(len = bytes.len(), cap = MAX_PAYLOAD, "payload truncated");
        }
        self.data = [0; MAX_PAYLOAD + 1];
        self.data[..len].copy_from_slice(&bytes[..len]);
        self.set_length(len as u8);
        self.set_payload_type(payload_type)
    }

    /// Raw bytes for caller-defined interpretation.
    pub fn set_custom(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_payload(bytes, PayloadType::Custom)
    }

    /// Text payload. Truncation counts bytes, not characters.
    pub fn set_str(&mut self, value: &str) -> &mut Self {
        self.write_payload(value.as_bytes(), PayloadType::String)
    }

    pub fn set_byte(&mut self, value: u8) -> &mut Self {
        self.write_payload(&[value], PayloadType::Byte)
    }

    pub fn set_bool(&mut self, value: bool) -> &mut Self {
        self.set_byte(u8::from(value))
    }

    pub fn set_int(&mut self, value: i16) -> &mut Self {
        self.write_payload(&value.to_le_bytes(), PayloadType::Int16)
    }

    pub fn set_uint(&mut self, value: u16) -> &mut Self {
        self.write_payload(&value.to_le_bytes(), PayloadType::Uint16)
    }

    pub fn set_long(&mut self, value: i32) -> &mut Self {
        self.write_payload(&value.to_le_bytes(), PayloadType::Long32)
    }

    pub fn set_ulong(&mut self, value: u32) -> &mut Self {
        self.write_payload(&value.to_le_bytes(), PayloadType::Ulong32)
    }

    /// Fixed-point value: `round(value * 10^decimals)` stored as a long.
    ///
    /// The scale is not part of the frame. Receivers must know it and pass
    /// the same `decimals` to [`Message::get_double`].
    pub fn set_double(&mut self, value: f64, decimals: u8) -> &mut Self {
        let scaled = (value * 10f64.powi(i32::from(decimals))).round();
        self.set_long(scaled as i32)
    }

    /// Set the payload from any supported value, picking the matching tag.
    pub fn set<V: IntoPayload>(&mut self, value: V) -> &mut Self {
        value.write_to(self);
        self
    }

    /// Mutable access to the payload buffer for the frame decoder.
    pub(crate) fn payload_buf_mut(&mut self) -> &mut [u8; MAX_PAYLOAD + 1] {
        &mut self.data
    }

    // ---- payload getters ------------------------------------------------

    fn head<const N: usize>(&self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[..N]);
        out
    }

    pub fn get_byte(&self) -> u8 {
        self.data[0]
    }

    pub fn get_bool(&self) -> bool {
        self.get_byte() != 0
    }

    pub fn get_int(&self) -> i16 {
        i16::from_le_bytes(self.head())
    }

    pub fn get_uint(&self) -> u16 {
        u16::from_le_bytes(self.head())
    }

    pub fn get_long(&self) -> i32 {
        i32::from_le_bytes(self.head())
    }

    pub fn get_ulong(&self) -> u32 {
        u32::from_le_bytes(self.head())
    }

    /// Inverse of [`Message::set_double`] under the same `decimals`.
    pub fn get_double(&self, decimals: u8) -> f64 {
        f64::from(self.get_long()) / 10f64.powi(i32::from(decimals))
    }

    /// Payload read as a C string: bytes up to the first NUL.
    ///
    /// Meaningful only for string payloads. Invalid UTF-8 is replaced.
    pub fn get_str(&self) -> Cow<'_, str> {
        let end = self
            .data
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_PAYLOAD);
        String::from_utf8_lossy(&self.data[..end])
    }

    /// Render the payload into `buffer` for display.
    ///
    /// String payloads are copied as text. Any other payload type is rendered
    /// as two lowercase hex digits per payload byte, so every message can be
    /// logged without knowing its shape.
    pub fn get_string<'b>(&self, buffer: &'b mut String) -> &'b str {
        buffer.clear();
        buffer.reserve(STRING_BUFFER_LEN);
        if self.payload_type() == PayloadType::String.as_u8() {
            buffer.push_str(&self.get_str());
        } else {
            let payload = self.get_custom();
            let mut hex_buf = [0u8; 2 * MAX_PAYLOAD];
            let out = &mut hex_buf[..payload.len() * 2];
            if hex::encode_to_slice(payload, out).is_ok() {
                buffer.extend(out.iter().map(|&b| char::from(b)));
            }
        }
        buffer.as_str()
    }

    /// The payload bytes in use.
    pub fn get_custom(&self) -> &[u8] {
        &self.data[..self.payload_len()]
    }
}

/// Values that can be written as a payload by [`Message::set`].
pub trait IntoPayload {
    fn write_to(self, msg: &mut Message);
}

impl IntoPayload for u8 {
    fn write_to(self, msg: &mut Message) {
        msg.set_byte(self);
    }
}

impl IntoPayload for bool {
    fn write_to(self, msg: &mut Message) {
        msg.set_bool(self);
    }
}

impl IntoPayload for i16 {
    fn write_to(self, msg: &mut Message) {
        msg.set_int(self);
    }
}

impl IntoPayload for u16 {
    fn write_to(self, msg: &mut Message) {
        msg.set_uint(self);
    }
}

impl IntoPayload for i32 {
    fn write_to(self, msg: &mut Message) {
        msg.set_long(self);
    }
}

impl IntoPayload for u32 {
    fn write_to(self, msg: &mut Message) {
        msg.set_ulong(self);
    }
}

impl IntoPayload for &str {
    fn write_to(self, msg: &mut Message) {
        msg.set_str(self);
    }
}

impl IntoPayload for &String {
    fn write_to(self, msg: &mut Message) {
        msg.set_str(self);
    }
}

impl IntoPayload for &[u8] {
    fn write_to(self, msg: &mut Message) {
        msg.set_custom(self);
    }
}

impl<const N: usize> IntoPayload for &[u8; N] {
    fn write_to(self, msg: &mut Message) {
        msg.set_custom(self);
    }
}
