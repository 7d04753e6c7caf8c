//! Bitfield helpers for the packed header bytes.
//!
//! Values are masked to the field width on insert; nothing is rejected.

/// Version: byte 0, bits 0..3.
pub const VERSION_POS: u8 = 0;
pub const VERSION_LEN: u8 = 3;
/// Payload length: byte 0, bits 3..8.
pub const LENGTH_POS: u8 = 3;
pub const LENGTH_LEN: u8 = 5;
/// Command: byte 1, bits 0..3.
pub const COMMAND_POS: u8 = 0;
pub const COMMAND_LEN: u8 = 3;
/// Ack request flag: byte 1, bit 3.
pub const ACK_POS: u8 = 3;
pub const ACK_LEN: u8 = 1;
/// Payload type: byte 1, bits 4..8.
pub const PAYLOAD_TYPE_POS: u8 = 4;
pub const PAYLOAD_TYPE_LEN: u8 = 4;

/// Mask of `len` low bits.
pub const fn bit_mask(len: u8) -> u8 {
    ((1u16 << len) - 1) as u8
}

/// Mask of `len` bits starting at `start`.
pub const fn bf_mask(start: u8, len: u8) -> u8 {
    bit_mask(len) << start
}

/// Mask `x` to `len` bits and shift it into position.
pub const fn bf_prep(x: u8, start: u8, len: u8) -> u8 {
    (x & bit_mask(len)) << start
}

/// Extract `len` bits starting at `start` from `y`.
pub const fn bf_get(y: u8, start: u8, len: u8) -> u8 {
    (y >> start) & bit_mask(len)
}

/// Return `y` with the field at `start..start+len` replaced by `x`.
pub const fn bf_set(y: u8, x: u8, start: u8, len: u8) -> u8 {
    (y & !bf_mask(start, len)) | bf_prep(x, start, len)
}
