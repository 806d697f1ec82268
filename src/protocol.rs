//! Host protocol constants.
//!
//! The host talks to the controller through fixed-size HID-style reports.
//! A report carries one command: an opcode byte followed by an
//! opcode-specific payload. Two framings exist on the wire:
//!
//! - **Prefixed**: `[0x00, opcode, payload...]` — the leading zero is a
//!   report-id placeholder inserted by some host HID stacks.
//! - **Bare**: `[opcode, payload...]`.
//!
//! A report of length >= 2 whose first byte is zero is always treated as
//! prefixed. As a consequence opcode 0 cannot be sent in the bare framing;
//! the value is reserved. This ambiguity is inherited from the wire
//! protocol and is resolved here as a fixed rule rather than guessed at
//! per message.

/// Maximum host report size in bytes.
pub const REPORT_LEN: usize = 64;

/// Set the base color. Payload: `[r, g, b]`.
pub const OPCODE_SET_COLOR: u8 = 0x03;
/// Switch the strip off. No payload.
pub const OPCODE_OFF: u8 = 0x04;
/// Select the active mode. Payload: `[mode_id]`.
pub const OPCODE_SET_MODE: u8 = 0x05;
/// Update the music level meter. Payload: `[level]`.
pub const OPCODE_SET_MUSIC_LEVEL: u8 = 0x06;
/// Set global brightness. Payload: `[percent]`, clamped to 100.
pub const OPCODE_SET_BRIGHTNESS: u8 = 0x07;
/// Liveness probe; answered with an acknowledgement report.
pub const OPCODE_PING: u8 = 0xAA;

/// Length of the acknowledgement tag at the start of a ping reply.
pub const ACK_TAG_LEN: usize = 4;

/// Tag at the start of a ping reply; the rest of the report is zero.
pub const ACK_TAG: [u8; ACK_TAG_LEN] = *b"PONG";

/// Build the fixed reply report for a ping.
pub fn ack_reply() -> [u8; REPORT_LEN] {
    let mut reply = [0; REPORT_LEN];
    reply[..ACK_TAG_LEN].copy_from_slice(&ACK_TAG);
    reply
}

pub const DEVICE_VENDOR_ID: u16 = 0x20A0;
pub const DEVICE_PRODUCT_ID: u16 = 0x423D;

pub const DEVICE_PRODUCT_NAME: &str = "Pico ARGB Controller";
pub const DEVICE_MANUFACTURER: &str = "OpenRGB Project";
