//! Host command decoding.
//!
//! Turns a raw host report into a typed [`Command`] or a rejection.
//! Framing is resolved deterministically (see [`crate::protocol`]):
//! a report of length >= 2 starting with a zero byte is prefixed with a
//! report-id placeholder, anything else carries the opcode in its first
//! byte. Payload requirements are checked per opcode; a rejected report
//! never changes controller state.

use crate::color::Rgb;
use crate::effect::EffectId;
use crate::protocol::{
    OPCODE_OFF, OPCODE_PING, OPCODE_SET_BRIGHTNESS, OPCODE_SET_COLOR, OPCODE_SET_MODE,
    OPCODE_SET_MUSIC_LEVEL,
};
use crate::state::MAX_BRIGHTNESS;

/// A validated host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the base color and show it immediately.
    SetColor(Rgb),
    /// Switch the strip off; the base color is kept.
    Off,
    /// Select the active mode, effective on the next tick.
    SetMode(EffectId),
    /// Update the music level meter.
    SetMusicLevel(u8),
    /// Set global brightness, already clamped to the valid range.
    SetBrightness(u8),
    /// Liveness probe; does not touch controller state.
    Ping,
}

/// Why a host report was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Zero-length report.
    Empty,
    /// The payload is shorter than the opcode requires.
    ShortPayload {
        opcode: u8,
        expected: usize,
        actual: usize,
    },
    /// The opcode is not in the command table.
    UnknownOpcode(u8),
    /// SetMode named a mode id outside the mode table.
    UnknownMode(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::SetColor(c) => {
                defmt::write!(fmt, "SetColor({}, {}, {})", c.r, c.g, c.b);
            }
            Command::Off => defmt::write!(fmt, "Off"),
            Command::SetMode(id) => defmt::write!(fmt, "SetMode({})", id.as_str()),
            Command::SetMusicLevel(level) => defmt::write!(fmt, "SetMusicLevel({})", level),
            Command::SetBrightness(pct) => defmt::write!(fmt, "SetBrightness({})", pct),
            Command::Ping => defmt::write!(fmt, "Ping"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DecodeError::Empty => defmt::write!(fmt, "empty report"),
            DecodeError::ShortPayload {
                opcode,
                expected,
                actual,
            } => defmt::write!(
                fmt,
                "short payload for opcode {=u8:#04x}: {} < {}",
                opcode,
                actual,
                expected
            ),
            DecodeError::UnknownOpcode(op) => {
                defmt::write!(fmt, "unknown opcode {=u8:#04x}", op);
            }
            DecodeError::UnknownMode(id) => defmt::write!(fmt, "unknown mode id {}", id),
        }
    }
}

/// Split a raw report into opcode and payload, resolving the framing.
fn split_frame(raw: &[u8]) -> Result<(u8, &[u8]), DecodeError> {
    match raw {
        [] => Err(DecodeError::Empty),
        [0, opcode, payload @ ..] => Ok((*opcode, payload)),
        [opcode, payload @ ..] => Ok((*opcode, payload)),
    }
}

fn require(opcode: u8, payload: &[u8], expected: usize) -> Result<(), DecodeError> {
    if payload.len() < expected {
        return Err(DecodeError::ShortPayload {
            opcode,
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Decode a raw host report into a [`Command`].
pub fn decode(raw: &[u8]) -> Result<Command, DecodeError> {
    let (opcode, payload) = split_frame(raw)?;

    match opcode {
        OPCODE_SET_COLOR => {
            require(opcode, payload, 3)?;
            Ok(Command::SetColor(Rgb {
                r: payload[0],
                g: payload[1],
                b: payload[2],
            }))
        }
        OPCODE_OFF => Ok(Command::Off),
        OPCODE_SET_MODE => {
            require(opcode, payload, 1)?;
            EffectId::from_raw(payload[0])
                .map(Command::SetMode)
                .ok_or(DecodeError::UnknownMode(payload[0]))
        }
        OPCODE_SET_MUSIC_LEVEL => {
            require(opcode, payload, 1)?;
            Ok(Command::SetMusicLevel(payload[0]))
        }
        OPCODE_SET_BRIGHTNESS => {
            require(opcode, payload, 1)?;
            Ok(Command::SetBrightness(payload[0].min(MAX_BRIGHTNESS)))
        }
        OPCODE_PING => Ok(Command::Ping),
        other => Err(DecodeError::UnknownOpcode(other)),
    }
}
