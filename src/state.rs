//! Controller state shared between the decoder and the effects.

use crate::color::{BLACK, Rgb};

/// Upper bound of the brightness range (a percentage).
pub const MAX_BRIGHTNESS: u8 = 100;

/// Persistent visual state of the strip.
///
/// There is exactly one instance, owned by the engine. Commands are the
/// only writers, with two exceptions: the color-cycle effect rotates
/// `color` as it animates, and the link layer toggles `connected`.
#[derive(Debug, Clone)]
pub struct StripState {
    /// Base color; the unscaled source of truth for color-driven effects.
    pub color: Rgb,
    /// Latest music level reported by the host (0-255).
    pub music_level: u8,
    /// Global brightness percentage (0-100), applied at render time.
    pub brightness: u8,
    /// Whether the host transport currently reports a connection.
    pub connected: bool,
}

impl Default for StripState {
    fn default() -> Self {
        Self {
            color: BLACK,
            music_level: 0,
            brightness: MAX_BRIGHTNESS,
            connected: false,
        }
    }
}
