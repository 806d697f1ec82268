//! Music level meter.

use embassy_time::Instant;

use super::Effect;
use crate::color::{BLACK, Rgb};
use crate::state::StripState;

/// Lights the strip like a VU meter from the host-supplied music level.
///
/// `floor(level * len / 255)` pixels show the full base color; the next
/// pixel is scaled by the fractional remainder of that division; the rest
/// stay dark. The level itself is only written by the decoder.
#[derive(Debug, Clone, Default)]
pub struct MusicEffect;

impl Effect for MusicEffect {
    fn render(&mut self, _now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        let len = leds.len();
        let scaled = usize::from(state.music_level) * len;
        let lit = scaled / 255;
        let remainder = (scaled % 255) as u32;

        let color = state.color;
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i < lit {
                color
            } else if i == lit && remainder > 0 {
                Rgb {
                    r: (u32::from(color.r) * remainder / 255) as u8,
                    g: (u32::from(color.g) * remainder / 255) as u8,
                    b: (u32::from(color.b) * remainder / 255) as u8,
                }
            } else {
                BLACK
            };
        }
    }
}
