//! Static color fill.

use embassy_time::Instant;

use super::Effect;
use crate::color::Rgb;
use crate::state::StripState;

/// Fills all LEDs with the unscaled base color. No phase state.
#[derive(Debug, Clone, Default)]
pub struct StaticEffect;

impl Effect for StaticEffect {
    fn render(&mut self, _now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        leds.fill(state.color);
    }
}
