//! Rotating rainbow effect.
//!
//! The full 360° spectrum is spread evenly over the strip and a global
//! offset rotates it by a fixed angular step per tick.

use embassy_time::Instant;
use libm::fmodf;

use super::Effect;
use crate::color::{Rgb, hue_to_rgb};
use crate::state::StripState;

/// Hue rotation per tick, in degrees.
const HUE_STEP: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Global hue offset in degrees, wraps at 360.
    offset: f32,
}

impl Effect for RainbowEffect {
    fn render(&mut self, _now: Instant, _state: &mut StripState, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let span = 360.0 / leds.len() as f32;
        for (i, led) in leds.iter_mut().enumerate() {
            let hue = fmodf(self.offset + i as f32 * span, 360.0);
            *led = hue_to_rgb(hue);
        }

        self.offset = fmodf(self.offset + HUE_STEP, 360.0);
    }

    fn reset(&mut self) {
        self.offset = 0.0;
    }
}
