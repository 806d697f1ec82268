//! Breathing effect.

use embassy_time::Instant;
use libm::sinf;

use super::Effect;
use crate::color::Rgb;
use crate::state::StripState;

/// Phase advance per tick, in radians.
const PHASE_STEP: f32 = 0.05;

/// Base color pulsing on a smoothed sine wave.
///
/// The raw sine is rescaled to [0, 1] and run through a smoothstep curve
/// (3x² - 2x³) so the ramp reads evenly to the eye.
#[derive(Debug, Clone, Default)]
pub struct BreathingEffect {
    phase: f32,
}

impl Effect for BreathingEffect {
    fn render(&mut self, _now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        let intensity = (sinf(self.phase) + 1.0) / 2.0;
        let smoothed = intensity * intensity * (3.0 - 2.0 * intensity);

        let color = state.color;
        for led in leds.iter_mut() {
            led.r = (f32::from(color.r) * smoothed) as u8;
            led.g = (f32::from(color.g) * smoothed) as u8;
            led.b = (f32::from(color.b) * smoothed) as u8;
        }

        self.phase += PHASE_STEP;
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
