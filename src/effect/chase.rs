//! Chase effect with a fading tail.

use embassy_time::Instant;
use libm::sinf;

use super::Effect;
use crate::color::Rgb;
use crate::state::StripState;

/// Pulse oscillator advance per tick, in radians. Faster than the
/// position step so the highlight shimmers as it runs.
const PULSE_STEP: f32 = 0.3;

/// One lit pixel running along the strip, trailed by two dimmer pixels.
///
/// Intensity is a function of circular distance from the lit position
/// (1.0 / 0.6 / 0.3, dark beyond), additionally modulated by a slow sine
/// pulse around a 0.8 baseline.
#[derive(Debug, Clone, Default)]
pub struct ChaseEffect {
    position: usize,
    pulse: f32,
}

impl Effect for ChaseEffect {
    fn render(&mut self, _now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        let pulse = 0.8 + 0.2 * sinf(self.pulse);
        let color = state.color;

        for (i, led) in leds.iter_mut().enumerate() {
            // Circular distance, folded so the tail wraps both ways.
            let mut dist = (i + len - self.position) % len;
            if dist > len / 2 {
                dist = len - dist;
            }

            let tail = match dist {
                0 => 1.0,
                1 => 0.6,
                2 => 0.3,
                _ => 0.0,
            };
            let intensity = tail * pulse;

            led.r = (f32::from(color.r) * intensity) as u8;
            led.g = (f32::from(color.g) * intensity) as u8;
            led.b = (f32::from(color.b) * intensity) as u8;
        }

        self.position = (self.position + 1) % len;
        self.pulse += PULSE_STEP;
    }

    fn reset(&mut self) {
        self.position = 0;
        self.pulse = 0.0;
    }
}
