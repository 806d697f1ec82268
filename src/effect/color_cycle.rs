//! Slow hue rotation of the base color.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::{Rgb, hue_to_rgb, rgb_hue};
use crate::state::StripState;

/// Wall-clock interval between hue steps. Independent of the tick rate.
const STEP_INTERVAL: Duration = Duration::from_millis(200);

/// Hue advance per step, in degrees.
const HUE_STEP: f32 = 10.0;

/// Rotates the base color around the hue circle and shows it solid.
///
/// Unlike the tick-paced effects this one advances on its own wall-clock
/// schedule: one 10° step every 200 ms. Each step writes the converted
/// color back into the controller state, so the rotated color survives a
/// later switch to static mode.
#[derive(Debug, Clone, Default)]
pub struct ColorCycleEffect {
    /// Current hue in degrees; seeded from the base color on first render.
    hue: f32,
    /// Wall-clock time of the last hue step. `None` until first render.
    last_step: Option<Instant>,
}

impl Effect for ColorCycleEffect {
    fn render(&mut self, now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        match self.last_step {
            None => {
                self.hue = rgb_hue(state.color);
                self.last_step = Some(now);
            }
            Some(last) if now.duration_since(last) >= STEP_INTERVAL => {
                self.hue = libm::fmodf(self.hue + HUE_STEP, 360.0);
                state.color = hue_to_rgb(self.hue);
                self.last_step = Some(now);
            }
            Some(_) => {}
        }

        leds.fill(state.color);
    }

    fn reset(&mut self) {
        self.hue = 0.0;
        self.last_step = None;
    }
}
