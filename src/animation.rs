//! One-shot blocking animations for boot and host connect.
//!
//! These run synchronously and block the control loop for their whole
//! duration; command and tick processing are paused meanwhile. That is a
//! known, accepted limitation of the original device and is kept as-is.

use embassy_time::{Duration, block_for};

use crate::color::{BLACK, Rgb};
use crate::render::{FrameRenderer, StripBus};

const BOOT_CURSOR: Rgb = Rgb {
    r: 50,
    g: 50,
    b: 150,
};
const BOOT_STEP_DELAY: Duration = Duration::from_millis(100);

const CONNECT_BREATHS: u8 = 2;
const CONNECT_PEAK: u8 = 100;
const CONNECT_STEP: u8 = 5;
const CONNECT_STEP_DELAY: Duration = Duration::from_millis(20);
const CONNECT_LEAD_DELAY: Duration = Duration::from_millis(100);

/// Walk a single cursor pixel along the strip, then blank it.
pub fn play_boot<B: StripBus, const LEDS: usize>(
    renderer: &mut FrameRenderer<B>,
    brightness: u8,
) {
    let mut frame = [BLACK; LEDS];
    for i in 0..LEDS {
        frame.fill(BLACK);
        frame[i] = BOOT_CURSOR;
        renderer.show(&frame, brightness);
        block_for(BOOT_STEP_DELAY);
    }
    frame.fill(BLACK);
    renderer.show(&frame, brightness);
}

/// Blue breathing ramp played when the host connects.
pub fn play_connect<B: StripBus, const LEDS: usize>(
    renderer: &mut FrameRenderer<B>,
    brightness: u8,
) {
    let mut frame = [BLACK; LEDS];
    renderer.show(&frame, brightness);
    block_for(CONNECT_LEAD_DELAY);

    for _ in 0..CONNECT_BREATHS {
        let mut level: u8 = 0;
        while level <= CONNECT_PEAK {
            frame.fill(Rgb {
                r: 0,
                g: 0,
                b: level,
            });
            renderer.show(&frame, brightness);
            block_for(CONNECT_STEP_DELAY);
            level += CONNECT_STEP;
        }
        let mut level = CONNECT_PEAK;
        loop {
            frame.fill(Rgb {
                r: 0,
                g: 0,
                b: level,
            });
            renderer.show(&frame, brightness);
            block_for(CONNECT_STEP_DELAY);
            if level == 0 {
                break;
            }
            level -= CONNECT_STEP;
        }
    }

    frame.fill(BLACK);
    renderer.show(&frame, brightness);
}
