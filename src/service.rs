//! Cooperative control loop: host link first, then the render tick.
//!
//! One [`Service::poll`] pass services the transport (which may decode
//! commands and trigger immediate renders) and, if the tick interval has
//! elapsed, renders one frame for the active mode. Command application
//! and rendering never interleave within a pass. The caller owns the
//! outer loop and is responsible for sleeping until the returned
//! deadline.

use embassy_time::{Duration, Instant};

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::animation;
use crate::engine::Engine;
use crate::link::{LinkEvent, Transport};
use crate::render::{FrameRenderer, StripBus};

/// Fixed render tick for animated modes.
pub const TICK_PERIOD: Duration = Duration::from_millis(30);

/// Result of one poll pass.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait before polling again (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// The controller's main loop body, generic over transport and bus.
pub struct Service<T: Transport, B: StripBus, const LEDS: usize> {
    transport: T,
    renderer: FrameRenderer<B>,
    engine: Engine<LEDS>,
    next_tick: Instant,
}

impl<T: Transport, B: StripBus, const LEDS: usize> Service<T, B, LEDS> {
    pub fn new(transport: T, renderer: FrameRenderer<B>) -> Self {
        Self {
            transport,
            renderer,
            engine: Engine::new(),
            next_tick: Instant::from_millis(0),
        }
    }

    /// Run one pass: link events, host reports, then the tick if due.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        while let Some(event) = self.transport.poll_link() {
            self.handle_link_event(event);
        }

        while let Some(report) = self.transport.poll_report() {
            match self.engine.handle_message(&report) {
                Ok(effects) => {
                    if let Some(reply) = effects.reply {
                        self.transport.send_reply(&reply);
                    }
                    if effects.render_now {
                        let brightness = self.engine.state().brightness;
                        self.renderer.show(self.engine.frame(), brightness);
                    }
                }
                Err(_error) => {
                    // Rejected reports change nothing and get no reply.
                    #[cfg(feature = "defmt")]
                    warn!("host report rejected: {}", _error);
                }
            }
        }

        self.tick(now)
    }

    fn handle_link_event(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::Connected => {
                self.engine.set_connected(true);
                // Blocks the loop for the animation's duration.
                let brightness = self.engine.state().brightness;
                animation::play_connect::<B, LEDS>(&mut self.renderer, brightness);
            }
            LinkEvent::Disconnected => {
                self.engine.set_connected(false);
                self.engine.force_off();
                let brightness = self.engine.state().brightness;
                self.renderer.show(self.engine.frame(), brightness);
            }
        }
    }

    /// Render one frame if the tick interval has elapsed.
    fn tick(&mut self, now: Instant) -> PollResult {
        // Drift correction: after a long stall (connect animation, host
        // pauses) skip the backlog instead of bursting to catch up.
        if now > self.next_tick + TICK_PERIOD * 2 {
            self.next_tick = now;
        }

        if now >= self.next_tick {
            let brightness = self.engine.state().brightness;
            let frame = self.engine.render(now);
            self.renderer.show(frame, brightness);
            self.next_tick += TICK_PERIOD;
        }

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_millis(0)
        };

        PollResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub fn engine(&self) -> &Engine<LEDS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<LEDS> {
        &mut self.engine
    }

    pub fn renderer(&self) -> &FrameRenderer<B> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut FrameRenderer<B> {
        &mut self.renderer
    }
}
