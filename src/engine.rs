//! Effect engine - owns the controller state and the frame buffer.

use embassy_time::Instant;

#[cfg(feature = "defmt")]
use defmt::debug;

use crate::color::{BLACK, Rgb};
use crate::command::{Command, DecodeError, decode};
use crate::effect::{EffectId, EffectSlot};
use crate::protocol::{REPORT_LEN, ack_reply};
use crate::state::StripState;

/// Side effects of a command that the caller must carry out.
///
/// The engine has no knowledge of the transport or the output bus; it
/// reports what has to happen and the service loop does it.
#[derive(Debug, Clone, Default)]
pub struct CommandEffects {
    /// The frame buffer was refilled and must be shown now, outside the
    /// tick schedule.
    pub render_now: bool,
    /// A reply report to send back over the host link.
    pub reply: Option<[u8; REPORT_LEN]>,
}

/// Per-tick state machine turning controller state into pixel frames.
///
/// `LEDS` is the physical strip length; the frame buffer is fixed-size
/// and never reallocated.
pub struct Engine<const LEDS: usize> {
    state: StripState,
    slot: EffectSlot,
    frame: [Rgb; LEDS],
}

impl<const LEDS: usize> Default for Engine<LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEDS: usize> Engine<LEDS> {
    /// Create an engine with default state: off, black, full brightness.
    pub fn new() -> Self {
        Self {
            state: StripState::default(),
            slot: EffectSlot::default(),
            frame: [BLACK; LEDS],
        }
    }

    /// Decode a raw host report and apply it.
    ///
    /// On rejection the controller state is untouched and no reply is
    /// produced; the host is expected to resend if it cares.
    pub fn handle_message(&mut self, raw: &[u8]) -> Result<CommandEffects, DecodeError> {
        let command = decode(raw)?;
        Ok(self.apply(command))
    }

    /// Apply a validated command.
    ///
    /// All state fields touched by a command are written before this
    /// returns, so a subsequent render can never observe a torn update.
    pub fn apply(&mut self, command: Command) -> CommandEffects {
        #[cfg(feature = "defmt")]
        debug!("applying {}", command);

        let mut effects = CommandEffects::default();

        match command {
            Command::SetColor(color) => {
                self.state.color = color;
                // A color on a dark strip should stay visible past the
                // confirmation frame.
                if self.mode() == EffectId::Off {
                    self.set_mode(EffectId::Static);
                }
                self.frame.fill(color);
                effects.render_now = true;
            }
            Command::Off => {
                self.set_mode(EffectId::Off);
                self.frame.fill(BLACK);
                effects.render_now = true;
            }
            Command::SetMode(id) => {
                self.set_mode(id);
            }
            Command::SetMusicLevel(level) => {
                self.state.music_level = level;
            }
            Command::SetBrightness(percent) => {
                self.state.brightness = percent;
            }
            Command::Ping => {
                effects.reply = Some(ack_reply());
            }
        }

        effects
    }

    /// Render one frame for the active mode.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.slot.render(now, &mut self.state, &mut self.frame);
        &self.frame
    }

    /// Force the strip dark, as on host disconnect.
    pub fn force_off(&mut self) {
        self.set_mode(EffectId::Off);
        self.frame.fill(BLACK);
    }

    /// Record the host link state.
    pub fn set_connected(&mut self, connected: bool) {
        self.state.connected = connected;
    }

    /// The active mode.
    pub fn mode(&self) -> EffectId {
        self.slot.id()
    }

    /// The current controller state.
    pub fn state(&self) -> &StripState {
        &self.state
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Switch mode; entering a mode always restarts its phase state.
    fn set_mode(&mut self, id: EffectId) {
        self.slot = id.to_slot();
        self.slot.reset();
    }
}
