//! Mode system with compile-time known effect variants.
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each animated effect implements the [`Effect`] trait and owns its own
//! phase state; switching modes constructs a fresh effect value, so phase
//! state always restarts on activation.

mod breathing;
mod chase;
mod color_cycle;
mod music;
mod rainbow;
mod static_color;

use embassy_time::Instant;

pub use breathing::BreathingEffect;
pub use chase::ChaseEffect;
pub use color_cycle::ColorCycleEffect;
pub use music::MusicEffect;
pub use rainbow::RainbowEffect;
pub use static_color::StaticEffect;

use crate::color::{BLACK, Rgb};
use crate::state::StripState;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_BREATHING: &str = "breathing";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_MUSIC: &str = "music";
const MODE_NAME_COLOR_CYCLE: &str = "color_cycle";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_STATIC: u8 = 1;
const MODE_ID_RAINBOW: u8 = 2;
const MODE_ID_BREATHING: u8 = 3;
const MODE_ID_CHASE: u8 = 4;
const MODE_ID_MUSIC: u8 = 5;
const MODE_ID_COLOR_CYCLE: u8 = 6;

pub trait Effect {
    /// Render a single frame.
    ///
    /// `state` carries the live controller state: effects read the base
    /// color and music level from it, and the color cycle writes the
    /// rotated color back through it.
    fn render(&mut self, now: Instant, state: &mut StripState, leds: &mut [Rgb]);

    /// Reset effect phase state.
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects.
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Strip dark, no animation
    Off,
    /// Solid base color, no animation
    Static(StaticEffect),
    /// Rotating full-spectrum rainbow
    Rainbow(RainbowEffect),
    /// Base color breathing on a smoothed sine
    Breathing(BreathingEffect),
    /// Running highlight with a fading tail
    Chase(ChaseEffect),
    /// Level meter driven by the host music level
    Music(MusicEffect),
    /// Slow rotation of the base color around the hue circle
    ColorCycle(ColorCycleEffect),
}

/// Known mode ids that can be requested by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Off = MODE_ID_OFF,
    Static = MODE_ID_STATIC,
    Rainbow = MODE_ID_RAINBOW,
    Breathing = MODE_ID_BREATHING,
    Chase = MODE_ID_CHASE,
    Music = MODE_ID_MUSIC,
    ColorCycle = MODE_ID_COLOR_CYCLE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Off
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_STATIC => Self::Static,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_BREATHING => Self::Breathing,
            MODE_ID_CHASE => Self::Chase,
            MODE_ID_MUSIC => Self::Music,
            MODE_ID_COLOR_CYCLE => Self::ColorCycle,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Off => EffectSlot::Off,
            Self::Static => EffectSlot::Static(StaticEffect),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::default()),
            Self::Breathing => EffectSlot::Breathing(BreathingEffect::default()),
            Self::Chase => EffectSlot::Chase(ChaseEffect::default()),
            Self::Music => EffectSlot::Music(MusicEffect),
            Self::ColorCycle => EffectSlot::ColorCycle(ColorCycleEffect::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Static => MODE_NAME_STATIC,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Breathing => MODE_NAME_BREATHING,
            Self::Chase => MODE_NAME_CHASE,
            Self::Music => MODE_NAME_MUSIC,
            Self::ColorCycle => MODE_NAME_COLOR_CYCLE,
        }
    }
}

impl EffectSlot {
    /// Render the current effect into `leds`.
    pub fn render(&mut self, now: Instant, state: &mut StripState, leds: &mut [Rgb]) {
        match self {
            Self::Off => leds.fill(BLACK),
            Self::Static(effect) => effect.render(now, state, leds),
            Self::Rainbow(effect) => effect.render(now, state, leds),
            Self::Breathing(effect) => effect.render(now, state, leds),
            Self::Chase(effect) => effect.render(now, state, leds),
            Self::Music(effect) => effect.render(now, state, leds),
            Self::ColorCycle(effect) => effect.render(now, state, leds),
        }
    }

    /// Reset the effect phase state.
    pub fn reset(&mut self) {
        match self {
            Self::Off => {}
            Self::Static(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Breathing(effect) => Effect::reset(effect),
            Self::Chase(effect) => Effect::reset(effect),
            Self::Music(effect) => Effect::reset(effect),
            Self::ColorCycle(effect) => Effect::reset(effect),
        }
    }

    /// Get the mode id for external observation.
    pub fn id(&self) -> EffectId {
        match self {
            Self::Off => EffectId::Off,
            Self::Static(_) => EffectId::Static,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Breathing(_) => EffectId::Breathing,
            Self::Chase(_) => EffectId::Chase,
            Self::Music(_) => EffectId::Music,
            Self::ColorCycle(_) => EffectId::ColorCycle,
        }
    }
}
