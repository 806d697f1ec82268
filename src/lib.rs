#![no_std]

//! Core logic for a USB-attached ARGB LED strip controller.
//!
//! Hardware-agnostic: the USB stack reaches the control loop through the
//! [`Transport`] seam and the LED peripheral through [`StripBus`]; both
//! are injected, so the whole crate runs on the host for testing.

pub mod animation;
pub mod color;
pub mod command;
pub mod effect;
pub mod engine;
pub mod link;
pub mod protocol;
pub mod render;
pub mod service;
pub mod state;

pub use color::{Rgb, hue_to_rgb, rgb_hue};
pub use command::{Command, DecodeError, decode};
pub use effect::{EffectId, EffectSlot};
pub use engine::{CommandEffects, Engine};
pub use link::{LinkEvent, Mailbox, MailboxTransport, Report, ReplyReport, Transport};
pub use render::{FrameRenderer, StripBus};
pub use service::{PollResult, Service, TICK_PERIOD};
pub use state::{MAX_BRIGHTNESS, StripState};

pub use embassy_time::{Duration, Instant};
