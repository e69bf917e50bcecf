//! Calendar engine and interactive time adjustment for a battery-powered clock/weather station.
//!
//! The firmware around this crate owns the hardware: an RTC interrupt that ticks once per
//! second, two push buttons, a capacitive +/- slider, and the display. This crate turns the
//! tick count into a civil date and time, and turns button presses into a bounded,
//! calendar-aware offset that is applied to the running clock only when the user confirms.
//!
//! - [`calendar`]: epoch seconds to [`CivilTime`], no calendar library required.
//! - [`field_adjuster`]: the seconds to add to step one field by one unit.
//! - [`session`]: the provisional "set the clock" session.
//! - [`ClockController`] and [`SharedClock`]: the state the tick and button handlers share.
#![no_std]

pub mod calendar;
mod config;
mod controller;
mod device;
mod epoch_seconds;
mod error;
pub mod field_adjuster;
pub mod session;
mod shared;

// Re-export commonly used items
pub use calendar::{CivilTime, Weekday, compose, decompose};
pub use config::{ClockConfig, DEFAULT_ADJUST_TIMEOUT_SECONDS};
pub use controller::{ButtonEdge, ClockController, ClockEvent, DisplayFrame};
#[cfg(feature = "embassy")]
pub use device::{ClockDevice, ClockDeviceStatic, InputEvent, ONE_SECOND};
pub use epoch_seconds::{
    EpochSeconds, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SignedSeconds,
};
pub use error::{Error, Result};
pub use field_adjuster::{AdjustableField, Direction, delta, saturating_delta};
pub use session::{AdjustmentSession, Selection, SessionStep};
pub use shared::SharedClock;
