//! A [`ClockController`] that tick and button handlers can share.
//!
//! The raw counter is written by the tick handler and read by the button handler when a
//! session begins. Every entry point here runs inside one critical section, so neither
//! handler ever sees the other half-way through an update.
//!
//! ```
//! use station_clock::{ButtonEdge, ClockConfig, ClockController, EpochSeconds, SharedClock};
//!
//! static CLOCK: SharedClock = SharedClock::new(ClockController::new(ClockConfig::new(
//!     EpochSeconds(0),
//!     None,
//! )));
//!
//! CLOCK.on_tick();
//! CLOCK.on_button(ButtonEdge::ButtonA);
//! assert!(CLOCK.frame().is_adjusting());
//! assert_eq!(CLOCK.now(), EpochSeconds(1));
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::controller::{ButtonEdge, ClockController, ClockEvent, DisplayFrame};
use crate::epoch_seconds::{EpochSeconds, SignedSeconds};
use crate::field_adjuster::Direction;

/// [`ClockController`] behind a critical-section mutex, suitable for a `static`.
pub struct SharedClock {
    inner: Mutex<CriticalSectionRawMutex, RefCell<ClockController>>,
}

impl SharedClock {
    /// Wrap a controller.
    #[must_use]
    pub const fn new(controller: ClockController) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut ClockController) -> R) -> R {
        self.inner.lock(|controller| f(&mut controller.borrow_mut()))
    }

    /// See [`ClockController::on_tick`].
    pub fn on_tick(&self) -> ClockEvent {
        self.with(ClockController::on_tick)
    }

    /// See [`ClockController::on_button`].
    pub fn on_button(&self, edge: ButtonEdge) -> ClockEvent {
        self.with(|controller| controller.on_button(edge))
    }

    /// See [`ClockController::on_touch`].
    pub fn on_touch(&self, direction: Direction) -> ClockEvent {
        self.with(|controller| controller.on_touch(direction))
    }

    /// See [`ClockController::now`].
    #[must_use]
    pub fn now(&self) -> EpochSeconds {
        self.with(|controller| controller.now())
    }

    /// See [`ClockController::persistent_offset`].
    #[must_use]
    pub fn persistent_offset(&self) -> SignedSeconds {
        self.with(|controller| controller.persistent_offset())
    }

    /// See [`ClockController::frame`].
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        self.with(|controller| controller.frame())
    }
}
