//! The clock's single owner of mutable time state.
//!
//! [`ClockController`] holds what the firmware would otherwise keep in globals: the raw
//! second counter, the persistent offset applied to it, and the open adjustment session, if
//! any. The tick source calls [`on_tick`](ClockController::on_tick) once per second; the
//! input driver calls [`on_button`](ClockController::on_button) on debounced press edges
//! and [`on_touch`](ClockController::on_touch) while the +/- slider is held. The renderer
//! reads [`frame`](ClockController::frame).
//!
//! Button A enters adjust mode and then cycles the selection. Button B activates the
//! selection: it increments the selected field, or commits or cancels the session.

use core::num::NonZeroU32;

use crate::calendar::CivilTime;
use crate::config::ClockConfig;
use crate::epoch_seconds::{EpochSeconds, SignedSeconds};
use crate::field_adjuster::Direction;
use crate::session::{AdjustmentSession, Selection, SessionStep};

/// A debounced press edge from the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// No press since the last poll.
    #[default]
    None,
    /// Mode button: enter adjust mode, then cycle the selection.
    ButtonA,
    /// Action button: activate the selection.
    ButtonB,
}

/// What a call into the controller did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// The input had no effect in the current state.
    Ignored,
    /// The raw counter advanced.
    Ticked,
    /// Adjust mode was entered.
    SessionStarted,
    /// The cursor moved.
    Selected(Selection),
    /// A field was stepped by `delta` seconds (0 at the epoch boundary).
    Adjusted {
        /// The field that was stepped.
        selection: Selection,
        /// Seconds added to the provisional offset.
        delta: SignedSeconds,
    },
    /// The session's offset was added to the persistent offset.
    Committed(SignedSeconds),
    /// The session was discarded by the user.
    Cancelled,
    /// The session was discarded after the inactivity timeout.
    TimedOut,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    /// Live time, or the frozen provisional time while adjusting.
    pub time: CivilTime,
    /// Highlighted selection while adjusting.
    pub selection: Option<Selection>,
}

impl DisplayFrame {
    /// Whether the adjustment screen should be drawn.
    #[must_use]
    pub const fn is_adjusting(&self) -> bool {
        self.selection.is_some()
    }
}

/// Raw counter, persistent offset and adjustment session for one clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockController {
    raw: EpochSeconds,
    persistent_offset: SignedSeconds,
    session: Option<AdjustmentSession>,
    adjust_timeout: Option<NonZeroU32>,
    idle_ticks: u32,
}

impl Default for ClockController {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl ClockController {
    /// Create an idle controller whose raw counter starts at `config.initial_epoch`.
    #[must_use]
    pub const fn new(config: ClockConfig) -> Self {
        Self {
            raw: config.initial_epoch,
            persistent_offset: 0,
            session: None,
            adjust_timeout: config.adjust_timeout,
            idle_ticks: 0,
        }
    }

    /// The raw tick counter.
    #[must_use]
    pub const fn raw_seconds(&self) -> EpochSeconds {
        self.raw
    }

    /// Offset added to the raw counter to get the visible time.
    #[must_use]
    pub const fn persistent_offset(&self) -> SignedSeconds {
        self.persistent_offset
    }

    /// The open adjustment session, if adjust mode is active.
    #[must_use]
    pub const fn session(&self) -> Option<&AdjustmentSession> {
        self.session.as_ref()
    }

    /// The externally visible current time: raw counter plus persistent offset.
    #[must_use]
    pub const fn now(&self) -> EpochSeconds {
        self.raw.saturating_add_signed(self.persistent_offset)
    }

    /// What to draw right now.
    #[must_use]
    pub const fn frame(&self) -> DisplayFrame {
        match &self.session {
            Some(session) => DisplayFrame {
                time: session.civil(),
                selection: Some(session.selection()),
            },
            None => DisplayFrame {
                time: self.now().civil(),
                selection: None,
            },
        }
    }

    /// Advance the raw counter by one second, and time out an idle session.
    pub fn on_tick(&mut self) -> ClockEvent {
        self.raw = self.raw.next();
        if self.session.is_none() {
            return ClockEvent::Ticked;
        }

        self.idle_ticks = self.idle_ticks.saturating_add(1);
        match self.adjust_timeout {
            Some(timeout) if self.idle_ticks >= timeout.get() => {
                self.session = None;
                #[cfg(feature = "defmt")]
                defmt::info!("Adjust session timed out after {} s", self.idle_ticks);
                ClockEvent::TimedOut
            }
            _ => ClockEvent::Ticked,
        }
    }

    /// Handle a debounced button press edge.
    pub fn on_button(&mut self, edge: ButtonEdge) -> ClockEvent {
        if edge != ButtonEdge::None {
            self.idle_ticks = 0;
        }
        match (edge, self.session.take()) {
            (ButtonEdge::None, session) => {
                self.session = session;
                ClockEvent::Ignored
            }
            (ButtonEdge::ButtonA, None) => {
                let session = AdjustmentSession::begin(self.now());
                #[cfg(feature = "defmt")]
                defmt::info!("Adjust session started at {}", session.base().as_u32());
                self.session = Some(session);
                ClockEvent::SessionStarted
            }
            (ButtonEdge::ButtonA, Some(mut session)) => {
                let selection = session.select_next();
                self.session = Some(session);
                ClockEvent::Selected(selection)
            }
            (ButtonEdge::ButtonB, None) => ClockEvent::Ignored,
            (ButtonEdge::ButtonB, Some(session)) => self.activate(session),
        }
    }

    /// Step the selected field while the touch slider is held on its +/- side.
    pub fn on_touch(&mut self, direction: Direction) -> ClockEvent {
        let Some(session) = self.session.as_mut() else {
            return ClockEvent::Ignored;
        };
        self.idle_ticks = 0;
        match session.adjust(direction) {
            Some(delta) => ClockEvent::Adjusted {
                selection: session.selection(),
                delta,
            },
            None => ClockEvent::Ignored,
        }
    }

    fn activate(&mut self, session: AdjustmentSession) -> ClockEvent {
        let selection = session.selection();
        let before = session.provisional_offset();
        match session.activate(Direction::Increment) {
            SessionStep::Adjusting(session) => {
                let delta = session.provisional_offset().saturating_sub(before);
                self.session = Some(session);
                ClockEvent::Adjusted { selection, delta }
            }
            SessionStep::Committed(offset) => {
                self.persistent_offset = self.persistent_offset.saturating_add(offset);
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Adjust session committed: {} s (persistent offset {} s)",
                    offset,
                    self.persistent_offset
                );
                ClockEvent::Committed(offset)
            }
            SessionStep::Cancelled => {
                #[cfg(feature = "defmt")]
                defmt::info!("Adjust session cancelled");
                ClockEvent::Cancelled
            }
        }
    }
}
