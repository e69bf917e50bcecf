//! Interactive "set the clock" session.
//!
//! A session freezes the instant at which it began and accumulates adjustments into a
//! provisional offset. Nothing outside the session observes that offset until the user
//! activates [`Selection::Confirm`], which hands the offset back as
//! [`SessionStep::Committed`]. An idle clock is simply one without a session, so
//! adjusting or committing while idle cannot be written.
//!
//! # Example
//!
//! ```
//! use station_clock::{AdjustmentSession, Direction, EpochSeconds, Selection, SessionStep};
//!
//! let mut session = AdjustmentSession::begin(EpochSeconds(0));
//! assert_eq!(session.select_next(), Selection::MINUTE);
//! let SessionStep::Adjusting(mut session) = session.activate(Direction::Increment) else {
//!     unreachable!("a field is selected");
//! };
//! while session.selection() != Selection::Confirm {
//!     session.select_next();
//! }
//! assert_eq!(session.activate(Direction::Increment), SessionStep::Committed(60));
//! ```

use crate::calendar::CivilTime;
use crate::epoch_seconds::{EpochSeconds, SignedSeconds};
use crate::field_adjuster::{AdjustableField, Direction, saturating_delta};

/// What the session's cursor is on: a field to adjust, or one of the two exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Activation steps this field.
    Field(AdjustableField),
    /// Activation commits the provisional offset.
    Confirm,
    /// Activation discards the provisional offset.
    Cancel,
}

impl Selection {
    /// Where every session starts.
    pub const FIRST: Self = Self::Field(AdjustableField::Second);
    /// Cursor on the seconds.
    pub const SECOND: Self = Self::Field(AdjustableField::Second);
    /// Cursor on the minutes.
    pub const MINUTE: Self = Self::Field(AdjustableField::Minute);
    /// Cursor on the hours.
    pub const HOUR: Self = Self::Field(AdjustableField::Hour);
    /// Cursor on the day of the month.
    pub const DAY: Self = Self::Field(AdjustableField::Day);
    /// Cursor on the month.
    pub const MONTH: Self = Self::Field(AdjustableField::Month);
    /// Cursor on the year.
    pub const YEAR: Self = Self::Field(AdjustableField::Year);

    /// The cursor cycle: Second, Minute, Hour, Day, Month, Year, Confirm, Cancel, and back.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Field(AdjustableField::Second) => Self::MINUTE,
            Self::Field(AdjustableField::Minute) => Self::HOUR,
            Self::Field(AdjustableField::Hour) => Self::DAY,
            Self::Field(AdjustableField::Day) => Self::MONTH,
            Self::Field(AdjustableField::Month) => Self::YEAR,
            Self::Field(AdjustableField::Year) => Self::Confirm,
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::SECOND,
        }
    }

    /// The selected field, if the cursor is on one.
    #[must_use]
    pub const fn field(self) -> Option<AdjustableField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Confirm | Self::Cancel => None,
        }
    }
}

/// Result of activating the current selection.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionStep {
    /// A field was stepped; the session continues.
    Adjusting(AdjustmentSession),
    /// The session ended with this offset to add to the running clock.
    Committed(SignedSeconds),
    /// The session ended without changing the running clock.
    Cancelled,
}

/// Provisional clock adjustments, applied to a frozen base instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdjustmentSession {
    base: EpochSeconds,
    provisional_offset: SignedSeconds,
    selection: Selection,
}

impl AdjustmentSession {
    /// Enter adjust mode at `now`, with the cursor on the seconds.
    #[must_use]
    pub const fn begin(now: EpochSeconds) -> Self {
        Self {
            base: now,
            provisional_offset: 0,
            selection: Selection::FIRST,
        }
    }

    /// The instant frozen when the session began.
    #[must_use]
    pub const fn base(&self) -> EpochSeconds {
        self.base
    }

    /// Sum of every adjustment made so far.
    #[must_use]
    pub const fn provisional_offset(&self) -> SignedSeconds {
        self.provisional_offset
    }

    /// Current cursor position.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The instant being edited: base plus provisional offset.
    #[must_use]
    pub const fn provisional_time(&self) -> EpochSeconds {
        // Every accumulated delta was range checked, so this never clamps.
        self.base.saturating_add_signed(self.provisional_offset)
    }

    /// [`provisional_time`](Self::provisional_time) as civil time, for rendering.
    #[must_use]
    pub const fn civil(&self) -> CivilTime {
        self.provisional_time().civil()
    }

    /// Move the cursor to the next selection and return it.
    pub const fn select_next(&mut self) -> Selection {
        self.selection = self.selection.next();
        self.selection
    }

    /// Step the selected field and return the delta applied, which is 0 at the epoch
    /// boundary. Returns `None`, changing nothing, when Confirm or Cancel is selected.
    pub fn adjust(&mut self, direction: Direction) -> Option<SignedSeconds> {
        let field = self.selection.field()?;
        let delta = saturating_delta(self.provisional_time(), field, direction);
        self.provisional_offset = self.provisional_offset.saturating_add(delta);
        Some(delta)
    }

    /// Activate the current selection: step the field, commit, or cancel.
    #[must_use]
    pub fn activate(mut self, direction: Direction) -> SessionStep {
        match self.selection {
            Selection::Field(_) => {
                self.adjust(direction);
                SessionStep::Adjusting(self)
            }
            Selection::Confirm => SessionStep::Committed(self.provisional_offset),
            Selection::Cancel => SessionStep::Cancelled,
        }
    }
}
