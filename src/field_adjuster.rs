//! Calendar-aware one-unit steps of a single civil field.
//!
//! [`delta`] answers "how many seconds must be added to move just this field by one?".
//! Time-of-day fields and the day of the month wrap within their own range instead of
//! carrying, so that holding a button on the seconds never changes the minutes.
//!
//! | Field  | Step                                   | Wrap                                    |
//! |--------|----------------------------------------|-----------------------------------------|
//! | Second | ±1 s                                   | 59 ⇄ 0, minute unchanged                |
//! | Minute | ±60 s                                  | 59 ⇄ 0, hour unchanged                  |
//! | Hour   | ±3600 s                                | 23 ⇄ 0, day unchanged                   |
//! | Day    | ±1 day                                 | last day of the month ⇄ 1, month unchanged |
//! | Month  | + length of this month, − length of the previous month | December → January of the same year; January → December of the previous year |
//! | Year   | ±365 days from a leap year, ±364 days from a common year | decrementing 1970 is refused |

use crate::calendar::{CivilTime, days_in_month, days_in_year, is_leap_year};
use crate::epoch_seconds::{
    EpochSeconds, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SignedSeconds,
};

/// The first year the epoch counter can represent.
pub const EPOCH_YEAR: i32 = 1970;

/// Component of [`CivilTime`] that the user can step.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdjustableField {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl AdjustableField {
    /// Every field, from the finest unit to the coarsest.
    pub const ALL: [Self; 6] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Year,
    ];

    /// Current value of this field in `civil`.
    #[must_use]
    #[expect(clippy::cast_lossless, reason = "`From` is not const")]
    pub const fn value(self, civil: &CivilTime) -> i32 {
        match self {
            Self::Second => civil.second as i32,
            Self::Minute => civil.minute as i32,
            Self::Hour => civil.hour as i32,
            Self::Day => civil.day as i32,
            Self::Month => civil.month as i32,
            Self::Year => civil.year,
        }
    }
}

/// Which way a field is stepped.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Increment => Self::Decrement,
            Self::Decrement => Self::Increment,
        }
    }
}

/// Seconds to add to the instant behind `current` so that `field` moves one unit in
/// `direction`, wrapping within the field's own range.
///
/// Returns 0 when decrementing the year 1970. This function does not know the instant
/// itself, so it cannot check the lower bound for other fields; the session uses
/// [`saturating_delta`].
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "Every operand is a small calendar quantity; products stay far inside i64"
)]
pub fn delta(current: &CivilTime, field: AdjustableField, direction: Direction) -> SignedSeconds {
    let day = i64::from(SECONDS_PER_DAY);
    match field {
        AdjustableField::Second => wrap_step(current.second, 59, 1, direction),
        AdjustableField::Minute => wrap_step(
            current.minute,
            59,
            i64::from(SECONDS_PER_MINUTE),
            direction,
        ),
        AdjustableField::Hour => {
            wrap_step(current.hour, 23, i64::from(SECONDS_PER_HOUR), direction)
        }
        AdjustableField::Day => wrap_step(
            current.day.saturating_sub(1),
            current.days_in_month().saturating_sub(1),
            day,
            direction,
        ),
        AdjustableField::Month => month_days(current, direction) * day,
        AdjustableField::Year => year_days(current, direction) * day,
    }
}

/// [`delta`] for the instant `now`, or 0 if applying it would leave the epoch range.
#[must_use]
pub fn saturating_delta(
    now: EpochSeconds,
    field: AdjustableField,
    direction: Direction,
) -> SignedSeconds {
    let offset = delta(&now.civil(), field, direction);
    if now.checked_add_signed(offset).is_some() {
        offset
    } else {
        0
    }
}

/// One unit of `span` seconds, or the jump across the whole `0..=max` range at its ends.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "max <= 30 and span <= 86400"
)]
fn wrap_step(value: u8, max: u8, span: SignedSeconds, direction: Direction) -> SignedSeconds {
    let full_range = i64::from(max) * span;
    match direction {
        Direction::Increment if value >= max => -full_range,
        Direction::Increment => span,
        Direction::Decrement if value == 0 => full_range,
        Direction::Decrement => -span,
    }
}

#[expect(
    clippy::arithmetic_side_effects,
    reason = "Month lengths and year lengths are small"
)]
fn month_days(current: &CivilTime, direction: Direction) -> i64 {
    let (year, month) = (current.year, current.month);
    match direction {
        // Back from December to January: every month but December.
        Direction::Increment if month >= 12 => {
            -(i64::from(days_in_year(year)) - i64::from(days_in_month(year, 12)))
        }
        Direction::Increment => i64::from(days_in_month(year, month)),
        Direction::Decrement if month <= 1 => {
            -i64::from(days_in_month(year.saturating_sub(1), 12))
        }
        Direction::Decrement => -i64::from(days_in_month(year, month - 1)),
    }
}

/// Fixed year step keyed on the current year only: 365 days from a leap year, 364 from a
/// common one, so the landing date can drift by a day or two.
fn year_days(current: &CivilTime, direction: Direction) -> i64 {
    match (direction, is_leap_year(current.year)) {
        (Direction::Decrement, _) if current.year <= EPOCH_YEAR => 0,
        (Direction::Increment, true) => 365,
        (Direction::Increment, false) => 364,
        (Direction::Decrement, true) => -365,
        (Direction::Decrement, false) => -364,
    }
}
