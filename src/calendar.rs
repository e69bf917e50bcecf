//! Epoch seconds to proleptic Gregorian civil time, without a calendar library.
//!
//! [`decompose`] is the only conversion the clock needs at run time: every tick and every
//! adjustment re-derives the civil fields from an [`EpochSeconds`]. [`compose`] is its
//! validated inverse, used to build instants from human-readable dates.
//!
//! Both directions use Howard Hinnant's era/day-of-era decomposition
//! (<http://howardhinnant.github.io/date_algorithms.html>): days are counted from
//! 0000-03-01 so that the leap day falls at the end of the "year", and month lengths come
//! from the 153-days-per-5-months identity instead of a table.
//!
//! # Example
//!
//! ```
//! use station_clock::calendar::{compose, decompose};
//! use station_clock::Weekday;
//!
//! let leap_day = compose(2024, 2, 29, 12, 0, 0).expect("valid date");
//! let civil = decompose(leap_day);
//! assert_eq!((civil.year, civil.month, civil.day), (2024, 2, 29));
//! assert_eq!(civil.weekday, Weekday::Thursday);
//! ```

use derive_more::derive::Display;

use crate::epoch_seconds::{
    EpochSeconds, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Error, Result};

/// Days from 0000-03-01 to 1970-01-01.
const CIVIL_TO_EPOCH_DAYS: u32 = 719_468;
/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: u32 = 146_097;
/// 1970-01-01 was a Thursday, index 3 counting from Monday.
const EPOCH_WEEKDAY_INDEX: u32 = 3;

/// Day of the week, Monday first.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Weekday for a zero-based index where Monday is 0. Wraps modulo 7.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Modulo keeps the index in range"
    )]
    pub const fn from_index(index: u32) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Zero-based index, Monday is 0.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter upper-case name, as drawn on the clock face.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "days_since_epoch <= u32::MAX / 86400, far from overflow"
    )]
    const fn from_days_since_epoch(days_since_epoch: u32) -> Self {
        Self::from_index((days_since_epoch + EPOCH_WEEKDAY_INDEX) % 7)
    }
}

/// Decomposed calendar value, always derived from an [`EpochSeconds`].
///
/// Displays as `YYYY-MM-DD hh:mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilTime {
    /// 0..=59
    pub second: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=23
    pub hour: u8,
    /// 1..=31, bounded by the month
    pub day: u8,
    /// 1..=12
    pub month: u8,
    /// Proleptic Gregorian year
    pub year: i32,
    /// Day of the week
    pub weekday: Weekday,
}

impl CivilTime {
    /// Whether this date's year has a February 29th.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month in days.
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// The instant this civil time names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfEpochRange`] if the date is before 1970 or after the end of the
    /// 32-bit counter, or [`Error::InvalidCivilTime`] if a field was mutated out of range.
    pub fn to_epoch_seconds(&self) -> Result<EpochSeconds> {
        compose(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Gregorian leap-year rule.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "Divisibility tests cannot overflow"
)]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in `month` (1..=12) of `year`. Months outside 1..=12 have zero days.
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days in `year`: 365, or 366 for leap years.
#[must_use]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Split epoch seconds into civil date, time of day, and weekday.
///
/// Pure and total over the whole [`EpochSeconds`] range.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "All intermediates are bounded by u32::MAX / 86400 + 719468 days"
)]
pub const fn decompose(seconds: EpochSeconds) -> CivilTime {
    let seconds = seconds.as_u32();
    let days = seconds / SECONDS_PER_DAY;
    let second_of_day = seconds % SECONDS_PER_DAY;

    let shifted_days = days + CIVIL_TO_EPOCH_DAYS;
    let era = shifted_days / DAYS_PER_ERA;
    let day_of_era = shifted_days - era * DAYS_PER_ERA; // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365; // [0, 399]
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100); // [0, 365]
    let march_month = (5 * day_of_year + 2) / 153; // [0, 11], March is 0
    let day = day_of_year - (153 * march_month + 2) / 5 + 1; // [1, 31]
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

    CivilTime {
        second: (second_of_day % SECONDS_PER_MINUTE) as u8,
        minute: (second_of_day / SECONDS_PER_MINUTE % 60) as u8,
        hour: (second_of_day / SECONDS_PER_HOUR) as u8,
        day: day as u8,
        month: month as u8,
        year: year as i32,
        weekday: Weekday::from_days_since_epoch(days),
    }
}

/// Days from 1970-01-01 to the given date, negative before the epoch.
///
/// Expects a valid `month` and `day`; see [`compose`] for the checked entry point.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_lossless,
    reason = "`From` is not const; i64 intermediates cannot overflow for any i32 year"
)]
pub const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400; // [0, 399]
    let month = month as i64;
    let march_month = if month > 2 { month - 3 } else { month + 9 }; // [0, 11]
    let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1; // [0, 365]
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year; // [0, 146096]
    era * DAYS_PER_ERA as i64 + day_of_era - CIVIL_TO_EPOCH_DAYS as i64
}

/// Build the instant for a civil date and time of day.
///
/// # Errors
///
/// Returns [`Error::InvalidCivilTime`] if any field is out of range for its unit (including
/// February 29th in a common year), or [`Error::OutOfEpochRange`] if the instant cannot be
/// held by [`EpochSeconds`].
#[expect(
    clippy::arithmetic_side_effects,
    reason = "days fits i32 range so the i64 products cannot overflow"
)]
pub fn compose(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<EpochSeconds> {
    if !(1..=12).contains(&month)
        || day == 0
        || day > days_in_month(year, month)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return Err(Error::InvalidCivilTime);
    }

    let days = days_from_civil(year, month, day);
    let seconds = days * i64::from(SECONDS_PER_DAY)
        + i64::from(hour) * i64::from(SECONDS_PER_HOUR)
        + i64::from(minute) * i64::from(SECONDS_PER_MINUTE)
        + i64::from(second);
    EpochSeconds::try_from(seconds)
}

impl EpochSeconds {
    /// Shorthand for [`decompose`].
    #[must_use]
    pub const fn civil(self) -> CivilTime {
        decompose(self)
    }
}
