//! Epoch timestamp type for the running clock

use crate::{Error, Result};

/// Signed number of seconds, used for offsets and adjustment deltas.
pub type SignedSeconds = i64;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Units-safe wrapper for epoch timestamps (seconds since 1970-01-01 00:00:00 UTC)
///
/// The range is that of the 32-bit tick counter, so every value is a valid, non-negative
/// instant up to 2106-02-07T06:28:15.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EpochSeconds(pub u32);

impl EpochSeconds {
    /// 1970-01-01T00:00:00.
    pub const EPOCH: Self = Self(0);
    /// The last instant the counter can hold.
    pub const MAX: Self = Self(u32::MAX);

    /// Get the underlying u32 value
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Add a signed offset, returning `None` if the result leaves the epoch range.
    #[must_use]
    #[expect(
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "`From` is not const; the sum is range checked before narrowing"
    )]
    pub const fn checked_add_signed(self, offset: SignedSeconds) -> Option<Self> {
        let Some(sum) = (self.0 as i64).checked_add(offset) else {
            return None;
        };
        if sum < 0 || sum > u32::MAX as i64 {
            None
        } else {
            Some(Self(sum as u32))
        }
    }

    /// Add a signed offset, clamping to the epoch range.
    #[must_use]
    pub const fn saturating_add_signed(self, offset: SignedSeconds) -> Self {
        match self.checked_add_signed(offset) {
            Some(sum) => sum,
            None if offset < 0 => Self::EPOCH,
            None => Self::MAX,
        }
    }

    /// Advance by one second, stopping at [`EpochSeconds::MAX`].
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Signed distance from `earlier` to `self`.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "difference of two u32 values fits i64")]
    pub fn seconds_since(self, earlier: Self) -> SignedSeconds {
        i64::from(self.0) - i64::from(earlier.0)
    }
}

impl From<u32> for EpochSeconds {
    fn from(seconds: u32) -> Self {
        Self(seconds)
    }
}

impl TryFrom<i64> for EpochSeconds {
    type Error = Error;

    fn try_from(seconds: i64) -> Result<Self> {
        u32::try_from(seconds)
            .map(Self)
            .map_err(|_| Error::OutOfEpochRange)
    }
}
