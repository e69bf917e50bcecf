//! Build-time clock configuration.
//!
//! `build.rs` reads `INITIAL_EPOCH_SECONDS` and `ADJUST_TIMEOUT_SECONDS` from the
//! environment (or a `.env` file) and bakes them into the binary.

use core::num::NonZeroU32;

use crate::epoch_seconds::EpochSeconds;
use crate::{Error, Result};

/// Default inactivity timeout for an adjustment session.
pub const DEFAULT_ADJUST_TIMEOUT_SECONDS: u32 = 30;

/// Settings for a [`ClockController`](crate::ClockController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Value of the raw counter at power-on.
    pub initial_epoch: EpochSeconds,
    /// Ticks without input after which an open session is cancelled. `None` never times out.
    pub adjust_timeout: Option<NonZeroU32>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new(EpochSeconds::EPOCH, NonZeroU32::new(DEFAULT_ADJUST_TIMEOUT_SECONDS))
    }
}

impl ClockConfig {
    /// Create a configuration from its parts.
    #[must_use]
    pub const fn new(initial_epoch: EpochSeconds, adjust_timeout: Option<NonZeroU32>) -> Self {
        Self {
            initial_epoch,
            adjust_timeout,
        }
    }

    /// Configuration baked in by `build.rs`. A timeout of `0` disables the timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the variable that is not a `u32`.
    pub fn from_build_env() -> Result<Self> {
        Self::parse(
            env!("INITIAL_EPOCH_SECONDS"),
            env!("ADJUST_TIMEOUT_SECONDS"),
        )
    }

    /// Configuration from the textual values of the two build variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the variable that is not a `u32`.
    pub fn parse(initial_epoch: &str, adjust_timeout: &str) -> Result<Self> {
        let initial_epoch = initial_epoch
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidConfig("INITIAL_EPOCH_SECONDS"))?;
        let adjust_timeout = adjust_timeout
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidConfig("ADJUST_TIMEOUT_SECONDS"))?;
        Ok(Self::new(
            EpochSeconds(initial_epoch),
            NonZeroU32::new(adjust_timeout),
        ))
    }
}
