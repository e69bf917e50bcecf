use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Field adjustment itself never fails: out-of-range adjustments saturate to a zero delta.
/// These variants cover building instants from untrusted input and device start-up.
#[derive(Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A civil field (month, day, hour, minute or second) is outside its valid range.
    #[display("Civil time fields are out of range")]
    InvalidCivilTime,

    /// The instant lies before 1970-01-01T00:00:00 or past the end of the 32-bit counter.
    #[display("Instant is outside the representable epoch range")]
    OutOfEpochRange,

    /// A build-time configuration value could not be parsed.
    #[display("Invalid configuration value for {_0}")]
    InvalidConfig(#[error(not(source))] &'static str),

    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    /// The device task could not be spawned.
    #[cfg(feature = "embassy")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),
}

#[cfg(feature = "embassy")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
