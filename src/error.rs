use thiserror::Error;

/// Errors produced when converting to or from a [`KnownValue`].
///
/// [`KnownValue`]: crate::KnownValue
#[derive(Debug, Error)]
pub enum Error {
    /// The raw value cannot be represented exactly as a safe integer.
    #[error("known value {value} exceeds the maximum safe integer {max}")]
    OutOfRange { value: u64, max: u64 },

    /// A signed input was negative.
    #[error("known value cannot be negative: {0}")]
    Negative(i64),

    /// A textual input was not a non-negative decimal integer.
    #[error("invalid known value numeral: {0:?}")]
    InvalidNumeral(String),

    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
