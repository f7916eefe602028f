//! Main Crate Error

use primitive_types::U256;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Returned when an input can not be turned into an [Id](crate::Id).
///
/// Every constructor fails closed with this error, no input is ever truncated or padded.
pub enum MalformedIdError {
    /// Raw bytes input is not [ID_SIZE](crate::ID_SIZE) bytes long.
    #[error("Invalid Id size, expected 20 bytes, got {0}")]
    InvalidIdSize(usize),

    /// Hex input is not [HEX_ID_SIZE](crate::HEX_ID_SIZE) characters long.
    #[error("Invalid Id hex length, expected 40 characters, got {0}")]
    InvalidHexLength(usize),

    #[error("Invalid Id encoding: {0}")]
    /// Hex input contains a character that is not a hex digit.
    InvalidIdEncoding(#[from] hex::FromHexError),

    /// Integer input does not fit in 160 bits.
    #[error("Integer {0} is out of the 160 bits Id range")]
    IntegerOutOfRange(U256),
}

/// Crate Result type, defaulting to [MalformedIdError].
pub type Result<T, E = MalformedIdError> = std::result::Result<T, E>;
