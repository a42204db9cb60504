//! Error types for distinguished name parsing.

use thiserror::Error;

/// Result type for DN parsing operations
pub type DnResult<T> = Result<T, DnError>;

/// Errors produced while parsing a DN string.
///
/// Every variant is fatal to the parse that raised it; callers never receive
/// a partially built name alongside an error.
#[derive(Error, Debug, miette::Diagnostic)]
pub enum DnError {
    /// A backslash was the last character of the input, or too few characters
    /// remained for a two-digit hex escape.
    #[error("got corrupted escaped character")]
    CorruptedEscape,

    /// The two characters following a backslash were not valid hex digits.
    #[error("failed to decode escaped character: {0}")]
    EscapeDecode(String),

    /// The hex string following `#` could not be decoded.
    #[error("failed to decode BER encoding: {0}")]
    BerHexDecode(String),

    /// The bytes decoded from a `#`-prefixed value were not a well-formed
    /// BER/DER packet.
    #[error("failed to decode BER packet: {0}")]
    BerPacketDecode(String),

    /// A separator or the end of input was reached while a value was present
    /// but no `=` had introduced an attribute type for it.
    #[error("incomplete type, value pair: {0}")]
    IncompletePair(String),
}
