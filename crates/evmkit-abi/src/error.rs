use alloc::string::String;
use thiserror::Error;

/// Errors produced by [`crate::encode`] and friends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The value tree's shape did not match the type template it was encoded against.
    #[error("value shape does not match type template: {0}")]
    Shape(String),
    /// A `Uint`/`Int` value does not fit in its declared bit width.
    #[error("value does not fit in the declared bit width")]
    RangeOverflow,
    /// An `Address` value was not exactly 20 bytes.
    #[error("address must be exactly 20 bytes")]
    AddressLength,
    /// A `FixedBytes` value's declared length exceeded the 32-byte word size,
    /// or did not match the type template's width.
    #[error("fixed bytes length invalid or mismatched")]
    BytesLength,
    /// A `String` value was not valid UTF-8.
    #[error("string value is not valid UTF-8")]
    StringUtf8,
}

/// Errors produced by [`crate::decode`] and friends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodingError {
    /// Ran out of input bytes before the template was fully consumed.
    #[error("input truncated")]
    Truncated,
    /// A head offset pointed outside the buffer, or decreased within a tuple.
    #[error("offset out of range")]
    OffsetOutOfRange,
    /// A length prefix (array length, bytes/string length) described more
    /// data than remains in the buffer.
    #[error("length prefix out of range")]
    LengthOutOfRange,
    /// A `String` payload was not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    BadUtf8,
    /// A `String` payload decoded to a lone UTF-16 surrogate (only reachable
    /// via a custom decoder path; see module docs).
    #[error("string payload contains a bare surrogate")]
    Utf8Surrogate,
}
