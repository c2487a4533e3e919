use thiserror::Error;

/// Errors returned by [`ByteBuffer`](crate::ByteBuffer) operations.
///
/// Every error is local to the call that produced it: a failed read leaves
/// the cursor where it was and a failed write leaves the bytes untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BufferError {
    /// A read needed more bytes than remain after the cursor.
    #[error("unexpected end of buffer: needed {needed} bytes at offset {offset}, {available} available")]
    UnexpectedEof {
        /// Cursor position at which the read was attempted.
        offset: usize,
        /// Number of bytes the field requires.
        needed: usize,
        /// Number of bytes left after the cursor.
        available: usize,
    },
    /// The modified UTF-8 form of a string does not fit a `u16` length
    /// prefix.
    #[error("encoded text is {len} bytes, longer than the 65535 byte limit")]
    TextTooLong {
        /// Length of the encoded text in bytes.
        len: usize,
    },
    /// Input to [`write_hex`](crate::ByteBuffer::write_hex) is not valid hex.
    #[error("invalid hex string: {0}")]
    InvalidHex(hex::FromHexError),
}

impl From<hex::FromHexError> for BufferError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err)
    }
}
