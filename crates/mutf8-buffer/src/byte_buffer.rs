//! The [`ByteBuffer`] type: one growable byte sequence, one read cursor.
//!
//! Writes and reads are decoupled. Every writer appends to the
//! end of the sequence and leaves the cursor alone; every reader decodes at
//! the cursor and moves it forward, never touching the bytes. A buffer can
//! therefore be read from and appended to at the same time, and writes made
//! after some reads land past everything already present.
//!
//! Multi-byte fields are big-endian. Text fields are a `u16` byte count
//! followed by the [modified UTF-8](crate::mutf8) form of the text.
//!
//! Reads are all-or-nothing: if a field does not fit in the bytes left after
//! the cursor, the read fails with [`BufferError::UnexpectedEof`] and the
//! cursor does not move.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    error::BufferError,
    mutf8,
    options::{BufferOptions, TextRecovery},
};

/// A growable big-endian byte buffer with a read cursor.
///
/// # Examples
///
/// ```rust
/// use mutf8_buffer::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// buf.write_bool(true).write_long(-2).write_float(0.5);
/// assert_eq!(buf.len(), 13);
///
/// assert!(buf.read_bool()?);
/// assert_eq!(buf.read_long()?, -2);
/// assert_eq!(buf.read_float()?, 0.5);
/// assert!(buf.read_byte().is_err());
/// # Ok::<(), mutf8_buffer::BufferError>(())
/// ```
#[derive(Clone, Default)]
pub struct ByteBuffer {
    data: Vec<u8>,
    offset: usize,
    options: BufferOptions,
}

impl ByteBuffer {
    /// Creates an empty buffer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer that can take `capacity` bytes before
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Creates an empty buffer with the given read options.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The read options in effect.
    #[must_use]
    pub fn options(&self) -> BufferOptions {
        self.options
    }

    /// Replaces the read options. Takes effect on the next read.
    pub fn set_options(&mut self, options: BufferOptions) {
        self.options = options;
    }

    /// Current position of the read cursor.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the read cursor to `offset`.
    ///
    /// The position is not checked. A cursor past the end makes every
    /// following read fail with [`BufferError::UnexpectedEof`].
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Number of bytes between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Total number of bytes held, read or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All bytes held, regardless of the cursor.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes after the cursor.
    #[must_use]
    pub fn unread(&self) -> &[u8] {
        self.data.get(self.offset..).unwrap_or_default()
    }

    /// Consumes the buffer and returns its bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writers
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a text field: the byte length of the modified UTF-8 encoding
    /// as a `u16`, then the encoded bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::TextTooLong`] if the encoding exceeds 65535 bytes. The
    /// buffer is left unchanged.
    pub fn write_utf(&mut self, text: &str) -> Result<&mut Self, BufferError> {
        let encoded = mutf8::encode_str(text);
        let len = u16::try_from(encoded.len()).map_err(|_| BufferError::TextTooLong {
            len: encoded.len(),
        })?;
        self.data.reserve(2 + encoded.len());
        self.data.extend_from_slice(&len.to_be_bytes());
        self.data.extend_from_slice(&encoded);
        Ok(self)
    }

    /// Appends `1` for `true`, `0` for `false`.
    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_byte(u8::from(value))
    }

    /// Appends one byte.
    pub fn write_byte(&mut self, value: u8) -> &mut Self {
        self.data.push(value);
        self
    }

    /// Appends an unsigned 16-bit integer.
    pub fn write_short(&mut self, value: u16) -> &mut Self {
        self.write_raw(value.to_be_bytes())
    }

    /// Appends a signed 32-bit integer.
    pub fn write_int(&mut self, value: i32) -> &mut Self {
        self.write_raw(value.to_be_bytes())
    }

    /// Appends an IEEE-754 single precision float.
    ///
    /// Any numeric type that widens losslessly to `f64` is accepted; the
    /// value is then narrowed to `f32`, rounding to the nearest
    /// representable value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_float(&mut self, value: impl Into<f64>) -> &mut Self {
        let value = value.into() as f32;
        self.write_raw(value.to_be_bytes())
    }

    /// Appends a signed 64-bit integer.
    pub fn write_long(&mut self, value: i64) -> &mut Self {
        self.write_raw(value.to_be_bytes())
    }

    /// Appends bytes as they are.
    pub fn write_raw(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.data.extend_from_slice(bytes.as_ref());
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Readers
    // ─────────────────────────────────────────────────────────────────────

    /// Reads a text field written by [`write_utf`](Self::write_utf).
    ///
    /// A zero length prefix yields an empty string and consumes only the
    /// prefix. Bytes that do not decode to valid UTF-8 are recovered as
    /// configured by [`BufferOptions::text_recovery`]; bad text never makes
    /// this fail.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if the prefix or the payload it
    /// announces extends past the end of the buffer.
    pub fn read_utf(&mut self) -> Result<String, BufferError> {
        let start = self.offset;
        let payload_start = self.ensure(start, 2)?;
        let len = usize::from(u16::from_be_bytes([
            self.data[start],
            self.data[start + 1],
        ]));
        let end = self.ensure(payload_start, len)?;
        let text = self.decode_text(&self.data[payload_start..end], payload_start);
        self.offset = end;
        Ok(text)
    }

    /// Reads one byte; anything other than `0` is `true`.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if the buffer is exhausted.
    pub fn read_bool(&mut self) -> Result<bool, BufferError> {
        Ok(self.read_byte()? != 0)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if the buffer is exhausted.
    pub fn read_byte(&mut self) -> Result<u8, BufferError> {
        let [byte] = self.take_array()?;
        Ok(byte)
    }

    /// Reads an unsigned 16-bit integer.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_short(&mut self) -> Result<u16, BufferError> {
        self.take_array().map(u16::from_be_bytes)
    }

    /// Reads a signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_int(&mut self) -> Result<i32, BufferError> {
        self.take_array().map(i32::from_be_bytes)
    }

    /// Reads an IEEE-754 single precision float.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_float(&mut self) -> Result<f32, BufferError> {
        self.take_array().map(f32::from_be_bytes)
    }

    /// Reads a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 8 bytes remain.
    pub fn read_long(&mut self) -> Result<i64, BufferError> {
        self.take_array().map(i64::from_be_bytes)
    }

    /// Reads the next `len` bytes without interpreting them.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn read_fully(&mut self, len: usize) -> Result<&[u8], BufferError> {
        let start = self.offset;
        let end = self.ensure(start, len)?;
        self.offset = end;
        Ok(&self.data[start..end])
    }

    /// Reads a fixed-width field and advances the cursor past it.
    pub(crate) fn take_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let start = self.offset;
        let end = self.ensure(start, N)?;
        let mut field = [0; N];
        field.copy_from_slice(&self.data[start..end]);
        self.offset = end;
        Ok(field)
    }

    /// Checks that `needed` bytes are available at `at` and returns the
    /// index just past them.
    fn ensure(&self, at: usize, needed: usize) -> Result<usize, BufferError> {
        let available = self.data.len().saturating_sub(at);
        if at > self.data.len() || available < needed {
            return Err(BufferError::UnexpectedEof {
                offset: at,
                needed,
                available,
            });
        }
        Ok(at + needed)
    }

    fn decode_text(&self, payload: &[u8], at: usize) -> String {
        let standard = mutf8::decode(payload);
        if let Ok(text) = core::str::from_utf8(&standard) {
            return String::from(text);
        }

        let mut text = String::with_capacity(standard.len());
        let mut invalid = 0;
        let mut rest: &[u8] = &standard;
        while !rest.is_empty() {
            let (ch, len) = bstr::decode_utf8(rest);
            match ch {
                Some(ch) => text.push(ch),
                None => {
                    invalid += len;
                    if self.options.text_recovery == TextRecovery::Replace {
                        text.push(char::REPLACEMENT_CHARACTER);
                    }
                }
            }
            rest = &rest[len..];
        }

        if self.options.warn_on_malformed_text {
            tracing::warn!(
                offset = at,
                invalid_bytes = invalid,
                recovery = ?self.options.text_recovery,
                "text field is not valid UTF-8"
            );
        }
        text
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &bstr::BStr::new(&self.data))
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
