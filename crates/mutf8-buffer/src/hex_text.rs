//! Hex text in and out of a [`ByteBuffer`].

use alloc::{string::String, vec::Vec};

use crate::{byte_buffer::ByteBuffer, error::BufferError};

impl ByteBuffer {
    /// Appends the bytes spelled by a hex string such as `"cafe01"`.
    ///
    /// Upper and lower case digits are both accepted.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidHex`] if the input has an odd length or a
    /// non-hex character. Nothing is appended in that case.
    pub fn write_hex(&mut self, hex: impl AsRef<[u8]>) -> Result<&mut Self, BufferError> {
        let bytes = hex::decode(hex)?;
        Ok(self.write_raw(bytes))
    }

    /// All bytes held, as lowercase hex.
    #[must_use]
    pub fn hex_data(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// All bytes held, as lowercase hex in space separated groups of four
    /// bytes. The last group is shorter when the length is not a multiple
    /// of four.
    #[must_use]
    pub fn hexdump(&self) -> String {
        self.as_bytes()
            .chunks(4)
            .map(hex::encode)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
