//! Fixed-point readers that map an unsigned integer field linearly onto a
//! caller supplied `[min, max]` range.
//!
//! A raw value of `0` maps to `min` and the largest value of the field width
//! maps to `max`.

use crate::{byte_buffer::ByteBuffer, error::BufferError};

const U24_MAX: u32 = 0x00FF_FFFF;

fn rescale(raw: f64, full_scale: f64, min: f64, max: f64) -> f64 {
    raw * (max - min) / full_scale + min
}

impl ByteBuffer {
    /// Reads an unsigned 24-bit big-endian integer.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 3 bytes remain.
    pub fn read_u24(&mut self) -> Result<u32, BufferError> {
        let [hi, mid, lo] = self.take_array()?;
        Ok(u32::from_be_bytes([0, hi, mid, lo]))
    }

    /// Reads one byte scaled onto `[min, max]` in steps of `(max - min) / 255`.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if the buffer is exhausted.
    pub fn read_scaled_byte(&mut self, min: f64, max: f64) -> Result<f64, BufferError> {
        let raw = self.read_byte()?;
        Ok(rescale(f64::from(raw), f64::from(u8::MAX), min, max))
    }

    /// Reads a `u16` scaled onto `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_scaled_short(&mut self, min: f64, max: f64) -> Result<f64, BufferError> {
        let raw = self.read_short()?;
        Ok(rescale(f64::from(raw), f64::from(u16::MAX), min, max))
    }

    /// Reads a 24-bit unsigned integer scaled onto `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnexpectedEof`] if fewer than 3 bytes remain.
    pub fn read_scaled_u24(&mut self, min: f64, max: f64) -> Result<f64, BufferError> {
        let raw = self.read_u24()?;
        Ok(rescale(f64::from(raw), f64::from(U24_MAX), min, max))
    }
}
