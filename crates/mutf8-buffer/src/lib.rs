//! A cursor-based, big-endian byte buffer with a modified UTF-8 text codec.
//!
//! [`ByteBuffer`] owns a growable byte sequence and a single read cursor.
//! Writers always append at the end and return the buffer for chaining;
//! readers decode from the cursor and advance it. Text fields are framed the
//! way `java.io.DataOutput::writeUTF` frames them: a two-byte length prefix
//! followed by [modified UTF-8](mutf8).
//!
//! ```rust
//! use mutf8_buffer::ByteBuffer;
//!
//! let mut out = ByteBuffer::new();
//! out.write_byte(0x01)
//!     .write_short(2)
//!     .write_int(-1)
//!     .write_utf("héllo\0")?;
//!
//! let mut input = ByteBuffer::from(out.into_inner());
//! assert_eq!(input.read_byte()?, 1);
//! assert_eq!(input.read_short()?, 2);
//! assert_eq!(input.read_int()?, -1);
//! assert_eq!(input.read_utf()?, "héllo\0");
//! assert_eq!(input.remaining(), 0);
//! # Ok::<(), mutf8_buffer::BufferError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod byte_buffer;
mod error;
mod hex_text;
pub mod mutf8;
mod options;
mod scaled;

#[cfg(test)]
mod tests;

pub use byte_buffer::ByteBuffer;
pub use error::BufferError;
pub use options::{BufferOptions, TextRecovery};
