use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{BufferError, ByteBuffer};

/// One field of a message, as a writer would put it on the wire.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Field {
    Utf(String),
    Bool(bool),
    Byte(u8),
    Short(u16),
    Int(i32),
    Float(f32),
    Long(i64),
    Raw(Vec<u8>),
}

impl Field {
    pub(crate) fn write(&self, buf: &mut ByteBuffer) -> Result<(), BufferError> {
        match self {
            Field::Utf(text) => {
                buf.write_utf(text)?;
            }
            Field::Bool(value) => {
                buf.write_bool(*value);
            }
            Field::Byte(value) => {
                buf.write_byte(*value);
            }
            Field::Short(value) => {
                buf.write_short(*value);
            }
            Field::Int(value) => {
                buf.write_int(*value);
            }
            Field::Float(value) => {
                buf.write_float(*value);
            }
            Field::Long(value) => {
                buf.write_long(*value);
            }
            Field::Raw(bytes) => {
                buf.write_raw(bytes);
            }
        }
        Ok(())
    }

    /// Reads back a field of the same kind as `self`.
    pub(crate) fn read_like(&self, buf: &mut ByteBuffer) -> Result<Field, BufferError> {
        Ok(match self {
            Field::Utf(_) => Field::Utf(buf.read_utf()?),
            Field::Bool(_) => Field::Bool(buf.read_bool()?),
            Field::Byte(_) => Field::Byte(buf.read_byte()?),
            Field::Short(_) => Field::Short(buf.read_short()?),
            Field::Int(_) => Field::Int(buf.read_int()?),
            Field::Float(_) => Field::Float(buf.read_float()?),
            Field::Long(_) => Field::Long(buf.read_long()?),
            Field::Raw(bytes) => Field::Raw(buf.read_fully(bytes.len())?.to_vec()),
        })
    }

    /// Like `==`, except any two NaNs match and `0.0` does not match `-0.0`.
    pub(crate) fn same_as(&self, other: &Field) -> bool {
        match (self, other) {
            (Field::Float(a), Field::Float(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            _ => self == other,
        }
    }
}

impl Arbitrary for Field {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 8 {
            0 => Field::Utf(String::arbitrary(g)),
            1 => Field::Bool(bool::arbitrary(g)),
            2 => Field::Byte(u8::arbitrary(g)),
            3 => Field::Short(u16::arbitrary(g)),
            4 => Field::Int(i32::arbitrary(g)),
            5 => Field::Float(f32::arbitrary(g)),
            6 => Field::Long(i64::arbitrary(g)),
            _ => Field::Raw(Vec::arbitrary(g)),
        }
    }
}

/// Text biased towards the characters modified UTF-8 treats specially.
#[derive(Debug, Clone)]
pub(crate) struct TrickyText(pub(crate) String);

impl Arbitrary for TrickyText {
    fn arbitrary(g: &mut Gen) -> Self {
        const SPECIAL: &[char] = &[
            '\0',
            'a',
            'é',
            '\u{7FF}',
            '\u{800}',
            '€',
            '\u{FFFF}',
            '\u{10000}',
            '😀',
            '\u{10FFFF}',
        ];
        let len = usize::arbitrary(g) % 16;
        let text = (0..len)
            .map(|_| {
                if bool::arbitrary(g) {
                    *g.choose(SPECIAL).unwrap_or(&'\0')
                } else {
                    char::arbitrary(g)
                }
            })
            .collect();
        TrickyText(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(TrickyText))
    }
}
