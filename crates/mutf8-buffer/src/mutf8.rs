//! Modified UTF-8, the text encoding of `java.io.DataInput`/`DataOutput`.
//!
//! Modified UTF-8 differs from standard UTF-8 in exactly two ways:
//!
//! - U+0000 is written as the overlong pair `C0 80`, so encoded text never
//!   contains a zero byte.
//! - Code points at or above U+10000 are written as a UTF-16 surrogate pair,
//!   each surrogate encoded as its own three-byte sequence (`ED Ax xx` for
//!   the high half, `ED Bx xx` for the low half), six bytes in total.
//!
//! [`encode`] and [`decode`] convert between the two forms. Both are total:
//! bytes that do not form a recognised sequence (stray continuation bytes,
//! sequences cut short by the end of input) are copied through unchanged, so
//! neither function ever panics. When the input needs no rewriting the input
//! slice is handed back without allocating.
//!
//! ```rust
//! use mutf8_buffer::mutf8;
//!
//! let wire = mutf8::encode("a\0😀".as_bytes());
//! assert_eq!(&*wire, b"a\xC0\x80\xED\xA0\xBD\xED\xB8\x80");
//! assert_eq!(&*mutf8::decode(&wire), "a\0😀".as_bytes());
//! ```
#![allow(clippy::cast_possible_truncation)]

use alloc::{borrow::Cow, vec::Vec};

/// Class of a byte found where a sequence is expected to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Ascii,
    Two,
    Three,
    Four,
    Other,
}

impl Lead {
    fn of(byte: u8) -> Self {
        match byte {
            0x00..=0x7F => Lead::Ascii,
            0xC0..=0xDF => Lead::Two,
            0xE0..=0xEF => Lead::Three,
            0xF0..=0xF7 => Lead::Four,
            _ => Lead::Other,
        }
    }
}

/// Converts standard UTF-8 bytes to modified UTF-8.
///
/// Returns the input unchanged (borrowed) when it holds neither a NUL byte
/// nor a four-byte sequence.
#[must_use]
pub fn encode(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.iter().any(|&b| b == 0 || Lead::of(b) == Lead::Four) {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len() + input.len() / 2);
    let mut i = 0;
    while let Some(&b1) = input.get(i) {
        match Lead::of(b1) {
            Lead::Ascii if b1 == 0 => {
                out.extend_from_slice(&[0xC0, 0x80]);
                i += 1;
            }
            Lead::Ascii | Lead::Other => {
                out.push(b1);
                i += 1;
            }
            Lead::Two => i = copy_sequence(input, i, 2, &mut out),
            Lead::Three => i = copy_sequence(input, i, 3, &mut out),
            Lead::Four => {
                let Some(&[b1, b2, b3, b4]) = input.get(i..i + 4) else {
                    out.extend_from_slice(&input[i..]);
                    break;
                };
                let u21 = (u32::from(b1 & 0x07) << 18)
                    | (u32::from(b2 & 0x3F) << 12)
                    | (u32::from(b3 & 0x3F) << 6)
                    | u32::from(b4 & 0x3F);
                out.extend_from_slice(&[
                    0xED,
                    0xA0 + ((u21 >> 16).wrapping_sub(1) & 0x0F) as u8,
                    0x80 + ((u21 >> 10) & 0x3F) as u8,
                    0xED,
                    0xB0 + ((u21 >> 6) & 0x0F) as u8,
                    b4,
                ]);
                i += 4;
            }
        }
    }
    Cow::Owned(out)
}

/// Converts modified UTF-8 bytes back to standard UTF-8.
///
/// `C0 80` becomes `00` and a high/low surrogate pair becomes the four-byte
/// sequence of the code point it stands for. A surrogate without its partner
/// is left as is; whether that is acceptable is up to the caller, since the
/// result is then not valid UTF-8.
///
/// Returns the input unchanged (borrowed) when there is nothing to rewrite.
#[must_use]
pub fn decode(input: &[u8]) -> Cow<'_, [u8]> {
    if !input
        .windows(2)
        .any(|w| matches!(w, [0xC0, 0x80] | [0xED, 0xA0..=0xAF]))
    {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while let Some(&b1) = input.get(i) {
        match Lead::of(b1) {
            Lead::Two => match input.get(i..i + 2) {
                Some([0xC0, 0x80]) => {
                    out.push(0);
                    i += 2;
                }
                _ => i = copy_sequence(input, i, 2, &mut out),
            },
            Lead::Three => {
                if let Some(&[0xED, b2 @ 0xA0..=0xAF, b3, 0xED, b5 @ 0xB0..=0xBF, b6]) =
                    input.get(i..i + 6)
                {
                    let u21 = ((u32::from(b2 & 0x0F) + 1) << 16)
                        | (u32::from(b3 & 0x3F) << 10)
                        | (u32::from(b5 & 0x0F) << 6)
                        | u32::from(b6 & 0x3F);
                    out.extend_from_slice(&[
                        0xF0 + ((u21 >> 18) & 0x07) as u8,
                        0x80 + ((u21 >> 12) & 0x3F) as u8,
                        0x80 + ((u21 >> 6) & 0x3F) as u8,
                        0x80 + (u21 & 0x3F) as u8,
                    ]);
                    i += 6;
                } else {
                    i = copy_sequence(input, i, 3, &mut out);
                }
            }
            Lead::Ascii | Lead::Four | Lead::Other => {
                out.push(b1);
                i += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// Modified UTF-8 encoding of a string.
#[must_use]
pub fn encode_str(text: &str) -> Cow<'_, [u8]> {
    encode(text.as_bytes())
}

/// Length in bytes of the modified UTF-8 encoding of `text`, computed
/// without allocating.
#[must_use]
pub fn encoded_len(text: &str) -> usize {
    text.bytes().fold(0, |len, b| match Lead::of(b) {
        // one extra byte for `C0 80`, two extra for the surrogate pair
        Lead::Ascii if b == 0 => len + 2,
        Lead::Four => len + 3,
        _ => len + 1,
    })
}

/// Copies the `n`-byte sequence starting at `start`, or whatever is left of
/// it, and returns the index just past it.
fn copy_sequence(input: &[u8], start: usize, n: usize, out: &mut Vec<u8>) -> usize {
    let end = (start + n).min(input.len());
    out.extend_from_slice(&input[start..end]);
    end
}
