use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use super::arbitrary::TrickyText;
use crate::mutf8;

/// Property: decoding the encoding of any valid UTF-8 text gives the text
/// back, byte for byte.
#[test]
fn codec_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: TrickyText) -> bool {
        let encoded = mutf8::encode_str(&text.0);
        mutf8::decode(&encoded).as_ref() == text.0.as_bytes()
    }

    QuickCheck::new()
        .tests(2_000)
        .quickcheck(prop as fn(TrickyText) -> bool);
}

/// Property: the encoding never contains a zero byte or a four-byte lead,
/// and its length is predicted by `encoded_len`.
#[quickcheck]
fn encoding_has_no_nul_or_four_byte_lead(text: TrickyText) -> bool {
    let encoded = mutf8::encode_str(&text.0);
    encoded.len() == mutf8::encoded_len(&text.0)
        && encoded.iter().all(|&b| b != 0 && !(0xF0..=0xF7).contains(&b))
}

/// Property: arbitrary bytes never make the codec panic, and decoding is the
/// identity on bytes that hold neither `C0 80` nor a high surrogate.
#[quickcheck]
fn codec_is_total(bytes: Vec<u8>) -> TestResult {
    let decoded = mutf8::decode(&mutf8::encode(&bytes)).into_owned();
    let untouched = !bytes
        .windows(2)
        .any(|w| matches!(w, [0xC0, 0x80] | [0xED, 0xA0..=0xAF]));
    if untouched {
        TestResult::from_bool(mutf8::decode(&bytes).as_ref() == bytes.as_slice())
    } else {
        TestResult::from_bool(decoded.len() <= bytes.len() * 2)
    }
}
