#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutf8_buffer::mutf8;

#[derive(Debug, Arbitrary)]
enum Input {
    /// Valid text must survive an encode/decode round trip unchanged.
    Text(String),
    /// Arbitrary bytes must never make either direction panic.
    Bytes(Vec<u8>),
}

fn codec(input: Input) {
    match input {
        Input::Text(text) => {
            let encoded = mutf8::encode_str(&text);
            assert_eq!(encoded.len(), mutf8::encoded_len(&text));
            assert!(!encoded.contains(&0), "encoded text contains NUL");
            assert_eq!(mutf8::decode(&encoded).as_ref(), text.as_bytes());
        }
        Input::Bytes(bytes) => {
            let _ = mutf8::decode(&mutf8::encode(&bytes));
            let _ = mutf8::decode(&bytes);
        }
    }
}

fuzz_target!(|input: Input| codec(input));
