#![no_main]

use libfuzzer_sys::fuzz_target;
use mutf8_buffer::{BufferOptions, ByteBuffer, TextRecovery};

/// Interprets the first byte as a script of reads to perform on the rest.
/// Every read either succeeds or fails cleanly without moving the cursor.
fn reader(data: &[u8]) {
    let Some((&script, body)) = data.split_first() else {
        return;
    };

    let mut buf = ByteBuffer::with_options(BufferOptions {
        text_recovery: if script & 0x80 != 0 {
            TextRecovery::Replace
        } else {
            TextRecovery::Drop
        },
        warn_on_malformed_text: false,
    });
    buf.write_raw(body);

    let mut op = usize::from(script);
    loop {
        let before = buf.offset();
        let ok = match op % 8 {
            0 => buf.read_utf().is_ok(),
            1 => buf.read_bool().is_ok(),
            2 => buf.read_byte().is_ok(),
            3 => buf.read_short().is_ok(),
            4 => buf.read_int().is_ok(),
            5 => buf.read_float().is_ok(),
            6 => buf.read_long().is_ok(),
            _ => buf.read_u24().is_ok(),
        };
        if !ok {
            assert_eq!(buf.offset(), before, "failed read moved the cursor");
            break;
        }
        assert!(buf.offset() > before);
        assert!(buf.offset() <= buf.len());
        op = op.wrapping_mul(31).wrapping_add(7);
    }
}

fuzz_target!(|data: &[u8]| reader(data));
