#![expect(missing_docs)]

use mutf8_buffer::{BufferOptions, ByteBuffer, TextRecovery};
use tracing_test::traced_test;

fn with_lone_surrogate(options: BufferOptions) -> ByteBuffer {
    let mut buf = ByteBuffer::with_options(options);
    // "ok" followed by an unpaired high surrogate
    buf.write_raw([0x00, 0x05, b'o', b'k', 0xED, 0xA0, 0xBD]);
    buf
}

#[test]
#[traced_test]
fn malformed_text_is_dropped_and_reported() {
    let mut buf = with_lone_surrogate(BufferOptions::default());
    assert_eq!(buf.read_utf().unwrap(), "ok");
    assert_eq!(buf.remaining(), 0);
    assert!(logs_contain("text field is not valid UTF-8"));
    assert!(logs_contain("invalid_bytes=3"));
}

#[test]
#[traced_test]
fn malformed_text_is_replaced_when_configured() {
    let mut buf = with_lone_surrogate(BufferOptions {
        text_recovery: TextRecovery::Replace,
        ..Default::default()
    });
    assert_eq!(buf.read_utf().unwrap(), "ok\u{FFFD}\u{FFFD}\u{FFFD}");
    assert!(logs_contain("recovery=Replace"));
}

#[test]
#[traced_test]
fn warning_can_be_silenced() {
    let mut buf = with_lone_surrogate(BufferOptions {
        warn_on_malformed_text: false,
        ..Default::default()
    });
    assert_eq!(buf.read_utf().unwrap(), "ok");
    assert!(!logs_contain("not valid UTF-8"));
}

#[test]
#[traced_test]
fn valid_text_is_not_reported() {
    let mut buf = ByteBuffer::new();
    buf.write_utf("fine 😀").unwrap();
    assert_eq!(buf.read_utf().unwrap(), "fine 😀");
    assert!(!logs_contain("not valid UTF-8"));
}
