//! Builds a login packet the way a Java peer using `DataOutputStream` would,
//! then parses it back field by field.
//!
//! The username deliberately contains a NUL and an emoji so that both special
//! cases of modified UTF-8 show up in the hex dump. A second, hand-corrupted
//! copy shows how unpaired surrogates from a sloppy peer are recovered.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=warn cargo run -p mutf8-buffer --example login_packet
//! ```

use mutf8_buffer::{BufferError, BufferOptions, ByteBuffer, TextRecovery};
use tracing_subscriber::EnvFilter;

const LOGIN: u16 = 0x0102;

fn main() -> Result<(), BufferError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut packet = ByteBuffer::new();
    packet
        .write_short(LOGIN)
        .write_utf("ann\0😀")?
        .write_bool(true)
        .write_long(1_700_000_000_000)
        .write_hex("deadbeef")?;

    println!("wire:    {}", packet.hexdump());

    let mut input = ByteBuffer::from(packet.as_bytes());
    let opcode = input.read_short()?;
    let user = input.read_utf()?;
    let remember = input.read_bool()?;
    let timestamp = input.read_long()?;
    let token = input.read_fully(4)?;
    println!("decoded: opcode={opcode:#06x} user={user:?} remember={remember} ts={timestamp} token={token:02x?}");

    // Cut the emoji's low surrogate off and fix up the length prefix.
    let mut corrupted = packet.into_inner();
    corrupted.drain(12..15);
    corrupted[3] -= 3;

    for text_recovery in [TextRecovery::Drop, TextRecovery::Replace] {
        let mut input = ByteBuffer::with_options(BufferOptions {
            text_recovery,
            ..Default::default()
        });
        input.write_raw(&corrupted);
        input.read_short()?;
        println!("{text_recovery:?}: user={:?}", input.read_utf()?);
    }
    Ok(())
}
