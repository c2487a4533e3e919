/// How [`ByteBuffer::read_utf`](crate::ByteBuffer::read_utf) treats bytes
/// that are not valid UTF-8 once the modified UTF-8 framing is undone.
///
/// Peers in the wild send unpaired surrogates and truncated sequences, so
/// text reads never fail on bad content; this only picks what the bad bytes
/// turn into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextRecovery {
    /// Invalid byte sequences are removed from the decoded text.
    #[default]
    Drop,
    /// Each maximal invalid byte sequence becomes U+FFFD.
    Replace,
}

/// Configuration for reading from a [`ByteBuffer`](crate::ByteBuffer).
///
/// Writers have no knobs; the wire format they produce is fixed.
///
/// # Examples
///
/// ```rust
/// use mutf8_buffer::{BufferOptions, ByteBuffer, TextRecovery};
///
/// let buf = ByteBuffer::with_options(BufferOptions {
///     text_recovery: TextRecovery::Replace,
///     ..Default::default()
/// });
/// assert_eq!(buf.options().text_recovery, TextRecovery::Replace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferOptions {
    /// What happens to invalid UTF-8 inside a text field.
    ///
    /// # Default
    ///
    /// [`TextRecovery::Drop`]
    pub text_recovery: TextRecovery,

    /// Whether to emit a `tracing` warning when a text field needed
    /// recovery.
    ///
    /// # Default
    ///
    /// `true`
    pub warn_on_malformed_text: bool,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            text_recovery: TextRecovery::Drop,
            warn_on_malformed_text: true,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{BufferOptions, TextRecovery};

    #[test]
    fn deserializes_partial_config() {
        let opts: BufferOptions =
            serde_json::from_str(r#"{"text_recovery":"replace"}"#).unwrap();
        assert_eq!(opts.text_recovery, TextRecovery::Replace);
        assert!(opts.warn_on_malformed_text);
    }
}
