//! Request body payloads.

use bytes::Bytes;
use std::borrow::Cow;

/// An intercepted request body, as text or as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Bytes),
}

impl Payload {
    /// Body as text. Bytes that are not valid UTF-8 are decoded lossily.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Payload::Text(text) => Cow::Borrowed(text),
            Payload::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(bytes))
    }
}

/// Check whether a value is a byte buffer that cannot be represented as text.
///
/// Absent values and text are never binary. A byte buffer is binary when
/// decoding it as UTF-8 and encoding it back would not reproduce its bytes.
pub fn is_binary_buffer(value: Option<&Payload>) -> bool {
    match value {
        Some(Payload::Bytes(bytes)) => std::str::from_utf8(bytes).is_err(),
        Some(Payload::Text(_)) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_buffers_are_not_binary() {
        assert!(!is_binary_buffer(None));
        assert!(!is_binary_buffer(Some(&Payload::from(""))));
        assert!(!is_binary_buffer(Some(&Payload::from("\u{80}\u{01}"))));
    }

    #[test]
    fn test_binary_buffer() {
        let payload = Payload::from(vec![0x80, 0x01]);
        assert!(is_binary_buffer(Some(&payload)));
    }

    #[test]
    fn test_text_buffer_is_not_binary() {
        let payload = Payload::from(Bytes::from_static(b"8001"));
        assert!(!is_binary_buffer(Some(&payload)));

        let multibyte = Payload::from("héllo ✓".as_bytes().to_vec());
        assert!(!is_binary_buffer(Some(&multibyte)));

        assert!(!is_binary_buffer(Some(&Payload::from(Vec::new()))));
    }

    #[test]
    fn test_as_text_lossy() {
        assert_eq!(Payload::from("abc").as_text(), "abc");
        assert_eq!(Payload::from(vec![b'a', 0xff]).as_text(), "a\u{FFFD}");
    }
}
