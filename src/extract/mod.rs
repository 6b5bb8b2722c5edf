/*! Text extraction

Turns raw payloads (bytes of unknown encoding, usually HTML) into plain text.

1. The encoding is detected (see [encoding::detect]) and the bytes are decoded lossily,
2. Markup is removed (see [html::to_text]),
3. The result is trimmed.

None of these steps can fail: undecodable bytes become U+FFFD.
!*/
pub mod encoding;
pub mod html;

use bytes::Bytes;

/// Raw bytes of a document, along with an optional declared encoding
/// (for example the `charset` of an HTTP `Content-Type` header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPayload {
    bytes: Bytes,
    encoding_hint: Option<String>,
}

impl RawPayload {
    pub fn new(bytes: Bytes, encoding_hint: Option<String>) -> Self {
        Self {
            bytes,
            encoding_hint,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn encoding_hint(&self) -> Option<&str> {
        self.encoding_hint.as_deref()
    }
}

impl From<Vec<u8>> for RawPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Bytes::from(bytes), None)
    }
}

impl From<&'static str> for RawPayload {
    fn from(s: &'static str) -> Self {
        Self::new(Bytes::from_static(s.as_bytes()), None)
    }
}

#[derive(Default)]
pub struct Decoder;

impl Decoder {
    /// Decode and strip markup from a raw payload.
    pub fn decode(&self, payload: &RawPayload) -> String {
        let text = encoding::decode(payload.bytes(), payload.encoding_hint());
        self.decode_str(&text)
    }

    /// Strip markup from already decoded text.
    pub fn decode_str(&self, html: &str) -> String {
        html::to_text(html).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{Decoder, RawPayload};

    #[test]
    fn decode_html() {
        let payload = RawPayload::from(
            "<html><head><title>t</title></head><body>\n<h1>Title</h1><p>Some <em>text</em>, here.</p></body></html>",
        );
        let text = Decoder.decode(&payload);

        assert!(text.contains("Some text, here."));
        assert!(!text.contains('<'));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn decode_plain() {
        let payload = RawPayload::from("   just some text.  \n");
        assert_eq!(Decoder.decode(&payload), "just some text.");
    }

    #[test]
    fn decode_garbage() {
        let bytes: Vec<u8> = vec![0xC3, 0x28, 0xA0, 0xA1, 0xE2, 0x28, 0xA1, 0xF0, 0x28, 0x8C, 0xBC];
        let payload = RawPayload::new(Bytes::from(bytes), Some("utf-8".to_string()));

        // only checking that we get a string back
        let _ = Decoder.decode(&payload);
    }

    #[test]
    fn decode_declared_encoding() {
        let bytes = b"<p>caf\xe9, cr\xe8me.</p>".to_vec();
        let payload = RawPayload::new(Bytes::from(bytes), Some("windows-1252".to_string()));
        let text = Decoder.decode(&payload);
        assert!(text.contains("caf"));
        assert!(text.contains("me."));
    }
}
