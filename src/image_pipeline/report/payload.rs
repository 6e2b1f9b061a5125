use std::fmt;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Base64 text of a raw symbol payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes `data` with the standard alphabet and `=` padding.
///
/// The bytes are opaque: embedded NULs and invalid UTF-8 are encoded like
/// any other byte.
pub fn encode_payload(data: &[u8]) -> EncodedPayload {
    EncodedPayload(STANDARD.encode(data))
}
