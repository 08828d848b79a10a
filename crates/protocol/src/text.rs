//! UTF-8 text encoding policies.

use crate::ProtocolError;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// UTF-8 encoding with an optional byte-order mark preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf8Encoding {
    pub emit_bom: bool,
}

impl Utf8Encoding {
    /// Plain UTF-8, no preamble.
    pub const PLAIN: Self = Self { emit_bom: false };
    /// UTF-8 prefixed with a byte-order mark.
    pub const WITH_BOM: Self = Self { emit_bom: true };

    pub const fn preamble(&self) -> &'static [u8] {
        if self.emit_bom { &UTF8_BOM } else { &[] }
    }

    pub fn encode(&self, s: &str) -> Vec<u8> {
        let preamble = self.preamble();
        let mut out = Vec::with_capacity(preamble.len() + s.len());
        out.extend_from_slice(preamble);
        out.extend_from_slice(s.as_bytes());
        out
    }

    /// Decode bytes, dropping a leading byte-order mark if present.
    pub fn decode(&self, data: &[u8]) -> Result<String, ProtocolError> {
        let body = data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data);
        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|e| ProtocolError::Encoding(e.to_string()))
    }

    /// Decode bytes, replacing invalid sequences with U+FFFD.
    pub fn decode_lossy(&self, data: &[u8]) -> String {
        let body = data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data);
        String::from_utf8_lossy(body).into_owned()
    }
}
