//! Client -> Server packet building and parsing.

use bytes::Bytes;

use super::{ClientOpcode, ExtendedSubcommand, PartyMessageKind};
use crate::{BinaryReader, BinaryWriter, ProtocolError};

/// Bytes surrounding the text: opcode, sub-command, kind, terminator, trailer.
pub const PARTY_PUBLIC_MESSAGE_OVERHEAD: usize = 1 + 2 + 1 + 2 + 2;

/// Public party message (0xBF / 0x0006 / 0x04).
///
/// Layout, big-endian:
///
/// ```text
/// u8   opcode      0xBF
/// u16  subcommand  0x0006
/// u8   kind        0x04
/// u16* text        UTF-16BE, null-terminated
/// u16  trailer     0x0000
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyPublicMessage {
    text: String,
}

impl PartyPublicMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the encoded packet in bytes.
    pub fn encoded_len(&self) -> usize {
        PARTY_PUBLIC_MESSAGE_OVERHEAD + 2 * self.text.encode_utf16().count()
    }

    /// Serialize into a fresh buffer.
    pub fn encode(&self) -> Result<Bytes, ProtocolError> {
        Ok(build_party_public_message(&self.text)?.finish())
    }

    /// Parse a complete packet. Trailing bytes after the trailer are an error.
    pub fn parse(data: &[u8]) -> Result<Self, ProtocolError> {
        if data.is_empty() {
            return Err(ProtocolError::UnexpectedEof);
        }

        let mut reader = BinaryReader::new(Bytes::copy_from_slice(data));
        ClientOpcode::try_from(reader.get_u8()?)?;
        ExtendedSubcommand::try_from(reader.get_u16()?)?;
        PartyMessageKind::try_from(reader.get_u8()?)?;

        let text = reader.get_string_big_unicode_null()?;

        let trailer = reader.get_u16()?;
        if trailer != 0 {
            return Err(ProtocolError::InvalidTrailer(trailer));
        }
        if reader.remaining() > 0 {
            return Err(ProtocolError::TrailingData(reader.remaining()));
        }

        Ok(Self { text })
    }
}

/// Build a public party message packet.
pub fn build_party_public_message(text: &str) -> Result<BinaryWriter, ProtocolError> {
    let mut w = BinaryWriter::with_capacity(PARTY_PUBLIC_MESSAGE_OVERHEAD + 2 * text.len());
    w.put_u8(ClientOpcode::ExtendedCommand as u8);
    w.put_u16(ExtendedSubcommand::Party as u16);
    w.put_u8(PartyMessageKind::PublicMessage as u8);
    w.put_string_big_unicode_null(text)?;
    w.put_u16(0);
    Ok(w)
}
