//! Protocol error types.

use thiserror::Error;

/// Errors that can occur while building or parsing packets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid packet opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid sub-command: {0:#06x}")]
    InvalidSubcommand(u16),

    #[error("Invalid message kind: {0:#04x}")]
    InvalidMessageKind(u8),

    #[error("Invalid trailer: {0:#06x}")]
    InvalidTrailer(u16),

    #[error("Unexpected end of data")]
    UnexpectedEof,

    #[error("{0} unexpected trailing bytes")]
    TrailingData(usize),

    #[error("Text cannot be encoded: {0}")]
    Encoding(String),
}
