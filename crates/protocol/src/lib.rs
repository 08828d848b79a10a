//! Client protocol crate.
//!
//! This crate contains:
//! - Big-endian binary reading/writing utilities
//! - Packet definitions and builders
//! - Hex dump formatting for packet logging
//! - UTF-8 text encoding policies

mod binary;
mod error;
pub mod hexdump;
pub mod packets;
pub mod text;

pub use binary::{BinaryReader, BinaryWriter};
pub use error::ProtocolError;
pub use packets::PartyPublicMessage;
pub use text::Utf8Encoding;
