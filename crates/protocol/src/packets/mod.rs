//! Packet definitions for the client protocol.
//!
//! Only client -> server packets are modelled. Every packet is written
//! without an outer length prefix; framing belongs to the transport.

mod client;

pub use client::*;

use crate::ProtocolError;

/// Opcodes for client -> server packets.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOpcode {
    /// Extended command; the actual request is selected by a sub-command.
    ExtendedCommand = 0xBF,
}

impl TryFrom<u8> for ClientOpcode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xBF => Ok(Self::ExtendedCommand),
            other => Err(ProtocolError::InvalidOpcode(other)),
        }
    }
}

/// Sub-commands carried by [`ClientOpcode::ExtendedCommand`].
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedSubcommand {
    /// Party system.
    Party = 0x0006,
}

impl TryFrom<u16> for ExtendedSubcommand {
    type Error = ProtocolError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0006 => Ok(Self::Party),
            other => Err(ProtocolError::InvalidSubcommand(other)),
        }
    }
}

/// Message kinds under [`ExtendedSubcommand::Party`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyMessageKind {
    /// Message broadcast to every party member.
    PublicMessage = 0x04,
}

impl TryFrom<u8> for PartyMessageKind {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x04 => Ok(Self::PublicMessage),
            other => Err(ProtocolError::InvalidMessageKind(other)),
        }
    }
}
