//! Client error types.

use protocol::ProtocolError;
use thiserror::Error;

/// Errors raised while changing console colours.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Colour stack is empty")]
    EmptyStack,
}

/// Errors raised by the packet transport.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timed out connecting to {0}")]
    ConnectTimeout(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
