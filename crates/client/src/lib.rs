//! Client-side utilities for the party chat tools.
//!
//! - `console`: scoped foreground colour stack
//! - `config`: TOML configuration
//! - `network`: TCP transport for encoded packets
//! - `utils`: geometry helpers

pub mod config;
pub mod console;
mod error;
pub mod network;
pub mod utils;

pub use config::Config;
pub use console::ColorStack;
pub use error::{ConsoleError, NetworkError};
pub use network::Connection;
pub use utils::in_range;
