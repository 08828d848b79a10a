//! Partychat - encode a public party message, dump it, optionally send it

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use client::{ColorStack, Config, Connection};
use crossterm::style::Color;
use protocol::{hexdump, PartyPublicMessage, Utf8Encoding};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "partychat", version, about = "Encode and send a public party message")]
struct Args {
    /// Message text.
    #[arg(required_unless_present = "file")]
    text: Option<String>,

    /// Read the message text from a UTF-8 file instead (a leading BOM is dropped).
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, default_value = client::config::CONFIG_FILE)]
    config: PathBuf,

    /// Send the packet to this `host:port` (overrides the config file).
    #[arg(long)]
    send: Option<String>,

    /// Do not print the hex dump.
    #[arg(long)]
    no_dump: bool,

    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    info!("Partychat v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration, then let flags override it
    let mut config = Config::load_from(&args.config)?;
    if let Some(addr) = args.send {
        config.network.address = addr;
    }
    if args.no_dump {
        config.dump.enabled = false;
    }
    if args.no_color {
        config.console.colors = false;
    }

    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            let raw = std::fs::read(&path)?;
            Utf8Encoding::PLAIN.decode(&raw)?.trim_end_matches(['\r', '\n']).to_string()
        }
        (None, None) => anyhow::bail!("no message text given"),
    };

    let message = PartyPublicMessage::new(text);
    let packet = message.encode()?;
    info!("Encoded party message: {} bytes", packet.len());

    if config.dump.enabled {
        let mut console = ColorStack::from_config(io::stdout().lock(), &config.console);
        console.scoped(Color::Cyan, |out| writeln!(out, "Public Party Message"))??;
        write!(console.writer_mut(), "{}", hexdump::format_buffer(&packet))?;
    }

    if !config.network.address.is_empty() {
        let timeout = Duration::from_secs(config.network.connect_timeout_secs);
        let mut conn = Connection::connect(&config.network.address, timeout).await?;
        conn.send(&packet).await?;
        conn.shutdown().await?;
    }

    Ok(())
}
