// TCP connection that carries encoded packets to the server
use std::net::SocketAddr;
use std::time::Duration;

use protocol::{hexdump, PartyPublicMessage};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::NetworkError;

/// Outbound packet connection.
///
/// Packets are written exactly as encoded; no framing is added.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    packets_sent: u64,
}

impl Connection {
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self, NetworkError> {
        info!("Connecting to: {}", addr);
        let stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| NetworkError::ConnectTimeout(addr.to_string()))??;
        stream.set_nodelay(true)?;
        let peer = stream.peer_addr()?;
        info!("Connected to {}", peer);

        Ok(Self {
            stream,
            peer,
            packets_sent: 0,
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn packets_sent(&self) -> u64 {
        self.packets_sent
    }

    /// Write one encoded packet.
    pub async fn send(&mut self, packet: &[u8]) -> Result<(), NetworkError> {
        debug!(
            "Sending {} bytes to {}\n{}",
            packet.len(),
            self.peer,
            hexdump::format_buffer(packet)
        );
        self.stream.write_all(packet).await?;
        self.packets_sent += 1;
        Ok(())
    }

    /// Encode and send a public party message.
    pub async fn send_party_message(&mut self, text: &str) -> Result<(), NetworkError> {
        let packet = PartyPublicMessage::new(text).encode()?;
        self.send(&packet).await
    }

    pub async fn shutdown(mut self) -> Result<(), NetworkError> {
        self.stream.shutdown().await?;
        info!("Closed connection to {} after {} packets", self.peer, self.packets_sent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::ProtocolError;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_sends_raw_packet_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let mut conn = Connection::connect(&addr, Duration::from_secs(5)).await.unwrap();
        conn.send_party_message("Hi").await.unwrap();
        conn.send_party_message("").await.unwrap();
        assert_eq!(conn.packets_sent(), 2);
        conn.shutdown().await.unwrap();

        let received = server.await.unwrap();
        let mut expected = PartyPublicMessage::new("Hi").encode().unwrap().to_vec();
        expected.extend_from_slice(&PartyPublicMessage::new("").encode().unwrap());
        assert_eq!(received, expected);
    }

    #[tokio::test]
    async fn test_encoding_error_sends_nothing() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let mut conn = Connection::connect(&addr, Duration::from_secs(5)).await.unwrap();
        let err = conn.send_party_message("bad\0text").await.unwrap_err();
        assert!(matches!(err, NetworkError::Protocol(ProtocolError::Encoding(_))));
        assert_eq!(conn.packets_sent(), 0);
        conn.shutdown().await.unwrap();

        assert!(server.await.unwrap().is_empty());
    }
}
