//! Module `state`
//!
//! Defines the `Client` struct: one connected, handshake-completed participant
//! with an immutable display name and a best-effort outbound writer.

use std::fmt;
use std::io;
use std::net::SocketAddr;

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::protocol::responses::LINE_TERMINATOR;

/// Boxed outbound half of a client connection
pub type ClientWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Identity of one accepted connection, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u64);

impl ClientId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a connected chat participant.
///
/// The name is fixed before the client becomes visible in the registry, so
/// readers never need to synchronize on it. Only the writer is locked, and
/// only for the duration of a single line.
pub struct Client {
    id: ClientId,
    name: String,
    peer_addr: Option<SocketAddr>,
    writer: Mutex<ClientWriter>,
}

impl Client {
    pub fn new<W>(id: ClientId, name: impl Into<String>, writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            id,
            name: name.into(),
            peer_addr: None,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Attaches the remote address, used for logging only.
    pub fn with_peer_addr(mut self, addr: SocketAddr) -> Self {
        self.peer_addr = Some(addr);
        self
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn peer_addr(&self) -> Option<&SocketAddr> {
        self.peer_addr.as_ref()
    }

    /// Best-effort delivery of one line.
    ///
    /// Writes `text` plus the line terminator as a single buffer, then flushes.
    /// Makes exactly one attempt; the caller decides whether the outcome matters.
    pub async fn send_line(&self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + LINE_TERMINATOR.len());
        line.push_str(text);
        line.push_str(LINE_TERMINATOR);

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await
    }

    /// Shuts down the outbound half of the connection.
    pub async fn close(&self) {
        let mut writer = self.writer.lock().await;
        if let Err(e) = writer.shutdown().await {
            debug!("Shutdown of {} failed: {}", self, e);
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.peer_addr {
            Some(addr) => write!(f, "{} ({} {})", self.name, self.id, addr),
            None => write!(f, "{} ({})", self.name, self.id),
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("peer_addr", &self.peer_addr)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader, duplex};

    #[tokio::test]
    async fn test_send_line_appends_terminator() {
        let (client_end, peer_end) = duplex(256);
        let client = Client::new(ClientId::new(1), "alice", client_end);

        client.send_line("bob: hi").await.unwrap();

        let mut reader = BufReader::new(peer_end);
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        assert_eq!(line, "bob: hi\n");
    }

    #[tokio::test]
    async fn test_send_line_after_peer_dropped_fails() {
        let (client_end, peer_end) = duplex(256);
        let client = Client::new(ClientId::new(2), "bob", client_end);
        drop(peer_end);

        assert!(client.send_line("anyone there?").await.is_err());
    }

    #[test]
    fn test_display_includes_identity() {
        let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let client = Client::new(ClientId::new(3), "carol", tokio::io::sink()).with_peer_addr(addr);
        assert_eq!(client.to_string(), "carol (#3 127.0.0.1:4000)");
        assert_eq!(client.peer_addr(), Some(&addr));
    }
}
