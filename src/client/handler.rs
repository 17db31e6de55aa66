use log::{debug, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::broadcast::Broadcaster;
use crate::client::{Client, ClientId, ClientSession, SessionState};
use crate::error::SessionError;
use crate::protocol::{
    NAME_PROMPT, chat_message, join_announcement, leave_announcement, parse_message, parse_name,
};

/// Runs one chat session over a split connection.
///
/// - Prompts for a name and reads one line as the handshake.
/// - Registers the client, announces the join, then relays each line read.
/// - On end-of-stream or any read error, deregisters, announces the leave,
///   and closes the writer.
///
/// A failed handshake returns an error without ever touching the registry.
pub async fn handle_client<R, W>(
    reader: R,
    mut writer: W,
    id: ClientId,
    peer_addr: Option<SocketAddr>,
    broadcaster: Arc<Broadcaster>,
) -> Result<(), SessionError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let mut session = ClientSession::new(id);
    let mut reader = BufReader::new(reader);

    session.transition(SessionState::Handshaking);
    let name = match handshake(&mut reader, &mut writer).await {
        Ok(name) => name,
        Err(e) => {
            session.transition(SessionState::Closed);
            if let Err(e) = writer.shutdown().await {
                debug!("Shutdown of connection {} failed: {}", id, e);
            }
            return Err(e);
        }
    };

    let mut client = Client::new(id, name, writer);
    if let Some(addr) = peer_addr {
        client = client.with_peer_addr(addr);
    }
    let client = Arc::new(client);

    if let Err(e) = broadcaster.registry().add(Arc::clone(&client)).await {
        session.transition(SessionState::Closed);
        client.close().await;
        return Err(e.into());
    }
    session.transition(SessionState::Active);

    info!("{} connected", client.name());
    broadcaster
        .broadcast(&join_announcement(client.name()), Some(id))
        .await;

    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => {
                debug!("{} closed the connection", client);
                break;
            }
            Ok(_) => {
                let raw = String::from_utf8_lossy(&line);
                let text = parse_message(&raw);
                broadcaster
                    .broadcast(&chat_message(client.name(), text), Some(id))
                    .await;
            }
            Err(e) => {
                debug!("Read from {} failed: {}", client, e);
                break;
            }
        }
    }

    broadcaster.registry().remove(id).await;
    session.transition(SessionState::Closed);
    broadcaster
        .broadcast(&leave_announcement(client.name()), Some(id))
        .await;
    info!("{} disconnected", client.name());

    client.close().await;
    Ok(())
}

/// Sends the prompt and reads the display name.
async fn handshake<R, W>(reader: &mut BufReader<R>, writer: &mut W) -> Result<String, SessionError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(NAME_PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line).await?;
    if n == 0 {
        return Err(SessionError::HandshakeAborted);
    }

    Ok(parse_name(&String::from_utf8_lossy(&line)))
}
