use log::{error, info};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::net::{TcpListener, TcpStream};

use crate::broadcast::Broadcaster;
use crate::client::{ClientId, ClientRegistry, handle_client};
use crate::error::{ServerError, SessionError};
use crate::error::handlers::handle_session_error;
use crate::server::config::ServerConfig;

pub struct Server {
    listener: TcpListener,
    broadcaster: Arc<Broadcaster>,
    next_client_id: AtomicU64,
}

impl Server {
    /// Binds the listening socket. Failure here is fatal to the caller.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let addr = config.socket_addr();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        info!("Server bound to {}", addr);

        Ok(Self {
            listener,
            broadcaster: Arc::new(Broadcaster::new(Arc::new(ClientRegistry::new()))),
            next_client_id: AtomicU64::new(1),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn registry(&self) -> Arc<ClientRegistry> {
        Arc::clone(self.broadcaster.registry())
    }

    /// Accepts connections forever, one spawned session per connection.
    ///
    /// Accept errors are logged and the loop keeps going.
    pub async fn run(self) {
        match self.local_addr() {
            Ok(addr) => info!("Chat server started on {}", addr),
            Err(_) => info!("Chat server started"),
        }

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let id = ClientId::new(self.next_client_id.fetch_add(1, Ordering::Relaxed));
                    let broadcaster = Arc::clone(&self.broadcaster);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, id, broadcaster).await {
                            handle_session_error(&format!("{} {}", id, addr), &e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    id: ClientId,
    broadcaster: Arc<Broadcaster>,
) -> Result<(), SessionError> {
    info!("New connection {} from {}", id, addr);
    let (read_half, write_half) = stream.into_split();
    handle_client(read_half, write_half, id, Some(addr), broadcaster).await
}
