//! Broadcast engine
//!
//! Each sweep works from a registry snapshot taken up front, so the registry
//! lock is never held while writing to sockets. Delivery is at-most-once with
//! no retry: a failed write is logged and the sweep moves on. The dead client
//! is cleaned up later by its own session when its read fails.

use std::sync::Arc;

use log::warn;

use crate::broadcast::results::BroadcastReport;
use crate::client::{ClientId, ClientRegistry};

pub struct Broadcaster {
    registry: Arc<ClientRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ClientRegistry> {
        &self.registry
    }

    /// Sends `message` to every registered client whose id is not `exclude`.
    pub async fn broadcast(&self, message: &str, exclude: Option<ClientId>) -> BroadcastReport {
        let recipients = self.registry.snapshot().await;
        let mut report = BroadcastReport::default();

        for client in recipients.iter().filter(|c| Some(c.id()) != exclude) {
            report.recipients += 1;
            match client.send_line(message).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!("Failed to deliver to {}: {}", client, e);
                }
            }
        }

        report
    }
}
