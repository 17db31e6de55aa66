//! Client registry
//!
//! Tracks every client currently in the active state. All operations take the
//! same lock and release it before returning; nothing here performs network I/O.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use crate::client::{Client, ClientId};
use crate::error::RegistryError;

/// Registry for tracking active clients
pub struct ClientRegistry {
    clients: Mutex<HashMap<ClientId, Arc<Client>>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a client under its own id.
    pub async fn add(&self, client: Arc<Client>) -> Result<(), RegistryError> {
        let mut clients = self.clients.lock().await;

        if clients.contains_key(&client.id()) {
            return Err(RegistryError::DuplicateIdentity(client.id()));
        }

        debug!("Registered {} ({} active)", client, clients.len() + 1);
        clients.insert(client.id(), client);
        Ok(())
    }

    /// Removes a client. Absent ids are ignored, so racing removals are harmless.
    pub async fn remove(&self, id: ClientId) -> Option<Arc<Client>> {
        let mut clients = self.clients.lock().await;
        let removed = clients.remove(&id);
        if let Some(client) = &removed {
            debug!("Deregistered {} ({} active)", client, clients.len());
        }
        removed
    }

    /// Copies out the current membership.
    ///
    /// The lock is released before the caller iterates, so sending to a slow
    /// client never blocks registry updates for other connections.
    pub async fn snapshot(&self) -> Vec<Arc<Client>> {
        let clients = self.clients.lock().await;
        clients.values().cloned().collect()
    }

    pub async fn contains(&self, id: ClientId) -> bool {
        self.clients.lock().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: u64, name: &str) -> Arc<Client> {
        Arc::new(Client::new(ClientId::new(id), name, tokio::io::sink()))
    }

    #[tokio::test]
    async fn test_add_and_snapshot() {
        let registry = ClientRegistry::new();
        registry.add(client(1, "alice")).await.unwrap();
        registry.add(client(2, "bob")).await.unwrap();

        let mut names: Vec<String> = registry
            .snapshot()
            .await
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_add_duplicate_identity_fails() {
        let registry = ClientRegistry::new();
        registry.add(client(1, "alice")).await.unwrap();

        let err = registry.add(client(1, "impostor")).await.unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentity(ClientId::new(1)));

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name(), "alice");
    }

    #[tokio::test]
    async fn test_duplicate_names_are_distinct_clients() {
        let registry = ClientRegistry::new();
        registry.add(client(1, "sam")).await.unwrap();
        registry.add(client(2, "sam")).await.unwrap();
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn test_remove_twice_is_noop() {
        let registry = ClientRegistry::new();
        registry.add(client(1, "alice")).await.unwrap();
        registry.add(client(2, "bob")).await.unwrap();

        assert!(registry.remove(ClientId::new(1)).await.is_some());
        assert!(registry.remove(ClientId::new(1)).await.is_none());

        assert!(!registry.contains(ClientId::new(1)).await);
        assert!(registry.contains(ClientId::new(2)).await);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_changes() {
        let registry = ClientRegistry::new();
        registry.add(client(1, "alice")).await.unwrap();

        let snapshot = registry.snapshot().await;
        registry.remove(ClientId::new(1)).await;

        assert_eq!(snapshot.len(), 1);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_adds_and_removes() {
        let registry = Arc::new(ClientRegistry::new());
        let adds = 64u64;
        let removes = 24u64;

        let mut handles = Vec::new();
        for id in 0..adds {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.add(client(id, "user")).await.unwrap();
                if id < removes {
                    registry.remove(ClientId::new(id)).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len() as u64, adds - removes);

        let mut ids: Vec<ClientId> = snapshot.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), snapshot.len());
    }
}
