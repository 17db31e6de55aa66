//! Client management system
//!
//! Handles connected clients, the shared registry, and session lifecycle.

pub mod handler;
pub mod registry;
pub mod session;
pub mod state;

pub use handler::handle_client;
pub use registry::ClientRegistry;
pub use session::{ClientSession, SessionState};
pub use state::{Client, ClientId};
