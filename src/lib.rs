pub mod broadcast;
pub mod client;
pub mod error;
pub mod protocol;
pub mod server;
pub mod utils;

pub use broadcast::Broadcaster;
pub use client::{Client, ClientId, ClientRegistry};
pub use server::{Server, ServerConfig};
