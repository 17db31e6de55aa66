//! Broadcast fan-out
//!
//! Delivers one line to every registered client except the sender.

pub mod engine;
pub mod results;

pub use engine::Broadcaster;
pub use results::BroadcastReport;
