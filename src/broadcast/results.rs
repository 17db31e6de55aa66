//! Broadcast result types
//!
//! Defines the outcome summary returned by a broadcast sweep.

/// Outcome of one broadcast sweep.
///
/// Purely informational. Senders never see per-recipient failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Clients in the snapshot other than the excluded sender
    pub recipients: usize,
    pub delivered: usize,
    pub failed: usize,
}

impl BroadcastReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}
