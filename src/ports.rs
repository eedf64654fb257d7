//! External collaborator seams.
//!
//! The core never talks to the network or storage itself; it consumes
//! these traits. Roster and site providers are not modeled as traits —
//! callers pass the current lists as slices.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ScalePayload;

/// Errors raised by external collaborators.
#[derive(thiserror::Error, Debug)]
pub enum PortError {
    /// Network or server failure; the caller may retry manually.
    #[error("transport error: {0}")]
    Transport(String),
    /// Collaborator-internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Pending-work verdict for one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWork {
    /// Whether the site has unresolved prior work.
    pub has_pending: bool,
    /// Number of unresolved items.
    pub pending_count: u32,
}

impl PendingWork {
    /// No pending work.
    pub fn none() -> Self {
        Self {
            has_pending: false,
            pending_count: 0,
        }
    }

    /// Pending work with the given item count.
    pub fn items(pending_count: u32) -> Self {
        Self {
            has_pending: pending_count > 0,
            pending_count,
        }
    }
}

/// Checks whether a site has unresolved prior work that must block
/// scheduling new work there.
#[async_trait]
pub trait PendingWorkChecker: Send + Sync {
    /// Returns the pending-work verdict for a site.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backing service fails.
    async fn has_pending_work(&self, site_id: &str) -> Result<PendingWork, PortError>;
}

/// Persists a finalized scale.
///
/// Atomicity (all-or-nothing persistence) is the sink's own contract;
/// the core performs no partial-write recovery.
#[async_trait]
pub trait ScaleSink: Send + Sync {
    /// Submits the scale payload.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] on transport or server failure. The core
    /// never retries automatically.
    async fn submit_scale(&self, payload: &ScalePayload) -> Result<(), PortError>;
}

/// Synchronous, non-networked key-value storage for templates.
pub trait KeyValueStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value.
    fn set(&mut self, key: &str, value: String);

    /// Removes a value.
    fn remove(&mut self, key: &str);
}

/// In-process [`KeyValueStore`], the default backing for tests and
/// single-session use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
