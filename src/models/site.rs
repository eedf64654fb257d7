//! Site model.
//!
//! A site is a serviced location (a school in the source deployment).
//! The pending work count is derived externally by the pending-work
//! checker and cached here for display only.

use serde::{Deserialize, Serialize};

/// A serviced location that can raise demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Unique site identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Administrative district, used for geographic grouping.
    pub district: String,
    /// Count of unresolved prior work items (externally derived).
    pub pending_work_count: u32,
}

impl Site {
    /// Creates a new site with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            district: String::new(),
            pending_work_count: 0,
        }
    }

    /// Sets the site name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the district.
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }
}
