//! Scale template model.
//!
//! A template is a named snapshot of the allocation ledger saved for
//! reuse across editing sessions (see [`crate::templates`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerSnapshot;

/// A named, timestamped snapshot of the allocation ledger.
///
/// Loading a template replaces the ledger wholesale. Technician ids
/// removed from the roster since the snapshot was taken are kept as-is
/// and only surface during a later validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleTemplate {
    /// Store-assigned identifier.
    pub id: String,
    /// User-chosen name (never blank).
    pub name: String,
    /// The saved base/visit/off sets.
    pub snapshot: LedgerSnapshot,
    /// When the template was saved.
    pub created_at: DateTime<Utc>,
}
