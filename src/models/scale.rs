//! Scale submission payload.
//!
//! The exact wire shape consumed by the external persistence API.
//! Field names are serialized in camelCase to match that contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload submitted to the persistence API for one workday scale.
///
/// Ids within each duty list are sorted; the demands map is keyed by
/// site id. Built by the submission coordinator from the ledger and the
/// demand board — never constructed field-by-field in calling code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePayload {
    /// Technicians on base/standby duty.
    pub base_technician_ids: Vec<String>,
    /// Technicians on on-site visit duty.
    pub visit_technician_ids: Vec<String>,
    /// Technicians off duty.
    pub off_technician_ids: Vec<String>,
    /// Free-text demand per selected site.
    pub demands_by_site_id: BTreeMap<String, String>,
}
