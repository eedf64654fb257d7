//! Demand and demand-analysis models.
//!
//! A demand is the free-text description of work needed at a site.
//! Analysis attaches detected specialties, a complexity grade, an hour
//! estimate, and ranked technician suggestions (see [`crate::analyze`]).

use serde::{Deserialize, Serialize};

use crate::classify::Specialty;

/// A free-text service request raised by a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    /// Site that raised the demand.
    pub site_id: String,
    /// Free-text description of the requested work.
    pub text: String,
}

impl Demand {
    /// Creates a new demand.
    pub fn new(site_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            text: text.into(),
        }
    }
}

/// Demand complexity grade.
///
/// Graded from fixed urgency keyword lists and the number of detected
/// specialties; the hour-estimation constants below are calibrated
/// against that fixed dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Routine single-specialty work.
    Low,
    /// Multi-specialty or degraded-service work.
    Medium,
    /// Urgent or broadly cross-cutting work.
    High,
}

impl Complexity {
    /// Base hour estimate for this grade (low=2, medium=4, high=8).
    pub fn base_hours(self) -> u32 {
        match self {
            Complexity::Low => 2,
            Complexity::Medium => 4,
            Complexity::High => 8,
        }
    }
}

/// The analyzer's verdict for one demand text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandAnalysis {
    /// Detected specialties in vocabulary order (never empty; defaults
    /// to Support when nothing matches).
    pub detected_specialties: Vec<Specialty>,
    /// Complexity grade.
    pub complexity: Complexity,
    /// Estimated effort: `base_hours(complexity) + detected count`.
    pub estimated_hours: u32,
    /// Qualified technicians ranked by specialty overlap then
    /// experience, capped at 3. Empty when nobody qualifies.
    pub suggested_technician_ids: Vec<String>,
}

impl DemandAnalysis {
    /// Whether a technician is among the suggestions.
    pub fn suggests(&self, technician_id: &str) -> bool {
        self.suggested_technician_ids
            .iter()
            .any(|id| id == technician_id)
    }
}
