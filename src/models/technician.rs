//! Technician model.
//!
//! Technicians are the people assigned to duty categories for a workday.
//! Each technician carries a set of technical specialties, an experience
//! level, and an optional daily visit capacity used by the capacity monitor.

use serde::{Deserialize, Serialize};

use crate::classify::Specialty;

/// A field technician eligible for duty allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    /// Unique technician identifier.
    pub id: String,
    /// Human-readable name shown in findings and warnings.
    pub display_name: String,
    /// Technical specialties this technician covers.
    pub specialties: Vec<Specialty>,
    /// Experience level (`None` = unknown, ranked lowest).
    pub experience: Option<ExperienceLevel>,
    /// Maximum site visits per day. `None` = unmonitored.
    pub max_capacity: Option<u32>,
}

/// Technician seniority, ordered from least to most experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Entry level.
    Junior,
    /// Mid level ("pleno" in the source organization's grading).
    Pleno,
    /// Senior level.
    Senior,
}

impl ExperienceLevel {
    /// Numeric rank used for suggestion ordering (senior=3, pleno=2, junior=1).
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::Pleno => 2,
            ExperienceLevel::Senior => 3,
        }
    }
}

impl Technician {
    /// Creates a new technician with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            specialties: Vec::new(),
            experience: None,
            max_capacity: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Adds a specialty.
    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialties.push(specialty);
        self
    }

    /// Sets the experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience = Some(level);
        self
    }

    /// Sets the daily visit capacity.
    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Whether this technician covers a given specialty.
    pub fn has_specialty(&self, specialty: Specialty) -> bool {
        self.specialties.contains(&specialty)
    }

    /// Experience rank with unknown levels ranked as junior (1).
    pub fn experience_rank(&self) -> u8 {
        self.experience.map_or(1, ExperienceLevel::rank)
    }
}
