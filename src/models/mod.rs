//! Duty scheduling domain models.
//!
//! Core data types for the daily scale workflow: the people being
//! allocated, the locations raising demands, per-demand analysis
//! verdicts, reusable ledger templates, and the persisted payload shape.
//!
//! # Domain Mappings
//!
//! | fieldscale | Source deployment |
//! |------------|-------------------|
//! | Technician | CSDT field technician |
//! | Site | Municipal school |
//! | Demand | Daily service request |
//! | Scale | Finalized daily duty roster |

mod demand;
mod scale;
mod site;
mod technician;
mod template;

pub use demand::{Complexity, Demand, DemandAnalysis};
pub use scale::ScalePayload;
pub use site::Site;
pub use technician::{ExperienceLevel, Technician};
pub use template::ScaleTemplate;
