//! Duty scheduling core for field-service operations.
//!
//! Assigns field technicians to mutually exclusive duty categories
//! (base/standby, on-site visit, off-duty) for a workday, classifies
//! free-text service demands into technical specialties, suggests
//! qualified technicians, flags capacity overloads, and validates the
//! full allocation before a scale is submitted for persistence.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Technician`, `Site`, `Demand`,
//!   `DemandAnalysis`, `ScaleTemplate`, `ScalePayload`
//! - **`classify`**: Fixed-vocabulary specialty classification of demand text
//! - **`analyze`**: Complexity grading, effort estimation, technician
//!   suggestion, and the per-session `DemandBoard`
//! - **`ledger`**: The allocation ledger — a structurally disjoint
//!   partition of technician ids into duty categories
//! - **`capacity`**: Advisory overload warnings
//! - **`validation`**: Pre-submission conflict checks (duplicates,
//!   unallocated technicians)
//! - **`templates`**: Named ledger snapshots in key-value storage
//! - **`ports`**: External collaborator traits (pending-work checker,
//!   persistence sink, key-value store)
//! - **`submit`**: The submission coordinator orchestrating ports,
//!   validation, and payload construction
//!
//! # Architecture
//!
//! Everything except [`submit`] is a synchronous, pure-data transform:
//! a single logical writer mutates the ledger through moves, and every
//! derived view (available set, capacity warnings, findings) is
//! recomputed from scratch. The only suspension points are the
//! coordinator's port calls. Equipment inventory, alerting, reporting,
//! and persistence itself live behind the port traits.

pub mod analyze;
pub mod capacity;
pub mod classify;
pub mod ledger;
pub mod models;
pub mod ports;
pub mod submit;
pub mod templates;
pub mod validation;
