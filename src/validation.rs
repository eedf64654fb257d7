//! Pre-submission allocation validation.
//!
//! Structural checks run at submission time, over the ledger and the
//! current roster. Detects:
//! - Duplicates: a technician id present in more than one duty set
//! - Unallocated: a roster id present in none of the duty sets
//!
//! Both classes are computed before reporting — no short-circuit — and
//! the check is idempotent over unchanged inputs. Duplicates are
//! structurally unreachable through [`crate::ledger::AllocationLedger::move_to`]
//! but remain checked because templates load snapshots wholesale.

use std::collections::BTreeSet;

use crate::ledger::{AllocationLedger, DutyCategory};
use crate::models::Technician;

/// Validation result: empty on success, all findings on failure.
pub type ValidationOutcome = Result<(), Vec<ConflictFinding>>;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictFinding {
    /// Finding category.
    pub kind: ConflictKind,
    /// Affected technician id.
    pub technician_id: String,
    /// Display name, or the id when the technician left the roster.
    pub display_name: String,
    /// Every duty category containing the id (>1 for duplicates, empty
    /// for unallocated).
    pub categories: Vec<DutyCategory>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of allocation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Id present in more than one duty set.
    Duplicate,
    /// Roster id present in no duty set.
    Unallocated,
}

/// Validates the full allocation before submission.
///
/// Checks, collecting everything:
/// 1. Duplicates by set intersection, each finding listing every
///    category containing the id.
/// 2. Unallocated roster ids (the derived available set is non-empty),
///    each requiring placement in Base, Visit, or Off.
///
/// # Returns
/// `Ok(())` when the allocation is submittable, `Err(findings)` with
/// all detected issues otherwise.
pub fn validate_allocation(roster: &[Technician], ledger: &AllocationLedger) -> ValidationOutcome {
    let mut findings = Vec::new();

    let mut allocated: BTreeSet<&str> = BTreeSet::new();
    for category in DutyCategory::ALL {
        allocated.extend(ledger.set(category).iter().map(String::as_str));
    }

    for id in allocated {
        let categories: Vec<DutyCategory> = DutyCategory::ALL
            .into_iter()
            .filter(|c| ledger.set(*c).contains(id))
            .collect();
        if categories.len() > 1 {
            let display_name = display_name_for(roster, id);
            let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
            findings.push(ConflictFinding {
                kind: ConflictKind::Duplicate,
                technician_id: id.to_string(),
                display_name: display_name.clone(),
                categories,
                message: format!("{}: alocado em {}", display_name, labels.join(", ")),
            });
        }
    }

    for id in ledger.available(roster) {
        let display_name = display_name_for(roster, &id);
        findings.push(ConflictFinding {
            kind: ConflictKind::Unallocated,
            technician_id: id,
            display_name: display_name.clone(),
            categories: Vec::new(),
            message: format!("{display_name}: não alocado em nenhuma categoria"),
        });
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(findings)
    }
}

fn display_name_for(roster: &[Technician], id: &str) -> String {
    roster
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.display_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| id.to_string())
}
