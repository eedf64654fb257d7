//! Allocation ledger: the authoritative duty partition.
//!
//! Partitions technician ids into three mutually exclusive duty sets
//! (base, visit, off). Disjointness is structural: the only mutator,
//! [`AllocationLedger::move_to`], removes an id from every set before
//! inserting it into the target, so no sequence of moves can place a
//! technician in two categories. The available set is never stored — it
//! is always derived as roster minus the union of the three sets.
//!
//! The ledger is created empty per editing session, mutated only
//! through moves, and either discarded after submission or persisted as
//! a named snapshot via [`crate::templates`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::Technician;

/// Duty category for one workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyCategory {
    /// In-office standby duty.
    Base,
    /// On-site technical visit duty.
    Visit,
    /// Off duty.
    Off,
}

impl DutyCategory {
    /// All categories in declaration order.
    pub const ALL: [DutyCategory; 3] = [DutyCategory::Base, DutyCategory::Visit, DutyCategory::Off];

    /// Display label as shown to dispatchers.
    pub fn label(self) -> &'static str {
        match self {
            DutyCategory::Base => "Base",
            DutyCategory::Visit => "Visita Técnica",
            DutyCategory::Off => "Folga",
        }
    }
}

impl fmt::Display for DutyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reallocation: place a technician in a category, or in none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Technician being moved.
    pub technician_id: String,
    /// Destination category; `None` unassigns.
    pub target: Option<DutyCategory>,
}

impl Move {
    /// Move into a category.
    pub fn to(technician_id: impl Into<String>, category: DutyCategory) -> Self {
        Self {
            technician_id: technician_id.into(),
            target: Some(category),
        }
    }

    /// Remove from all categories.
    pub fn unassign(technician_id: impl Into<String>) -> Self {
        Self {
            technician_id: technician_id.into(),
            target: None,
        }
    }
}

/// A copy of the three duty sets, used by templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Base/standby ids.
    pub base: BTreeSet<String>,
    /// On-site visit ids.
    pub visit: BTreeSet<String>,
    /// Off-duty ids.
    pub off: BTreeSet<String>,
}

/// The in-memory partition of technicians into duty categories.
///
/// Sets are ordered (`BTreeSet`) so every derived listing — payload id
/// lists, validation findings — is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationLedger {
    base: BTreeSet<String>,
    visit: BTreeSet<String>,
    off: BTreeSet<String>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a technician into `target`, or out of every category when
    /// `target` is `None`.
    ///
    /// The sole mutator besides [`reset`](Self::reset) and
    /// [`load`](Self::load): the id is removed from all three sets
    /// before insertion, which keeps the sets pairwise disjoint under
    /// any move sequence.
    pub fn move_to(&mut self, technician_id: impl Into<String>, target: Option<DutyCategory>) {
        let id = technician_id.into();
        self.base.remove(&id);
        self.visit.remove(&id);
        self.off.remove(&id);
        if let Some(category) = target {
            self.set_mut(category).insert(id);
        }
    }

    /// Applies a [`Move`]. Reducer form of [`move_to`](Self::move_to),
    /// convenient for replaying recorded edit sequences.
    pub fn apply(&mut self, mv: &Move) {
        self.move_to(mv.technician_id.clone(), mv.target);
    }

    /// Empties all three sets.
    pub fn reset(&mut self) {
        self.base.clear();
        self.visit.clear();
        self.off.clear();
    }

    /// Copies out the current sets.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            base: self.base.clone(),
            visit: self.visit.clone(),
            off: self.off.clone(),
        }
    }

    /// Replaces the ledger wholesale with a snapshot.
    ///
    /// No roster reconciliation happens here: ids for technicians since
    /// removed from the roster stay in the loaded sets until a
    /// validation pass inspects them.
    pub fn load(&mut self, snapshot: LedgerSnapshot) {
        self.base = snapshot.base;
        self.visit = snapshot.visit;
        self.off = snapshot.off;
    }

    /// Roster ids not present in any duty set, in roster order.
    pub fn available(&self, roster: &[Technician]) -> Vec<String> {
        roster
            .iter()
            .filter(|t| self.category_of(&t.id).is_none())
            .map(|t| t.id.clone())
            .collect()
    }

    /// The category currently holding an id, if any.
    pub fn category_of(&self, technician_id: &str) -> Option<DutyCategory> {
        DutyCategory::ALL
            .iter()
            .copied()
            .find(|c| self.set(*c).contains(technician_id))
    }

    /// Whether an id is allocated to any category.
    pub fn contains(&self, technician_id: &str) -> bool {
        self.category_of(technician_id).is_some()
    }

    /// Read access to one duty set.
    pub fn set(&self, category: DutyCategory) -> &BTreeSet<String> {
        match category {
            DutyCategory::Base => &self.base,
            DutyCategory::Visit => &self.visit,
            DutyCategory::Off => &self.off,
        }
    }

    /// Ids in one duty set, sorted.
    pub fn ids_in(&self, category: DutyCategory) -> Vec<String> {
        self.set(category).iter().cloned().collect()
    }

    /// Total allocated ids across all categories.
    pub fn allocated_count(&self) -> usize {
        self.base.len() + self.visit.len() + self.off.len()
    }

    /// Whether no technician is allocated.
    pub fn is_empty(&self) -> bool {
        self.allocated_count() == 0
    }

    fn set_mut(&mut self, category: DutyCategory) -> &mut BTreeSet<String> {
        match category {
            DutyCategory::Base => &mut self.base,
            DutyCategory::Visit => &mut self.visit,
            DutyCategory::Off => &mut self.off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Technician> {
        vec![
            Technician::new("T1").with_name("A"),
            Technician::new("T2").with_name("B"),
            Technician::new("T3").with_name("C"),
        ]
    }

    fn pairwise_disjoint(ledger: &AllocationLedger) -> bool {
        let base = ledger.set(DutyCategory::Base);
        let visit = ledger.set(DutyCategory::Visit);
        let off = ledger.set(DutyCategory::Off);
        base.intersection(visit).next().is_none()
            && base.intersection(off).next().is_none()
            && visit.intersection(off).next().is_none()
    }

    #[test]
    fn test_disjoint_under_move_sequence() {
        let mut ledger = AllocationLedger::new();
        let sequence = [
            Move::to("T1", DutyCategory::Base),
            Move::to("T2", DutyCategory::Visit),
            Move::to("T1", DutyCategory::Visit),
            Move::to("T3", DutyCategory::Off),
            Move::to("T1", DutyCategory::Off),
            Move::unassign("T2"),
            Move::to("T2", DutyCategory::Base),
            Move::to("T1", DutyCategory::Base),
        ];

        for mv in &sequence {
            ledger.apply(mv);
            assert!(pairwise_disjoint(&ledger), "violated after {mv:?}");
        }
        assert_eq!(ledger.category_of("T1"), Some(DutyCategory::Base));
        assert_eq!(ledger.category_of("T2"), Some(DutyCategory::Base));
        assert_eq!(ledger.category_of("T3"), Some(DutyCategory::Off));
    }

    #[test]
    fn test_available_is_exact_complement() {
        let roster = roster();
        let mut ledger = AllocationLedger::new();
        assert_eq!(ledger.available(&roster), vec!["T1", "T2", "T3"]);

        ledger.move_to("T2", Some(DutyCategory::Visit));
        assert_eq!(ledger.available(&roster), vec!["T1", "T3"]);

        ledger.move_to("T1", Some(DutyCategory::Base));
        ledger.move_to("T3", Some(DutyCategory::Off));
        assert!(ledger.available(&roster).is_empty());

        ledger.move_to("T2", None);
        assert_eq!(ledger.available(&roster), vec!["T2"]);
    }

    #[test]
    fn test_move_round_trip_restores_state() {
        let mut ledger = AllocationLedger::new();
        ledger.move_to("T1", Some(DutyCategory::Base));
        ledger.move_to("T2", Some(DutyCategory::Visit));
        let before = ledger.clone();

        ledger.move_to("T1", Some(DutyCategory::Visit));
        ledger.move_to("T1", Some(DutyCategory::Base));

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_reset_empties_all_sets() {
        let mut ledger = AllocationLedger::new();
        ledger.move_to("T1", Some(DutyCategory::Base));
        ledger.move_to("T2", Some(DutyCategory::Off));
        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.allocated_count(), 0);
    }

    #[test]
    fn test_snapshot_load_round_trip() {
        let mut ledger = AllocationLedger::new();
        ledger.move_to("T1", Some(DutyCategory::Base));
        ledger.move_to("T2", Some(DutyCategory::Visit));
        let snap = ledger.snapshot();

        let mut other = AllocationLedger::new();
        other.move_to("T3", Some(DutyCategory::Off));
        other.load(snap);

        assert_eq!(other, ledger);
        assert_eq!(other.category_of("T3"), None);
    }

    #[test]
    fn test_load_keeps_stale_ids() {
        // "GONE" is no longer on the roster; load must keep it anyway.
        let mut ledger = AllocationLedger::new();
        ledger.move_to("GONE", Some(DutyCategory::Base));
        let snap = ledger.snapshot();

        let mut fresh = AllocationLedger::new();
        fresh.load(snap);
        assert_eq!(fresh.category_of("GONE"), Some(DutyCategory::Base));
        assert_eq!(fresh.available(&roster()), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_ids_in_sorted() {
        let mut ledger = AllocationLedger::new();
        ledger.move_to("T3", Some(DutyCategory::Base));
        ledger.move_to("T1", Some(DutyCategory::Base));
        assert_eq!(ledger.ids_in(DutyCategory::Base), vec!["T1", "T3"]);
    }
}
