//! Capacity monitoring: overload warnings per technician.
//!
//! Derived read model over the ledger and the demand board; recomputed
//! whenever either changes. Warnings are advisory only and never block
//! submission.

use std::fmt;

use crate::analyze::DemandBoard;
use crate::ledger::{AllocationLedger, DutyCategory};
use crate::models::Technician;

/// An advisory overload warning for one technician.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    /// Overloaded technician.
    pub technician_id: String,
    /// Display name, for rendering.
    pub display_name: String,
    /// Current duty category, if allocated.
    pub category: Option<DutyCategory>,
    /// Sites whose analysis suggests this technician.
    pub assigned: usize,
    /// The configured daily limit that was exceeded.
    pub max_capacity: u32,
}

impl CapacityWarning {
    /// The "assigned/max" ratio, e.g. `"2/1"`.
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.assigned, self.max_capacity)
    }
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self
            .category
            .map_or("sem alocação", DutyCategory::label);
        write!(
            f,
            "{} ({}): sugerido para {} atendimento(s), capacidade {}",
            self.display_name,
            category,
            self.assigned,
            self.ratio()
        )
    }
}

/// Computes overload warnings for every capacity-limited technician.
///
/// For each roster technician with a configured `max_capacity`, counts
/// the sites on the board whose analysis suggests them and warns when
/// the count exceeds the limit. Output follows roster iteration order,
/// one warning per technician.
pub fn capacity_warnings(
    roster: &[Technician],
    ledger: &AllocationLedger,
    board: &DemandBoard,
) -> Vec<CapacityWarning> {
    roster
        .iter()
        .filter_map(|tech| {
            let max_capacity = tech.max_capacity?;
            let assigned = board
                .analyses()
                .filter(|(_, analysis)| analysis.suggests(&tech.id))
                .count();
            (assigned > max_capacity as usize).then(|| CapacityWarning {
                technician_id: tech.id.clone(),
                display_name: tech.display_name.clone(),
                category: ledger.category_of(&tech.id),
                assigned,
                max_capacity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Specialty;

    #[test]
    fn test_single_warning_with_two_over_one_ratio() {
        // Spec scenario: one Hardware technician with capacity 1,
        // suggested for two printer demands.
        let roster = vec![Technician::new("A")
            .with_name("A. Lima")
            .with_specialty(Specialty::Hardware)
            .with_max_capacity(1)];

        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora sem toner", &roster);
        board.set_demand("S2", "impressora atolando papel", &roster);

        let mut ledger = AllocationLedger::new();
        ledger.move_to("A", Some(DutyCategory::Visit));

        let warnings = capacity_warnings(&roster, &ledger, &board);
        assert_eq!(warnings.len(), 1);

        let w = &warnings[0];
        assert_eq!(w.technician_id, "A");
        assert_eq!(w.ratio(), "2/1");
        assert_eq!(w.category, Some(DutyCategory::Visit));
        assert!(w.to_string().contains("2/1"));
        assert!(w.to_string().contains("A. Lima"));
    }

    #[test]
    fn test_within_capacity_no_warning() {
        let roster = vec![Technician::new("A")
            .with_specialty(Specialty::Hardware)
            .with_max_capacity(2)];
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &roster);
        board.set_demand("S2", "computador", &roster);

        let ledger = AllocationLedger::new();
        // assigned == max is not an overload
        assert!(capacity_warnings(&roster, &ledger, &board).is_empty());
    }

    #[test]
    fn test_unlimited_technicians_are_skipped() {
        let roster = vec![Technician::new("A").with_specialty(Specialty::Hardware)];
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &roster);
        board.set_demand("S2", "impressora", &roster);

        let ledger = AllocationLedger::new();
        assert!(capacity_warnings(&roster, &ledger, &board).is_empty());
    }

    #[test]
    fn test_warnings_follow_roster_order() {
        let roster = vec![
            Technician::new("B")
                .with_name("B")
                .with_specialty(Specialty::Hardware)
                .with_max_capacity(0),
            Technician::new("A")
                .with_name("A")
                .with_specialty(Specialty::Hardware)
                .with_max_capacity(0),
        ];
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &roster);

        let ledger = AllocationLedger::new();
        let warnings = capacity_warnings(&roster, &ledger, &board);
        // Both over (1 > 0), reported in roster order, not id order.
        let ids: Vec<_> = warnings.iter().map(|w| w.technician_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_unallocated_category_renders() {
        let roster = vec![Technician::new("A")
            .with_name("A")
            .with_specialty(Specialty::Hardware)
            .with_max_capacity(0)];
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &roster);

        let warnings = capacity_warnings(&roster, &AllocationLedger::new(), &board);
        assert_eq!(warnings[0].category, None);
        assert!(warnings[0].to_string().contains("sem alocação"));
    }
}
