//! Demand analysis: complexity grading, effort estimation, and
//! technician suggestion.
//!
//! Combines the classifier's tags with the technician roster to produce
//! a [`DemandAnalysis`] per demand. Thresholds and urgency keyword
//! lists are static configuration calibrated against the classifier's
//! fixed dictionary, not learned.
//!
//! Suggestion ranking requires a non-empty specialty intersection —
//! there is never a fallback to "anyone".
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling" — same
//! static-priority shape as classic dispatching rules.

use std::collections::BTreeMap;

use crate::classify::{classify, Specialty};
use crate::models::{Complexity, Demand, DemandAnalysis, Technician};

/// Keywords that force a high complexity grade regardless of tag count.
const HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "urgente",
    "urgência",
    "parado",
    "parada",
    "crítico",
    "emergência",
    "não funciona",
    "sem acesso",
];

/// Keywords that raise the grade to at least medium.
const MEDIUM_URGENCY_KEYWORDS: &[&str] =
    &["lento", "lenta", "intermitente", "instável", "falha", "oscilando"];

/// Analyzes a single demand text against the full roster.
///
/// 1. Classify; an empty detection defaults to `[Support]`.
/// 2. Grade complexity from urgency keywords and detected-tag count
///    (>2 tags = high, >1 = medium).
/// 3. Estimate hours as `base_hours(complexity) + detected count`.
/// 4. Suggest up to 3 technicians whose specialties intersect the
///    detection, ranked by (intersection size desc, experience rank
///    desc); ties keep roster order.
pub fn analyze_demand(text: &str, roster: &[Technician]) -> DemandAnalysis {
    let mut detected = classify(text);
    if detected.is_empty() {
        detected.push(Specialty::Support);
    }

    let lower = text.to_lowercase();
    let complexity = if contains_any(&lower, HIGH_URGENCY_KEYWORDS) || detected.len() > 2 {
        Complexity::High
    } else if contains_any(&lower, MEDIUM_URGENCY_KEYWORDS) || detected.len() > 1 {
        Complexity::Medium
    } else {
        Complexity::Low
    };

    let estimated_hours = complexity.base_hours() + detected.len() as u32;

    let mut candidates: Vec<(usize, u8, usize, &Technician)> = roster
        .iter()
        .enumerate()
        .filter_map(|(roster_pos, tech)| {
            let overlap = tech
                .specialties
                .iter()
                .filter(|s| detected.contains(s))
                .count();
            (overlap > 0).then_some((overlap, tech.experience_rank(), roster_pos, tech))
        })
        .collect();
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));

    let suggested_technician_ids = candidates
        .into_iter()
        .take(3)
        .map(|(_, _, _, tech)| tech.id.clone())
        .collect();

    DemandAnalysis {
        detected_specialties: detected,
        complexity,
        estimated_hours,
        suggested_technician_ids,
    }
}

fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower_text.contains(kw))
}

/// Per-site demand texts and their analyses for one editing session.
///
/// Every text change recomputes that site's analysis; clearing a text
/// to blank removes the entry entirely. Iteration order is by site id
/// so downstream listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct DemandBoard {
    entries: BTreeMap<String, BoardEntry>,
}

#[derive(Debug, Clone)]
struct BoardEntry {
    text: String,
    analysis: DemandAnalysis,
}

impl DemandBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or clears) the demand text for a site, recomputing its
    /// analysis. Blank text removes the site's entry.
    pub fn set_demand(&mut self, site_id: impl Into<String>, text: &str, roster: &[Technician]) {
        let site_id = site_id.into();
        if text.trim().is_empty() {
            self.entries.remove(&site_id);
            return;
        }
        self.entries.insert(
            site_id,
            BoardEntry {
                text: text.to_string(),
                analysis: analyze_demand(text, roster),
            },
        );
    }

    /// Records a [`Demand`]. Equivalent to
    /// [`set_demand`](Self::set_demand) with its fields.
    pub fn record(&mut self, demand: &Demand, roster: &[Technician]) {
        self.set_demand(demand.site_id.clone(), &demand.text, roster);
    }

    /// Recomputes every analysis, e.g. after a roster change.
    pub fn reanalyze(&mut self, roster: &[Technician]) {
        for entry in self.entries.values_mut() {
            entry.analysis = analyze_demand(&entry.text, roster);
        }
    }

    /// The analysis for a site, if it has a demand.
    pub fn analysis(&self, site_id: &str) -> Option<&DemandAnalysis> {
        self.entries.get(site_id).map(|e| &e.analysis)
    }

    /// All analyses, keyed by site id, in site-id order.
    pub fn analyses(&self) -> impl Iterator<Item = (&str, &DemandAnalysis)> {
        self.entries.iter().map(|(id, e)| (id.as_str(), &e.analysis))
    }

    /// The demand texts keyed by site id, as submitted in the payload.
    pub fn texts(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(id, e)| (id.clone(), e.text.clone()))
            .collect()
    }

    /// Number of sites with a demand.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no site has a demand.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    fn roster() -> Vec<Technician> {
        vec![
            Technician::new("T1")
                .with_name("Hardware Jr")
                .with_specialty(Specialty::Hardware)
                .with_experience(ExperienceLevel::Junior),
            Technician::new("T2")
                .with_name("Hardware Sr")
                .with_specialty(Specialty::Hardware)
                .with_experience(ExperienceLevel::Senior),
            Technician::new("T3")
                .with_name("Net+Hw Pleno")
                .with_specialty(Specialty::Networking)
                .with_specialty(Specialty::Hardware)
                .with_experience(ExperienceLevel::Pleno),
            Technician::new("T4")
                .with_name("DB only")
                .with_specialty(Specialty::Database)
                .with_experience(ExperienceLevel::Senior),
        ]
    }

    #[test]
    fn test_empty_detection_defaults_to_support() {
        let analysis = analyze_demand("favor verificar a sala", &[]);
        assert_eq!(analysis.detected_specialties, vec![Specialty::Support]);
        assert_eq!(analysis.complexity, Complexity::Low);
        // base(low)=2 + 1 detected tag
        assert_eq!(analysis.estimated_hours, 3);
    }

    #[test]
    fn test_high_urgency_keyword_forces_high() {
        let analysis = analyze_demand("impressora parada", &[]);
        assert_eq!(analysis.complexity, Complexity::High);
        assert_eq!(analysis.estimated_hours, 8 + 1);
    }

    #[test]
    fn test_three_tags_grade_high_and_estimate_eleven_hours() {
        let analysis = analyze_demand("sistema fora, sem rede e impressora quebrada", &[]);
        assert_eq!(analysis.detected_specialties.len(), 3);
        assert_eq!(analysis.complexity, Complexity::High);
        assert_eq!(analysis.estimated_hours, 11);
    }

    #[test]
    fn test_two_tags_grade_medium() {
        let analysis = analyze_demand("trocar teclado e instalar programa", &[]);
        assert_eq!(analysis.detected_specialties.len(), 2);
        assert_eq!(analysis.complexity, Complexity::Medium);
        assert_eq!(analysis.estimated_hours, 4 + 2);
    }

    #[test]
    fn test_medium_urgency_keyword() {
        let analysis = analyze_demand("computador lento", &[]);
        assert_eq!(analysis.detected_specialties, vec![Specialty::Hardware]);
        assert_eq!(analysis.complexity, Complexity::Medium);
    }

    #[test]
    fn test_suggestion_ranking_overlap_then_experience() {
        let roster = roster();
        let analysis = analyze_demand("impressora e rede com problema", &roster);
        // T3 overlaps both tags; T2 beats T1 on experience.
        assert_eq!(analysis.suggested_technician_ids, vec!["T3", "T2", "T1"]);
    }

    #[test]
    fn test_no_intersection_yields_no_suggestions() {
        let roster = vec![Technician::new("T4")
            .with_specialty(Specialty::Database)
            .with_experience(ExperienceLevel::Senior)];
        // Defaults to Support, which nobody covers.
        let analysis = analyze_demand("texto sem palavras conhecidas", &roster);
        assert_eq!(analysis.detected_specialties, vec![Specialty::Support]);
        assert!(analysis.suggested_technician_ids.is_empty());
    }

    #[test]
    fn test_suggestions_capped_at_three() {
        let roster: Vec<Technician> = (1..=5)
            .map(|i| Technician::new(format!("T{i}")).with_specialty(Specialty::Hardware))
            .collect();
        let analysis = analyze_demand("impressora", &roster);
        assert_eq!(analysis.suggested_technician_ids.len(), 3);
        // All tied: roster order wins.
        assert_eq!(analysis.suggested_technician_ids, vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_board_recomputes_on_change() {
        let roster = roster();
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora quebrada", &roster);
        assert_eq!(
            board.analysis("S1").unwrap().detected_specialties,
            vec![Specialty::Hardware]
        );

        board.set_demand("S1", "problema de rede", &roster);
        assert_eq!(
            board.analysis("S1").unwrap().detected_specialties,
            vec![Specialty::Networking]
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_board_blank_text_removes_entry() {
        let roster = roster();
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &roster);
        board.set_demand("S1", "   ", &roster);
        assert!(board.analysis("S1").is_none());
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_texts_for_payload() {
        let roster = roster();
        let mut board = DemandBoard::new();
        board.record(&Demand::new("S2", "sem internet"), &roster);
        board.record(&Demand::new("S1", "impressora"), &roster);

        let texts = board.texts();
        assert_eq!(
            texts.keys().collect::<Vec<_>>(),
            vec!["S1", "S2"],
            "site-id order"
        );
        assert_eq!(texts["S2"], "sem internet");
    }

    #[test]
    fn test_reanalyze_after_roster_change() {
        let mut board = DemandBoard::new();
        board.set_demand("S1", "impressora", &[]);
        assert!(board
            .analysis("S1")
            .unwrap()
            .suggested_technician_ids
            .is_empty());

        board.reanalyze(&roster());
        assert!(!board
            .analysis("S1")
            .unwrap()
            .suggested_technician_ids
            .is_empty());
    }
}
