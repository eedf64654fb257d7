//! Specialty classification of free-text demands.
//!
//! Maps a demand text onto a fixed, closed vocabulary of technical
//! specialties via keyword-dictionary matching. This is a deliberate,
//! deterministic stand-in for natural-language understanding: the
//! complexity and hour-estimation constants in [`crate::analyze`] are
//! calibrated against this dictionary, so it must not be swapped for
//! fuzzy or learned classification without re-deriving them.
//!
//! The keyword lists carry the Portuguese service vocabulary of the
//! source organization alongside common English terms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A technical specialty tag from the closed vocabulary.
///
/// Declaration order is the canonical output order of the classifier —
/// it reflects vocabulary position, not match relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Specialty {
    /// Physical equipment: printers, computers, peripherals.
    Hardware,
    /// Programs, installations, licensing.
    Software,
    /// Local networks and connectivity.
    Networking,
    /// General user support and training.
    Support,
    /// Server rooms, power, cabling.
    Infrastructure,
    /// Access control, malware, credentials.
    Security,
    /// Databases and backups.
    Database,
    /// Business systems and platforms.
    Systems,
    /// Preventive and corrective maintenance.
    Maintenance,
}

/// The full vocabulary in declaration order.
pub const VOCABULARY: [Specialty; 9] = [
    Specialty::Hardware,
    Specialty::Software,
    Specialty::Networking,
    Specialty::Support,
    Specialty::Infrastructure,
    Specialty::Security,
    Specialty::Database,
    Specialty::Systems,
    Specialty::Maintenance,
];

impl Specialty {
    /// Keywords whose presence (as a lowercase substring) maps a text
    /// onto this tag.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Specialty::Hardware => &[
                "impressora",
                "computador",
                "monitor",
                "teclado",
                "mouse",
                "toner",
                "equipamento",
                "hardware",
            ],
            Specialty::Software => &[
                "software",
                "programa",
                "aplicativo",
                "instalar",
                "instalação",
                "licença",
                "windows",
            ],
            Specialty::Networking => &[
                "rede",
                "internet",
                "wifi",
                "wi-fi",
                "roteador",
                "switch",
                "conexão",
            ],
            Specialty::Support => &["suporte", "ajuda", "dúvida", "orientação", "treinamento"],
            Specialty::Infrastructure => &[
                "infraestrutura",
                "servidor",
                "rack",
                "energia",
                "nobreak",
                "cabeamento",
            ],
            Specialty::Security => &[
                "segurança",
                "vírus",
                "antivírus",
                "firewall",
                "senha",
                "acesso indevido",
            ],
            Specialty::Database => &["banco de dados", "database", "sql", "backup"],
            Specialty::Systems => &["sistema", "plataforma", "erp", "portal"],
            Specialty::Maintenance => &[
                "manutenção",
                "preventiva",
                "limpeza",
                "reparo",
                "conserto",
            ],
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Specialty::Hardware => "Hardware",
            Specialty::Software => "Software",
            Specialty::Networking => "Networking",
            Specialty::Support => "Support",
            Specialty::Infrastructure => "Infrastructure",
            Specialty::Security => "Security",
            Specialty::Database => "Database",
            Specialty::Systems => "Systems",
            Specialty::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a free-text demand into specialty tags.
///
/// Lowercases the text and includes every tag for which at least one
/// keyword is a substring. Output follows vocabulary declaration order
/// with no duplicates. Pure and infallible; an empty or unmatched text
/// yields an empty vec.
pub fn classify(text: &str) -> Vec<Specialty> {
    let lower = text.to_lowercase();
    VOCABULARY
        .iter()
        .copied()
        .filter(|tag| tag.keywords().iter().any(|kw| lower.contains(kw)))
        .collect()
}
