//! Finding cards.
//!
//! The four raw lists of an [`AnalysisResult`] are normalized into one ordered
//! list of [`FindingCard`]s. Severity, tag and body text are fixed per
//! [`FindingType`]; nothing about an individual entry changes them.

use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;

/// Category of a finding, in card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingType {
    /// Architectural risk.
    Architectural,
    /// Clarifying question.
    Clarifying,
    /// Missing edge case.
    Edge,
    /// Ambiguous phrase.
    Ambiguity,
}

impl FindingType {
    /// All types in the order their cards are concatenated.
    pub const ALL: [Self; 4] = [
        Self::Architectural,
        Self::Clarifying,
        Self::Edge,
        Self::Ambiguity,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architectural => "architectural",
            Self::Clarifying => "clarifying",
            Self::Edge => "edge",
            Self::Ambiguity => "ambiguity",
        }
    }

    /// Parse a wire name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "architectural" => Some(Self::Architectural),
            "clarifying" => Some(Self::Clarifying),
            "edge" => Some(Self::Edge),
            "ambiguity" => Some(Self::Ambiguity),
            _ => None,
        }
    }

    /// Severity of every card of this type.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Architectural => Severity::High,
            Self::Clarifying | Self::Edge => Severity::Medium,
            Self::Ambiguity => Severity::Low,
        }
    }

    /// Short tag of every card of this type.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Architectural => "infra",
            Self::Clarifying => "scope",
            Self::Edge => "logic",
            Self::Ambiguity => "wording",
        }
    }

    /// Guidance shown under every card of this type.
    pub const fn body(&self) -> &'static str {
        match self {
            Self::Architectural => {
                "Validate system assumptions (state, scale, consistency) and add guardrails before build."
            }
            Self::Clarifying => {
                "Confirm expected behavior early to prevent scope drift and mid-sprint blockers."
            }
            Self::Edge => "Define behavior for this state and add a test to lock it in.",
            Self::Ambiguity => "Rewrite as measurable criteria so it's testable and unambiguous.",
        }
    }

    /// Short label for terminal display.
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Architectural => "Tech Risk",
            Self::Clarifying => "Clarify",
            Self::Edge => "Edge Case",
            Self::Ambiguity => "Ambiguity",
        }
    }

    /// Label used in the exported report.
    pub const fn export_label(&self) -> &'static str {
        match self {
            Self::Architectural => "Architectural risk",
            Self::Clarifying => "Clarifying question",
            Self::Edge => "Missing edge case",
            Self::Ambiguity => "Ambiguity",
        }
    }

    /// The source list in a result that feeds this type.
    pub fn entries<'a>(&self, result: &'a AnalysisResult) -> &'a [String] {
        match self {
            Self::Architectural => &result.architectural_risks,
            Self::Clarifying => &result.clarifying_questions,
            Self::Edge => &result.missing_edge_cases,
            Self::Ambiguity => &result.ambiguous_phrases,
        }
    }
}

impl std::fmt::Display for FindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency bucket of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Critical; architectural risks.
    High,
    /// Clarifying questions and missing edge cases.
    Medium,
    /// Ambiguous wording.
    Low,
}

impl Severity {
    /// Uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready representation of one flagged entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingCard {
    /// Category the card came from.
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    /// The source entry, verbatim.
    pub title: String,
    /// Fixed guidance text for the type.
    pub body: String,
    /// Severity derived from the type.
    pub severity: Severity,
    /// Tag derived from the type.
    pub tag: String,
}

impl FindingCard {
    /// Card for one entry of the given type.
    pub fn new(finding_type: FindingType, title: impl Into<String>) -> Self {
        Self {
            finding_type,
            title: title.into(),
            body: finding_type.body().to_string(),
            severity: finding_type.severity(),
            tag: finding_type.tag().to_string(),
        }
    }
}

/// Build the ordered card list for a result.
///
/// Cards keep source order within a type and types follow
/// [`FindingType::ALL`]. Entries are neither trimmed nor deduplicated.
pub fn build_finding_cards(result: &AnalysisResult) -> Vec<FindingCard> {
    let mut cards = Vec::with_capacity(result.finding_total());
    for finding_type in FindingType::ALL {
        cards.extend(
            finding_type
                .entries(result)
                .iter()
                .map(|entry| FindingCard::new(finding_type, entry.as_str())),
        );
    }
    cards
}
