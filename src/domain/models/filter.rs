//! Filter and count view model over finding cards.
//!
//! Counts are always taken over the whole card list; the active filter only
//! decides which cards are visible.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::finding::{FindingCard, FindingType, Severity};

/// The single active selector of the findings view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FindingFilter {
    /// Every card.
    #[default]
    All,
    /// Severity HIGH.
    Critical,
    /// Severity MEDIUM.
    Medium,
    /// Severity LOW.
    Low,
    /// Cards of one type.
    Type(FindingType),
    /// A value that names no known selector; treated as a type filter that
    /// matches nothing.
    Unrecognized(String),
}

impl FindingFilter {
    /// Selectors in filter-bar order.
    pub const SELECTABLE: [Self; 8] = [
        Self::All,
        Self::Critical,
        Self::Medium,
        Self::Low,
        Self::Type(FindingType::Architectural),
        Self::Type(FindingType::Edge),
        Self::Type(FindingType::Ambiguity),
        Self::Type(FindingType::Clarifying),
    ];

    /// Selector value as typed on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Critical => "critical",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Type(finding_type) => finding_type.as_str(),
            Self::Unrecognized(value) => value,
        }
    }

    /// Filter-bar label.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Critical => "Critical",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Type(FindingType::Architectural) => "Tech Risks",
            Self::Type(FindingType::Edge) => "Edge Case",
            Self::Type(FindingType::Ambiguity) => "Ambiguity",
            Self::Type(FindingType::Clarifying) => "Clarify",
            Self::Unrecognized(value) => value,
        }
    }

    /// Whether a card is visible under this filter.
    pub fn matches(&self, card: &FindingCard) -> bool {
        match self {
            Self::All => true,
            Self::Critical => card.severity == Severity::High,
            Self::Medium => card.severity == Severity::Medium,
            Self::Low => card.severity == Severity::Low,
            Self::Type(finding_type) => card.finding_type == *finding_type,
            Self::Unrecognized(_) => false,
        }
    }
}

impl FromStr for FindingFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "all" => Self::All,
            "critical" => Self::Critical,
            "medium" => Self::Medium,
            "low" => Self::Low,
            other => FindingType::from_str(other)
                .map_or_else(|| Self::Unrecognized(s.to_string()), Self::Type),
        })
    }
}

impl From<String> for FindingFilter {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl From<FindingFilter> for String {
    fn from(filter: FindingFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl std::fmt::Display for FindingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-selector card counts over the unfiltered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingCounts {
    /// Every card.
    pub all: usize,
    /// Severity HIGH.
    pub critical: usize,
    /// Severity MEDIUM.
    pub medium: usize,
    /// Severity LOW.
    pub low: usize,
    /// Architectural risks.
    pub architectural: usize,
    /// Missing edge cases.
    pub edge: usize,
    /// Ambiguous phrases.
    pub ambiguity: usize,
    /// Clarifying questions.
    pub clarifying: usize,
}

impl FindingCounts {
    /// Count the whole, unfiltered card list.
    pub fn from_cards(cards: &[FindingCard]) -> Self {
        let mut counts = Self {
            all: cards.len(),
            ..Self::default()
        };
        for card in cards {
            match card.severity {
                Severity::High => counts.critical += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
            match card.finding_type {
                FindingType::Architectural => counts.architectural += 1,
                FindingType::Edge => counts.edge += 1,
                FindingType::Ambiguity => counts.ambiguity += 1,
                FindingType::Clarifying => counts.clarifying += 1,
            }
        }
        counts
    }

    /// Count for a selector; unrecognized selectors count zero.
    pub const fn get(&self, filter: &FindingFilter) -> usize {
        match filter {
            FindingFilter::All => self.all,
            FindingFilter::Critical => self.critical,
            FindingFilter::Medium => self.medium,
            FindingFilter::Low => self.low,
            FindingFilter::Type(FindingType::Architectural) => self.architectural,
            FindingFilter::Type(FindingType::Edge) => self.edge,
            FindingFilter::Type(FindingType::Ambiguity) => self.ambiguity,
            FindingFilter::Type(FindingType::Clarifying) => self.clarifying,
            FindingFilter::Unrecognized(_) => 0,
        }
    }
}

/// Counts plus the visible subset for one filter.
#[derive(Debug, Clone, Serialize)]
pub struct FindingsView<'a> {
    /// Filter the view was built for.
    pub filter: FindingFilter,
    /// Counts over all cards.
    pub counts: FindingCounts,
    /// Matching cards in card order.
    pub visible: Vec<&'a FindingCard>,
}

impl<'a> FindingsView<'a> {
    /// Build the view of `cards` under `filter`.
    pub fn new(cards: &'a [FindingCard], filter: &FindingFilter) -> Self {
        Self {
            filter: filter.clone(),
            counts: FindingCounts::from_cards(cards),
            visible: cards.iter().filter(|card| filter.matches(card)).collect(),
        }
    }

    /// True when nothing matches the filter; rendered as a "no items" state.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<FindingCard> {
        vec![
            FindingCard::new(FindingType::Architectural, "shared cache"),
            FindingCard::new(FindingType::Clarifying, "who approves?"),
            FindingCard::new(FindingType::Clarifying, "what is the limit?"),
            FindingCard::new(FindingType::Edge, "offline"),
            FindingCard::new(FindingType::Ambiguity, "fast"),
        ]
    }

    #[test]
    fn test_counts_over_whole_list() {
        let counts = FindingCounts::from_cards(&sample_cards());
        assert_eq!(
            counts,
            FindingCounts {
                all: 5,
                critical: 1,
                medium: 3,
                low: 1,
                architectural: 1,
                edge: 1,
                ambiguity: 1,
                clarifying: 2,
            }
        );
    }

    #[test]
    fn test_counts_ignore_active_filter() {
        let cards = sample_cards();
        let view = FindingsView::new(&cards, &FindingFilter::Low);
        assert_eq!(view.counts.all, 5);
        assert_eq!(view.visible.len(), 1);
    }

    #[test]
    fn test_all_filter_shows_everything() {
        let cards = sample_cards();
        let view = FindingsView::new(&cards, &FindingFilter::All);
        assert_eq!(view.visible.len(), view.counts.all);
    }

    #[test]
    fn test_severity_filters() {
        let cards = sample_cards();

        let critical = FindingsView::new(&cards, &FindingFilter::Critical);
        assert_eq!(critical.visible.len(), critical.counts.critical);
        assert!(critical.visible.iter().all(|c| c.severity == Severity::High));

        let medium = FindingsView::new(&cards, &FindingFilter::Medium);
        assert_eq!(medium.visible.len(), 3);
        assert!(medium.visible.iter().all(|c| c.severity == Severity::Medium));
    }

    #[test]
    fn test_type_filter_keeps_order() {
        let cards = sample_cards();
        let view = FindingsView::new(&cards, &FindingFilter::Type(FindingType::Clarifying));
        let titles: Vec<&str> = view.visible.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["who approves?", "what is the limit?"]);
    }

    #[test]
    fn test_unrecognized_filter_matches_nothing() {
        let cards = sample_cards();
        let filter: FindingFilter = "urgent".parse().unwrap();
        assert_eq!(filter, FindingFilter::Unrecognized("urgent".to_string()));

        let view = FindingsView::new(&cards, &filter);
        assert!(view.is_empty());
        assert_eq!(view.counts.get(&filter), 0);
    }

    #[test]
    fn test_empty_cards_yield_zero_counts() {
        let view = FindingsView::new(&[], &FindingFilter::All);
        assert_eq!(view.counts, FindingCounts::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!("all".parse::<FindingFilter>().unwrap(), FindingFilter::All);
        assert_eq!(
            "Critical".parse::<FindingFilter>().unwrap(),
            FindingFilter::Critical
        );
        assert_eq!(
            "edge".parse::<FindingFilter>().unwrap(),
            FindingFilter::Type(FindingType::Edge)
        );
        for filter in FindingFilter::SELECTABLE {
            assert_eq!(filter.as_str().parse::<FindingFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_filter_serializes_as_string() {
        let filter = FindingFilter::Type(FindingType::Ambiguity);
        assert_eq!(serde_json::to_value(&filter).unwrap(), "ambiguity");

        let parsed: FindingFilter = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, FindingFilter::Critical);
    }

    #[test]
    fn test_labels() {
        let selectable = FindingFilter::SELECTABLE;
        let labels: Vec<&str> = selectable.iter().map(FindingFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All", "Critical", "Medium", "Low", "Tech Risks", "Edge Case", "Ambiguity", "Clarify"]
        );
    }
}
