//! Table output for finding cards using comfy-table.
//!
//! Severity cells are color-coded unless `NO_COLOR` is set or the terminal
//! is dumb, in which case a text marker carries the severity instead.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{FindingCard, Severity};

/// Table formatter for finding cards
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Formatter that colors only when the terminal supports it.
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Formatter with explicit color and width settings.
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format cards as a table, title above the per-type guidance.
    pub fn format_cards(&self, cards: &[&FindingCard]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Severity").add_attribute(Attribute::Bold),
            Cell::new("Tag").add_attribute(Attribute::Bold),
            Cell::new("Finding").add_attribute(Attribute::Bold),
        ]);

        for card in cards {
            let severity_cell = if self.use_colors {
                Cell::new(card.severity.as_str())
                    .fg(severity_color(card.severity))
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(format!("{} {}", severity_icon(card.severity), card.severity))
            };

            let tag_cell = if self.use_colors {
                Cell::new(card.tag.to_uppercase()).fg(Color::DarkGrey)
            } else {
                Cell::new(card.tag.to_uppercase())
            };

            table.add_row(vec![
                Cell::new(card.finding_type.display_label()),
                severity_cell,
                tag_cell,
                Cell::new(format!("{}\n{}", card.title, card.body)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether colored output is appropriate for this terminal.
pub fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

const fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "!!!",
        Severity::Medium => "!!",
        Severity::Low => "!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FindingType;

    #[test]
    fn test_format_cards_plain() {
        let cards = [
            FindingCard::new(FindingType::Architectural, "Shared cache invalidation"),
            FindingCard::new(FindingType::Ambiguity, "fast"),
        ];
        let refs: Vec<&FindingCard> = cards.iter().collect();

        let output = TableFormatter::with_config(false, Some(120)).format_cards(&refs);

        assert!(output.contains("Tech Risk"));
        assert!(output.contains("!!! HIGH"));
        assert!(output.contains("! LOW"));
        assert!(output.contains("INFRA"));
        assert!(output.contains("Shared cache invalidation"));
        assert!(output.contains("WORDING"));
    }

    #[test]
    fn test_format_cards_empty_has_header_only() {
        let output = TableFormatter::with_config(false, None).format_cards(&[]);
        assert!(output.contains("Severity"));
        assert!(!output.contains("HIGH"));
    }
}
