//! Styled text for the findings view.
//!
//! All styling goes through `console`, which drops colors when stdout is not
//! a terminal or `NO_COLOR`/`CLICOLOR=0` is set.

use console::style;

use crate::domain::models::{FindingCounts, FindingFilter};

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("\n{}", style(title).bold().underlined())
}

/// The filter bar: every selector with its count, the active one highlighted.
pub fn filter_bar(active: &FindingFilter, counts: &FindingCounts) -> String {
    let mut pills: Vec<String> = FindingFilter::SELECTABLE
        .iter()
        .map(|filter| {
            let text = format!("{} {}", filter.label(), counts.get(filter));
            if filter == active {
                style(format!("[{text}]")).magenta().bold().to_string()
            } else {
                style(text).dim().to_string()
            }
        })
        .collect();

    if let FindingFilter::Unrecognized(value) = active {
        pills.push(style(format!("[{value} 0]")).magenta().bold().to_string());
    }

    pills.join("  ")
}

/// Render a success action result.
pub fn action_success(message: &str) -> String {
    format!("{} {}", style("\u{2713}").green().bold(), message)
}

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    format!("{} {}", style("\u{2717}").red().bold(), message)
}
