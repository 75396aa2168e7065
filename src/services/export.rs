//! Plain-text exports of an analysis.
//!
//! Both renderers are pure: the generation timestamp is passed in, so the
//! same inputs and timestamp always produce the same text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::models::{AnalysisResult, FindingCard};

/// File name of the Markdown report.
pub const REPORT_FILE_NAME: &str = "silent-requirements-report.md";
/// File name of the Jira checklist.
pub const CHECKLIST_FILE_NAME: &str = "jira-checklist.txt";

const NONE_PLACEHOLDER: &str = "_(none)_";

/// The two downloadable artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Markdown report
    Report,
    /// Jira checklist markup
    Checklist,
}

impl ExportFormat {
    /// Fixed file name for this export.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Report => REPORT_FILE_NAME,
            Self::Checklist => CHECKLIST_FILE_NAME,
        }
    }
}

/// Everything the Markdown report echoes.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// User stories as entered.
    pub user_story: &'a str,
    /// Acceptance criteria as entered.
    pub acceptance_criteria: &'a str,
    /// Result being exported.
    pub result: &'a AnalysisResult,
    /// Cards built from `result`.
    pub cards: &'a [FindingCard],
}

fn timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn text_or_placeholder(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NONE_PLACEHOLDER
    } else {
        trimmed
    }
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("## {title}\n"));
    for item in items {
        out.push_str(&format!("- {}\n", item.trim()));
    }
    out.push('\n');
}

/// Render the Markdown report.
///
/// List sections are omitted when their source list is empty; the improved
/// acceptance criteria, when present, always close the document.
pub fn render_report(input: &ReportInput<'_>, generated_at: DateTime<Utc>) -> String {
    let result = input.result;
    let mut out = String::new();

    out.push_str("# Silent Requirements Report\n");
    out.push_str(&format!("Generated: {}\n\n", timestamp(generated_at)));

    out.push_str("## Inputs\n\n");
    out.push_str(&format!(
        "### User stories\n{}\n\n",
        text_or_placeholder(input.user_story)
    ));
    out.push_str(&format!(
        "### Acceptance criteria\n{}\n\n",
        text_or_placeholder(input.acceptance_criteria)
    ));
    out.push_str("---\n\n");

    push_section(&mut out, "Architectural risks", &result.architectural_risks);
    push_section(&mut out, "Clarifying questions", &result.clarifying_questions);
    push_section(&mut out, "Missing edge cases", &result.missing_edge_cases);
    push_section(&mut out, "Ambiguous phrases", &result.ambiguous_phrases);

    out.push_str("## Findings (cards)\n");
    if input.cards.is_empty() {
        out.push_str(NONE_PLACEHOLDER);
        out.push('\n');
    } else {
        for card in input.cards {
            out.push_str(&format!(
                "- **{}** ({}) \u{2014} {}\n",
                card.finding_type.export_label(),
                card.severity,
                card.title.trim()
            ));
        }
    }

    if let Some(notes) = result.technical_notes() {
        out.push_str(&format!("\n---\n\n## Technical notes\n{notes}\n"));
    }

    if let Some(criteria) = result.improved_acceptance_criteria() {
        out.push_str(&format!(
            "\n---\n\n## Improved acceptance criteria\n{criteria}\n"
        ));
    }

    out
}

fn push_checklist_section(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("\nh3. {title}\n"));
    if items.is_empty() {
        out.push_str(&format!("- [ ] {NONE_PLACEHOLDER}\n"));
        return;
    }
    for item in items {
        out.push_str(&format!("- [ ] {}\n", item.trim()));
    }
}

/// Render the Jira checklist: one unchecked item per question, gap and
/// ambiguous phrase, with a single placeholder item for an empty section.
pub fn render_checklist(result: &AnalysisResult, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str("h2. Silent Requirements Checklist\n");
    out.push_str(&format!("Generated: {}\n", timestamp(generated_at)));

    push_checklist_section(&mut out, "Clarifying questions", &result.clarifying_questions);
    push_checklist_section(&mut out, "Missing edge cases", &result.missing_edge_cases);
    push_checklist_section(&mut out, "Ambiguous phrases to tighten", &result.ambiguous_phrases);

    out
}

/// Write rendered export text into `dir` under the format's file name.
pub async fn write_export(dir: &Path, format: ExportFormat, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(format.file_name());
    fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), ?format, "export written");
    Ok(path)
}
