//! Implementation of the `subtext analyze` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::cli::display::{
    action_success, create_spinner, filter_bar, section_header, ProgressBarExt, TableFormatter,
};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{
    AnalysisResult, DocumentUpload, FindingCard, FindingCounts, FindingFilter, SessionAction,
    SessionState,
};
use crate::domain::ports::AnalysisService;
use crate::services::{AnalysisOutcome, AnalysisSession, ExportFormat};

/// Hint shown when there is nothing to submit.
pub const NO_INPUT_HINT: &str = "Add a story, criteria, or documents to enable analysis.";

/// Arguments for `subtext analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// User stories text
    #[arg(short, long, conflicts_with = "story_file")]
    pub story: Option<String>,

    /// Read user stories from a file
    #[arg(long, value_name = "PATH")]
    pub story_file: Option<PathBuf>,

    /// Acceptance criteria text
    #[arg(short = 'c', long, conflicts_with = "criteria_file")]
    pub criteria: Option<String>,

    /// Read acceptance criteria from a file
    #[arg(long, value_name = "PATH")]
    pub criteria_file: Option<PathBuf>,

    /// Supporting document to upload (repeatable)
    #[arg(short, long = "document", value_name = "PATH")]
    pub documents: Vec<PathBuf>,

    /// Findings filter: all, critical, medium, low, architectural, edge, ambiguity, clarifying
    #[arg(short, long, default_value = "all")]
    pub filter: FindingFilter,

    /// Write the Markdown report (silent-requirements-report.md)
    #[arg(long)]
    pub report: bool,

    /// Write the Jira checklist (jira-checklist.txt)
    #[arg(long)]
    pub checklist: bool,

    /// Directory for exported files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl AnalyzeArgs {
    fn export_formats(&self) -> Vec<ExportFormat> {
        let mut formats = Vec::new();
        if self.report {
            formats.push(ExportFormat::Report);
        }
        if self.checklist {
            formats.push(ExportFormat::Checklist);
        }
        formats
    }
}

/// Result of a completed analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    /// Always true for a completed analysis.
    pub success: bool,
    /// Active filter.
    pub filter: FindingFilter,
    /// Counts over all cards.
    pub counts: FindingCounts,
    /// Cards visible under the filter.
    pub findings: Vec<FindingCard>,
    /// Raw service result.
    pub result: AnalysisResult,
    /// Files written by this run.
    pub exports: Vec<PathBuf>,
}

impl AnalyzeOutput {
    fn from_state(state: &SessionState, exports: Vec<PathBuf>) -> Self {
        let view = state.view();
        Self {
            success: true,
            filter: view.filter.clone(),
            counts: view.counts,
            findings: view.visible.into_iter().cloned().collect(),
            result: state.result.clone().unwrap_or_default(),
            exports,
        }
    }
}

impl CommandOutput for AnalyzeOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if let Some(criteria) = self.result.improved_acceptance_criteria() {
            lines.push(section_header("Optimized Acceptance Criteria"));
            lines.push(criteria.to_string());
        }

        if let Some(notes) = self.result.technical_notes() {
            lines.push(section_header("Architect's Implementation Notes"));
            lines.push(notes.to_string());
        }

        lines.push(section_header("Findings"));
        lines.push(filter_bar(&self.filter, &self.counts));
        if self.findings.is_empty() {
            lines.push("No items matching this filter.".to_string());
        } else {
            let cards: Vec<&FindingCard> = self.findings.iter().collect();
            lines.push(TableFormatter::new().format_cards(&cards));
        }

        if !self.exports.is_empty() {
            lines.push(String::new());
            for path in &self.exports {
                lines.push(action_success(&format!("Wrote {}", path.display())));
            }
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output when there is nothing to analyze.
#[derive(Debug, Serialize)]
pub struct AnalysisDisabledOutput {
    /// Always false; nothing was submitted.
    pub success: bool,
    /// Hint telling the user what to add.
    pub message: String,
}

impl CommandOutput for AnalysisDisabledOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

async fn read_text(inline: Option<String>, path: Option<&Path>) -> Result<String> {
    match (inline, path) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

async fn read_document(path: &Path) -> Result<DocumentUpload> {
    let content = fs::read(path)
        .await
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(DocumentUpload::new(name, content))
}

/// Collect the command-line inputs into session actions.
pub async fn collect_inputs(args: &AnalyzeArgs) -> Result<Vec<SessionAction>> {
    let story = read_text(args.story.clone(), args.story_file.as_deref()).await?;
    let criteria = read_text(args.criteria.clone(), args.criteria_file.as_deref()).await?;

    let mut actions = vec![
        SessionAction::SetUserStory(story),
        SessionAction::SetAcceptanceCriteria(criteria),
        SessionAction::SelectFilter(args.filter.clone()),
    ];
    for path in &args.documents {
        actions.push(SessionAction::AddDocument(read_document(path).await?));
    }
    Ok(actions)
}

/// Run one analysis and print the findings.
pub async fn execute(
    args: AnalyzeArgs,
    service: Arc<dyn AnalysisService>,
    json_mode: bool,
) -> Result<()> {
    let mut session = AnalysisSession::new(service);
    for action in collect_inputs(&args).await? {
        session.dispatch(action);
    }

    if !session.state().can_analyze() {
        let disabled = AnalysisDisabledOutput {
            success: false,
            message: NO_INPUT_HINT.to_string(),
        };
        output(&disabled, json_mode);
        return Ok(());
    }

    let spinner = create_spinner("Analyzing...", json_mode);
    match session.run_analysis().await {
        AnalysisOutcome::Completed => spinner.finish_success("Analysis complete"),
        AnalysisOutcome::Failed(err) => {
            spinner.finish_error("Analysis failed");
            return Err(anyhow::Error::msg(err.user_message()));
        }
        AnalysisOutcome::Skipped => {
            spinner.finish_and_clear();
            anyhow::bail!(NO_INPUT_HINT);
        }
    }

    let mut exports = Vec::new();
    for format in args.export_formats() {
        if let Some(path) = session.export_to_dir(&args.out_dir, format).await? {
            exports.push(path);
        }
    }

    output(&AnalyzeOutput::from_state(session.state(), exports), json_mode);
    Ok(())
}
