//! Analysis session controller.
//!
//! Owns the [`SessionState`] for one session and drives the single round trip
//! to the analysis service: dispatch start, await the service, dispatch the
//! outcome. All state changes go through [`SessionState::reduce`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::AnalysisError;
use crate::domain::models::{AnalysisResult, SessionAction, SessionState};
use crate::domain::ports::AnalysisService;
use crate::services::export::{render_checklist, render_report, write_export, ExportFormat, ReportInput};

/// What happened when analysis was requested.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Submit was disabled (no input, or a request already pending).
    Skipped,
    /// The result in the session was replaced.
    Completed,
    /// The service call failed; the session holds the user-facing message.
    Failed(AnalysisError),
}

/// Controller for one analysis session.
pub struct AnalysisSession {
    service: Arc<dyn AnalysisService>,
    state: SessionState,
}

impl AnalysisSession {
    /// Fresh idle session backed by `service`.
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            service,
            state: SessionState::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply one action to the session state.
    pub fn dispatch(&mut self, action: SessionAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Run one analysis round trip.
    ///
    /// Returns [`AnalysisOutcome::Skipped`] without contacting the service when
    /// the submit action is disabled.
    #[instrument(skip(self), fields(documents = self.state.documents.len()))]
    pub async fn run_analysis(&mut self) -> AnalysisOutcome {
        if !self.state.can_analyze() {
            debug!(busy = self.state.is_busy(), "analysis not started");
            return AnalysisOutcome::Skipped;
        }

        self.dispatch(SessionAction::AnalysisStarted);
        let request = self.state.request();

        match self.service.analyze(&request).await {
            Ok(result) => {
                info!(findings = result.finding_total(), "analysis result received");
                self.dispatch(SessionAction::AnalysisSucceeded(result));
                AnalysisOutcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                self.dispatch(SessionAction::AnalysisFailed(err.user_message()));
                AnalysisOutcome::Failed(err)
            }
        }
    }

    /// Render an export of the current result, or `None` before any result.
    pub fn render_export(&self, format: ExportFormat, generated_at: DateTime<Utc>) -> Option<String> {
        if !self.state.can_export() {
            return None;
        }
        let result: &AnalysisResult = self.state.result.as_ref()?;
        let text = match format {
            ExportFormat::Report => render_report(
                &ReportInput {
                    user_story: &self.state.user_story,
                    acceptance_criteria: &self.state.acceptance_criteria,
                    result,
                    cards: self.state.cards(),
                },
                generated_at,
            ),
            ExportFormat::Checklist => render_checklist(result, generated_at),
        };
        Some(text)
    }

    /// Render an export stamped with the current time and write it into `dir`.
    pub async fn export_to_dir(&self, dir: &Path, format: ExportFormat) -> Result<Option<PathBuf>> {
        let Some(text) = self.render_export(format, Utc::now()) else {
            debug!(?format, "export skipped, no analysis result");
            return Ok(None);
        };
        write_export(dir, format, &text).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ServiceResult;
    use crate::domain::models::{AnalysisRequest, FindingFilter, FindingType};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued responses and records requests.
    #[derive(Default)]
    struct ScriptedService {
        responses: Mutex<VecDeque<ServiceResult<AnalysisResult>>>,
        requests: Mutex<Vec<AnalysisRequest>>,
    }

    impl ScriptedService {
        fn with(responses: Vec<ServiceResult<AnalysisResult>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::default(),
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AnalysisService for ScriptedService {
        async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResult> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AnalysisError::Transport("no scripted response".to_string())))
        }

        async fn health_check(&self) -> ServiceResult<bool> {
            Ok(true)
        }
    }

    fn edge_result() -> AnalysisResult {
        AnalysisResult {
            missing_edge_cases: vec!["network failure on submit".to_string()],
            clarifying_questions: vec![],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_no_input_skips_service() {
        let service = ScriptedService::with(vec![Ok(edge_result())]);
        let mut session = AnalysisSession::new(service.clone());

        assert!(matches!(session.run_analysis().await, AnalysisOutcome::Skipped));
        assert_eq!(service.request_count(), 0);
        assert!(session.state().result.is_none());
    }

    #[tokio::test]
    async fn test_successful_analysis_builds_cards() {
        let service = ScriptedService::with(vec![Ok(edge_result())]);
        let mut session = AnalysisSession::new(service.clone());
        session.dispatch(SessionAction::SetUserStory("As a user I submit a form".to_string()));

        assert!(matches!(session.run_analysis().await, AnalysisOutcome::Completed));
        assert_eq!(service.request_count(), 1);

        let state = session.state();
        assert!(!state.is_busy());
        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.cards()[0].finding_type, FindingType::Edge);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_analysis_surfaces_message() {
        let service = ScriptedService::with(vec![Err(AnalysisError::Service {
            status: 500,
            message: "Failed to process requirements.".to_string(),
        })]);
        let mut session = AnalysisSession::new(service);
        session.dispatch(SessionAction::SetAcceptanceCriteria("Given...".to_string()));

        match session.run_analysis().await {
            AnalysisOutcome::Failed(err) => assert_eq!(err.status(), Some(500)),
            other => panic!("Expected failure, got {other:?}"),
        }
        assert_eq!(
            session.state().error.as_deref(),
            Some("Failed to process requirements.")
        );
        assert!(!session.state().is_busy());
    }

    #[tokio::test]
    async fn test_retry_after_failure_is_allowed() {
        let service = ScriptedService::with(vec![
            Err(AnalysisError::Transport("connection reset".to_string())),
            Ok(edge_result()),
        ]);
        let mut session = AnalysisSession::new(service.clone());
        session.dispatch(SessionAction::SetUserStory("story".to_string()));

        assert!(matches!(session.run_analysis().await, AnalysisOutcome::Failed(_)));
        assert_eq!(session.state().error.as_deref(), Some("Request failed"));

        assert!(matches!(session.run_analysis().await, AnalysisOutcome::Completed));
        assert!(session.state().error.is_none());
        assert_eq!(service.request_count(), 2);
    }

    #[tokio::test]
    async fn test_export_requires_result() {
        let service = ScriptedService::with(vec![Ok(edge_result())]);
        let mut session = AnalysisSession::new(service);
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        assert!(!session.state().can_export());
        assert!(session.render_export(ExportFormat::Report, now).is_none());

        session.dispatch(SessionAction::SetUserStory("story".to_string()));
        session.run_analysis().await;
        assert!(session.state().can_export());

        let report = session.render_export(ExportFormat::Report, now).unwrap();
        assert!(report.contains("- **Missing edge case** (MEDIUM) — network failure on submit"));

        let checklist = session.render_export(ExportFormat::Checklist, now).unwrap();
        assert!(checklist.contains("- [ ] network failure on submit"));
    }

    #[tokio::test]
    async fn test_export_to_dir_without_result_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let session = AnalysisSession::new(ScriptedService::with(vec![]));

        let written = session
            .export_to_dir(dir.path(), ExportFormat::Checklist)
            .await
            .unwrap();
        assert!(written.is_none());
        assert!(!dir.path().join("jira-checklist.txt").exists());
    }

    #[tokio::test]
    async fn test_filter_selection_survives_new_result() {
        let service = ScriptedService::with(vec![Ok(edge_result()), Ok(edge_result())]);
        let mut session = AnalysisSession::new(service);
        session.dispatch(SessionAction::SetUserStory("story".to_string()));
        session.dispatch(SessionAction::SelectFilter(FindingFilter::Medium));

        session.run_analysis().await;
        session.run_analysis().await;

        let view = session.state().view();
        assert_eq!(view.filter, FindingFilter::Medium);
        assert_eq!(view.visible.len(), 1);
    }
}
