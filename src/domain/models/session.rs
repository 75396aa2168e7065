//! Analysis session state.
//!
//! One [`SessionState`] holds everything the user has entered plus the most
//! recent result. It only changes through [`SessionState::reduce`], one
//! [`SessionAction`] at a time.

use serde::{Deserialize, Serialize};

use super::analysis::{input_present, AnalysisRequest, AnalysisResult, DocumentUpload};
use super::filter::{FindingFilter, FindingsView};
use super::finding::{build_finding_cards, FindingCard};

/// Whether a round trip to the analysis service is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Ready for input; submit is enabled when there is input.
    #[default]
    Idle,
    /// A request is pending.
    Busy,
}

/// Discrete user or request events that move the session forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Replace the user story text.
    SetUserStory(String),
    /// Replace the acceptance criteria text.
    SetAcceptanceCriteria(String),
    /// Append a document.
    AddDocument(DocumentUpload),
    /// Remove the document at an index; out-of-range is ignored.
    RemoveDocument(usize),
    /// Drop every document.
    ClearDocuments,
    /// Change the active findings filter.
    SelectFilter(FindingFilter),
    /// Submit pressed.
    AnalysisStarted,
    /// The service answered with a result.
    AnalysisSucceeded(AnalysisResult),
    /// The round trip failed with this user-facing message.
    AnalysisFailed(String),
}

/// Serializable snapshot of one analysis session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Free-text user stories.
    pub user_story: String,
    /// Free-text acceptance criteria.
    pub acceptance_criteria: String,
    /// Documents to upload; contents are not serialized.
    pub documents: Vec<DocumentUpload>,
    /// Active findings filter.
    pub filter: FindingFilter,
    /// Idle or busy.
    pub status: SessionStatus,
    /// Most recent successful result.
    pub result: Option<AnalysisResult>,
    /// Message of the last failure, cleared on the next start.
    pub error: Option<String>,
    /// Derived from `result`; rebuilt whenever the result is replaced.
    #[serde(skip)]
    cards: Vec<FindingCard>,
}

impl SessionState {
    /// Empty idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the next state.
    ///
    /// A start request is dropped while busy or when there is nothing to
    /// analyze, so at most one round trip is ever pending.
    #[must_use]
    pub fn reduce(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::SetUserStory(text) => self.user_story = text,
            SessionAction::SetAcceptanceCriteria(text) => self.acceptance_criteria = text,
            SessionAction::AddDocument(document) => self.documents.push(document),
            SessionAction::RemoveDocument(index) => {
                if index < self.documents.len() {
                    self.documents.remove(index);
                }
            }
            SessionAction::ClearDocuments => self.documents.clear(),
            SessionAction::SelectFilter(filter) => self.filter = filter,
            SessionAction::AnalysisStarted => {
                if self.can_analyze() {
                    self.error = None;
                    self.status = SessionStatus::Busy;
                }
            }
            SessionAction::AnalysisSucceeded(result) => {
                self.cards = build_finding_cards(&result);
                self.result = Some(result);
                self.status = SessionStatus::Idle;
            }
            SessionAction::AnalysisFailed(message) => {
                self.error = Some(message);
                self.status = SessionStatus::Idle;
            }
        }
        self
    }

    /// True while a request is pending.
    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Busy
    }

    /// Whether the submit action is enabled.
    pub fn can_analyze(&self) -> bool {
        !self.is_busy() && self.has_input()
    }

    /// Whether any story, criteria or document was supplied.
    pub fn has_input(&self) -> bool {
        input_present(&self.user_story, &self.acceptance_criteria, &self.documents)
    }

    /// Whether exports are available.
    pub fn can_export(&self) -> bool {
        self.result.is_some()
    }

    /// Snapshot of the inputs as a request.
    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest {
            user_story: self.user_story.clone(),
            acceptance_criteria: self.acceptance_criteria.clone(),
            documents: self.documents.clone(),
        }
    }

    /// Cards for the current result; empty before the first success.
    pub fn cards(&self) -> &[FindingCard] {
        &self.cards
    }

    /// Counts and visible cards under the active filter.
    pub fn view(&self) -> FindingsView<'_> {
        FindingsView::new(&self.cards, &self.filter)
    }
}
