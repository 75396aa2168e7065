//! Analysis domain model.
//!
//! An [`AnalysisResult`] is produced wholesale by the analysis service and is
//! never mutated once received. Every field may be absent (or `null`) in the
//! service's JSON body, so every consumer goes through the empty defaults.

use serde::{Deserialize, Deserializer, Serialize};

/// Structured findings returned by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Risks in the implied architecture (state, scale, consistency).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub architectural_risks: Vec<String>,

    /// Questions the team should answer before building.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub clarifying_questions: Vec<String>,

    /// States and failure modes the requirements do not cover.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub missing_edge_cases: Vec<String>,

    /// Phrases that are not measurable or testable as written.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ambiguous_phrases: Vec<String>,

    /// Rewritten acceptance criteria, when the service produced them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_acceptance_criteria: Option<String>,

    /// Free-form implementation notes, when the service produced them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_notes: Option<String>,
}

impl AnalysisResult {
    /// Improved acceptance criteria, treating an empty string as absent.
    pub fn improved_acceptance_criteria(&self) -> Option<&str> {
        non_empty(self.improved_acceptance_criteria.as_deref())
    }

    /// Technical notes, treating an empty string as absent.
    pub fn technical_notes(&self) -> Option<&str> {
        non_empty(self.technical_notes.as_deref())
    }

    /// Total number of flagged entries across the four finding lists.
    pub fn finding_total(&self) -> usize {
        self.architectural_risks.len()
            + self.clarifying_questions.len()
            + self.missing_edge_cases.len()
            + self.ambiguous_phrases.len()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A supporting document attached to an analysis request.
///
/// The binary content is never serialized; session snapshots only carry the
/// name and content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// File name sent with the multipart part.
    pub name: String,

    /// MIME type sent with the multipart part.
    pub content_type: String,

    /// Raw file content.
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl DocumentUpload {
    /// Create a document, inferring its content type from the file extension.
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = infer_content_type(&name).to_string();
        Self {
            name,
            content_type,
            content,
        }
    }

    /// Override the inferred content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Size of the content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Map a file name's extension to the MIME type the analysis service expects.
pub fn infer_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Everything the user supplies for one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// User stories text.
    pub user_story: String,
    /// Acceptance criteria text.
    pub acceptance_criteria: String,
    /// Supporting documents, one multipart part each.
    pub documents: Vec<DocumentUpload>,
}

impl AnalysisRequest {
    /// Whether there is anything worth submitting.
    ///
    /// Whitespace-only text does not count; a document always does.
    pub fn has_input(&self) -> bool {
        input_present(&self.user_story, &self.acceptance_criteria, &self.documents)
    }
}

/// Shared input check for requests and in-progress session inputs.
pub(crate) fn input_present(
    user_story: &str,
    acceptance_criteria: &str,
    documents: &[DocumentUpload],
) -> bool {
    !user_story.trim().is_empty() || !acceptance_criteria.trim().is_empty() || !documents.is_empty()
}
