//! Domain models: analysis results, finding cards, the filter view model,
//! session state and configuration.

/// Analysis request and result payloads.
pub mod analysis;
/// Configuration model.
pub mod config;
/// Filter and count view model.
pub mod filter;
/// Findings classifier.
pub mod finding;
/// Session state and transitions.
pub mod session;

pub use analysis::{infer_content_type, AnalysisRequest, AnalysisResult, DocumentUpload};
pub use config::{Config, LoggingConfig, ServiceConfig};
pub use filter::{FindingCounts, FindingFilter, FindingsView};
pub use finding::{build_finding_cards, FindingCard, FindingType, Severity};
pub use session::{SessionAction, SessionState, SessionStatus};
