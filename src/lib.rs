//! Subtext - silent requirements detector client
//!
//! Subtext submits user stories, acceptance criteria and supporting documents to a
//! remote analysis service, classifies the returned findings into typed cards, and
//! renders them as filtered views, Markdown reports and Jira checklists.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Findings classifier, filter view model, session state
//! - **Service Layer** (`services`): Session controller and export serializers
//! - **Infrastructure Layer** (`infrastructure`): HTTP adapter, configuration, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use subtext::{AnalysisClientImpl, AnalysisSession, SessionAction};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AnalysisClientImpl::new("http://localhost:8000")?;
//!     let mut session = AnalysisSession::new(Arc::new(client));
//!     session.dispatch(SessionAction::SetUserStory("As a user...".into()));
//!     session.run_analysis().await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{AnalysisError, ServiceResult};
pub use domain::models::{
    build_finding_cards, AnalysisRequest, AnalysisResult, Config, DocumentUpload, FindingCard,
    FindingCounts, FindingFilter, FindingType, FindingsView, LoggingConfig, ServiceConfig,
    SessionAction, SessionState, SessionStatus, Severity,
};
pub use domain::ports::AnalysisService;
pub use infrastructure::analysis_api::AnalysisClientImpl;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{render_checklist, render_report, AnalysisOutcome, AnalysisSession, ExportFormat};
