//! Services coordinating the domain and infrastructure layers
//!
//! - `analysis_session`: one analysis round trip through the session reducer
//! - `export`: Markdown report and Jira checklist rendering

pub mod analysis_session;
pub mod export;

pub use analysis_session::{AnalysisOutcome, AnalysisSession};
pub use export::{render_checklist, render_report, write_export, ExportFormat, ReportInput};
