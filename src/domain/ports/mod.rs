//! Port trait definitions (Hexagonal Architecture)
//!
//! - AnalysisService: the remote analysis round trip
//!
//! Keeps the session controller independent of the HTTP client.

pub mod analysis_service;

pub use analysis_service::AnalysisService;
