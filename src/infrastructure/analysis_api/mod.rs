//! Analysis service HTTP adapter
//!
//! - Multipart request construction with fixed field names
//! - Error-body message extraction
//! - [`AnalysisService`](crate::domain::ports::AnalysisService) implementation over reqwest

pub mod client;
pub mod error;

pub use client::AnalysisClientImpl;
pub use error::extract_error_message;
