//! Domain layer for the analysis client
//!
//! This module contains the findings model, session state and the port the
//! analysis service adapter implements.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AnalysisError, ServiceResult};
