//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Analysis service HTTP client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod analysis_api;
pub mod config;
pub mod logging;
