//! Implementation of the `subtext health` command.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

use crate::cli::display::{action_failure, action_success};
use crate::cli::output::{output, CommandOutput};
use crate::cli::ReportedFailure;
use crate::domain::ports::AnalysisService;

/// Result of a health probe.
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    /// Service that was probed.
    pub base_url: String,
    /// Whether the service answered healthy.
    pub healthy: bool,
    /// Failure message when the service was unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutput for HealthOutput {
    fn to_human(&self) -> String {
        match (&self.error, self.healthy) {
            (_, true) => action_success(&format!("Analysis service at {} is healthy", self.base_url)),
            (Some(error), false) => {
                action_failure(&format!("Analysis service at {}: {}", self.base_url, error))
            }
            (None, false) => {
                action_failure(&format!("Analysis service at {} is not healthy", self.base_url))
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Probe the service and describe the result.
pub async fn check(service: &dyn AnalysisService, base_url: &str) -> HealthOutput {
    let (healthy, error) = match service.health_check().await {
        Ok(healthy) => (healthy, None),
        Err(err) => {
            tracing::warn!(error = %err, "health check request failed");
            (false, Some(err.user_message()))
        }
    };

    HealthOutput {
        base_url: base_url.to_string(),
        healthy,
        error,
    }
}

/// Probe the service; fails after printing when it is unhealthy.
pub async fn execute(service: Arc<dyn AnalysisService>, base_url: &str, json_mode: bool) -> Result<()> {
    let result = check(service.as_ref(), base_url).await;
    output(&result, json_mode);

    if !result.healthy {
        return Err(ReportedFailure("Analysis service is not healthy".to_string()).into());
    }
    Ok(())
}
