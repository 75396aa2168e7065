//! Analysis service port.

use async_trait::async_trait;

use crate::domain::errors::ServiceResult;
use crate::domain::models::{AnalysisRequest, AnalysisResult};

/// Remote service that turns requirements artifacts into findings.
///
/// One call is one atomic round trip: it yields a result or fails with one
/// error. Implementations never retry.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit the request and parse the findings.
    async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResult>;

    /// Check whether the service is up.
    async fn health_check(&self) -> ServiceResult<bool>;
}
