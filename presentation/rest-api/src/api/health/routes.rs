use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::cart::use_cases::check_health::{CheckHealthUseCase, HealthStatus};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// SERVING or NOT_SERVING
    pub status: String,
    /// Service version
    pub version: String,
}

/// Health API for liveness and readiness probes.
pub struct HealthApi {
    check_health_use_case: Arc<dyn CheckHealthUseCase>,
}

impl HealthApi {
    pub fn new(check_health_use_case: Arc<dyn CheckHealthUseCase>) -> Self {
        Self {
            check_health_use_case,
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Pings the cart store. Answers 200 with `SERVING` when the store is
    /// reachable, 503 with `NOT_SERVING` otherwise.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthCheckResult {
        let status = self.check_health_use_case.execute().await;
        let body = Json(HealthCheckResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        });

        match status {
            HealthStatus::Serving => HealthCheckResult::Ok(body),
            HealthStatus::NotServing => HealthCheckResult::ServiceUnavailable(body),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HealthCheckResult {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<HealthCheckResponse>),
}
