use async_trait::async_trait;

/// Serving status reported to health probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Serving,
    NotServing,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Serving => write!(f, "SERVING"),
            HealthStatus::NotServing => write!(f, "NOT_SERVING"),
        }
    }
}

#[async_trait]
pub trait CheckHealthUseCase: Send + Sync {
    async fn execute(&self) -> HealthStatus;
}
