/// Boxed cause carried by storage failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or a read/write failed.
    #[error("store.storage_unavailable")]
    StorageUnavailable(#[source] BoxError),
    /// Connection parameters are missing or malformed. Fatal at startup.
    #[error("store.configuration_invalid: {0}")]
    ConfigurationInvalid(String),
}

impl StoreError {
    pub fn storage_unavailable(cause: impl Into<BoxError>) -> Self {
        StoreError::StorageUnavailable(cause.into())
    }
    pub fn configuration_invalid(reason: impl Into<String>) -> Self {
        StoreError::ConfigurationInvalid(reason.into())
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, StoreError::StorageUnavailable(_))
    }
}
