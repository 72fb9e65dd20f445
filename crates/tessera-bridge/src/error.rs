use thiserror::Error;

/// A failure raised by an embedded language service.
///
/// The bridge never constructs one of these itself: its own computations are
/// total, with unknown kinds, missing entries, and absent hovers degrading to
/// default-valued results. Collaborator failures pass through unchanged so
/// the host sees exactly what the service reported.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ServiceError(Box<dyn std::error::Error + Send + Sync>);

impl ServiceError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
