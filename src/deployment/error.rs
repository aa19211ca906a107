// ABOUTME: Error type for deployment status lookups with SNAFU pattern.
// ABOUTME: Separates missing deployments from store failures and corrupt records.

use snafu::Snafu;

use super::status::ParseStatusError;
use crate::store::StoreError;

/// Failure of a status lookup.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StatusError {
    /// The store read itself failed. The store error is kept unchanged.
    #[snafu(display("deployment status read failed: {source}"))]
    Store { source: StoreError },

    /// No status record, or an empty one, exists for the deployment.
    #[snafu(display("deployment with id {deployment_id:?} not found"))]
    NotFound { deployment_id: String },

    /// A record exists but does not name a known status.
    #[snafu(display("{source}"))]
    InvalidStatus { source: ParseStatusError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusErrorKind {
    /// The key-value store could not be read.
    Store,
    /// The deployment has no status record.
    NotFound,
    /// The status record is present but unreadable.
    InvalidStatus,
}

impl StatusError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> StatusErrorKind {
        match self {
            StatusError::Store { .. } => StatusErrorKind::Store,
            StatusError::NotFound { .. } => StatusErrorKind::NotFound,
            StatusError::InvalidStatus { .. } => StatusErrorKind::InvalidStatus,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == StatusErrorKind::NotFound
    }

    /// Identifier of the missing deployment, for `NotFound` errors.
    pub fn deployment_id(&self) -> Option<&str> {
        match self {
            StatusError::NotFound { deployment_id } => Some(deployment_id),
            _ => None,
        }
    }

    /// The underlying store error, for `Store` errors.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            StatusError::Store { source } => Some(source),
            _ => None,
        }
    }

    /// The rejected record text, for `InvalidStatus` errors.
    pub fn invalid_status(&self) -> Option<&str> {
        match self {
            StatusError::InvalidStatus { source } => Some(source.raw()),
            _ => None,
        }
    }
}

impl From<StoreError> for StatusError {
    fn from(source: StoreError) -> Self {
        StatusError::Store { source }
    }
}

impl From<ParseStatusError> for StatusError {
    fn from(source: ParseStatusError) -> Self {
        StatusError::InvalidStatus { source }
    }
}

/// Whether `err` reports a deployment that does not exist.
pub fn is_not_found_error(err: &StatusError) -> bool {
    err.is_not_found()
}
