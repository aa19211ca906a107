// ABOUTME: Reads deployment status records from a key-value store.
// ABOUTME: Derives deployment existence from the presence of a valid status.

use snafu::ResultExt;

use super::error::{NotFoundSnafu, StatusError, StoreSnafu};
use super::status::DeploymentStatus;
use crate::store::KvRead;
use crate::types::KeyPrefix;

/// Read access to deployment statuses stored under a key prefix.
///
/// Every call performs exactly one store read. Nothing is cached, retried
/// or written back, so concurrent callers each observe the store directly.
#[derive(Debug, Clone)]
pub struct StatusRepository<S> {
    store: S,
    prefix: KeyPrefix,
}

impl<S: KvRead> StatusRepository<S> {
    pub fn new(store: S, prefix: KeyPrefix) -> Self {
        Self { store, prefix }
    }

    pub fn prefix(&self) -> &KeyPrefix {
        &self.prefix
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current status of a deployment.
    ///
    /// Fails with `NotFound` when the record is absent or empty, with
    /// `InvalidStatus` when its text names no known status, and with `Store`
    /// when the read itself fails.
    ///
    /// ```ignore
    /// match repo.get_status(id).await {
    ///     Ok(status) => println!("{status}"),
    ///     Err(e) if e.is_not_found() => println!("no such deployment"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// ```
    pub async fn get_status(&self, deployment_id: &str) -> Result<DeploymentStatus, StatusError> {
        let key = self.prefix.status_key(deployment_id);
        tracing::debug!("Reading deployment status at {}", key);

        let record = self.store.get(&key).await.context(StoreSnafu)?;
        let value = match record {
            Some(pair) if !pair.value.is_empty() => pair.value,
            _ => return NotFoundSnafu { deployment_id }.fail(),
        };

        let text = String::from_utf8_lossy(&value);
        DeploymentStatus::parse(&text, true).map_err(|source| {
            tracing::warn!(
                "Deployment {} has an unreadable status record at {}: {:?}",
                deployment_id,
                key,
                source.raw()
            );
            StatusError::InvalidStatus { source }
        })
    }

    /// Whether the deployment has a valid status record.
    ///
    /// Only `NotFound` is turned into `Ok(false)`; any other error is
    /// returned as is and says nothing about existence.
    pub async fn exists(&self, deployment_id: &str) -> Result<bool, StatusError> {
        match self.get_status(deployment_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
