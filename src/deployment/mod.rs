// ABOUTME: Deployment status model and the repository that reads it.
// ABOUTME: Exports DeploymentStatus, StatusRepository and the lookup error types.

mod error;
mod repository;
mod status;

pub use error::{StatusError, StatusErrorKind, is_not_found_error};
pub use repository::StatusRepository;
pub use status::{DeploymentStatus, ParseStatusError};
