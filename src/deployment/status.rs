// ABOUTME: Closed, ordered enumeration of deployment lifecycle statuses.
// ABOUTME: Maps each status to its canonical uppercase string and back.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a deployment.
///
/// Variants are declared in lifecycle order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeploymentStatus {
    Initial,
    DeploymentInProgress,
    Deployed,
    UndeploymentInProgress,
    Undeployed,
    DeploymentFailed,
    UndeploymentFailed,
}

/// Every status paired with its canonical string, in ascending order.
/// Parsing scans this table front to back.
const STATUS_TABLE: [(DeploymentStatus, &str); 7] = [
    (DeploymentStatus::Initial, "INITIAL"),
    (DeploymentStatus::DeploymentInProgress, "DEPLOYMENT_IN_PROGRESS"),
    (DeploymentStatus::Deployed, "DEPLOYED"),
    (DeploymentStatus::UndeploymentInProgress, "UNDEPLOYMENT_IN_PROGRESS"),
    (DeploymentStatus::Undeployed, "UNDEPLOYED"),
    (DeploymentStatus::DeploymentFailed, "DEPLOYMENT_FAILED"),
    (DeploymentStatus::UndeploymentFailed, "UNDEPLOYMENT_FAILED"),
];

/// The stored text does not name any known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid deployment status {raw:?}")]
pub struct ParseStatusError {
    raw: String,
}

impl ParseStatusError {
    /// The text that failed to parse, exactly as it was given.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl DeploymentStatus {
    /// All statuses in ascending order.
    pub const ALL: [DeploymentStatus; 7] = [
        DeploymentStatus::Initial,
        DeploymentStatus::DeploymentInProgress,
        DeploymentStatus::Deployed,
        DeploymentStatus::UndeploymentInProgress,
        DeploymentStatus::Undeployed,
        DeploymentStatus::DeploymentFailed,
        DeploymentStatus::UndeploymentFailed,
    ];

    /// Iterate over all statuses in ascending order.
    pub fn iter() -> impl Iterator<Item = DeploymentStatus> {
        Self::ALL.into_iter()
    }

    /// Canonical uppercase form, used for both encoding and decoding.
    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentStatus::Initial => "INITIAL",
            DeploymentStatus::DeploymentInProgress => "DEPLOYMENT_IN_PROGRESS",
            DeploymentStatus::Deployed => "DEPLOYED",
            DeploymentStatus::UndeploymentInProgress => "UNDEPLOYMENT_IN_PROGRESS",
            DeploymentStatus::Undeployed => "UNDEPLOYED",
            DeploymentStatus::DeploymentFailed => "DEPLOYMENT_FAILED",
            DeploymentStatus::UndeploymentFailed => "UNDEPLOYMENT_FAILED",
        }
    }

    /// Parse a status from its textual form.
    ///
    /// With `ignore_case` the input is uppercased before comparison. On
    /// failure the error carries the input as given, not the uppercased copy.
    pub fn parse(raw: &str, ignore_case: bool) -> Result<Self, ParseStatusError> {
        let upper;
        let candidate = if ignore_case {
            upper = raw.to_uppercase();
            upper.as_str()
        } else {
            raw
        };

        STATUS_TABLE
            .iter()
            .find(|(_, name)| *name == candidate)
            .map(|(status, _)| *status)
            .ok_or_else(|| ParseStatusError {
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl Serialize for DeploymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeploymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, false).map_err(serde::de::Error::custom)
    }
}
