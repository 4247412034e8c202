//! Deployment models
//!
//! Wire shapes for the Vercel deployments API. Only `uid`, `state` and
//! `meta` drive the purge; the remaining fields are decoded for logging.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata key holding the git branch a deployment was built from
pub const BRANCH_REF_KEY: &str = "githubCommitRef";

/// Lifecycle state of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentState {
    Building,
    Error,
    Initializing,
    Queued,
    Ready,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl DeploymentState {
    /// Whether the deployment still consumes resources or serves traffic
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DeploymentState::Building
                | DeploymentState::Initializing
                | DeploymentState::Queued
                | DeploymentState::Ready
        )
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeploymentState::Building => "BUILDING",
            DeploymentState::Error => "ERROR",
            DeploymentState::Initializing => "INITIALIZING",
            DeploymentState::Queued => "QUEUED",
            DeploymentState::Ready => "READY",
            DeploymentState::Canceled => "CANCELED",
            DeploymentState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Where the deployment was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentSource {
    Cli,
    Git,
    Import,
    #[serde(rename = "import/repo")]
    ImportRepo,
    #[serde(rename = "clone/repo")]
    CloneRepo,
    #[serde(other)]
    Unknown,
}

/// Environment the deployment was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Production,
    Staging,
    #[serde(other)]
    Unknown,
}

/// User who created the deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(default)]
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab_login: Option<String>,
}

/// Aliasing failure attached to a deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// A deployment as returned by `GET /v6/deployments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Unique deployment ID
    pub uid: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub source: Option<DeploymentSource>,

    /// Current state; absent on some legacy deployments
    #[serde(default)]
    pub state: Option<DeploymentState>,

    #[serde(default, rename = "type")]
    pub deployment_type: Option<String>,

    #[serde(default)]
    pub creator: Option<Creator>,

    /// Free-form metadata, including the git branch reference
    #[serde(default)]
    pub meta: Option<HashMap<String, String>>,

    #[serde(default)]
    pub target: Option<DeploymentTarget>,

    #[serde(default)]
    pub alias_error: Option<AliasError>,

    #[serde(default)]
    pub alias_assigned: Option<serde_json::Value>,

    #[serde(default)]
    pub created_at: Option<i64>,

    #[serde(default)]
    pub building_at: Option<i64>,

    #[serde(default)]
    pub ready: Option<i64>,

    #[serde(default)]
    pub checks_state: Option<String>,

    #[serde(default)]
    pub checks_conclusion: Option<String>,

    #[serde(default)]
    pub inspector_url: Option<String>,

    #[serde(default)]
    pub is_rollback_candidate: Option<bool>,
}

impl Deployment {
    /// Git branch recorded in the deployment metadata
    pub fn branch_ref(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get(BRANCH_REF_KEY))
            .map(String::as_str)
    }

    /// Creation time, if `created` is a valid timestamp
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created)
    }
}

/// Cursor information for the deployments list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Amount of items in the current page
    #[serde(default)]
    pub count: u32,

    /// Timestamp to request the next page with
    pub next: Option<i64>,

    /// Timestamp to request the previous page with
    pub prev: Option<i64>,
}

/// Response body of `GET /v6/deployments`
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentListResponse {
    pub deployments: Vec<Deployment>,

    #[serde(default)]
    pub pagination: Pagination,
}
