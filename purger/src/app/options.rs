//! Run configuration options

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::errors::PurgeError;
use crate::http::deployments::MAX_PAGE_SIZE;

/// Default Vercel API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.vercel.com";

/// Options for a single purge run
///
/// Built once by an entry-point adapter and passed by reference into
/// [`crate::purge::run`].
#[derive(Debug, Clone)]
pub struct PurgeOptions {
    /// Branch whose deployments are deleted
    pub target_branch: String,

    /// Vercel bearer token
    pub token: SecretString,

    /// Vercel project ID; empty means no project scope
    pub project_id: String,

    /// Vercel API base URL
    pub api_base_url: String,

    /// Page size for the deployments list
    pub page_size: u32,

    /// Deleter options
    pub deleter: DeleterOptions,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Default for PurgeOptions {
    fn default() -> Self {
        Self {
            target_branch: String::new(),
            token: SecretString::from(String::new()),
            project_id: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            deleter: DeleterOptions::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl PurgeOptions {
    /// Check the options before anything touches the network
    pub fn validate(&self) -> Result<(), PurgeError> {
        if self.target_branch.trim().is_empty() {
            return Err(PurgeError::ConfigError(
                "target branch must not be empty".to_string(),
            ));
        }
        if self.token.expose_secret().trim().is_empty() {
            return Err(PurgeError::ConfigError(
                "Vercel token must not be empty".to_string(),
            ));
        }
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            PurgeError::ConfigError(format!("invalid API URL '{}': {}", self.api_base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PurgeError::ConfigError(format!(
                "API URL must be http(s), got '{}'",
                self.api_base_url
            )));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(PurgeError::ConfigError(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.deleter.max_concurrent == 0 {
            return Err(PurgeError::ConfigError(
                "max concurrent deletions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Deleter fan-out options
#[derive(Debug, Clone)]
pub struct DeleterOptions {
    /// Delay each deletion waits before issuing its request
    pub delay: Duration,

    /// Upper bound on in-flight delete requests
    pub max_concurrent: usize,
}

impl Default for DeleterOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            max_concurrent: 10,
        }
    }
}
