//! Error types for vercel-purge

use thiserror::Error;

/// Main error type for a purge run
#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Status code is {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Wrong trigger event: expected '{expected}', got '{actual}'")]
    WrongTriggerEvent { expected: String, actual: String },

    #[error("Status code is {status} when fetched to get deployments list: {body}")]
    ListFetch { status: u16, body: String },

    #[error(
        "There are no deployments which should be deleted for branch '{branch}'.\nPlease check Vercel Console."
    )]
    NoMatchingDeployments { branch: String },

    #[error(
        "There are some deployments which couldn't be deleted.\nThe deployments ids are {}",
        .ids.join(",")
    )]
    DeletionFailed { ids: Vec<String> },
}

impl PurgeError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            PurgeError::HttpStatus { status, .. } | PurgeError::ListFetch { status, .. } => {
                Some(*status)
            }
            PurgeError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
