//! Run reporting seam

use crate::errors::PurgeError;

/// Where a purge run sends its human-readable progress and verdict
///
/// The standalone CLI logs through `tracing`; the GitHub Actions adapter
/// emits workflow commands.
pub trait Reporter: Send + Sync {
    /// Progress line
    fn info(&self, message: &str);

    /// Per-deployment diagnostic that does not end the run
    fn error(&self, message: &str);

    /// Every targeted deployment was deleted
    fn success(&self, deleted_ids: &[String]);

    /// The run ended with a fatal error
    fn fail(&self, error: &PurgeError);
}

/// Success line shared by every reporter
pub fn success_message(deleted_ids: &[String]) -> String {
    format!(
        "Success! There are all deleted deployments which ids are {}",
        deleted_ids.join(",")
    )
}
