//! Paced, bounded deletion fan-out
//!
//! Every uid gets its own task. A task holds a semaphore permit while it
//! waits out the fixed delay and issues its DELETE, so at most
//! `max_concurrent` requests are in flight. All tasks are joined before the
//! outcomes are returned.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::app::options::DeleterOptions;
use crate::http::deployments::DeploymentApi;

/// Result of one deletion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// Deployment uid
    pub uid: String,

    /// HTTP status of a failed attempt, if the server answered
    pub status: Option<u16>,

    /// Failure detail; `None` on success
    pub error: Option<String>,
}

impl DeletionOutcome {
    fn deleted(uid: String) -> Self {
        Self {
            uid,
            status: None,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Uids of the failed outcomes, in outcome order
pub fn failed_ids(outcomes: &[DeletionOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter(|outcome| !outcome.is_success())
        .map(|outcome| outcome.uid.clone())
        .collect()
}

/// Delete every uid and wait for all attempts to settle
///
/// Outcomes come back in the order of `uids`. A failing deletion never
/// stops its siblings.
pub async fn delete_all(
    api: Arc<dyn DeploymentApi>,
    uids: &[String],
    options: &DeleterOptions,
) -> Vec<DeletionOutcome> {
    let semaphore = Arc::new(Semaphore::new(options.max_concurrent.max(1)));
    let mut handles = Vec::with_capacity(uids.len());

    for uid in uids {
        let api = Arc::clone(&api);
        let sem = Arc::clone(&semaphore);
        let uid = uid.clone();
        let delay = options.delay;

        handles.push(tokio::spawn(async move {
            // The semaphore is never closed
            let _permit = sem.acquire_owned().await.ok();
            tokio::time::sleep(delay).await;

            debug!("Deleting deployment {}", uid);
            match api.delete_deployment(&uid).await {
                Ok(()) => DeletionOutcome::deleted(uid),
                Err(e) => {
                    debug!("Failed to delete deployment {}: {}", uid, e);
                    DeletionOutcome {
                        status: e.status(),
                        error: Some(e.to_string()),
                        uid,
                    }
                }
            }
        }));
    }

    join_all(handles)
        .await
        .into_iter()
        .zip(uids)
        .map(|(joined, uid)| match joined {
            Ok(outcome) => outcome,
            Err(e) => DeletionOutcome {
                uid: uid.clone(),
                status: None,
                error: Some(format!("deletion task failed: {}", e)),
            },
        })
        .collect()
}
