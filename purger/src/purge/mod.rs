//! Branch deployment purge
//!
//! A run is linear: list, filter, delete, report. Each stage runs in its own
//! `tracing` span and any fatal condition ends the run with a [`PurgeError`].

pub mod deleter;
pub mod filter;
pub mod reporter;

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use crate::app::options::PurgeOptions;
use crate::errors::PurgeError;
use crate::http::deployments::DeploymentApi;
use crate::purge::deleter::{delete_all, failed_ids, DeletionOutcome};
use crate::purge::filter::{select_for_deletion, should_delete};
use crate::purge::reporter::Reporter;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeSummary {
    /// Branch the run targeted
    pub branch: String,

    /// Deleted deployment uids, in list order
    pub deleted_ids: Vec<String>,
}

/// Purge the active deployments of `options.target_branch`
///
/// Fails when the list call fails, when nothing matches, or when at least
/// one deletion failed. In the last case the error names only the failed
/// uids.
pub async fn run(
    options: &PurgeOptions,
    api: Arc<dyn DeploymentApi>,
    reporter: &dyn Reporter,
) -> Result<PurgeSummary, PurgeError> {
    let branch = options.target_branch.as_str();
    reporter.info(&format!("Target branch is {}.", branch));

    let listing = api
        .list_deployments(&options.project_id, options.page_size)
        .instrument(info_span!("listing", project_id = %options.project_id))
        .await?;
    if listing.pagination.next.is_some() {
        debug!(
            "Deployments list has more than {} entries; only the first page is inspected",
            options.page_size
        );
    }

    let matched = {
        let _span = info_span!("filtering", branch).entered();
        for deployment in listing.deployments.iter().filter(|d| should_delete(d, branch)) {
            debug!(
                "Matched {} ({}, {}, created {})",
                deployment.uid,
                deployment.name,
                deployment
                    .state
                    .map(|state| state.to_string())
                    .unwrap_or_default(),
                deployment
                    .created_time()
                    .map(|created| created.to_rfc3339())
                    .unwrap_or_else(|| "unknown".to_string())
            );
        }
        select_for_deletion(&listing.deployments, branch)
    };
    reporter.info(&format!(
        "Matched deployments are {}\nTheir ids are {}",
        matched.len(),
        matched.join(",")
    ));
    if matched.is_empty() {
        return Err(PurgeError::NoMatchingDeployments {
            branch: branch.to_string(),
        });
    }

    let outcomes = delete_all(api, &matched, &options.deleter)
        .instrument(info_span!("deleting", count = matched.len()))
        .await;

    let _span = info_span!("reporting").entered();
    report_failures(&outcomes, reporter);

    let failed = failed_ids(&outcomes);
    if !failed.is_empty() {
        return Err(PurgeError::DeletionFailed { ids: failed });
    }

    reporter.success(&matched);
    Ok(PurgeSummary {
        branch: branch.to_string(),
        deleted_ids: matched,
    })
}

fn report_failures(outcomes: &[DeletionOutcome], reporter: &dyn Reporter) {
    for outcome in outcomes.iter().filter(|o| !o.is_success()) {
        let status = outcome
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        reporter.error(&format!(
            "Status code is {} when fetched to delete deployment {}.",
            status, outcome.uid
        ));
        if let Some(detail) = &outcome.error {
            reporter.error(detail);
        }
    }
}
