//! Deployment selection

use crate::models::deployment::Deployment;

/// Whether a deployment belongs to `branch` and is still active
pub fn should_delete(deployment: &Deployment, branch: &str) -> bool {
    deployment.branch_ref() == Some(branch)
        && deployment.state.is_some_and(|state| state.is_active())
}

/// Uids of the deployments to delete, in list order
pub fn select_for_deletion(deployments: &[Deployment], branch: &str) -> Vec<String> {
    deployments
        .iter()
        .filter(|deployment| should_delete(deployment, branch))
        .map(|deployment| deployment.uid.clone())
        .collect()
}
