//! Deployment API client

use async_trait::async_trait;

use crate::errors::PurgeError;
use crate::http::client::VercelClient;
use crate::models::deployment::DeploymentListResponse;

/// Largest page the deployments list endpoint serves
pub const MAX_PAGE_SIZE: u32 = 100;

/// Deployment operations needed by a purge run
///
/// Implemented by [`VercelClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Fetch a single page of deployments for a project
    async fn list_deployments(
        &self,
        project_id: &str,
        limit: u32,
    ) -> Result<DeploymentListResponse, PurgeError>;

    /// Delete a deployment by its uid
    async fn delete_deployment(&self, uid: &str) -> Result<(), PurgeError>;
}

#[async_trait]
impl DeploymentApi for VercelClient {
    async fn list_deployments(
        &self,
        project_id: &str,
        limit: u32,
    ) -> Result<DeploymentListResponse, PurgeError> {
        let limit = limit.min(MAX_PAGE_SIZE).to_string();
        let query = [("limit", limit.as_str()), ("projectId", project_id)];

        self.get("/v6/deployments", &query)
            .await
            .map_err(|e| match e {
                PurgeError::HttpStatus { status, body } => PurgeError::ListFetch { status, body },
                other => other,
            })
    }

    async fn delete_deployment(&self, uid: &str) -> Result<(), PurgeError> {
        let path = format!("/v13/deployments/{}", uid);
        self.delete(&path).await
    }
}
