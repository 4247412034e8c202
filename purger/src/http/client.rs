//! HTTP client implementation

use reqwest::{header, Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::options::PurgeOptions;
use crate::errors::PurgeError;

/// HTTP client for the Vercel REST API
pub struct VercelClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl VercelClient {
    /// Create a new client from the run options
    pub fn new(options: &PurgeOptions) -> Result<Self, PurgeError> {
        let client = Client::builder().timeout(options.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: options.api_base_url.trim_end_matches('/').to_string(),
            token: options.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PurgeError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::AUTHORIZATION, self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error("GET", response).await);
        }

        let body = response.json().await?;
        Ok(body)
    }

    /// Make a DELETE request, discarding any successful body
    pub async fn delete(&self, path: &str) -> Result<(), PurgeError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error("DELETE", response).await);
        }

        Ok(())
    }
}

async fn status_error(method: &str, response: Response) -> PurgeError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!("HTTP {} failed: {} - {}", method, status, body);
    PurgeError::HttpStatus { status, body }
}
