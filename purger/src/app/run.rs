//! Entry-point glue shared by both adapters

use std::sync::Arc;

use tracing::debug;

use crate::app::options::PurgeOptions;
use crate::errors::PurgeError;
use crate::http::client::VercelClient;
use crate::purge::{self, reporter::Reporter, PurgeSummary};

/// Validate the options, run the purge against the live API and report a
/// fatal error through `reporter`
pub async fn run(
    options: &PurgeOptions,
    reporter: &dyn Reporter,
) -> Result<PurgeSummary, PurgeError> {
    let result = execute(options, reporter).await;
    if let Err(e) = &result {
        reporter.fail(e);
    }
    result
}

async fn execute(
    options: &PurgeOptions,
    reporter: &dyn Reporter,
) -> Result<PurgeSummary, PurgeError> {
    options.validate()?;

    let client = VercelClient::new(options)?;
    debug!("Using Vercel API at {}", client.base_url());

    purge::run(options, Arc::new(client), reporter).await
}
