use tracing::{debug, warn};

use super::client::{sdk_error_message, AwsProvider};
use crate::error::{Error, Result};

/// Account the credentials belong to, via STS GetCallerIdentity.
pub async fn caller_account_id(provider: &AwsProvider) -> Result<String> {
    let output = provider
        .sts_client()
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| {
            let message = sdk_error_message(&e);
            warn!(error = %message, "GetCallerIdentity failed");
            Error::Identity(message)
        })?;

    let account = output.account().unwrap_or_default().to_string();
    debug!(account_id = %account, "Caller identity resolved");
    Ok(account)
}
