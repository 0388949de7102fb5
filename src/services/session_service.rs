use std::time::Instant;

use hex::encode as hex_encode;
use rand::RngCore;
use tracing::{info, warn};

use crate::api::Connector;
use crate::error::{Error, Result};
use crate::models::{AwsCredentials, Session};

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

/// Compare the account STS reported with the one the operator named. An
/// empty answer cannot be checked and is let through.
pub fn check_account(expected: &str, actual: &str) -> Result<()> {
    if actual.is_empty() {
        warn!(expected_account = %expected, "Caller identity returned no account id; skipping check");
        return Ok(());
    }
    if actual != expected {
        return Err(Error::AccountMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Connect with `credentials`, fetch the region list once and, when an
/// account id was given, make sure the keys belong to it.
pub async fn open_session(connector: &dyn Connector, credentials: AwsCredentials) -> Result<Session> {
    if !credentials.has_keys() {
        return Err(Error::MissingCredentials);
    }

    let provider = connector.connect(&credentials).await?;
    let regions = provider.list_regions().await?;

    if !credentials.account_id.is_empty() {
        match provider.caller_account_id().await {
            Ok(actual) => check_account(&credentials.account_id, &actual)?,
            Err(e) => {
                warn!(error = %e, "Account id could not be verified; continuing");
            }
        }
    }

    info!(
        account_id = %credentials.account_id,
        access_key = %credentials.masked_access_key(),
        region_count = regions.len(),
        "Session opened"
    );

    Ok(Session {
        account_id: credentials.account_id.clone(),
        access_key_hint: credentials.masked_access_key(),
        provider,
        regions,
        last_seen: Instant::now(),
    })
}
