use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ec2::config::{Credentials, Region};
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::Client;
use tracing::{debug, info};

use super::{ComputeProvider, Connector};
use crate::error::Result;
use crate::models::{AwsCredentials, Instance, StateChange};

const CREDENTIALS_PROVIDER_NAME: &str = "ec2m-session";

/// AWS-backed provider. Holds one base SDK config; per-region EC2 clients are
/// derived from it on demand.
pub struct AwsProvider {
    pub(super) base: SdkConfig,
    pub(super) home_region: String,
}

impl AwsProvider {
    /// Static credentials entered by the operator.
    pub async fn from_credentials(credentials: &AwsCredentials, home_region: &str) -> Self {
        info!(
            region = %home_region,
            access_key = %credentials.masked_access_key(),
            "Initializing AWS SDK configuration from supplied credentials"
        );
        let base = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(home_region.to_string()))
            .credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ))
            .load()
            .await;
        Self::from_config(base, home_region)
    }

    /// Environment, shared config files or instance metadata, in SDK order.
    pub async fn from_default_chain(home_region: &str) -> Self {
        debug!(region = %home_region, "Using AWS SDK default credential chain");
        let base = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(home_region.to_string()))
            .load()
            .await;
        Self::from_config(base, home_region)
    }

    pub fn from_config(base: SdkConfig, home_region: &str) -> Self {
        Self {
            base,
            home_region: home_region.to_string(),
        }
    }

    pub(super) fn ec2_client(&self, region: &str) -> Client {
        let conf = aws_sdk_ec2::config::Builder::from(&self.base)
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(conf)
    }

    pub(super) fn sts_client(&self) -> aws_sdk_sts::Client {
        aws_sdk_sts::Client::new(&self.base)
    }
}

#[async_trait]
impl ComputeProvider for AwsProvider {
    fn home_region(&self) -> &str {
        &self.home_region
    }

    async fn list_regions(&self) -> Result<Vec<String>> {
        super::regions::describe_regions(self).await
    }

    async fn list_running_instances(&self, region: &str) -> Result<Vec<Instance>> {
        super::instances::describe_running_instances(self, region).await
    }

    async fn stop_instance(&self, region: &str, instance_id: &str) -> Result<StateChange> {
        super::lifecycle::stop_instance(self, region, instance_id).await
    }

    async fn terminate_instance(&self, region: &str, instance_id: &str) -> Result<StateChange> {
        super::lifecycle::terminate_instance(self, region, instance_id).await
    }

    async fn caller_account_id(&self) -> Result<String> {
        super::identity::caller_account_id(self).await
    }
}

/// Builds an `AwsProvider` per sign-in.
pub struct AwsConnector {
    home_region: String,
}

impl AwsConnector {
    pub fn new(home_region: impl Into<String>) -> Self {
        Self {
            home_region: home_region.into(),
        }
    }
}

#[async_trait]
impl Connector for AwsConnector {
    async fn connect(&self, credentials: &AwsCredentials) -> Result<Arc<dyn ComputeProvider>> {
        let provider = AwsProvider::from_credentials(credentials, &self.home_region).await;
        Ok(Arc::new(provider))
    }
}

/// Service message when AWS sent one, otherwise the full error chain.
pub(super) fn sdk_error_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.message() {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => DisplayErrorContext(err).to_string(),
    }
}
