//! Provider seam. Everything above this module talks to `ComputeProvider`
//! and never to the SDK directly.

pub mod client;
pub mod identity;
pub mod instances;
pub mod lifecycle;
pub mod regions;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AwsCredentials, Instance, StateChange};

pub use client::{AwsConnector, AwsProvider};

#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// Region that answers region enumeration and identity calls.
    fn home_region(&self) -> &str;

    async fn list_regions(&self) -> Result<Vec<String>>;

    /// Running instances only, all reservations flattened.
    async fn list_running_instances(&self, region: &str) -> Result<Vec<Instance>>;

    async fn stop_instance(&self, region: &str, instance_id: &str) -> Result<StateChange>;

    async fn terminate_instance(&self, region: &str, instance_id: &str) -> Result<StateChange>;

    async fn caller_account_id(&self) -> Result<String>;
}

/// Opens a provider session scoped to one set of credentials.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, credentials: &AwsCredentials) -> Result<Arc<dyn ComputeProvider>>;
}
