#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use ec2m::api::{ComputeProvider, Connector};
use ec2m::models::{AwsCredentials, Instance, InstanceState, LifecycleCommand, StateChange};
use ec2m::{Error, Result};

/// In-memory provider. Region lists and per-region answers are canned;
/// every call is recorded.
#[derive(Default)]
pub struct FakeProvider {
    pub regions: Vec<String>,
    pub regions_error: Option<String>,
    pub instances: HashMap<String, Vec<Instance>>,
    pub failing_regions: Vec<String>,
    pub lifecycle_error: Option<String>,
    pub account: Option<std::result::Result<String, String>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn with_regions(regions: &[&str]) -> Self {
        Self {
            regions: regions.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn running(mut self, region: &str, instances: Vec<Instance>) -> Self {
        self.instances.insert(region.to_string(), instances);
        self
    }

    pub fn failing(mut self, region: &str) -> Self {
        self.failing_regions.push(region.to_string());
        self
    }

    pub fn account(mut self, account: &str) -> Self {
        self.account = Some(Ok(account.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn lifecycle(&self, command: LifecycleCommand, region: &str, instance_id: &str) -> Result<StateChange> {
        self.record(format!("{}:{}:{}", command.verb(), region, instance_id));
        if let Some(message) = &self.lifecycle_error {
            return Err(Error::Lifecycle {
                command,
                instance_id: instance_id.to_string(),
                message: message.clone(),
            });
        }
        Ok(StateChange {
            instance_id: instance_id.to_string(),
            previous: InstanceState::Running,
            current: match command {
                LifecycleCommand::Stop => InstanceState::Stopping,
                LifecycleCommand::Terminate => InstanceState::ShuttingDown,
            },
        })
    }
}

#[async_trait]
impl ComputeProvider for FakeProvider {
    fn home_region(&self) -> &str {
        "us-east-1"
    }

    async fn list_regions(&self) -> Result<Vec<String>> {
        self.record("regions".into());
        match &self.regions_error {
            Some(message) => Err(Error::Regions(message.clone())),
            None => Ok(self.regions.clone()),
        }
    }

    async fn list_running_instances(&self, region: &str) -> Result<Vec<Instance>> {
        self.record(format!("instances:{}", region));
        if self.failing_regions.iter().any(|r| r == region) {
            return Err(Error::Instances {
                region: region.to_string(),
                message: "UnauthorizedOperation".into(),
            });
        }
        Ok(self.instances.get(region).cloned().unwrap_or_default())
    }

    async fn stop_instance(&self, region: &str, instance_id: &str) -> Result<StateChange> {
        self.lifecycle(LifecycleCommand::Stop, region, instance_id)
    }

    async fn terminate_instance(&self, region: &str, instance_id: &str) -> Result<StateChange> {
        self.lifecycle(LifecycleCommand::Terminate, region, instance_id)
    }

    async fn caller_account_id(&self) -> Result<String> {
        self.record("identity".into());
        match &self.account {
            Some(Ok(account)) => Ok(account.clone()),
            Some(Err(message)) => Err(Error::Identity(message.clone())),
            None => Ok(String::new()),
        }
    }
}

/// Hands out the same provider to every sign-in and remembers the keys it saw.
pub struct FakeConnector {
    pub provider: Arc<FakeProvider>,
    pub seen_access_keys: Mutex<Vec<String>>,
}

impl FakeConnector {
    pub fn new(provider: FakeProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            seen_access_keys: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn connect(&self, credentials: &AwsCredentials) -> Result<Arc<dyn ComputeProvider>> {
        self.seen_access_keys
            .lock()
            .unwrap()
            .push(credentials.access_key_id.clone());
        Ok(self.provider.clone())
    }
}

pub fn instance(id: &str, name: Option<&str>) -> Instance {
    Instance {
        instance_id: id.to_string(),
        instance_type: "t3.micro".to_string(),
        public_ip: Some("54.10.20.30".to_string()),
        private_ip: Some("10.0.1.15".to_string()),
        launch_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        name: name.map(str::to_string),
        state: InstanceState::Running,
    }
}
