use aws_sdk_ec2::types::{Filter, Instance as SdkInstance};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::client::{sdk_error_message, AwsProvider};
use crate::error::{Error, Result};
use crate::models::{Instance, InstanceState};

/// One DescribeInstances call in `region`, running instances only.
pub async fn describe_running_instances(provider: &AwsProvider, region: &str) -> Result<Vec<Instance>> {
    debug!(region = %region, "Sending DescribeInstances request");

    let output = provider
        .ec2_client(region)
        .describe_instances()
        .filters(
            Filter::builder()
                .name("instance-state-name")
                .values("running")
                .build(),
        )
        .send()
        .await
        .map_err(|e| {
            let message = sdk_error_message(&e);
            warn!(region = %region, error = %message, "DescribeInstances failed");
            Error::Instances {
                region: region.to_string(),
                message,
            }
        })?;

    let instances: Vec<Instance> = output
        .reservations()
        .iter()
        .flat_map(|r| r.instances())
        .map(instance_from_sdk)
        .collect();

    info!(region = %region, instance_count = instances.len(), "Running instances fetched");
    Ok(instances)
}

pub fn instance_from_sdk(i: &SdkInstance) -> Instance {
    Instance {
        instance_id: i.instance_id().unwrap_or_default().to_string(),
        instance_type: i
            .instance_type()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        public_ip: i.public_ip_address().map(str::to_string),
        private_ip: i.private_ip_address().map(str::to_string),
        launch_time: i.launch_time().and_then(to_chrono),
        name: name_tag(i),
        state: i
            .state()
            .and_then(|s| s.name())
            .map(|n| InstanceState::from_name(n.as_str()))
            .unwrap_or(InstanceState::Other(String::new())),
    }
}

fn name_tag(instance: &SdkInstance) -> Option<String> {
    instance
        .tags()
        .iter()
        .find(|tag| tag.key() == Some("Name"))
        .and_then(|tag| tag.value())
        .map(str::to_string)
}

pub(super) fn to_chrono(t: &aws_sdk_ec2::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(t.secs(), t.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{InstanceState as SdkState, InstanceStateName, InstanceType, Tag};

    #[test]
    fn converts_full_descriptor() {
        let sdk = SdkInstance::builder()
            .instance_id("i-0123456789abcdef0")
            .instance_type(InstanceType::T3Micro)
            .public_ip_address("54.1.2.3")
            .private_ip_address("10.0.0.5")
            .launch_time(aws_sdk_ec2::primitives::DateTime::from_secs(1_700_000_000))
            .tags(Tag::builder().key("env").value("prod").build())
            .tags(Tag::builder().key("Name").value("web-1").build())
            .state(SdkState::builder().name(InstanceStateName::Running).build())
            .build();

        let instance = instance_from_sdk(&sdk);
        assert_eq!(instance.instance_id, "i-0123456789abcdef0");
        assert_eq!(instance.instance_type, "t3.micro");
        assert_eq!(instance.public_ip.as_deref(), Some("54.1.2.3"));
        assert_eq!(instance.private_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(instance.name.as_deref(), Some("web-1"));
        assert_eq!(instance.state, InstanceState::Running);
        assert_eq!(instance.launch_time.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn missing_fields_stay_empty() {
        let instance = instance_from_sdk(&SdkInstance::builder().instance_id("i-1a2b3c4d").build());
        assert_eq!(instance.name, None);
        assert_eq!(instance.public_ip, None);
        assert_eq!(instance.launch_time, None);
        assert_eq!(instance.state, InstanceState::Other(String::new()));
    }
}
