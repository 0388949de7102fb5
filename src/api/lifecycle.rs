use aws_sdk_ec2::types::InstanceStateChange;
use tracing::{info, warn};

use super::client::{sdk_error_message, AwsProvider};
use crate::error::{Error, Result};
use crate::models::{InstanceState, LifecycleCommand, StateChange};

pub async fn stop_instance(provider: &AwsProvider, region: &str, instance_id: &str) -> Result<StateChange> {
    let command = LifecycleCommand::Stop;
    log_request(command, region, instance_id);

    let output = provider
        .ec2_client(region)
        .stop_instances()
        .instance_ids(instance_id)
        .send()
        .await
        .map_err(|e| lifecycle_error(command, region, instance_id, sdk_error_message(&e)))?;

    let change = state_change(output.stopping_instances(), instance_id);
    log_change(command, region, &change);
    Ok(change)
}

pub async fn terminate_instance(provider: &AwsProvider, region: &str, instance_id: &str) -> Result<StateChange> {
    let command = LifecycleCommand::Terminate;
    log_request(command, region, instance_id);

    let output = provider
        .ec2_client(region)
        .terminate_instances()
        .instance_ids(instance_id)
        .send()
        .await
        .map_err(|e| lifecycle_error(command, region, instance_id, sdk_error_message(&e)))?;

    let change = state_change(output.terminating_instances(), instance_id);
    log_change(command, region, &change);
    Ok(change)
}

fn log_request(command: LifecycleCommand, region: &str, instance_id: &str) {
    info!(
        instance_id = %instance_id,
        region = %region,
        api_action = command.api_action(),
        "Sending lifecycle request to AWS EC2 API"
    );
}

fn log_change(command: LifecycleCommand, region: &str, change: &StateChange) {
    info!(
        instance_id = %change.instance_id,
        region = %region,
        api_action = command.api_action(),
        previous_state = change.previous.as_str(),
        current_state = change.current.as_str(),
        "Lifecycle request accepted"
    );
}

fn lifecycle_error(command: LifecycleCommand, region: &str, instance_id: &str, message: String) -> Error {
    warn!(
        instance_id = %instance_id,
        region = %region,
        api_action = command.api_action(),
        error = %message,
        "Lifecycle request failed"
    );
    Error::Lifecycle {
        command,
        instance_id: instance_id.to_string(),
        message,
    }
}

/// The response lists one change per requested id; an empty list still
/// means the request was accepted.
fn state_change(changes: &[InstanceStateChange], instance_id: &str) -> StateChange {
    let found = changes
        .iter()
        .find(|c| c.instance_id() == Some(instance_id))
        .or_else(|| changes.first());

    let state_of = |s: Option<&aws_sdk_ec2::types::InstanceState>| {
        s.and_then(|s| s.name())
            .map(|n| InstanceState::from_name(n.as_str()))
            .unwrap_or(InstanceState::Other(String::new()))
    };

    StateChange {
        instance_id: instance_id.to_string(),
        previous: state_of(found.and_then(|c| c.previous_state())),
        current: state_of(found.and_then(|c| c.current_state())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{InstanceState as SdkState, InstanceStateName};

    #[test]
    fn picks_matching_change() {
        let change = InstanceStateChange::builder()
            .instance_id("i-1a2b3c4d")
            .previous_state(SdkState::builder().name(InstanceStateName::Running).build())
            .current_state(SdkState::builder().name(InstanceStateName::Stopping).build())
            .build();
        let result = state_change(&[change], "i-1a2b3c4d");
        assert_eq!(result.previous, InstanceState::Running);
        assert_eq!(result.current, InstanceState::Stopping);
    }

    #[test]
    fn empty_response_is_unknown_transition() {
        let result = state_change(&[], "i-1a2b3c4d");
        assert_eq!(result.instance_id, "i-1a2b3c4d");
        assert_eq!(result.current, InstanceState::Other(String::new()));
    }
}
