use std::fmt;

use serde::Serialize;

use crate::models::InstanceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleCommand {
    /// Pause the instance; storage is preserved.
    Stop,
    /// Destroy the instance irreversibly.
    Terminate,
}

impl LifecycleCommand {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Terminate => "terminate",
        }
    }

    /// Name of the provider API action, for logs.
    pub fn api_action(&self) -> &'static str {
        match self {
            Self::Stop => "StopInstances",
            Self::Terminate => "TerminateInstances",
        }
    }

    pub fn success_message(&self, instance_id: &str) -> String {
        match self {
            Self::Stop => format!("Successfully initiated stop for instance {}", instance_id),
            Self::Terminate => format!("Successfully initiated termination for instance {}", instance_id),
        }
    }

    pub fn failure_message(&self, reason: &str) -> String {
        format!("Failed to {} instance: {}", self.verb(), reason)
    }
}

impl fmt::Display for LifecycleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Transition reported back by StopInstances / TerminateInstances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateChange {
    pub instance_id: String,
    pub previous: InstanceState,
    pub current: InstanceState,
}
