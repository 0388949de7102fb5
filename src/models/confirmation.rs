use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationAction {
    StopInstance,
    TerminateInstance,
    /// Second prompt; termination needs two explicit confirmations.
    TerminateInstanceFinal,
}

impl ConfirmationAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stop-instance" => Some(Self::StopInstance),
            "terminate-instance" => Some(Self::TerminateInstance),
            "terminate-instance-final" => Some(Self::TerminateInstanceFinal),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::StopInstance => "stop-instance",
            Self::TerminateInstance => "terminate-instance",
            Self::TerminateInstanceFinal => "terminate-instance-final",
        }
    }

    pub fn message(&self, instance_id: &str, region: &str) -> String {
        match self {
            Self::StopInstance => format!(
                "Are you sure you want to stop instance {} in {}?",
                instance_id, region
            ),
            Self::TerminateInstance => format!(
                "WARNING: Are you absolutely sure you want to TERMINATE instance {} in {}? This action cannot be undone!",
                instance_id, region
            ),
            Self::TerminateInstanceFinal => format!(
                "FINAL WARNING: Terminating instance {} will permanently delete it and all its data. Continue?",
                instance_id
            ),
        }
    }
}
