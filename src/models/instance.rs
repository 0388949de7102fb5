use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    Other(String),
}

impl InstanceState {
    pub fn from_name(name: &str) -> Self {
        match name {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "shutting-down" => Self::ShuttingDown,
            "terminated" => Self::Terminated,
            "stopping" => Self::Stopping,
            "stopped" => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Terminated => "terminated",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Other(name) => name,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Pending => "Pending".into(),
            Self::Running => "Running".into(),
            Self::ShuttingDown => "Shutting Down".into(),
            Self::Terminated => "Terminated".into(),
            Self::Stopping => "Stopping".into(),
            Self::Stopped => "Stopped".into(),
            Self::Other(name) if name.is_empty() => "Unknown".into(),
            Self::Other(name) => name.clone(),
        }
    }

    /// CSS class for the state badge.
    pub fn css_class(&self) -> String {
        match self {
            Self::Other(_) => "state-unknown".into(),
            known => format!("state-{}", known.as_str()),
        }
    }
}

/// One instance descriptor, as returned by a single list call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    pub instance_id: String,
    pub instance_type: String,
    pub public_ip: Option<String>,
    pub private_ip: Option<String>,
    pub launch_time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub state: InstanceState,
}
