use thiserror::Error;

use crate::models::LifecycleCommand;

/// Errors surfaced by provider calls and the services built on them.
#[derive(Debug, Error)]
pub enum Error {
    /// One of the credential fields was left blank.
    #[error("Please fill in all credential fields")]
    MissingCredentials,

    /// DescribeRegions failed, which almost always means bad credentials.
    #[error("Failed to fetch AWS regions. Please check your credentials.")]
    Regions(String),

    #[error("Failed to list instances in {region}: {message}")]
    Instances { region: String, message: String },

    #[error("{message}")]
    Lifecycle {
        command: LifecycleCommand,
        instance_id: String,
        message: String,
    },

    #[error("Could not verify account identity: {0}")]
    Identity(String),

    #[error("Credentials belong to account {actual}, not {expected}")]
    AccountMismatch { expected: String, actual: String },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid instance id: {0}")]
    InvalidInstanceId(String),
}

impl Error {
    /// Provider-side detail, for logs. User-facing text comes from `Display`.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Regions(detail) => Some(detail),
            Error::Instances { message, .. } | Error::Lifecycle { message, .. } => Some(message),
            Error::Identity(detail) => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
