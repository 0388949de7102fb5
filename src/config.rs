use std::collections::HashSet;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::models::AwsCredentials;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOME_REGION: &str = "us-east-1";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_FORMAT: &str = "pretty";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const SESSION_COOKIE: &str = "session_id";
pub const DEFAULT_SESSION_IDLE_MINUTES: u64 = 30;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_default())
}

/// Region whose endpoint answers DescribeRegions and GetCallerIdentity.
pub fn get_home_region() -> String {
    env::var("HOME_REGION")
        .ok()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_HOME_REGION.to_string())
}

pub fn get_protected_instance_ids() -> HashSet<String> {
    parse_id_list(&env::var("PROTECTED_INSTANCE_IDS").unwrap_or_default())
}

/// Idle time after which a dashboard session and its credentials are dropped.
pub fn get_session_idle_timeout() -> Duration {
    let minutes = non_empty_var("SESSION_IDLE_MINUTES")
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES);
    Duration::from_secs(minutes * 60)
}

pub fn get_log_format() -> String {
    env::var("LOG_FORMAT").unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string())
}

pub fn get_log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Static credentials from the standard AWS variables. The account id is optional
/// here; when present it is checked against the caller identity.
pub fn credentials_from_env() -> Option<AwsCredentials> {
    let access_key_id = non_empty_var("AWS_ACCESS_KEY_ID")?;
    let secret_access_key = non_empty_var("AWS_SECRET_ACCESS_KEY")?;
    let account_id = non_empty_var("AWS_ACCOUNT_ID").unwrap_or_default();
    Some(AwsCredentials::new(account_id, access_key_id, secret_access_key))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_id_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_PUBLIC_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
