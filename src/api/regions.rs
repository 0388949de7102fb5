use tracing::{info, warn};

use super::client::{sdk_error_message, AwsProvider};
use crate::error::{Error, Result};

/// DescribeRegions against the home region; names in provider order.
pub async fn describe_regions(provider: &AwsProvider) -> Result<Vec<String>> {
    let home = provider.home_region.as_str();
    let started = std::time::Instant::now();

    let output = provider
        .ec2_client(home)
        .describe_regions()
        .send()
        .await
        .map_err(|e| {
            let message = sdk_error_message(&e);
            warn!(region = %home, error = %message, "DescribeRegions failed");
            Error::Regions(message)
        })?;

    let regions: Vec<String> = output
        .regions()
        .iter()
        .filter_map(|r| r.region_name())
        .map(str::to_string)
        .collect();

    info!(
        region = %home,
        region_count = regions.len(),
        response_time_ms = started.elapsed().as_millis() as u64,
        "Available regions fetched"
    );
    Ok(regions)
}
