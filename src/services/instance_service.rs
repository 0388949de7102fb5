use std::collections::HashSet;

use tracing::{info, warn};

use crate::api::ComputeProvider;
use crate::error::{Error, Result};
use crate::models::{FleetScan, LifecycleCommand, RegionSection, StateChange};
use crate::utils::{is_valid_instance_id, is_valid_region};

/// Walk `regions` one at a time. A region whose list call fails is logged,
/// recorded and skipped; the sweep carries on with the next one.
pub async fn scan_running_instances(provider: &dyn ComputeProvider, regions: &[String]) -> FleetScan {
    let mut scan = FleetScan::default();

    for region in regions {
        match provider.list_running_instances(region).await {
            Ok(instances) if instances.is_empty() => {}
            Ok(instances) => {
                scan.total += instances.len();
                scan.sections.push(RegionSection {
                    region: region.clone(),
                    instances,
                });
            }
            Err(e) => {
                warn!(region = %region, error = %e, "Skipping region after list failure");
                scan.failed_regions.push(region.clone());
            }
        }
    }

    info!(
        regions_scanned = regions.len(),
        regions_with_instances = scan.sections.len(),
        failed_regions = scan.failed_regions.len(),
        total_instances = scan.total,
        "Fleet scan finished"
    );
    scan
}

pub async fn execute_lifecycle(
    provider: &dyn ComputeProvider,
    command: LifecycleCommand,
    region: &str,
    instance_id: &str,
) -> Result<StateChange> {
    if !is_valid_region(region) {
        return Err(Error::InvalidRegion(region.to_string()));
    }
    if !is_valid_instance_id(instance_id) {
        return Err(Error::InvalidInstanceId(instance_id.to_string()));
    }
    match command {
        LifecycleCommand::Stop => provider.stop_instance(region, instance_id).await,
        LifecycleCommand::Terminate => provider.terminate_instance(region, instance_id).await,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    Protected,
}

impl BlockReason {
    pub fn message(&self) -> String {
        match self {
            BlockReason::Protected => "Actions are disabled for this instance.".into(),
        }
    }
}

/// Shared by the dashboard and the CLI; `protected` comes from
/// `PROTECTED_INSTANCE_IDS`.
pub fn check_instance_block(protected: &HashSet<String>, instance_id: &str) -> Option<BlockReason> {
    if protected.contains(instance_id) {
        return Some(BlockReason::Protected);
    }
    None
}
