use crate::models::Instance;

/// Running instances found in one region.
#[derive(Debug, Clone)]
pub struct RegionSection {
    pub region: String,
    pub instances: Vec<Instance>,
}

/// Result of one sequential sweep over a list of regions.
#[derive(Debug, Clone, Default)]
pub struct FleetScan {
    /// Only regions that had at least one running instance, in scan order.
    pub sections: Vec<RegionSection>,
    /// Regions whose list call failed and were skipped.
    pub failed_regions: Vec<String>,
    pub total: usize,
}

impl FleetScan {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
