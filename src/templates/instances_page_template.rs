use askama::Template;
use crate::models::{RegionSectionView, SessionView};

#[derive(Template)]
#[template(path = "instances.html")]
pub struct InstancesPageTemplate {
    pub session: Option<SessionView>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub sections: Vec<RegionSectionView>,
    pub failed_regions: Vec<String>,
    pub regions_scanned: usize,
    pub total_count: usize,
}

crate::impl_base_template!(InstancesPageTemplate);
