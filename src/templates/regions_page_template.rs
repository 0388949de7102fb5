use askama::Template;
use crate::models::SessionView;

#[derive(Template)]
#[template(path = "regions.html")]
pub struct RegionsPageTemplate<'a> {
    pub session: Option<SessionView>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub regions: &'a [String],
    pub home_region: String,
}

crate::impl_base_template!(RegionsPageTemplate<'_>);
