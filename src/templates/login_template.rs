use askama::Template;
use crate::models::SessionView;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub session: Option<SessionView>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub error: Option<String>,
    /// Echoed back after a failed attempt. Keys are never echoed.
    pub account_id: String,
}

crate::impl_base_template!(LoginTemplate);
