use crate::models::SessionView;

/// Fields every page layout reads.
pub trait BaseTemplate {
    fn session(&self) -> &Option<SessionView>;
    fn base_url(&self) -> &str;
    fn flash_messages(&self) -> &Vec<String>;
    fn has_flash_messages(&self) -> bool;
}

/// Implement BaseTemplate for a struct carrying the standard fields.
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn session(&self) -> &Option<$crate::models::SessionView> {
                &self.session
            }
            fn base_url(&self) -> &str {
                &self.base_url
            }
            fn flash_messages(&self) -> &Vec<String> {
                &self.flash_messages
            }
            fn has_flash_messages(&self) -> bool {
                self.has_flash_messages
            }
        }
    };
}
