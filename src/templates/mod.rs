// Base template trait for shared page fields
pub mod base_template;
pub use base_template::BaseTemplate;

pub mod confirmation_template;
pub mod instances_page_template;
pub mod login_template;
pub mod regions_page_template;

pub use confirmation_template::ConfirmationTemplate;
pub use instances_page_template::InstancesPageTemplate;
pub use login_template::LoginTemplate;
pub use regions_page_template::RegionsPageTemplate;
