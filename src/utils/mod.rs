// Display helpers
pub mod mask;
pub mod time_format;

// Identifier checks
pub mod validate;

pub use mask::mask_access_key;
pub use time_format::format_launch_time;
pub use validate::{is_valid_instance_id, is_valid_region};
