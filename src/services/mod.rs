pub mod instance_service;
pub mod session_service;

// Re-export commonly used functions
pub use instance_service::{check_instance_block, execute_lifecycle, scan_running_instances, BlockReason};
pub use session_service::{check_account, open_session, random_session_id};
