pub mod app_state;
pub mod confirmation;
pub mod credentials;
pub mod fleet_scan;
pub mod instance;
pub mod instance_view;
pub mod lifecycle;
pub mod session;

pub use app_state::AppState;
pub use confirmation::ConfirmationAction;
pub use credentials::AwsCredentials;
pub use fleet_scan::{FleetScan, RegionSection};
pub use instance::{Instance, InstanceState};
pub use instance_view::{InstanceView, RegionSectionView};
pub use lifecycle::{LifecycleCommand, StateChange};
pub use session::{Session, SessionView};
