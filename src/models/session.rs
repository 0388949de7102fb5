use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::api::ComputeProvider;

/// One signed-in dashboard session. The provider owns the credentials, so
/// dropping the session drops them.
#[derive(Clone)]
pub struct Session {
    pub account_id: String,
    pub access_key_hint: String,
    pub provider: Arc<dyn ComputeProvider>,
    /// Fetched once at sign-in.
    pub regions: Vec<String>,
    /// Last request that used this session.
    pub last_seen: Instant,
}

impl Session {
    pub fn view(&self) -> SessionView {
        SessionView {
            account_id: self.account_id.clone(),
            access_key_hint: self.access_key_hint.clone(),
            region_count: self.regions.len(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("access_key_hint", &self.access_key_hint)
            .field("home_region", &self.provider.home_region())
            .field("regions", &self.regions)
            .finish()
    }
}

/// What templates may know about the session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub account_id: String,
    pub access_key_hint: String,
    pub region_count: usize,
}
