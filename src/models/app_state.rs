use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::api::Connector;
use crate::models::Session;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    pub connector: Arc<dyn Connector>,
    pub public_base_url: String,
    pub protected_instances: Arc<HashSet<String>>,
    pub custom_css: Option<String>,
    /// Sessions untouched for this long are dropped with their credentials.
    pub session_idle_timeout: Duration,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            flash_store: Arc::new(Mutex::new(HashMap::new())),
            connector,
            public_base_url: crate::config::DEFAULT_PUBLIC_BASE_URL.to_string(),
            protected_instances: Arc::new(HashSet::new()),
            custom_css: None,
            session_idle_timeout: Duration::from_secs(crate::config::DEFAULT_SESSION_IDLE_MINUTES * 60),
        }
    }

    pub fn is_instance_protected(&self, id: &str) -> bool {
        self.protected_instances.contains(id)
    }

    /// Live session for `sid`. Touching it resets the idle clock; an expired
    /// one is removed instead.
    pub fn session(&self, sid: &str) -> Option<Session> {
        let mut sessions = self.sessions.lock().ok()?;
        let session = sessions.get_mut(sid)?;
        if session.last_seen.elapsed() >= self.session_idle_timeout {
            sessions.remove(sid);
            drop(sessions);
            self.drop_flashes(sid);
            tracing::info!("Session expired; credentials discarded");
            return None;
        }
        session.last_seen = Instant::now();
        Some(session.clone())
    }

    /// Store a new session, replacing `previous` (the caller's old session id,
    /// if any) and pruning every idle one.
    pub fn insert_session(&self, sid: String, session: Session, previous: Option<&str>) {
        let mut expired = Vec::new();
        if let Ok(mut sessions) = self.sessions.lock() {
            if let Some(old) = previous {
                if sessions.remove(old).is_some() {
                    expired.push(old.to_string());
                }
            }
            let timeout = self.session_idle_timeout;
            sessions.retain(|id, s| {
                let keep = s.last_seen.elapsed() < timeout;
                if !keep {
                    expired.push(id.clone());
                }
                keep
            });
            sessions.insert(sid, session);
        }
        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), "Pruned stale sessions");
        }
        for id in &expired {
            self.drop_flashes(id);
        }
    }

    pub fn remove_session(&self, sid: &str) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.remove(sid);
        }
        self.drop_flashes(sid);
    }

    pub fn push_flash(&self, sid: &str, message: impl Into<String>) {
        if let Ok(mut flashes) = self.flash_store.lock() {
            flashes.entry(sid.to_string()).or_default().push(message.into());
        }
    }

    fn drop_flashes(&self, sid: &str) {
        if let Ok(mut flashes) = self.flash_store.lock() {
            flashes.remove(sid);
        }
    }
}
