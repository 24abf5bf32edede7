//! Application state shared across all handlers.

use chrono::{DateTime, Utc};
use eh_advisor::{Advisor, ChatSession};
use eh_core::{EcoHomeConfig, EhError, Profile, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// One advisor conversation: the frozen profile and its transcript.
#[derive(Debug)]
pub struct SessionEntry {
    pub id: String,
    pub profile: RwLock<Profile>,
    pub chat: Mutex<ChatSession>,
    pub created_at: DateTime<Utc>,
}

impl SessionEntry {
    pub fn profile(&self) -> Profile {
        self.profile.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn transcript(&self) -> ChatSession {
        self.chat.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Fresh profile and transcript; replies still pending are discarded.
    pub fn restart(&self, profile: Profile) {
        *self.profile.write().unwrap_or_else(PoisonError::into_inner) = profile;
        self.chat.lock().unwrap_or_else(PoisonError::into_inner).restart();
    }
}

/// In-memory session store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Arc<SessionEntry>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, profile: Profile) -> Arc<SessionEntry> {
        let entry = Arc::new(SessionEntry {
            id: uuid::Uuid::new_v4().to_string(),
            profile: RwLock::new(profile),
            chat: Mutex::new(ChatSession::new()),
            created_at: Utc::now(),
        });
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entry.id.clone(), entry.clone());
        entry
    }

    pub fn get(&self, id: &str) -> Result<Arc<SessionEntry>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| EhError::SessionNotFound { id: id.to_string() })
    }

    pub fn remove(&self, id: &str) -> Option<Arc<SessionEntry>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).remove(id)
    }

    pub fn count(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub advisor: Advisor,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&EcoHomeConfig::default())
    }

    pub fn with_config(config: &EcoHomeConfig) -> Self {
        Self::with_advisor(Advisor::from_config(&config.advisor))
    }

    pub fn with_advisor(advisor: Advisor) -> Self {
        Self { sessions: SessionStore::new(), advisor, start_time: std::time::Instant::now() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
