//! Server-side session records.
//!
//! The cookie only carries a signed reference to a record here; deleting
//! the record is what makes logout stick.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A live login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Storage for session records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord);

    /// Live record for `id`. Expired records are dropped and reported missing.
    fn get(&self, id: Uuid) -> Option<SessionRecord>;

    /// Remove a record, returning whether one existed.
    fn remove(&self, id: Uuid) -> bool;

    /// Drop every expired record, returning how many were removed.
    fn purge_expired(&self) -> usize;
}

/// Process-local session store
#[derive(Default)]
pub struct InMemorySessionStore {
    records: RwLock<HashMap<Uuid, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) {
        self.records.write().insert(record.id, record);
    }

    fn get(&self, id: Uuid) -> Option<SessionRecord> {
        let now = Utc::now();
        let record = self.records.read().get(&id).cloned()?;
        if record.is_expired(now) {
            self.records.write().remove(&id);
            return None;
        }
        Some(record)
    }

    fn remove(&self, id: Uuid) -> bool {
        self.records.write().remove(&id).is_some()
    }

    fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }
}
