// src/session.rs
//! In-memory session store. One `CvData` per session, created with
//! empty defaults, replaced wholesale on every edit and dropped on
//! delete. Nothing is persisted.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::types::CvData;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, CvData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with an empty record.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, CvData::default());
        info!("Created CV session {}", id);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<CvData> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Apply an edit as an atomic whole-record replacement. Returns the
    /// updated record, or `None` when the session does not exist.
    pub async fn update<F>(&self, id: Uuid, edit: F) -> Option<CvData>
    where
        F: FnOnce(&CvData) -> CvData,
    {
        let mut sessions = self.sessions.write().await;
        let current = sessions.get(&id)?;
        let next = edit(current);
        sessions.insert(id, next.clone());
        Some(next)
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Discarded CV session {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::experience;

    #[tokio::test]
    async fn create_get_delete() {
        let store = SessionStore::new();
        let id = store.create().await;
        assert_eq!(store.get(id).await, Some(CvData::default()));
        assert!(store.delete(id).await);
        assert_eq!(store.get(id).await, None);
        assert!(!store.delete(id).await);
    }

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let store = SessionStore::new();
        let id = store.create().await;

        let updated = store
            .update(id, |cv| {
                let mut next = cv.clone();
                next.experience = experience::add(&cv.experience);
                next
            })
            .await
            .unwrap();

        assert_eq!(updated.experience.len(), 1);
        assert_eq!(store.get(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.update(Uuid::new_v4(), |cv| cv.clone()).await.is_none());
    }
}
