//! In-memory session registry.
//!
//! Sessions live only as long as the process, matching the widget's
//! mount-lifetime state. Handlers take short write locks; the typing
//! delay between computing and delivering a reply happens outside any
//! lock so concurrent input can supersede a pending reply.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::flow::FlowSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Registry of live flow sessions, keyed by session id.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, FlowSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: FlowSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session);
    }

    /// Runs a closure against a session under the write lock.
    pub async fn modify<T, F>(&self, id: &SessionId, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut FlowSession) -> Result<T, DomainError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        f(session)
    }

    /// Runs a closure against a session under the read lock.
    pub async fn read<T, F>(&self, id: &SessionId, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&FlowSession) -> T,
    {
        let sessions = self.sessions.read().await;
        let session = sessions.get(id).ok_or_else(|| Self::not_found(id))?;
        Ok(f(session))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn not_found(id: &SessionId) -> DomainError {
        DomainError::new(
            ErrorCode::SessionNotFound,
            format!("no session with id {}", id),
        )
    }
}
