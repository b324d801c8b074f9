use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

pub type SessionChange = Box<dyn FnOnce(&mut QuizSession) -> AppResult<()> + Send>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession>;
    /// Swap in a freshly generated session under an existing id.
    async fn replace(&self, session: QuizSession) -> AppResult<QuizSession>;
    /// Apply `change` to the stored session and return the updated copy.
    async fn update(&self, id: &Uuid, change: SessionChange) -> AppResult<QuizSession>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

/// Idle time after which an untouched session is dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 1_000;

struct StoredSession {
    session: QuizSession,
    last_touched: Instant,
}

impl StoredSession {
    fn new(session: QuizSession) -> Self {
        Self {
            session,
            last_touched: Instant::now(),
        }
    }
}

/// Process-local session store. Sessions are lost on restart.
///
/// Sessions idle for longer than `ttl` are treated as gone and swept on
/// `create`. When the store is full, the least recently touched session is
/// evicted to make room.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, StoredSession>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    fn not_found(id: &Uuid) -> AppError {
        AppError::NotFound(format!("Quiz session '{}' not found", id))
    }

    fn is_expired(&self, stored: &StoredSession) -> bool {
        stored.last_touched.elapsed() >= self.ttl
    }

    /// Live session for `id`, refreshing its idle timer.
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, StoredSession>,
        id: &Uuid,
    ) -> AppResult<&'a mut StoredSession> {
        let expired = match sessions.get(id) {
            Some(stored) => self.is_expired(stored),
            None => return Err(Self::not_found(id)),
        };
        if expired {
            sessions.remove(id);
            log::info!("Quiz session {} expired", id);
            return Err(Self::not_found(id));
        }

        let stored = sessions.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        stored.last_touched = Instant::now();
        Ok(stored)
    }

    fn evict(&self, sessions: &mut HashMap<Uuid, StoredSession>) {
        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored));
        let expired = before - sessions.len();
        if expired > 0 {
            log::info!("Dropped {} expired quiz sessions", expired);
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.last_touched)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    log::warn!("Session store full, evicted quiz session {}", id);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let mut sessions = self.sessions.write().await;
        match self.touch(&mut sessions, id) {
            Ok(stored) => Ok(Some(stored.session.clone())),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id()) {
            return Err(AppError::InternalError(format!(
                "Quiz session '{}' already exists",
                session.id()
            )));
        }
        self.evict(&mut sessions);
        sessions.insert(session.id(), StoredSession::new(session.clone()));
        Ok(session)
    }

    async fn replace(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let id = session.id();
        let stored = self.touch(&mut sessions, &id)?;
        stored.session = session.clone();
        Ok(session)
    }

    async fn update(&self, id: &Uuid, change: SessionChange) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let stored = self.touch(&mut sessions, id)?;
        change(&mut stored.session)?;
        Ok(stored.session.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}
