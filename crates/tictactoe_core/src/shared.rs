//! Thread-safe handle to a single session.

use super::action::MoveError;
use super::snapshot::Snapshot;
use super::GameSession;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// A session behind one mutex.
///
/// Each call holds the lock for the whole operation, so no caller sees a
/// half-applied move. Clones share the same session.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wraps a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self::from_session(GameSession::new())
    }

    /// Wraps an existing session.
    pub fn from_session(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            // A panicking holder may have left a move half applied.
            warn!("Session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// See [`GameSession::apply_move`].
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<(), MoveError> {
        self.lock().apply_move(index)
    }

    /// See [`GameSession::restart`].
    #[instrument(skip(self))]
    pub fn restart(&self) {
        self.lock().restart();
    }

    /// See [`GameSession::reset`].
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Snapshot taken under the lock.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.lock())
    }
}
