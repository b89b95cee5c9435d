//! Serialized access to a session shared between threads.
//!
//! A transport that can deliver overlapping requests for one session holds a
//! `SharedSession`. Turns queue behind a mutex; `try_submit_action` reports an
//! overlapping turn instead of waiting.

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use crate::error::{EngineError, EngineResult};
use crate::session::GameSession;

/// A cloneable handle to one game session.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wrap a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// See [`GameSession::start`].
    pub fn start(&self, player_name: Option<&str>) -> EngineResult<String> {
        Ok(self.lock()?.start(player_name))
    }

    /// See [`GameSession::reset`].
    pub fn reset(&self) -> EngineResult<String> {
        Ok(self.lock()?.reset())
    }

    /// See [`GameSession::current_text`].
    pub fn current_text(&self) -> EngineResult<String> {
        Ok(self.lock()?.current_text())
    }

    /// See [`GameSession::journal_report`].
    pub fn journal_report(&self) -> EngineResult<String> {
        Ok(self.lock()?.journal_report())
    }

    /// Play a turn, waiting for any turn already in progress.
    pub fn submit_action(&self, utterance: &str) -> EngineResult<String> {
        Ok(self.lock()?.submit_action(utterance))
    }

    /// Play a turn, or fail with [`EngineError::TurnInProgress`] if another
    /// turn holds the session.
    pub fn try_submit_action(&self, utterance: &str) -> EngineResult<String> {
        match self.inner.try_lock() {
            Ok(mut session) => Ok(session.submit_action(utterance)),
            Err(TryLockError::WouldBlock) => Err(EngineError::TurnInProgress),
            Err(TryLockError::Poisoned(_)) => Err(EngineError::SessionPoisoned),
        }
    }

    /// Run `f` against the session while holding it.
    pub fn with_session<R>(&self, f: impl FnOnce(&GameSession) -> R) -> EngineResult<R> {
        Ok(f(&*self.lock()?))
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, GameSession>> {
        self.inner.lock().map_err(|_| EngineError::SessionPoisoned)
    }
}
