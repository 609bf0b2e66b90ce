//! In-memory per-session conversation storage
//!
//! Each session exclusively owns its `ConversationState`; the store lock
//! is only held for synchronous state updates, never across an await.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use healthbot_core::{ConversationState, Turn};

/// Shared session store (cheap to clone)
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, ConversationState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session's state, creating the session on
    /// first use.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut ConversationState) -> R) -> R {
        let mut sessions = self.inner.lock().expect("session store lock poisoned");
        f(sessions.entry(id).or_default())
    }

    /// Snapshot the transcript of an existing session.
    pub fn transcript(&self, id: Uuid) -> Option<Vec<Turn>> {
        let sessions = self.inner.lock().expect("session store lock poisoned");
        sessions.get(&id).map(|s| s.transcript().to_vec())
    }

    /// Discard a session entirely. Returns false if it never existed.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut sessions = self.inner.lock().expect("session store lock poisoned");
        sessions.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_created_on_first_use() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        store.with_session(id, |state| {
            state.push_turn("fever".to_string(), "reply".to_string());
        });

        let turns = store.transcript(id).expect("session should exist");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].user, "fever");
    }

    #[test]
    fn unknown_session_has_no_transcript() {
        let store = SessionStore::new();
        assert!(store.transcript(Uuid::new_v4()).is_none());
    }

    #[test]
    fn remove_discards_state() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        store.with_session(id, |_| {});
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.transcript(id).is_none());
    }
}
