//! Per-user state that survives between two button presses
//!
//! The only thing remembered is which image messages the last render sent,
//! so they can be removed before the next one. Everything else is carried
//! in the callback token.

use std::hash::Hash;

use dashmap::DashMap;

use crate::messenger::MessageRef;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    images: Vec<MessageRef>,
}

impl SessionState {
    pub fn images(&self) -> &[MessageRef] {
        &self.images
    }

    pub fn record_image(&mut self, message: MessageRef) {
        self.images.push(message);
    }

    /// Hands over every tracked image, leaving the session empty.
    pub fn take_images(&mut self) -> Vec<MessageRef> {
        std::mem::take(&mut self.images)
    }
}

/// Sessions keyed by user.
///
/// Callers `take` a state before an async render and `put` it back after;
/// no map guard is ever held across an `.await`.
#[derive(Debug)]
pub struct SessionStore<K: Eq + Hash> {
    sessions: DashMap<K, SessionState>,
}

impl<K: Eq + Hash> Default for SessionStore<K> {
    fn default() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl<K: Eq + Hash> SessionStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self, user: &K) -> SessionState {
        self.sessions.remove(user).map(|(_, state)| state).unwrap_or_default()
    }

    /// Stores `state`; empty states are dropped instead of kept around.
    pub fn put(&self, user: K, state: SessionState) {
        if state.images.is_empty() {
            self.sessions.remove(&user);
        } else {
            self.sessions.insert(user, state);
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
