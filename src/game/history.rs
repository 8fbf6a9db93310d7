use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::types::Roll;

/// Roll history of the current play-through.
///
/// Cloning yields another handle onto the same history, so a reader on
/// another thread can poll it while the owning `Game` keeps rolling. Every
/// append, clear and snapshot happens under one mutex.
#[derive(Debug, Clone, Default)]
pub struct RollHistory {
    rolls: Arc<Mutex<Vec<Roll>>>,
}

impl RollHistory {
    pub fn snapshot(&self) -> Vec<Roll> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub(crate) fn push(&self, roll: Roll) {
        self.lock().push(roll);
    }

    pub(crate) fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the guard cannot leave a half-written Roll behind,
    // so a poisoned lock still holds a consistent Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<Roll>> {
        self.rolls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
