//! Bounded queue of intents collected between two ticks.

use arrayvec::ArrayVec;

use crate::types::Intent;

/// Most intents delivered in a single tick
pub const MAX_INTENTS_PER_TICK: usize = 32;

/// Fixed-capacity intent buffer. No allocation after construction.
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    intents: ArrayVec<Intent, MAX_INTENTS_PER_TICK>,
    dropped: u32,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. When full, the new intent is dropped and false is returned.
    pub fn push(&mut self, intent: Intent) -> bool {
        if self.intents.try_push(intent).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Intents in arrival order
    pub fn as_slice(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Intents dropped on overflow since the last [`IntentQueue::take_dropped`]
    pub fn take_dropped(&mut self) -> u32 {
        std::mem::take(&mut self.dropped)
    }

    /// Forget queued intents; call once they were delivered to a tick
    pub fn clear(&mut self) {
        self.intents.clear();
    }
}
