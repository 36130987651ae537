//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s and driver
//! commands, and buffers intents between ticks in a bounded [`IntentQueue`].

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_intent, should_quit, KeyCommand};
pub use queue::{IntentQueue, MAX_INTENTS_PER_TICK};
