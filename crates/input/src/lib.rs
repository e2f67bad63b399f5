//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Keys are
//! acted on when pressed; terminal auto-repeat supplies held-key repeats.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, should_quit};
