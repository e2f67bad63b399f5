//! Gravity timing.
//!
//! The engine has no timer of its own; drivers call
//! [`crate::GameState::move_block_down`] every [`gravity_delay_ms`]
//! milliseconds.

use crate::types::{DELAY_DECREASE_MS, MAX_DELAY_MS, MIN_DELAY_MS};

/// Delay between gravity ticks for the given score.
///
/// Starts at `MAX_DELAY_MS` and shrinks linearly with score down to
/// `MIN_DELAY_MS`.
pub fn gravity_delay_ms(score: u32) -> u32 {
    MAX_DELAY_MS
        .saturating_sub(score.saturating_mul(DELAY_DECREASE_MS))
        .max(MIN_DELAY_MS)
}
