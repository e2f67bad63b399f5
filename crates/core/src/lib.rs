//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game. It has no
//! dependency on terminals, input devices or timers:
//!
//! - **Deterministic**: the piece queue is seeded, so the same seed and the
//!   same commands always produce the same game
//! - **Synchronous**: every command runs to completion; gravity is the
//!   caller's job (see [`gravity_delay_ms`])
//!
//! # Module Structure
//!
//! - [`grid`]: the playing field, collision queries and row compaction
//! - [`piece`]: rotation tables, spawn offsets and the falling [`Piece`]
//! - [`queue`]: anti-repeat random piece supply
//! - [`game_state`]: the rule engine tying it all together
//! - [`snapshot`]: renderer-facing copy of the state
//! - [`config`]: grid size and seed for new games
//! - [`gravity`]: score-dependent tick delay
//!
//! # Game Rules
//!
//! - **Random supply**: each piece is drawn uniformly, never the same kind
//!   twice in a row
//! - **No wall kicks**: a rotation that does not fit is simply undone
//! - **Hold**: once per spawned piece; a recalled piece returns to its spawn
//!   pose
//! - **Scoring**: one point per cleared row
//! - **Game over**: a lock that leaves anything in the two hidden rows
//!
//! # Example
//!
//! ```
//! use blocktris_core::GameState;
//! use blocktris_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_over());
//! assert!(game.grid().cells().iter().any(|&c| c != 0));
//! ```

pub mod config;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod piece;
pub mod queue;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::GameState;
pub use gravity::gravity_delay_ms;
pub use grid::{Grid, GridError};
pub use piece::{layouts, spawn_offset, Layout, Piece};
pub use queue::PieceQueue;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
