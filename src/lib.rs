//! Blocktris (workspace facade crate).
//!
//! Re-exports the engine, input mapping, terminal renderer, and shared types
//! from the crates under `crates/` as `blocktris::{core,input,term,types}`.

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
