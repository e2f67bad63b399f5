//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! renders into a plain framebuffer that is then flushed to the terminal.
//!
//! - `GameView` turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure)
//! - `TerminalRenderer` writes framebuffers to stdout via crossterm
//! - Board cells are drawn 2 characters wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{
    changed_runs, encode_diff_into, encode_full_into, ChangedRuns, Run, TerminalRenderer,
};
