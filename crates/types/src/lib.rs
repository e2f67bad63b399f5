//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the renderer, and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Hidden rows**: the top 2 rows are a spawn buffer and are not drawn
//!
//! # Gravity Timing
//!
//! The driver lowers the current piece once per gravity tick. The delay
//! shrinks by `DELAY_DECREASE_MS` per point of score, clamped at
//! `MIN_DELAY_MS`:
//!
//! | Constant | Value |
//! |----------|-------|
//! | `MAX_DELAY_MS` | 1000 |
//! | `MIN_DELAY_MS` | 150 |
//! | `DELAY_DECREASE_MS` | 25 |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, Position, DEFAULT_ROWS, MAX_COLUMNS};
//!
//! let kind = PieceKind::from_id(6).unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.id(), 6);
//!
//! let p = Position::new(3, 4);
//! assert_eq!(p.row, 3);
//!
//! assert_eq!(kind.as_str(), "T");
//! assert!(MAX_COLUMNS > DEFAULT_ROWS);
//! assert_eq!(DEFAULT_ROWS, 22);
//! ```

/// Default grid height, including the hidden buffer.
pub const DEFAULT_ROWS: u16 = 22;

/// Default grid width.
pub const DEFAULT_COLUMNS: u16 = 10;

/// Number of hidden spawn-buffer rows at the top of the grid.
pub const HIDDEN_ROWS: u16 = 2;

/// Smallest grid height the spawn tables can live in.
pub const MIN_ROWS: u16 = 4;

/// Smallest grid width the spawn tables can live in.
pub const MIN_COLUMNS: u16 = 7;

/// Largest accepted grid height.
pub const MAX_ROWS: u16 = 200;

/// Largest accepted grid width.
pub const MAX_COLUMNS: u16 = 200;

/// Gravity delay at score 0.
pub const MAX_DELAY_MS: u32 = 1000;

/// Gravity delay floor.
pub const MIN_DELAY_MS: u32 = 150;

/// Gravity delay reduction per point of score.
pub const DELAY_DECREASE_MS: u32 = 25;

/// Cell value for an empty grid cell.
pub const EMPTY_CELL: u8 = 0;

/// A (row, column) pair on the grid or relative to a piece origin.
///
/// Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Component-wise sum.
    pub const fn offset_by(self, other: Position) -> Self {
        Self {
            row: self.row + other.row,
            column: self.column + other.column,
        }
    }
}

/// The seven piece variants.
///
/// Discriminants are the cell ids written into the grid when a piece locks
/// and the ids renderers use to pick a colour. `0` means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All variants in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric id (1..=7).
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a variant by cell id. Returns `None` for `0` and unknown ids.
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, for side panels and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Commands the input layer can issue against a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop piece one row, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Rotate piece clockwise
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Swap with the held piece (once per spawned piece)
    Hold,
    /// Start a new game. Handled by the driver, not the engine.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_for_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn ids_follow_renderer_contract() {
        let ids: Vec<u8> = PieceKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(EMPTY_CELL, 0);
    }

    #[test]
    fn position_offset_adds_components() {
        let p = Position::new(1, 2).offset_by(Position::new(-1, 3));
        assert_eq!(p, Position::new(0, 5));
    }

    #[test]
    fn default_board_leaves_room_for_spawn() {
        assert!(DEFAULT_ROWS >= MIN_ROWS);
        assert!(DEFAULT_COLUMNS >= MIN_COLUMNS);
        assert!(HIDDEN_ROWS < MIN_ROWS);
        assert!((MIN_ROWS..=MAX_ROWS).contains(&DEFAULT_ROWS));
        assert!((MIN_COLUMNS..=MAX_COLUMNS).contains(&DEFAULT_COLUMNS));
    }
}
