//! Pieces module - shape tables and the falling piece
//!
//! Every kind carries a fixed table of rotation layouts (4 tiles each, as
//! (row, column) offsets inside the piece's bounding box) and a spawn offset.
//! Rotation just steps an index through that table; there are no wall kicks.
//! `O` has a single layout so rotating it never changes anything.

use crate::types::{PieceKind, Position};

/// Four tile offsets relative to the piece origin
pub type Layout = [Position; 4];

const fn p(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

const I_LAYOUTS: [Layout; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const J_LAYOUTS: [Layout; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
];

const L_LAYOUTS: [Layout; 4] = [
    [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

// Square never rotates.
const O_LAYOUTS: [Layout; 1] = [[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]];

const S_LAYOUTS: [Layout; 4] = [
    [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const T_LAYOUTS: [Layout; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_LAYOUTS: [Layout; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

/// Rotation layouts for a piece kind, indexed by rotation state.
pub fn layouts(kind: PieceKind) -> &'static [Layout] {
    match kind {
        PieceKind::I => &I_LAYOUTS,
        PieceKind::J => &J_LAYOUTS,
        PieceKind::L => &L_LAYOUTS,
        PieceKind::O => &O_LAYOUTS,
        PieceKind::S => &S_LAYOUTS,
        PieceKind::T => &T_LAYOUTS,
        PieceKind::Z => &Z_LAYOUTS,
    }
}

/// Where a freshly spawned or reset piece's origin sits on the grid.
///
/// `I` starts one row higher because its spawn layout occupies its second
/// row.
pub fn spawn_offset(kind: PieceKind) -> Position {
    match kind {
        PieceKind::I => p(-1, 3),
        PieceKind::O => p(0, 4),
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => p(0, 3),
    }
}

/// A piece: kind, active rotation layout and grid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation_state: usize,
    offset: Position,
}

impl Piece {
    /// Create a piece at its spawn pose.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation_state: 0,
            offset: spawn_offset(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Cell id written into the grid when this piece locks.
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    pub fn rotation_state(&self) -> usize {
        self.rotation_state
    }

    pub fn rotation_count(&self) -> usize {
        layouts(self.kind).len()
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// The active rotation layout (relative offsets).
    pub fn layout(&self) -> &'static Layout {
        &layouts(self.kind)[self.rotation_state]
    }

    /// Absolute grid cells of the active layout.
    pub fn tile_positions(&self) -> impl Iterator<Item = Position> {
        let offset = self.offset;
        self.layout().iter().map(move |tile| tile.offset_by(offset))
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation_state = (self.rotation_state + 1) % self.rotation_count();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotation_state = if self.rotation_state == 0 {
            self.rotation_count() - 1
        } else {
            self.rotation_state - 1
        };
    }

    /// Shift the piece. Legality is the caller's concern.
    pub fn move_by(&mut self, delta_row: i32, delta_column: i32) {
        self.offset = self.offset.offset_by(p(delta_row, delta_column));
    }

    /// Back to rotation 0 at the spawn offset.
    pub fn reset(&mut self) {
        self.rotation_state = 0;
        self.offset = spawn_offset(self.kind);
    }
}
