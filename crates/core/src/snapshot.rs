//! Plain-data copy of everything a renderer may query.

use crate::game_state::GameState;
use crate::types::{PieceKind, Position};

/// The falling piece, resolved to absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub tiles: [Position; 4],
    /// Where the tiles would land on a hard drop.
    pub ghost: [Position; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: u16,
    pub columns: u16,
    /// Row-major cell ids, `0` for empty.
    pub cells: Vec<u8>,
    /// `None` once the game is over.
    pub active: Option<ActiveSnapshot>,
    pub drop_distance: u32,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
            active: None,
            drop_distance: 0,
            next: PieceKind::I,
            hold: None,
            can_hold: true,
            score: 0,
            game_over: false,
        }
    }
}

impl GameSnapshot {
    /// Cell id at `(row, column)`, `0` when out of range.
    pub fn cell(&self, row: u16, column: u16) -> u8 {
        if row >= self.rows || column >= self.columns {
            return 0;
        }
        self.cells[row as usize * self.columns as usize + column as usize]
    }
}

impl GameState {
    /// Fill `out` with the current state, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.grid();
        out.rows = grid.rows();
        out.columns = grid.columns();
        out.cells.clear();
        out.cells.extend_from_slice(grid.cells());

        out.active = if self.game_over() {
            None
        } else {
            let mut tiles = [Position::default(); 4];
            for (slot, tile) in tiles.iter_mut().zip(self.current().tile_positions()) {
                *slot = tile;
            }
            Some(ActiveSnapshot {
                kind: self.current().kind(),
                tiles,
                ghost: self.ghost_positions(),
            })
        };
        out.drop_distance = self.block_drop_distance();
        out.next = self.next_kind();
        out.hold = self.held_kind();
        out.can_hold = self.can_hold();
        out.score = self.score();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::with_seed(42);
        let snap = state.snapshot();

        assert_eq!(snap.rows, state.grid().rows());
        assert_eq!(snap.columns, state.grid().columns());
        assert_eq!(snap.cells, state.grid().cells());
        assert_eq!(snap.next, state.next_kind());
        assert_eq!(snap.hold, None);
        assert!(snap.can_hold);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);

        let active = snap.active.unwrap();
        assert_eq!(active.kind, state.current().kind());
        let tiles: Vec<_> = state.current().tile_positions().collect();
        assert_eq!(active.tiles.to_vec(), tiles);
        assert_eq!(active.ghost, state.ghost_positions());
        assert_eq!(snap.drop_distance, state.block_drop_distance());
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let state = GameState::with_seed(1);
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        let capacity = snap.cells.capacity();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.cells.capacity(), capacity);
        assert_eq!(snap.cells.len(), 22 * 10);
    }

    #[test]
    fn test_cell_out_of_range_reads_empty() {
        let snap = GameState::with_seed(1).snapshot();
        assert_eq!(snap.cell(100, 0), 0);
        assert_eq!(snap.cell(0, 100), 0);
    }
}
