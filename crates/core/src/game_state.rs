//! Game state module - the rule engine
//!
//! Ties the grid, the current piece, the queue and the hold slot together.
//! Every command tries its transform on the current piece and reverts it if
//! the piece no longer fits, so after any public call the current piece sits
//! on empty, in-bounds cells (unless the game is over).

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::types::{GameAction, PieceKind, Position, HIDDEN_ROWS};

/// How many rows a newly current piece may settle into the visible field.
const SPAWN_NUDGE_ROWS: usize = 2;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    current: Piece,
    grid: Grid,
    queue: PieceQueue,
    held: Option<Piece>,
    can_hold: bool,
    game_over: bool,
    score: u32,
}

impl GameState {
    /// New default-sized game seeded from the OS RNG.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// New default-sized game with a fixed queue seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Grid::default(), PieceQueue::new(seed))
    }

    /// New game from a validated configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            Grid::new(config.rows, config.columns),
            PieceQueue::new(config.seed),
        ))
    }

    /// Start a game on a pre-filled grid.
    ///
    /// If the first piece has no room to spawn the game starts over.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        Self::from_parts(grid, PieceQueue::new(seed))
    }

    fn from_parts(grid: Grid, mut queue: PieceQueue) -> Self {
        let current = queue.take_and_advance();
        let mut state = Self {
            current,
            grid,
            queue,
            held: None,
            can_hold: true,
            game_over: false,
            score: 0,
        };
        state.set_current(current);
        if !state.fits() {
            info!("no room for the first piece");
            state.game_over = true;
        }
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held.map(|piece| piece.kind())
    }

    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek_next()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Total rows cleared so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Make `piece` current: reset it, then let it settle up to two rows
    /// while it still fits.
    fn set_current(&mut self, mut piece: Piece) {
        piece.reset();
        self.current = piece;

        for _ in 0..SPAWN_NUDGE_ROWS {
            self.current.move_by(1, 0);
            if !self.fits() {
                self.current.move_by(-1, 0);
            }
        }
    }

    fn spawn_next(&mut self) {
        let piece = self.queue.take_and_advance();
        self.set_current(piece);
        self.can_hold = true;
    }

    /// Every tile of the current piece is on an empty, in-bounds cell.
    fn fits(&self) -> bool {
        self.current
            .tile_positions()
            .all(|p| self.grid.is_empty(p.row, p.column))
    }

    /// Move by `(delta_row, delta_column)`, reverting if it does not fit.
    fn try_move(&mut self, delta_row: i32, delta_column: i32) -> bool {
        self.current.move_by(delta_row, delta_column);
        if self.fits() {
            return true;
        }
        self.current.move_by(-delta_row, -delta_column);
        false
    }

    pub fn rotate_block_clockwise(&mut self) {
        if self.game_over {
            return;
        }
        self.current.rotate_clockwise();
        if !self.fits() {
            self.current.rotate_counter_clockwise();
        }
    }

    pub fn rotate_block_counter_clockwise(&mut self) {
        if self.game_over {
            return;
        }
        self.current.rotate_counter_clockwise();
        if !self.fits() {
            self.current.rotate_clockwise();
        }
    }

    pub fn move_block_left(&mut self) {
        if self.game_over {
            return;
        }
        self.try_move(0, -1);
    }

    pub fn move_block_right(&mut self) {
        if self.game_over {
            return;
        }
        self.try_move(0, 1);
    }

    /// Drop one row; a piece that cannot move down locks in place.
    pub fn move_block_down(&mut self) {
        if self.game_over {
            return;
        }
        if !self.try_move(1, 0) {
            self.place_block();
        }
    }

    /// Swap the current piece with the hold slot, once per spawned piece.
    pub fn hold_block(&mut self) {
        if self.game_over || !self.can_hold {
            return;
        }

        let current = self.current;
        match self.held.replace(current) {
            None => self.spawn_next(),
            Some(recalled) => self.set_current(recalled),
        }

        debug!(held = ?current.kind(), current = ?self.current.kind(), "hold");
        self.can_hold = false;
    }

    fn tile_drop_distance(&self, tile: Position) -> i32 {
        let mut drop = 0;
        while self.grid.is_empty(tile.row + drop + 1, tile.column) {
            drop += 1;
        }
        drop
    }

    /// Rows the current piece can fall before it lands (ghost offset).
    pub fn block_drop_distance(&self) -> u32 {
        self.current
            .tile_positions()
            .map(|tile| self.tile_drop_distance(tile))
            .fold(self.grid.rows() as i32, i32::min)
            .max(0) as u32
    }

    /// Cells the current piece would occupy after a hard drop.
    pub fn ghost_positions(&self) -> [Position; 4] {
        let drop = self.block_drop_distance() as i32;
        let mut out = [Position::default(); 4];
        for (slot, tile) in out.iter_mut().zip(self.current.tile_positions()) {
            *slot = tile.offset_by(Position::new(drop, 0));
        }
        out
    }

    /// Drop to the landing row and lock.
    pub fn hard_drop_block(&mut self) {
        if self.game_over {
            return;
        }
        let drop = self.block_drop_distance() as i32;
        self.current.move_by(drop, 0);
        self.place_block();
    }

    /// Write the current piece into the grid, clear rows, then either end the
    /// game or spawn the next piece.
    fn place_block(&mut self) {
        let id = self.current.id();
        for tile in self.current.tile_positions() {
            self.grid.set_cell(tile.row, tile.column, id);
        }

        let cleared = self.grid.clear_full_rows();
        self.score += cleared;
        debug!(kind = ?self.current.kind(), cleared, score = self.score, "piece locked");

        if self.buffer_occupied() {
            self.game_over = true;
            info!(score = self.score, "game over");
        } else {
            self.spawn_next();
        }
    }

    fn buffer_occupied(&self) -> bool {
        (0..HIDDEN_ROWS.min(self.grid.rows())).any(|row| !self.grid.is_row_empty(row))
    }

    /// Apply an input-layer command.
    ///
    /// `Restart` is left to the driver, which owns game construction.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_block_left(),
            GameAction::MoveRight => self.move_block_right(),
            GameAction::SoftDrop => self.move_block_down(),
            GameAction::HardDrop => self.hard_drop_block(),
            GameAction::RotateCw => self.rotate_block_clockwise(),
            GameAction::RotateCcw => self.rotate_block_counter_clockwise(),
            GameAction::Hold => self.hold_block(),
            GameAction::Restart => {}
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

    fn assert_current_fits(state: &GameState) {
        for tile in state.current.tile_positions() {
            assert!(
                state.grid.is_empty(tile.row, tile.column),
                "tile {:?} is blocked",
                tile
            );
        }
    }

    fn state_with_current(kind: PieceKind) -> GameState {
        let mut state = GameState::with_seed(1);
        state.set_current(Piece::new(kind));
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(12345);

        assert_eq!(state.grid.rows(), DEFAULT_ROWS);
        assert_eq!(state.grid.columns(), DEFAULT_COLUMNS);
        assert_eq!(state.score, 0);
        assert!(state.held.is_none());
        assert!(state.can_hold);
        assert!(!state.game_over);
        assert_current_fits(&state);
    }

    #[test]
    fn test_spawn_settles_two_rows() {
        let state = state_with_current(PieceKind::T);
        assert_eq!(state.current.offset(), Position::new(2, 3));

        let state = state_with_current(PieceKind::I);
        assert_eq!(state.current.offset(), Position::new(1, 3));
    }

    #[test]
    fn test_spawn_settle_stops_at_obstacle() {
        let mut state = GameState::with_seed(1);
        // Block the row the T piece's lower tiles would settle into.
        state.grid.set_cell(3, 4, 1);
        state.set_current(Piece::new(PieceKind::T));
        assert_eq!(state.current.offset(), Position::new(1, 3));
        assert_current_fits(&state);
    }

    #[test]
    fn test_try_move() {
        let mut state = state_with_current(PieceKind::T);
        let start = state.current.offset();

        assert!(state.try_move(0, 1));
        assert_eq!(state.current.offset(), Position::new(start.row, start.column + 1));

        assert!(state.try_move(0, -1));
        assert_eq!(state.current.offset(), start);
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut state = state_with_current(PieceKind::O);
        for _ in 0..20 {
            state.move_block_left();
        }
        let min_col = state.current.tile_positions().map(|p| p.column).min();
        assert_eq!(min_col, Some(0));
        assert_current_fits(&state);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut state = state_with_current(PieceKind::I);
        for _ in 0..20 {
            state.move_block_right();
        }
        let max_col = state.current.tile_positions().map(|p| p.column).max();
        assert_eq!(max_col, Some(DEFAULT_COLUMNS as i32 - 1));
    }

    #[test]
    fn test_rotation_reverts_when_blocked() {
        let mut state = state_with_current(PieceKind::I);
        // I at rotation 0 sits on row 2; rotation 1 needs column 5 on rows 1..=4.
        state.grid.set_cell(4, 5, 7);
        state.rotate_block_clockwise();
        assert_eq!(state.current.rotation_state(), 0);
        assert_current_fits(&state);
    }

    #[test]
    fn test_rotation_against_wall_has_no_kick() {
        let mut state = state_with_current(PieceKind::I);
        state.rotate_block_clockwise();
        assert_eq!(state.current.rotation_state(), 1);
        for _ in 0..10 {
            state.move_block_right();
        }
        let offset = state.current.offset();
        // Vertical I hugging the right wall cannot turn horizontal.
        state.rotate_block_clockwise();
        assert_eq!(state.current.rotation_state(), 1);
        assert_eq!(state.current.offset(), offset);
    }

    #[test]
    fn test_o_rotation_is_noop() {
        let mut state = state_with_current(PieceKind::O);
        let before = state.current;
        state.rotate_block_clockwise();
        assert_eq!(state.current, before);
        state.rotate_block_counter_clockwise();
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut state = state_with_current(PieceKind::O);
        let distance = state.block_drop_distance();
        for _ in 0..distance {
            state.move_block_down();
        }
        assert!(state.grid.is_row_empty(DEFAULT_ROWS - 1));

        state.move_block_down();
        assert!(!state.grid.is_row_empty(DEFAULT_ROWS - 1));
        assert_eq!(state.grid.cell(DEFAULT_ROWS as i32 - 1, 4), PieceKind::O.id());
        assert_current_fits(&state);
    }

    #[test]
    fn test_drop_distance_on_empty_grid() {
        let state = state_with_current(PieceKind::O);
        // O occupies rows 2..=3, floor is row 21.
        assert_eq!(state.block_drop_distance(), 18);
    }

    #[test]
    fn test_drop_distance_uses_lowest_landing_tile() {
        let mut state = state_with_current(PieceKind::T);
        // T rotation 0 at offset (2, 3): tiles (2,4) (3,3) (3,4) (3,5).
        state.grid.set_cell(10, 5, 2);
        assert_eq!(state.block_drop_distance(), 6);
    }

    #[test]
    fn test_ghost_positions_follow_drop_distance() {
        let state = state_with_current(PieceKind::O);
        let ghost = state.ghost_positions();
        assert_eq!(
            ghost,
            [
                Position::new(20, 4),
                Position::new(20, 5),
                Position::new(21, 4),
                Position::new(21, 5)
            ]
        );
    }

    #[test]
    fn test_hard_drop_locks_and_spawns() {
        let mut state = state_with_current(PieceKind::O);
        let next = state.next_kind();

        state.hard_drop_block();

        assert_eq!(state.grid.cell(21, 4), PieceKind::O.id());
        assert_eq!(state.grid.cell(21, 5), PieceKind::O.id());
        assert_eq!(state.grid.cell(20, 4), PieceKind::O.id());
        assert_eq!(state.current.kind(), next);
        assert!(state.can_hold);
    }

    #[test]
    fn test_lock_clears_lines_and_scores() {
        let mut state = state_with_current(PieceKind::I);
        for col in 0..DEFAULT_COLUMNS as i32 {
            if !(3..=6).contains(&col) {
                state.grid.set_cell(21, col, 5);
            }
        }

        state.hard_drop_block();

        assert_eq!(state.score, 1);
        assert!(state.grid.is_row_empty(21));
    }

    #[test]
    fn test_hold_into_empty_slot_spawns_next() {
        let mut state = state_with_current(PieceKind::T);
        let next = state.next_kind();

        state.hold_block();

        assert_eq!(state.held_kind(), Some(PieceKind::T));
        assert_eq!(state.current.kind(), next);
        assert!(!state.can_hold);
    }

    #[test]
    fn test_hold_blocked_until_lock() {
        let mut state = state_with_current(PieceKind::T);
        state.hold_block();
        let current = state.current;
        let held = state.held;

        state.hold_block();
        assert_eq!(state.current, current);
        assert_eq!(state.held, held);

        state.hard_drop_block();
        assert!(state.can_hold);
    }

    #[test]
    fn test_hold_swap_resets_recalled_piece() {
        let mut state = state_with_current(PieceKind::T);
        state.rotate_block_clockwise();
        state.move_block_left();
        state.hold_block();
        state.hard_drop_block();

        state.hold_block();
        assert_eq!(state.current.kind(), PieceKind::T);
        assert_eq!(state.current.rotation_state(), 0);
        assert_eq!(state.current.offset(), Position::new(2, 3));
        assert!(!state.can_hold);
    }

    #[test]
    fn test_game_over_when_buffer_row_survives_lock() {
        let mut state = state_with_current(PieceKind::O);
        state.grid.set_cell(1, 0, 3);

        state.hard_drop_block();

        assert!(state.game_over);
    }

    #[test]
    fn test_commands_ignored_after_game_over() {
        let mut state = state_with_current(PieceKind::O);
        state.grid.set_cell(0, 9, 3);
        state.hard_drop_block();
        assert!(state.game_over);

        let grid = state.grid.clone();
        let current = state.current;
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Hold,
        ] {
            state.apply_action(action);
        }
        assert_eq!(state.grid, grid);
        assert_eq!(state.current, current);
        assert!(state.held.is_none());
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = state_with_current(PieceKind::T);
        let start = state.current.offset();

        state.apply_action(GameAction::MoveRight);
        assert_eq!(state.current.offset().column, start.column + 1);

        state.apply_action(GameAction::SoftDrop);
        assert_eq!(state.current.offset().row, start.row + 1);

        state.apply_action(GameAction::RotateCcw);
        assert_eq!(state.current.rotation_state(), 3);

        state.apply_action(GameAction::Hold);
        assert_eq!(state.held_kind(), Some(PieceKind::T));
    }

    #[test]
    fn test_with_grid_blocked_spawn_is_game_over() {
        let mut grid = Grid::default();
        for row in 0..DEFAULT_ROWS as i32 {
            for col in 0..DEFAULT_COLUMNS as i32 {
                grid.set_cell(row, col, 1);
            }
        }
        let state = GameState::with_grid(grid, 5);
        assert!(state.game_over);
    }

    #[test]
    fn test_with_config_rejects_tiny_grid() {
        let config = GameConfig {
            rows: 2,
            columns: 10,
            seed: 0,
        };
        assert!(GameState::with_config(config).is_err());
    }
}
