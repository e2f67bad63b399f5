//! Command-line interface for the terminal game.

use std::path::PathBuf;

use clap::Parser;

use blocktris::core::GameConfig;
use blocktris::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Blocktris - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "blocktris")]
#[command(about = "Falling-block puzzle game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the piece sequence. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid height, including the two hidden spawn rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: u16,

    /// Grid width
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u16,

    /// File that receives log output (the terminal is busy drawing the game)
    #[arg(long, default_value = "blocktris.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Config for a new game. Without `--seed` every call picks a fresh seed.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            columns: self.columns,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}
