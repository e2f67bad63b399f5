//! Game configuration - grid size and RNG seed for a new game.

use thiserror::Error;

use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS,
};

/// Rejected [`GameConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid needs at least {min} rows, got {got}")]
    TooFewRows { got: u16, min: u16 },
    #[error("grid needs at least {min} columns, got {got}")]
    TooFewColumns { got: u16, min: u16 },
    #[error("grid allows at most {max} rows, got {got}")]
    TooManyRows { got: u16, max: u16 },
    #[error("grid allows at most {max} columns, got {got}")]
    TooManyColumns { got: u16, max: u16 },
}

/// Parameters for [`crate::GameState::with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub columns: u16,
    pub seed: u64,
}

impl GameConfig {
    /// Check the grid fits every spawn pose and stays within the size caps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS {
            return Err(ConfigError::TooFewRows {
                got: self.rows,
                min: MIN_ROWS,
            });
        }
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooFewColumns {
                got: self.columns,
                min: MIN_COLUMNS,
            });
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                got: self.rows,
                max: MAX_ROWS,
            });
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns {
                got: self.columns,
                max: MAX_COLUMNS,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_small_grids() {
        let short = GameConfig {
            rows: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            short.validate(),
            Err(ConfigError::TooFewRows { got: 3, min: 4 })
        );

        let narrow = GameConfig {
            columns: 6,
            ..GameConfig::default()
        };
        assert_eq!(
            narrow.validate(),
            Err(ConfigError::TooFewColumns { got: 6, min: 7 })
        );
    }

    #[test]
    fn test_rejects_oversized_grids() {
        let wide = GameConfig {
            columns: 40_000,
            ..GameConfig::default()
        };
        assert_eq!(
            wide.validate(),
            Err(ConfigError::TooManyColumns {
                got: 40_000,
                max: MAX_COLUMNS
            })
        );

        let huge = GameConfig {
            rows: u16::MAX,
            columns: u16::MAX,
            seed: 0,
        };
        assert_eq!(
            huge.validate(),
            Err(ConfigError::TooManyRows {
                got: u16::MAX,
                max: MAX_ROWS
            })
        );

        let largest = GameConfig {
            rows: MAX_ROWS,
            columns: MAX_COLUMNS,
            seed: 0,
        };
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TooFewColumns { got: 5, min: 7 };
        assert_eq!(err.to_string(), "grid needs at least 7 columns, got 5");
        let err = ConfigError::TooManyRows { got: 500, max: 200 };
        assert_eq!(err.to_string(), "grid allows at most 200 rows, got 500");
    }
}
