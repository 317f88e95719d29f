//! Game configuration and input validation
//!
//! A session collects its settings into one [`GameConfig`] before any
//! board exists; there is no ambient mutable state. Each field has a
//! boolean validator so the prompting layer can re-ask until the value
//! is in range rather than handling an error.

use serde::{Deserialize, Serialize};

/// The most common version of the game runs on 6 rows by 7 columns.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// The smallest and largest supported board.
pub const MIN_ROWS: usize = 4;
pub const MAX_ROWS: usize = 10;
pub const MIN_COLS: usize = 4;
pub const MAX_COLS: usize = 20;

/// The shortest winning run; the longest is `max(rows, cols)`.
pub const MIN_WIN_LENGTH: usize = 4;

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Run length needed to win ("X" in Connect X)
    pub win_length: usize,
    /// 1 = against the engine, 2 = human vs human
    pub players: u8,
    /// Search depth level, 1..=3 (only meaningful for 1-player games)
    pub difficulty: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
            players: 2,
            difficulty: 1,
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn rows_valid(rows: usize) -> bool {
        (MIN_ROWS..=MAX_ROWS).contains(&rows)
    }

    #[inline]
    pub fn cols_valid(cols: usize) -> bool {
        (MIN_COLS..=MAX_COLS).contains(&cols)
    }

    /// The game can only be won when the run fits the larger dimension.
    #[inline]
    pub fn win_length_valid(&self, win_length: usize) -> bool {
        win_length >= MIN_WIN_LENGTH && win_length <= self.rows.max(self.cols)
    }

    #[inline]
    pub fn players_valid(players: u8) -> bool {
        players == 1 || players == 2
    }

    #[inline]
    pub fn difficulty_valid(level: u8) -> bool {
        (1..=3).contains(&level)
    }

    /// Check every field at once (used when restoring a saved session,
    /// where values arrive from a file instead of a prompt).
    #[must_use]
    pub fn validate(&self) -> bool {
        Self::rows_valid(self.rows)
            && Self::cols_valid(self.cols)
            && self.win_length_valid(self.win_length)
            && Self::players_valid(self.players)
            && (self.players == 2 || Self::difficulty_valid(self.difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate(), "default config should pass validation");
    }

    #[test]
    fn test_rows_bounds() {
        assert!(!GameConfig::rows_valid(3));
        assert!(GameConfig::rows_valid(4));
        assert!(GameConfig::rows_valid(10));
        assert!(!GameConfig::rows_valid(11));
    }

    #[test]
    fn test_cols_bounds() {
        assert!(!GameConfig::cols_valid(3));
        assert!(GameConfig::cols_valid(4));
        assert!(GameConfig::cols_valid(20));
        assert!(!GameConfig::cols_valid(21));
    }

    #[test]
    fn test_win_length_tracks_larger_dimension() {
        let config = GameConfig { rows: 5, cols: 9, ..GameConfig::default() };
        assert!(config.win_length_valid(4));
        assert!(config.win_length_valid(9));
        assert!(!config.win_length_valid(10), "run cannot exceed max(rows, cols)");
        assert!(!config.win_length_valid(3));
    }

    #[test]
    fn test_players_and_difficulty() {
        assert!(GameConfig::players_valid(1));
        assert!(GameConfig::players_valid(2));
        assert!(!GameConfig::players_valid(0));
        assert!(!GameConfig::players_valid(3));

        assert!(!GameConfig::difficulty_valid(0));
        assert!(GameConfig::difficulty_valid(1));
        assert!(GameConfig::difficulty_valid(3));
        assert!(!GameConfig::difficulty_valid(4));
    }

    #[test]
    fn test_two_player_config_ignores_difficulty() {
        let config = GameConfig { players: 2, difficulty: 0, ..GameConfig::default() };
        assert!(config.validate(), "difficulty is not checked for 2-player games");
    }
}
