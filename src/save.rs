//! Session persistence
//!
//! The game is written to disk after every applied move so an
//! interrupted session can be resumed later, and the file is removed
//! once a game finishes. The format is a small JSON document holding the
//! settings, the side to move, and the grid as row-major character
//! strings — everything needed to rebuild the session exactly.
//!
//! Loading goes through the board's raw-write path: the grid characters
//! are written cell by cell and the per-column fill levels are
//! recomputed from the bottom run of each column, then cross-checked so
//! a hand-edited file with floating discs is rejected instead of
//! breaking the gravity invariant.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Disc};
use crate::config::GameConfig;
use crate::error::SaveError;

/// Default save file name, next to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "last_game.json";

/// On-disk form of a running session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    /// Side to move, as its grid character
    pub turn: char,
    pub players: u8,
    pub difficulty: u8,
    /// Row-major grid, top row first, `R`/`Y`/`.` per cell
    pub grid: Vec<String>,
}

impl SavedGame {
    /// Capture the current session state.
    #[must_use]
    pub fn capture(board: &Board, config: &GameConfig) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            win_length: board.win_length(),
            turn: board.turn().as_char(),
            players: config.players,
            difficulty: config.difficulty,
            grid: (0..board.rows()).map(|row| board.row_chars(row)).collect(),
        }
    }
}

/// Handle to the save file of one session.
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff a saved session exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the current session, replacing any previous save.
    pub fn save(&self, board: &Board, config: &GameConfig) -> Result<(), SaveError> {
        let saved = SavedGame::capture(board, config);
        let json = serde_json::to_string_pretty(&saved).map_err(|source| SaveError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the saved session back and rebuild the board and settings.
    pub fn load(&self) -> Result<(Board, GameConfig), SaveError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })?;
        let saved: SavedGame = serde_json::from_str(&text).map_err(|source| SaveError::Parse {
            path: self.path.clone(),
            source,
        })?;
        self.restore(&saved)
    }

    /// Remove the save file; a missing file is not an error.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SaveError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> SaveError {
        SaveError::Invalid {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn restore(&self, saved: &SavedGame) -> Result<(Board, GameConfig), SaveError> {
        let config = GameConfig {
            rows: saved.rows,
            cols: saved.cols,
            win_length: saved.win_length,
            players: saved.players,
            difficulty: saved.difficulty,
        };
        if !config.validate() {
            return Err(self.invalid("settings out of range"));
        }

        if saved.grid.len() != saved.rows {
            return Err(self.invalid(format!(
                "grid has {} rows, header says {}",
                saved.grid.len(),
                saved.rows
            )));
        }

        let mut board = Board::from_config(&config);
        for (row, line) in saved.grid.iter().enumerate() {
            let mut cols = 0;
            for (col, ch) in line.chars().enumerate() {
                let disc = Disc::from_char(ch)
                    .ok_or_else(|| self.invalid(format!("unknown grid character {ch:?}")))?;
                if col < saved.cols {
                    board.set_cell(row, col, disc);
                }
                cols += 1;
            }
            if cols != saved.cols {
                return Err(self.invalid(format!(
                    "grid row {row} has {cols} cells, header says {}",
                    saved.cols
                )));
            }
        }
        board.recompute_heights();

        // The recomputed fill levels only see each column's bottom run;
        // any disc left above them is floating and the state unusable.
        for col in 0..board.cols() {
            for row in 0..board.rows() - board.height(col) {
                if board.get(row, col) != Disc::Empty {
                    return Err(self.invalid(format!("floating disc in column {col}")));
                }
            }
        }

        match Disc::from_char(saved.turn) {
            Some(turn) if turn != Disc::Empty => board.set_turn(turn),
            _ => return Err(self.invalid(format!("invalid turn character {:?}", saved.turn))),
        }

        Ok((board, config))
    }
}
