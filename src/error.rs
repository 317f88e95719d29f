use std::path::PathBuf;

/// Errors that can occur while saving or restoring a session.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse save file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("save file {path} holds an invalid game: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Errors that can occur while running an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed")]
    InputClosed,

    #[error("save error: {0}")]
    Save(#[from] SaveError),
}
