//! core/error.rs
//! Error taxonomy for tag operations.
//!
//! Every variant is `Clone` so results can ride inside GUI messages.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagError>;

/// Shown whenever metaflac cannot be launched.
pub const INSTALL_HINT: &str = "Please install the flac package.\n\
On Ubuntu/Debian: sudo apt install flac\n\
On Fedora/RHEL: sudo dnf install flac\n\
On Arch: sudo pacman -S flac";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Executable missing, not launchable, or `--version` probe failed.
    #[error("{program} command not available ({reason}).\n{hint}", hint = INSTALL_HINT)]
    ToolUnavailable { program: String, reason: String },

    /// metaflac ran but exited non-zero. `stderr` is stored trimmed.
    #[error("metaflac failed to {action} (exit code {}): {stderr}", fmt_code(.code))]
    ToolExecution {
        action: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    /// Bad user input, caught before any process launch.
    #[error("{0}")]
    Validation(String),

    /// remove-all succeeded, then a set-tag step failed.
    /// The file now holds only the first `written` of `total` assignments.
    #[error("Tags were removed but only {written} of {total} were written back: {source}")]
    SaveIncomplete {
        written: usize,
        total: usize,
        source: Box<TagError>,
    },

    /// Background worker went away without reporting.
    #[error("background worker stopped before finishing")]
    WorkerLost,
}

fn fmt_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string())
}
