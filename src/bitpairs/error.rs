use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while generating or verifying a fixture file
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture path could not be opened, read, or written
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line does not match `<bit_count> <value>`
    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("expected {expected} lines, found {found}")]
    LineCount { expected: u64, found: u64 },
}

impl FixtureError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        FixtureError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Check if this error came from the filesystem rather than from file content
    pub fn is_file_access(&self) -> bool {
        matches!(self, FixtureError::FileAccess { .. })
    }
}

/// Reasons a single line fails to parse as a pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairParseError {
    #[error("missing space separator")]
    MissingSeparator,

    #[error("more than two fields")]
    ExtraField,

    #[error("'{0}' is not a base-10 integer")]
    InvalidNumber(String),

    #[error("'{0}' has a leading zero")]
    LeadingZero(String),

    #[error("bit count {0} outside 1..=8")]
    BitCountOutOfRange(u64),

    #[error("value {0} outside 0..=255")]
    ValueOutOfRange(u64),
}
