//! Error types for theme rewriting.

use std::io;
use std::path::PathBuf;

use literate_plist::PlistError;

/// Errors that abort a theme rewrite.
///
/// None of these are recovered from: the run stops at the first one and the
/// message is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Command-line arguments could not be resolved.
    #[error("{0}")]
    Usage(String),

    /// The input theme could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed XML.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PlistError,
    },

    /// The output theme could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The plist root has no top-level dictionary.
    #[error("Theme has no top-level dictionary")]
    MissingDictionary,

    /// The top-level dictionary has no `settings` array.
    #[error("Theme has no `settings` array")]
    MissingSettings,

    /// Serializing or mutating the document tree failed.
    #[error("Theme document error: {0}")]
    Document(#[from] PlistError),
}

impl ThemeError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
