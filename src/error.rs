//! Error types shared by the importer and the property editor.

use camino::Utf8PathBuf;

/// Everything that can go wrong while loading a matrix or editing a block.
#[derive(Debug, thiserror::Error)]
pub enum FloorplanError {
    /// The table parsed but does not describe a valid floorplan.
    #[error("{0}")]
    Validation(String),

    /// The table text itself is malformed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A property field held something that is not a number.
    #[error("Invalid number for {field}: {value:?}")]
    InputFormat { field: &'static str, value: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FloorplanError>;

impl FloorplanError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Short dialog title for this class of error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid matrix",
            Self::Parse { .. } | Self::Io { .. } => "Failed to load CSV",
            Self::InputFormat { .. } => "Please enter valid numbers",
        }
    }
}
