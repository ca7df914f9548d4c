use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed pattern \"{id}\": {reason}")]
    MalformedPattern { id: String, reason: Malformed },

    #[error("pattern \"{id}\" is listed under both {first} and {second}")]
    DuplicatePattern {
        id: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("marker {marker} not found in {}", path.display())]
    MarkerNotFound { path: PathBuf, marker: &'static str },

    #[error("failed to serialise pattern data")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The exact defect found in an RLE file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("missing header line")]
    MissingHeader,
    #[error("header has no \"{0}\" field")]
    MissingDimension(&'static str),
    #[error("invalid value {value:?} for \"{key}\": expected a positive integer")]
    InvalidDimension { key: &'static str, value: String },
    #[error("missing '!' terminator")]
    MissingTerminator,
    #[error("live cell at row {row}, column {col} is outside the declared {width}x{height} field")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("unexpected symbol {0:?} in pattern body")]
    UnexpectedSymbol(char),
}

impl Error {
    pub(crate) fn malformed(id: &str, reason: Malformed) -> Self {
        Self::MalformedPattern {
            id: id.to_owned(),
            reason,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
