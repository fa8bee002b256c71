use std::fmt;
use std::io;

/// Everything that can go wrong before a simulation starts.
#[derive(Debug)]
pub enum LoadError {
    InvalidArguments(String),
    FileOpenFailure { path: String, source: io::Error },
    CsvParseFailure(csv::Error),
    FieldParseFailure { line: u64, field: String, value: String },
    FieldOutOfRange { line: u64, field: String, value: i64, expected: &'static str },
    WrongFieldCount { line: u64, found: usize },
}

impl LoadError {
    /// Exit status of the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::InvalidArguments(_) => 2,
            LoadError::FileOpenFailure { .. } => 3,
            LoadError::CsvParseFailure(_) | LoadError::WrongFieldCount { .. } => 4,
            LoadError::FieldParseFailure { .. } | LoadError::FieldOutOfRange { .. } => 5,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidArguments(msg) => write!(f, "invalid args: {}", msg),
            LoadError::FileOpenFailure { path, source } => {
                write!(f, "error opening scheduling file {}: {}", path, source)
            }
            LoadError::CsvParseFailure(e) => write!(f, "error reading CSV: {}", e),
            LoadError::FieldParseFailure { line, field, value } => {
                write!(f, "line {}: {} is not an integer: {:?}", line, field, value)
            }
            LoadError::FieldOutOfRange { line, field, value, expected } => {
                write!(f, "line {}: {} must be {}, got {}", line, field, expected, value)
            }
            LoadError::WrongFieldCount { line, found } => {
                write!(f, "line {}: expected 3 or 4 fields, found {}", line, found)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::FileOpenFailure { source, .. } => Some(source),
            LoadError::CsvParseFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::CsvParseFailure(e)
    }
}
