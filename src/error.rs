use std::fmt::Display;

/// Custom Result type for minisql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for minisql
///
/// Every failure surfaces as a single descriptive message at the statement
/// boundary; none of them may crash the host process.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// SQL parsing error (missing keyword, identifier or symbol,
    /// premature end of the statement)
    Parse(String),
    /// Query execution error (unknown table or column, arity mismatch,
    /// invalid literal for a column type)
    Query(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {}", err),
            Error::Query(err) => write!(f, "query error: {}", err),
        }
    }
}
