use crate::error::ParseError;

#[derive(Debug)]
/// Represents all errors that can stop a tabulation before any cell is
/// computed.
///
/// Per-cell evaluation failures are not errors at this level; they are
/// recorded as empty cells in the resulting grid.
pub enum TabulateError {
    /// The requested evaluation mode is not one of the supported names.
    UnsupportedMode {
        /// The mode string that was requested.
        mode: String,
    },
    /// The expression itself failed to parse.
    Parse(ParseError),
}

impl From<ParseError> for TabulateError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for TabulateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedMode { mode } => write!(f, "Unsupported evaluation mode: '{mode}'."),
            Self::Parse(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for TabulateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::UnsupportedMode { .. } => None,
        }
    }
}
