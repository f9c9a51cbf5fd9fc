use std::fmt;

/// Result type for reelscout-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the coordination layer
#[derive(Debug)]
pub enum Error {
    /// Favorites storage error
    Store(reelscout_store::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
        }
    }
}

impl From<reelscout_store::Error> for Error {
    fn from(err: reelscout_store::Error) -> Self {
        Error::Store(err)
    }
}
