use std::fmt;

/// Failure outcome of a store operation.
///
/// A failed call never mutates the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Malformed or invalid input (bad name, bad page/limit, undecodable body).
    Validation(String),
    /// An active record already holds the requested name.
    Conflict(String),
    /// Unknown id, or a page past the end of the collection.
    NotFound(String),
    /// The collection lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "{}", msg),
            StoreError::Conflict(name) => write!(f, "flavor already exists: {}", name),
            StoreError::NotFound(what) => write!(f, "not found: {}", what),
            StoreError::LockPoisoned(operation) => {
                write!(f, "flavor store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Validation(format!("invalid request body: {}", err))
    }
}

impl StoreError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::Conflict(_) => 400,
            StoreError::NotFound(_) => 404,
            StoreError::LockPoisoned(_) => 500,
        }
    }
}
