use thiserror::Error;

/// Core error type shared across gimei crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A corpus row does not carry three or four script columns.
    #[error("invalid item: expected 3 or 4 columns, found {0}")]
    ItemWidth(usize),
    /// A script name could not be recognised.
    #[error("unknown script: {0}")]
    UnknownScript(String),
}

/// Convenience alias for results returned by gimei crates.
pub type Result<T> = std::result::Result<T, Error>;
