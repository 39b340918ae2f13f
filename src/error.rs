//! Error types for the PostgreSQL helpers.

use std::error::Error as StdError;

/// Boxed driver-level error, as returned by a [`CatalogSession`](crate::catalog::CatalogSession).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An identifier contains a character outside `[A-Za-z0-9_]`.
    #[error("Bad Symbol: '{0}'.")]
    BadSymbol(char),

    /// Prepare, execute or scan failed in the database driver.
    #[error("database error: {0}")]
    Driver(#[source] BoxError),

    /// Releasing a prepared statement failed.
    #[error("statement release error: {0}")]
    Cleanup(#[source] BoxError),

    /// Both the operation and the release of its statement failed.
    #[error("{primary}; {cleanup}")]
    Combined {
        primary: Box<Error>,
        cleanup: Box<Error>,
    },

    /// A required configuration value is absent.
    #[error("missing setting: {0}")]
    MissingSetting(String),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a driver error.
    pub fn driver(err: impl Into<BoxError>) -> Self {
        Self::Driver(err.into())
    }

    /// Wrap a statement release error.
    pub fn cleanup(err: impl Into<BoxError>) -> Self {
        Self::Cleanup(err.into())
    }

    /// Merge the outcome of an operation with the outcome of releasing its resources.
    ///
    /// Neither failure is dropped: when both fail the result is
    /// [`Error::Combined`], otherwise whichever one failed is returned.
    pub fn combine<T>(outcome: Result<T>, cleanup: Result<()>) -> Result<T> {
        match (outcome, cleanup) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(cleanup)) => Err(cleanup),
            (Err(primary), Ok(())) => Err(primary),
            (Err(primary), Err(cleanup)) => Err(Self::Combined {
                primary: Box::new(primary),
                cleanup: Box::new(cleanup),
            }),
        }
    }
}
