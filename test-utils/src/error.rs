use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Creating the temporary directory of a file-backed database failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
