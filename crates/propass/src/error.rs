use thiserror::Error;

/// Errors generated by the command line interface.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Password(#[from] propass_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
