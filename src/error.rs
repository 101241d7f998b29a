#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Store not ready")]
    NotReady,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CoreError {
    /// True for failures of the remote round-trip itself, as opposed to
    /// locally rejected input.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CoreError::Gateway(_) | CoreError::Http(_) | CoreError::Internal(_)
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
