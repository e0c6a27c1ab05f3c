use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// The interpreter state could not be created.
    #[error("failed to create Lua state: {0}")]
    Acquire(String),

    #[error("failed to load Lua standard libraries: {0}")]
    OpenLibs(String),

    /// Loading or running a chunk failed. `message` is the raw Lua error value.
    #[error("{message}")]
    Script { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;
