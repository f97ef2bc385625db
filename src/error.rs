// Crate error types

/// Top-level error type for the refinement loop and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid construction parameters, raised synchronously at the point of
    /// violation and never recovered internally.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// The completion service failed to produce text (transport failure,
    /// rejected request, malformed response). Propagates to the caller of
    /// `run` without internal retry.
    #[error("completion service error: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, Error>;
