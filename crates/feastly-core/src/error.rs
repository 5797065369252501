/// Errors returned by the core operations.
///
/// Both `InvalidArgument` and `IndexOutOfRange` are contract violations by the caller.
/// Callers are expected to fail fast on them rather than retry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
