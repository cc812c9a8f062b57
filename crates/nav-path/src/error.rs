use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid direction code {ch:?} at index {index}")]
    InvalidCode { index: usize, ch: char },
}

pub type PathResult<T> = Result<T, PathError>;
