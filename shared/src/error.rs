use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VotingError {
    #[error("Unknown option: {0:?}")]
    UnknownOption(String),
    #[error("Duplicate option: {0:?}")]
    DuplicateOption(String),
    #[error("Need at least 1 option")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, VotingError>;
