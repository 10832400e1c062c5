use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("disease name must not be empty")]
    EmptyName,
    #[error("disease already exists: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
