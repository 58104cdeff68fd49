use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Render error: {0}")]
    RenderError(String),
    #[error("Exec error: {0}")]
    ExecError(String),
}

pub type Result<T, E = CommandError> = std::result::Result<T, E>;
