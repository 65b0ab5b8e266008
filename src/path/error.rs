use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("base url '{input}' is not a valid absolute url: {reason}")]
    InvalidBaseUrl { input: String, reason: String },
    #[error("base url '{input}' cannot be used to resolve relative paths")]
    BaseUrlCannotBeABase { input: String },
}

pub type PathResult<T> = Result<T, PathError>;
