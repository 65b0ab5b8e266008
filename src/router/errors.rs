use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("navigation source is unavailable; router was not initialized")]
    NavigationUnavailable,
    #[error("router is already initialized")]
    AlreadyInitialized,
    #[error("router is not initialized; no navigation source to drive")]
    NotInitialized,
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
