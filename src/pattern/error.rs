use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter name '{name}' appears more than once in template '{template}'")]
    DuplicateParamName { template: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
