use crate::path::{DEFAULT_BASE_URL, PathError, parse_base_url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DuplicateParamPolicy {
    #[default]
    Allow,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub base_url: String,
    pub title_prefix: String,
    pub duplicate_params: DuplicateParamPolicy,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            title_prefix: String::new(),
            duplicate_params: DuplicateParamPolicy::default(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        parse_base_url(&self.base_url)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn base_url<S: Into<String>>(mut self, value: S) -> Self {
        self.options.base_url = value.into();
        self
    }

    pub fn title_prefix<S: Into<String>>(mut self, value: S) -> Self {
        self.options.title_prefix = value.into();
        self
    }

    pub fn duplicate_params(mut self, value: DuplicateParamPolicy) -> Self {
        self.options.duplicate_params = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error(transparent)]
    BaseUrl(#[from] PathError),
}
