use super::matcher::{CaptureList, match_path};
use super::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Param(String),
}

impl TemplatePart {
    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    parts: Vec<TemplatePart>,
}

impl RoutePattern {
    pub(crate) fn new(template: String, parts: Vec<TemplatePart>) -> Self {
        Self { template, parts }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Param(name) => Some(name.as_str()),
            TemplatePart::Literal(_) => None,
        })
    }

    pub fn param_count(&self) -> usize {
        self.parts.iter().filter(|part| part.is_param()).count()
    }

    pub fn is_static(&self) -> bool {
        self.param_count() == 0
    }

    pub fn duplicate_param(&self) -> Option<&str> {
        let mut seen = hashbrown::HashSet::new();
        self.param_names().find(|name| !seen.insert(*name))
    }

    pub fn validate(&self) -> PatternResult<()> {
        match self.duplicate_param() {
            Some(name) => Err(PatternError::DuplicateParamName {
                template: self.template.clone(),
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn captures<'p>(&self, path: &'p str) -> Option<CaptureList<'p>> {
        match_path(path, &self.parts)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }
}
