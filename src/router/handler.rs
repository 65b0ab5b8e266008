use std::sync::Arc;

use crate::types::BoxedHandler;

pub trait RouteHandler: Send + Sync {
    fn call(&self, args: &[&str]);
}

impl<F> RouteHandler for F
where
    F: Fn(&[&str]) + Send + Sync,
{
    fn call(&self, args: &[&str]) {
        self(args)
    }
}

#[derive(Clone, Default)]
pub struct Routes {
    entries: Vec<(String, BoxedHandler)>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<S, F>(self, template: S, handler: F) -> Self
    where
        S: Into<String>,
        F: Fn(&[&str]) + Send + Sync + 'static,
    {
        self.route_with(template, Arc::new(handler))
    }

    pub fn route_with<S: Into<String>>(mut self, template: S, handler: BoxedHandler) -> Self {
        self.entries.push((template.into(), handler));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Routes {
    type Item = (String, BoxedHandler);
    type IntoIter = std::vec::IntoIter<(String, BoxedHandler)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl std::fmt::Debug for Routes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(template, _)| template))
            .finish()
    }
}
