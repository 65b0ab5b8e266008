use hashbrown::HashMap;

use crate::pattern::{CaptureList, RoutePattern};
use crate::types::BoxedHandler;

pub struct RouteEntry {
    pattern: RoutePattern,
    handler: BoxedHandler,
}

impl RouteEntry {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    pub fn handler(&self) -> &BoxedHandler {
        &self.handler
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Replaced,
}

#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: RoutePattern, handler: BoxedHandler) -> Registration {
        let entry = RouteEntry { pattern, handler };

        if let Some(&slot) = self.index.get(entry.template()) {
            self.entries[slot] = entry;
            return Registration::Replaced;
        }

        self.index
            .insert(entry.template().to_string(), self.entries.len());
        self.entries.push(entry);
        Registration::Inserted
    }

    pub fn find<'p>(&self, path: &'p str) -> Option<(&RouteEntry, CaptureList<'p>)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.captures(path).map(|captures| (entry, captures)))
    }

    pub fn get(&self, template: &str) -> Option<&RouteEntry> {
        self.index.get(template).map(|&slot| &self.entries[slot])
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(RouteEntry::template)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
