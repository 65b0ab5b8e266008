use parking_lot::Mutex;
use std::sync::Arc;

use super::{ClickDisposition, ClickEvent, ClickSource, NavigationSource};
use crate::types::{ClickListener, NavigationListener};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    url: String,
    title: Option<String>,
}

#[derive(Debug)]
struct HistoryState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

/// Session history kept in memory. Listeners run outside the internal locks,
/// so they may navigate again.
pub struct MemoryHistory {
    enabled: bool,
    state: Mutex<HistoryState>,
    listeners: Mutex<Vec<NavigationListener>>,
    click_listeners: Mutex<Vec<ClickListener>>,
}

impl MemoryHistory {
    pub fn new<S: Into<String>>(initial_url: S) -> Self {
        Self {
            enabled: true,
            state: Mutex::new(HistoryState {
                entries: vec![HistoryEntry {
                    url: initial_url.into(),
                    title: None,
                }],
                cursor: 0,
            }),
            listeners: Mutex::new(Vec::new()),
            click_listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled<S: Into<String>>(initial_url: S) -> Self {
        Self {
            enabled: false,
            ..Self::new(initial_url)
        }
    }

    pub fn entry_count(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().cursor
    }

    pub fn urls(&self) -> Vec<String> {
        self.state
            .lock()
            .entries
            .iter()
            .map(|entry| entry.url.clone())
            .collect()
    }

    pub fn current_title(&self) -> Option<String> {
        let state = self.state.lock();
        state.entries[state.cursor].title.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn click_listener_count(&self) -> usize {
        self.click_listeners.lock().len()
    }

    pub fn click(&self, event: &ClickEvent) -> ClickDisposition {
        let listeners = self.click_listeners.lock().clone();
        let mut disposition = ClickDisposition::PassThrough;
        let mut detached = Vec::new();
        for listener in &listeners {
            match listener(event) {
                Some(ClickDisposition::PreventDefault) => {
                    disposition = ClickDisposition::PreventDefault;
                }
                Some(ClickDisposition::PassThrough) => {}
                None => detached.push(listener.clone()),
            }
        }
        prune(&self.click_listeners, &detached);
        disposition
    }

    fn emit(&self, url: &str) {
        let listeners = self.listeners.lock().clone();
        let detached: Vec<NavigationListener> = listeners
            .iter()
            .filter(|listener| !listener(url))
            .cloned()
            .collect();
        prune(&self.listeners, &detached);
    }
}

fn prune<T: ?Sized>(listeners: &Mutex<Vec<Arc<T>>>, detached: &[Arc<T>]) {
    if detached.is_empty() {
        return;
    }
    listeners
        .lock()
        .retain(|listener| !detached.iter().any(|gone| Arc::ptr_eq(listener, gone)));
    tracing::event!(
        tracing::Level::TRACE,
        operation = "prune_listeners",
        count = detached.len() as u64
    );
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MemoryHistory")
            .field("enabled", &self.enabled)
            .field("entries", &state.entries)
            .field("cursor", &state.cursor)
            .finish_non_exhaustive()
    }
}

impl NavigationSource for MemoryHistory {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn current_url(&self) -> String {
        let state = self.state.lock();
        state.entries[state.cursor].url.clone()
    }

    fn subscribe(&self, listener: NavigationListener) {
        self.listeners.lock().push(listener);
    }

    fn push_state(&self, title: Option<&str>, url: &str) {
        {
            let mut state = self.state.lock();
            let keep = state.cursor + 1;
            state.entries.truncate(keep);
            state.entries.push(HistoryEntry {
                url: url.to_string(),
                title: title.map(str::to_string),
            });
            state.cursor = keep;
        }
        tracing::event!(tracing::Level::TRACE, operation = "push_state", url = %url);
        self.emit(url);
    }

    fn go(&self, delta: i32) {
        let url = {
            let mut state = self.state.lock();
            let target = state.cursor as i64 + i64::from(delta);
            if target < 0 || target >= state.entries.len() as i64 {
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "go",
                    delta = delta,
                    "history offset out of range; ignored"
                );
                return;
            }
            state.cursor = target as usize;
            state.entries[state.cursor].url.clone()
        };
        tracing::event!(tracing::Level::TRACE, operation = "go", delta = delta, url = %url);
        self.emit(&url);
    }
}

impl ClickSource for MemoryHistory {
    fn subscribe_clicks(&self, listener: ClickListener) {
        self.click_listeners.lock().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(history: &MemoryHistory) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        history.subscribe(Arc::new(move |url: &str| {
            sink.lock().push(url.to_string());
            true
        }));
        seen
    }

    #[test]
    fn push_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push_state(None, "/a");
        history.push_state(None, "/b");
        history.go(-2);
        history.push_state(Some("C"), "/c");

        assert_eq!(history.urls(), vec!["/", "/c"]);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.current_title().as_deref(), Some("C"));
    }

    #[test]
    fn go_moves_cursor_and_notifies() {
        let history = MemoryHistory::new("/");
        let seen = recording(&history);
        history.push_state(None, "/a");
        history.go(-1);
        history.go(1);

        assert_eq!(*seen.lock(), vec!["/a", "/", "/a"]);
        assert_eq!(history.current_url(), "/a");
    }

    #[test]
    fn go_out_of_range_is_ignored() {
        let history = MemoryHistory::new("/");
        let seen = recording(&history);
        history.go(-1);
        history.go(3);

        assert!(seen.lock().is_empty());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn go_zero_reannounces_current_entry() {
        let history = MemoryHistory::new("/start");
        let seen = recording(&history);
        history.go(0);
        assert_eq!(*seen.lock(), vec!["/start"]);
    }

    #[test]
    fn click_prevents_default_when_any_listener_asks() {
        let history = MemoryHistory::new("/");
        history.subscribe_clicks(Arc::new(|_: &ClickEvent| Some(ClickDisposition::PassThrough)));
        history.subscribe_clicks(Arc::new(|_: &ClickEvent| Some(ClickDisposition::PreventDefault)));

        assert_eq!(
            history.click(&ClickEvent::link("/x")),
            ClickDisposition::PreventDefault
        );
    }

    #[test]
    fn detached_listeners_are_pruned_on_delivery() {
        let history = MemoryHistory::new("/");
        let seen = recording(&history);
        history.subscribe(Arc::new(|_: &str| false));
        history.subscribe_clicks(Arc::new(|_: &ClickEvent| -> Option<ClickDisposition> { None }));
        assert_eq!(history.listener_count(), 2);
        assert_eq!(history.click_listener_count(), 1);

        history.push_state(None, "/a");
        assert_eq!(
            history.click(&ClickEvent::link("/b")),
            ClickDisposition::PassThrough
        );

        assert_eq!(history.listener_count(), 1);
        assert_eq!(history.click_listener_count(), 0);
        assert_eq!(*seen.lock(), vec!["/a"]);
    }
}
