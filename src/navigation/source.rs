use crate::types::NavigationListener;

pub trait NavigationSource: Send + Sync {
    /// `false` when the host cannot drive navigation at all.
    fn is_enabled(&self) -> bool {
        true
    }

    fn current_url(&self) -> String;

    /// The listener receives the new url after every state change and is
    /// dropped once it returns `false`.
    fn subscribe(&self, listener: NavigationListener);

    fn push_state(&self, title: Option<&str>, url: &str);

    fn go(&self, delta: i32);
}

/// Where [`Router::go`](crate::Router::go) should take the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoTarget {
    Offset(i32),
    Url(String),
}

impl From<i32> for GoTarget {
    fn from(delta: i32) -> Self {
        Self::Offset(delta)
    }
}

impl From<&str> for GoTarget {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for GoTarget {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}
