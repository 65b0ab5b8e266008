use std::sync::Arc;

use crate::navigation::{ClickDisposition, ClickEvent};
use crate::router::RouteHandler;

pub type BoxedHandler = Arc<dyn RouteHandler>;
/// Returns `false` once its receiver is gone and it should be unsubscribed.
pub type NavigationListener = Arc<dyn Fn(&str) -> bool + Send + Sync>;
/// Returns `None` once its receiver is gone and it should be unsubscribed.
pub type ClickListener = Arc<dyn Fn(&ClickEvent) -> Option<ClickDisposition> + Send + Sync>;
