//! Client-side navigation routing.
//!
//! Route templates such as `/hello/:name` are compiled into matchers and kept
//! in registration order. A navigation to a url resolves it to a path and runs
//! the handler of the first matching route with the captured values.
//!
//! ```
//! use bunner_nav_router::{Router, Routes};
//!
//! let router = Router::new();
//! router
//!     .register(Routes::new().route("/hello/:name", |args: &[&str]| {
//!         assert_eq!(args, ["world"]);
//!     }))
//!     .unwrap();
//!
//! assert!(router.navigate("https://example.com/hello/world"));
//! assert!(!router.navigate("/does/not/exist"));
//! ```

pub mod navigation;
pub mod path;
pub mod pattern;
pub mod router;
pub mod types;

pub use navigation::{
    ClickDisposition, ClickEvent, ClickSource, GoTarget, MemoryHistory, Modifiers, MouseButton,
    NavigationSource,
};
pub use router::{
    DuplicateParamPolicy, RouteHandler, Router, RouterError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, RouterResult, Routes,
};
