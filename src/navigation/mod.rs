//! Collaborators that feed navigation events into a [`Router`](crate::Router).
//!
//! The router never talks to a browser directly. A host supplies a
//! [`NavigationSource`] (history state) and a [`ClickSource`] (link
//! activations); [`MemoryHistory`] implements both in-process.

mod click;
mod memory;
mod source;

pub use click::{ClickDisposition, ClickEvent, ClickSource, Modifiers, MouseButton};
pub use memory::MemoryHistory;
pub use source::{GoTarget, NavigationSource};
