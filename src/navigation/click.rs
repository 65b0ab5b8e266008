use bitflags::bitflags;

use crate::types::ClickListener;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const ALT = 1;
        const CTRL = 1 << 1;
        const META = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// An activation of a link-like element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickEvent {
    pub href: Option<String>,
    pub title: Option<String>,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl ClickEvent {
    pub fn link<S: Into<String>>(href: S) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Internal link clicked with the primary button and no modifier held.
    pub fn is_plain_internal(&self) -> bool {
        self.button == MouseButton::Primary
            && self.modifiers.is_empty()
            && self.href.as_deref().is_some_and(|href| href.starts_with('/'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    PassThrough,
    PreventDefault,
}

pub trait ClickSource {
    fn subscribe_clicks(&self, listener: ClickListener);
}
