//! Mirrors store state onto the page document.
//!
//! The store owns the flags; this observer turns them into the attributes and
//! locale the page needs:
//!
//! - dark mode sets `data-theme="dark"` on the body, other modes remove it;
//! - right to left sets `dir="rtl"` on the root element and switches the
//!   locale to Arabic, left to right removes `dir` and selects English.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::trace;

use crate::store::{ListenerId, ThemeSnapshot, ThemeStore};

/// Body attribute carrying the dark theme marker.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Root element attribute carrying the text direction.
pub const DIR_ATTRIBUTE: &str = "dir";

/// Element an attribute is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// The `<html>` element.
    Root,
    Body,
}

/// UI locale selected by the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whatever applies attributes and locale to the rendered page.
pub trait DocumentSink: Send + Sync {
    fn set_attribute(&self, element: Element, name: &str, value: &str);
    fn remove_attribute(&self, element: Element, name: &str);
    fn set_locale(&self, locale: Locale);
}

/// Pushes the document side effects of `state` into `sink`.
pub fn apply_document(state: &ThemeSnapshot, sink: &dyn DocumentSink) {
    if state.mode.is_dark() {
        sink.set_attribute(Element::Body, THEME_ATTRIBUTE, "dark");
    } else {
        sink.remove_attribute(Element::Body, THEME_ATTRIBUTE);
    }

    if state.is_rtl() {
        sink.set_attribute(Element::Root, DIR_ATTRIBUTE, state.direction.as_str());
        sink.set_locale(Locale::Ar);
    } else {
        sink.remove_attribute(Element::Root, DIR_ATTRIBUTE);
        sink.set_locale(Locale::En);
    }
    trace!(theme.mode = %state.mode, theme.direction = %state.direction, "Document updated");
}

/// Applies the current state to `sink` and keeps it in sync with `store`.
///
/// Unsubscribe with the returned id to detach.
pub fn bind_document(store: &ThemeStore, sink: Arc<dyn DocumentSink>) -> ListenerId {
    apply_document(&store.snapshot(), sink.as_ref());
    store.subscribe(move |_change, state| apply_document(state, sink.as_ref()))
}

/// In-memory document, for tests and headless rendering.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    inner: Mutex<MemoryDocumentState>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryDocumentState {
    pub attributes: BTreeMap<Element, BTreeMap<String, String>>,
    pub locale: Locale,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MemoryDocumentState {
        self.inner.lock().expect("document lock poisoned").clone()
    }

    pub fn attribute(&self, element: Element, name: &str) -> Option<String> {
        self.inner
            .lock()
            .expect("document lock poisoned")
            .attributes
            .get(&element)
            .and_then(|attrs| attrs.get(name))
            .cloned()
    }

    pub fn locale(&self) -> Locale {
        self.inner.lock().expect("document lock poisoned").locale
    }
}

impl DocumentSink for MemoryDocument {
    fn set_attribute(&self, element: Element, name: &str, value: &str) {
        self.inner
            .lock()
            .expect("document lock poisoned")
            .attributes
            .entry(element)
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, element: Element, name: &str) {
        let mut inner = self.inner.lock().expect("document lock poisoned");
        if let Some(attrs) = inner.attributes.get_mut(&element) {
            attrs.remove(name);
            if attrs.is_empty() {
                inner.attributes.remove(&element);
            }
        }
    }

    fn set_locale(&self, locale: Locale) {
        self.inner.lock().expect("document lock poisoned").locale = locale;
    }
}
