#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]
#![allow(clippy::missing_fields_in_debug)]

//! # Stagelight
//!
//! Theme state for the music site front end: the color mode, a skin for each
//! of the header, sidebar and player, and the text direction.
//!
//! Pages, cards and forms never hold theme state of their own. They read it
//! from a [`ThemeStore`], ask it for mutations, and pass every class list that
//! uses directional spacing or alignment utilities through
//! [`ThemeStore::rewrite_class_name`], so the same markup renders correctly in
//! both directions.
//!
//! ## Quick Start
//!
//! ```rust
//! use stagelight::{ColorMode, MemoryStorage, ThemeConfig, ThemeSession};
//!
//! let mut session = ThemeSession::new();
//! let store = session.init(ThemeConfig::default(), MemoryStorage::new());
//!
//! store.subscribe(|change, state| {
//!     println!("{change:?} -> {}", state.mode);
//! });
//!
//! store.toggle_direction();
//! assert_eq!(store.rewrite_class_name("ms-2 text-start"), "me-2 text-end");
//!
//! store.set_mode(ColorMode::Dark);
//! assert_eq!(store.text_class(), "text-warning");
//! ```
//!
//! ## Persistence
//!
//! Only the color mode survives a restart. It lives in a single slot keyed by
//! [`THEME_MODE_KEY`] holding the bare literal (`light`, `dark` or `system`).
//! Direction and skins start from [`ThemeConfig`] every session.

pub mod config;
pub mod direction;
pub mod document;
pub mod error;
pub mod mode;
pub mod session;
pub mod skin;
pub mod storage;
pub mod store;

pub use config::{THEME_MODE_KEY, ThemeConfig};
pub use direction::{mirror_token, rewrite_class_name};
pub use document::{DocumentSink, Element, Locale, MemoryDocument, apply_document, bind_document};
pub use error::{ConfigError, ParseError, StorageError, StorageResult, ThemeError};
pub use mode::{Accent, ColorMode, Direction};
pub use session::ThemeSession;
pub use skin::{ComponentName, ComponentSkin, ComponentSkins};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};
pub use store::{ListenerId, ThemeChange, ThemeListener, ThemeSnapshot, ThemeStore};
