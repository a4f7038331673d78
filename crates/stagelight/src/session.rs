//! Per-session ownership of the theme store.
//!
//! There is no process-wide store. The UI root owns a [`ThemeSession`], calls
//! [`ThemeSession::init`] once at startup and hands the session (or the store
//! handle it returns) to whatever needs it. Reading a session that was never
//! initialized is an integration bug and surfaces as
//! [`ThemeError::Uninitialized`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::storage::ThemeStorage;
use crate::store::ThemeStore;

/// Explicit context holding the session's [`ThemeStore`].
#[derive(Debug, Default)]
pub struct ThemeSession {
    store: Option<ThemeStore>,
}

impl ThemeSession {
    /// Creates an uninitialized session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the session's store. Calling this again replaces the store;
    /// handles cloned from the old one keep their own state and listeners.
    pub fn init(
        &mut self,
        config: ThemeConfig,
        storage: impl ThemeStorage + 'static,
    ) -> &ThemeStore {
        self.init_shared(config, Arc::new(storage))
    }

    /// Like [`ThemeSession::init`] for storage that is already shared.
    pub fn init_shared(
        &mut self,
        config: ThemeConfig,
        storage: Arc<dyn ThemeStorage>,
    ) -> &ThemeStore {
        if self.store.is_some() {
            warn!("Theme session re-initialized; previous store discarded");
        }
        debug!("Theme session started");
        self.store.insert(ThemeStore::with_shared_storage(config, storage))
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the session's store.
    ///
    /// # Errors
    /// Returns [`ThemeError::Uninitialized`] before [`ThemeSession::init`] or
    /// after [`ThemeSession::teardown`].
    pub fn store(&self) -> Result<&ThemeStore, ThemeError> {
        self.store.as_ref().ok_or(ThemeError::Uninitialized)
    }

    /// Drops the store. The persisted color mode is left in storage.
    pub fn teardown(&mut self) -> Option<ThemeStore> {
        let store = self.store.take();
        if store.is_some() {
            debug!("Theme session torn down");
        }
        store
    }
}
