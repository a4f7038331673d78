//! The theme store: color mode, direction and component skins for one UI session.
//!
//! # Example
//!
//! ```rust
//! use stagelight::{ColorMode, ComponentName, ComponentSkin, MemoryStorage, ThemeConfig, ThemeStore};
//!
//! let store = ThemeStore::new(ThemeConfig::default(), MemoryStorage::new());
//! store.set_mode(ColorMode::Dark);
//! store.set_component_skin(ComponentName::Header, ComponentSkin::Red);
//!
//! assert_eq!(store.button_class(), "btn btn-warning");
//! assert_eq!(store.header_skin(), ComponentSkin::Red);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::config::{THEME_MODE_KEY, ThemeConfig};
use crate::direction::rewrite_class_name;
use crate::mode::{Accent, ColorMode, Direction};
use crate::skin::{ComponentName, ComponentSkin, ComponentSkins};
use crate::storage::ThemeStorage;

/// Identifier for a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// What a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Mode(ColorMode),
    Direction(Direction),
    Skin {
        component: ComponentName,
        skin: ComponentSkin,
    },
}

/// A consistent copy of the whole store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub mode: ColorMode,
    pub direction: Direction,
    pub skins: ComponentSkins,
    pub accent: Accent,
}

impl ThemeSnapshot {
    pub const fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}

/// Listener callback for store changes.
pub trait ThemeListener: Send + Sync {
    fn on_theme_change(&self, change: ThemeChange, state: &ThemeSnapshot);
}

impl<F> ThemeListener for F
where
    F: Fn(ThemeChange, &ThemeSnapshot) + Send + Sync,
{
    fn on_theme_change(&self, change: ThemeChange, state: &ThemeSnapshot) {
        self(change, state);
    }
}

#[derive(Debug, Clone, Copy)]
struct ThemeState {
    mode: ColorMode,
    direction: Direction,
    skins: ComponentSkins,
}

impl ThemeState {
    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            mode: self.mode,
            direction: self.direction,
            skins: self.skins,
            accent: Accent::for_mode(self.mode),
        }
    }
}

/// Owner of the session's theme state.
///
/// Clones are handles onto the same state. Every mutation notifies listeners
/// synchronously, in registration order, after the state lock is released.
/// Listeners must not mutate the store they are notified by.
#[derive(Clone)]
pub struct ThemeStore {
    state: Arc<RwLock<ThemeState>>,
    storage: Arc<dyn ThemeStorage>,
    listeners: Arc<RwLock<BTreeMap<ListenerId, Arc<dyn ThemeListener>>>>,
    next_listener_id: Arc<AtomicU64>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.snapshot())
            .field(
                "listeners",
                &format!(
                    "{} listeners",
                    self.listeners.read().map(|l| l.len()).unwrap_or(0)
                ),
            )
            .field("next_listener_id", &self.next_listener_id)
            .finish()
    }
}

impl ThemeStore {
    /// Creates a store seeded from `config`, taking the color mode from
    /// `storage` when a valid one was persisted.
    pub fn new(config: ThemeConfig, storage: impl ThemeStorage + 'static) -> Self {
        Self::with_shared_storage(config, Arc::new(storage))
    }

    /// Like [`ThemeStore::new`] for storage that is already shared.
    pub fn with_shared_storage(config: ThemeConfig, storage: Arc<dyn ThemeStorage>) -> Self {
        let mode = load_mode(storage.as_ref(), config.mode);
        debug!(
            theme.mode = %mode,
            theme.direction = %config.direction,
            "Theme store initialized"
        );
        Self {
            state: Arc::new(RwLock::new(ThemeState {
                mode,
                direction: config.direction,
                skins: config.skins,
            })),
            storage,
            listeners: Arc::new(RwLock::new(BTreeMap::new())),
            next_listener_id: Arc::new(AtomicU64::new(1)),
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Returns a copy of the full state.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.state
            .read()
            .expect("theme state lock poisoned")
            .snapshot()
    }

    pub fn mode(&self) -> ColorMode {
        let mode = self.state.read().expect("theme state lock poisoned").mode;
        trace!(theme.mode = %mode, "Theme mode read");
        mode
    }

    pub fn direction(&self) -> Direction {
        self.state
            .read()
            .expect("theme state lock poisoned")
            .direction
    }

    /// Whether the layout is right to left.
    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn skin(&self, component: ComponentName) -> ComponentSkin {
        self.state
            .read()
            .expect("theme state lock poisoned")
            .skins
            .get(component)
    }

    pub fn header_skin(&self) -> ComponentSkin {
        self.skin(ComponentName::Header)
    }

    pub fn sidebar_skin(&self) -> ComponentSkin {
        self.skin(ComponentName::Sidebar)
    }

    pub fn player_skin(&self) -> ComponentSkin {
        self.skin(ComponentName::Player)
    }

    /// Accent classes for the current mode.
    pub fn accent(&self) -> Accent {
        Accent::for_mode(self.mode())
    }

    pub fn button_class(&self) -> &'static str {
        self.accent().button
    }

    pub fn text_class(&self) -> &'static str {
        self.accent().text
    }

    pub fn background_class(&self) -> &'static str {
        self.accent().background
    }

    /// Rewrites a class list for the current direction.
    ///
    /// See [`rewrite_class_name`] for the token rules.
    pub fn rewrite_class_name(&self, class_name: &str) -> String {
        rewrite_class_name(self.direction(), class_name)
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Switches the color mode, persists it and notifies listeners.
    ///
    /// A failed write is logged; the in-memory mode stays authoritative.
    pub fn set_mode(&self, mode: ColorMode) {
        let (from, snapshot) = self.update(|state| std::mem::replace(&mut state.mode, mode));
        info!(theme.from = %from, theme.to = %mode, "Theme mode switched");

        if let Err(err) = self.storage.set(THEME_MODE_KEY, mode.as_str()) {
            warn!(theme.mode = %mode, error = %err, "Failed to persist theme mode");
        }

        self.notify_listeners(ThemeChange::Mode(mode), &snapshot);
    }

    /// Flips between left-to-right and right-to-left.
    pub fn toggle_direction(&self) {
        let (direction, snapshot) = self.update(|state| {
            state.direction = state.direction.flipped();
            state.direction
        });
        debug!(theme.direction = %direction, "Direction toggled");
        self.notify_listeners(ThemeChange::Direction(direction), &snapshot);
    }

    /// Sets the direction, notifying only if it changed.
    pub fn set_direction(&self, direction: Direction) {
        if self.direction() != direction {
            self.toggle_direction();
        }
    }

    /// Changes the skin of one component; the others are untouched.
    pub fn set_component_skin(&self, component: ComponentName, skin: ComponentSkin) {
        let (previous, snapshot) = self.update(|state| state.skins.set(component, skin));
        debug!(
            theme.component = %component,
            theme.from = %previous,
            theme.to = %skin,
            "Component skin changed"
        );
        self.notify_listeners(ThemeChange::Skin { component, skin }, &snapshot);
    }

    /// String entry point for [`ThemeStore::set_component_skin`].
    ///
    /// Unknown component names change nothing and return `false`.
    pub fn set_component_skin_named(&self, component: &str, skin: ComponentSkin) -> bool {
        match component.parse::<ComponentName>() {
            Ok(component) => {
                self.set_component_skin(component, skin);
                true
            }
            Err(err) => {
                debug!(error = %err, "Ignoring skin change for unknown component");
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------------

    /// Register a listener for store changes.
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(ThemeChange, &ThemeSnapshot) + Send + Sync + 'static,
    {
        self.subscribe_listener(Arc::new(callback))
    }

    /// Register a shared listener object.
    pub fn subscribe_listener(&self, listener: Arc<dyn ThemeListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .expect("theme listener lock poisoned")
            .insert(id, listener);
        debug!(theme.listener_id = id.0, "Theme listener registered");
        id
    }

    /// Remove a listener by id. Returns whether it was registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .expect("theme listener lock poisoned");
        let removed = listeners.remove(&id).is_some();
        if removed {
            debug!(theme.listener_id = id.0, "Theme listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .expect("theme listener lock poisoned")
            .len()
    }

    /// Applies `f` under the write lock and returns its result together with
    /// the state it left behind.
    fn update<R>(&self, f: impl FnOnce(&mut ThemeState) -> R) -> (R, ThemeSnapshot) {
        let mut state = self.state.write().expect("theme state lock poisoned");
        let result = f(&mut state);
        (result, state.snapshot())
    }

    fn notify_listeners(&self, change: ThemeChange, snapshot: &ThemeSnapshot) {
        let listeners: Vec<(ListenerId, Arc<dyn ThemeListener>)> = {
            let listeners = self.listeners.read().expect("theme listener lock poisoned");
            listeners
                .iter()
                .map(|(id, listener)| (*id, Arc::clone(listener)))
                .collect()
        };

        for (id, listener) in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| {
                listener.on_theme_change(change, snapshot);
            }));
            if result.is_err() {
                warn!(
                    theme.listener_id = id.0,
                    theme.change = ?change,
                    "Theme listener panicked"
                );
            }
        }
    }
}

fn load_mode(storage: &dyn ThemeStorage, default: ColorMode) -> ColorMode {
    match storage.get(THEME_MODE_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
            warn!(error = %err, "Ignoring persisted theme mode");
            default
        }),
        Ok(None) => default,
        Err(err) => {
            warn!(error = %err, "Failed to read persisted theme mode");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::MemoryStorage;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct FailingStorage;

    impl ThemeStorage for FailingStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    fn store() -> ThemeStore {
        ThemeStore::new(ThemeConfig::default(), MemoryStorage::new())
    }

    #[test]
    fn starts_from_config_defaults() {
        let store = store();
        assert_eq!(store.mode(), ColorMode::Light);
        assert_eq!(store.direction(), Direction::Ltr);
        for component in ComponentName::all() {
            assert_eq!(store.skin(component), ComponentSkin::Blue);
        }
    }

    #[test]
    fn persisted_mode_beats_config_default() {
        let storage = MemoryStorage::new();
        storage.set(THEME_MODE_KEY, "system").unwrap();
        let store = ThemeStore::new(ThemeConfig::default(), storage);
        assert_eq!(store.mode(), ColorMode::System);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set(THEME_MODE_KEY, "undefined").unwrap();
        let config = ThemeConfig::default().with_mode(ColorMode::Dark);
        let store = ThemeStore::new(config, storage);
        assert_eq!(store.mode(), ColorMode::Dark);
    }

    #[test]
    fn set_mode_writes_literal() {
        let storage = MemoryStorage::new();
        let store = ThemeStore::new(ThemeConfig::default(), storage.clone());
        store.set_mode(ColorMode::Dark);
        assert_eq!(
            storage.get(THEME_MODE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn storage_failure_keeps_memory_state() {
        let store = ThemeStore::new(ThemeConfig::default(), FailingStorage);
        assert_eq!(store.mode(), ColorMode::Light);
        store.set_mode(ColorMode::Dark);
        assert_eq!(store.mode(), ColorMode::Dark);
        assert_eq!(store.text_class(), "text-warning");
    }

    #[test]
    fn toggle_direction_round_trips() {
        let store = store();
        store.toggle_direction();
        assert!(store.is_rtl());
        store.toggle_direction();
        assert!(!store.is_rtl());
    }

    #[test]
    fn set_direction_skips_noop() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_direction(Direction::Ltr);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        store.set_direction(Direction::Rtl);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.is_rtl());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            store.subscribe(move |_, _| seen.lock().unwrap().push(tag));
        }

        store.toggle_direction();
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn listener_sees_post_mutation_state() {
        let store = store();
        let seen = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&seen);
        store.subscribe(move |change, state| {
            *slot.lock().unwrap() = Some((change, *state));
        });

        store.set_mode(ColorMode::Dark);
        let (change, state) = seen.lock().unwrap().unwrap();
        assert_eq!(change, ThemeChange::Mode(ColorMode::Dark));
        assert_eq!(state.mode, ColorMode::Dark);
        assert_eq!(state.accent.button, "btn btn-warning");
    }

    #[test]
    fn listener_may_read_store() {
        let store = store();
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(String::new()));
        let slot = Arc::clone(&seen);
        store.subscribe(move |_, _| {
            *slot.lock().unwrap() = reader.rewrite_class_name("ms-2");
        });

        store.toggle_direction();
        assert_eq!(*seen.lock().unwrap(), "me-2");
    }

    #[test]
    fn panicking_listener_does_not_block_others() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        store.subscribe(|_, _| panic!("listener failure"));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_component_skin(ComponentName::Player, ComponentSkin::Green);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.player_skin(), ComponentSkin::Green);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.listener_count(), 1);

        store.set_mode(ColorMode::System);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_mode(ColorMode::Light);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let store = store();
        let handle = store.clone();
        handle.set_component_skin(ComponentName::Sidebar, ComponentSkin::Indigo);
        assert_eq!(store.sidebar_skin(), ComponentSkin::Indigo);
    }

    #[test]
    fn debug_output_counts_listeners() {
        let store = store();
        store.subscribe(|_, _| {});
        let debug = format!("{store:?}");
        assert!(debug.contains("ThemeStore"));
        assert!(debug.contains("1 listeners"));
    }
}
