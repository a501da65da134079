use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::shared::storage::LocalStorage;
use crate::shared::store::StateCell;

/// Local-storage key of the persisted UI preferences.
pub const APP_STORE_KEY: &str = "app-store";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    Light,
    #[default]
    Dark,
}

impl UiTheme {
    pub fn toggled(self) -> Self {
        match self {
            UiTheme::Light => UiTheme::Dark,
            UiTheme::Dark => UiTheme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_section: String,
    pub is_mobile_menu_open: bool,
    pub theme: UiTheme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            current_section: "about".to_string(),
            is_mobile_menu_open: false,
            theme: UiTheme::Dark,
        }
    }
}

/// The persisted subset of [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: UiTheme,
    pub current_section: String,
}

#[derive(Serialize, Deserialize)]
struct PersistedEnvelope {
    state: Preferences,
    #[serde(default)]
    version: u32,
}

/// UI-level flags shared by every section: loading, the last error,
/// the active section, the mobile menu and the theme.
pub struct AppStore {
    cell: StateCell<AppState>,
    storage: Arc<dyn LocalStorage>,
    // Held across a persisted update and its write so storage sees updates in order.
    persist_lock: Mutex<()>,
}

impl AppStore {
    /// Builds the store and rehydrates theme and section from `storage`.
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        let mut initial = AppState::default();

        if let Some(raw) = storage.get_item(APP_STORE_KEY) {
            match serde_json::from_str::<PersistedEnvelope>(&raw) {
                Ok(envelope) => {
                    initial.theme = envelope.state.theme;
                    initial.current_section = envelope.state.current_section;
                }
                Err(e) => warn!(error = %e, "ignoring unreadable persisted app state"),
            }
        }

        Self {
            cell: StateCell::new("app-store", initial),
            storage,
            persist_lock: Mutex::new(()),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        self.cell.get()
    }

    pub fn preferences(&self) -> Preferences {
        let state = self.cell.get();
        Preferences {
            theme: state.theme,
            current_section: state.current_section.clone(),
        }
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.cell.update("setLoading", |s| {
            Some(AppState {
                is_loading,
                ..s.clone()
            })
        });
    }

    pub fn set_error(&self, error: Option<String>) {
        self.cell.update("setError", |s| Some(AppState { error, ..s.clone() }));
    }

    pub fn clear_error(&self) {
        self.set_error(None);
    }

    pub fn set_current_section(&self, section: impl Into<String>) {
        let current_section = section.into();
        self.update_persisted("setCurrentSection", |s| {
            Some(AppState {
                current_section,
                ..s.clone()
            })
        });
    }

    pub fn toggle_mobile_menu(&self) {
        self.cell.update("toggleMobileMenu", |s| {
            Some(AppState {
                is_mobile_menu_open: !s.is_mobile_menu_open,
                ..s.clone()
            })
        });
    }

    pub fn set_mobile_menu_open(&self, open: bool) {
        self.cell.update("setMobileMenuOpen", |s| {
            Some(AppState {
                is_mobile_menu_open: open,
                ..s.clone()
            })
        });
    }

    pub fn toggle_theme(&self) {
        self.update_persisted("toggleTheme", |s| {
            Some(AppState {
                theme: s.theme.toggled(),
                ..s.clone()
            })
        });
    }

    pub fn set_theme(&self, theme: UiTheme) {
        self.update_persisted("setTheme", |s| Some(AppState { theme, ..s.clone() }));
    }

    pub fn reset(&self) {
        self.update_persisted("reset", |_| Some(AppState::default()));
    }

    fn update_persisted(
        &self,
        action: &'static str,
        f: impl FnOnce(&AppState) -> Option<AppState>,
    ) {
        let _guard = self.persist_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.cell.update(action, f) {
            self.persist();
        }
    }

    fn persist(&self) {
        let envelope = PersistedEnvelope {
            state: self.preferences(),
            version: 0,
        };

        let result = serde_json::to_string(&envelope)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.storage
                    .set_item(APP_STORE_KEY, &raw)
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            warn!(error = %e, "failed to persist app state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryLocalStorage;

    fn store() -> (AppStore, Arc<MemoryLocalStorage>) {
        let storage = Arc::new(MemoryLocalStorage::new());
        (AppStore::new(storage.clone()), storage)
    }

    #[test]
    fn defaults() {
        let (store, _) = store();
        let state = store.state();

        assert_eq!(state.current_section, "about");
        assert_eq!(state.theme, UiTheme::Dark);
        assert!(!state.is_mobile_menu_open);
        assert!(state.error.is_none());
    }

    #[test]
    fn toggle_theme_flips_between_light_and_dark() {
        let (store, _) = store();

        store.toggle_theme();
        assert_eq!(store.state().theme, UiTheme::Light);
        store.toggle_theme();
        assert_eq!(store.state().theme, UiTheme::Dark);
    }

    #[test]
    fn mobile_menu_toggle() {
        let (store, _) = store();

        store.toggle_mobile_menu();
        assert!(store.state().is_mobile_menu_open);
        store.set_mobile_menu_open(false);
        assert!(!store.state().is_mobile_menu_open);
    }

    #[test]
    fn preferences_survive_a_new_store() {
        let (store, storage) = store();
        store.set_theme(UiTheme::Light);
        store.set_current_section("projects");
        store.set_error(Some("not persisted".to_string()));

        let rehydrated = AppStore::new(storage);

        let state = rehydrated.state();
        assert_eq!(state.theme, UiTheme::Light);
        assert_eq!(state.current_section, "projects");
        assert!(state.error.is_none());
    }

    #[test]
    fn persisted_shape_matches_browser_format() {
        let (store, storage) = store();
        store.set_current_section("memories");

        let raw = storage.get_item(APP_STORE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(json["state"]["currentSection"], "memories");
        assert_eq!(json["state"]["theme"], "dark");
        assert_eq!(json["version"], 0);
    }

    #[test]
    fn corrupt_persisted_state_falls_back_to_defaults() {
        let storage = Arc::new(MemoryLocalStorage::new().with_item(APP_STORE_KEY, "{not json"));

        let store = AppStore::new(storage);

        assert_eq!(store.state().current_section, "about");
    }

    #[test]
    fn stored_preferences_follow_the_last_update() {
        let (store, storage) = store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for round in 0..25 {
                        store.set_current_section(format!("section-{n}-{round}"));
                        if round % 5 == 0 {
                            store.toggle_theme();
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let raw = storage.get_item(APP_STORE_KEY).unwrap();
        let stored: PersistedEnvelope = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.state, store.preferences());
    }
}
