pub mod app_store;

pub use app_store::{AppStore, Preferences, UiTheme, APP_STORE_KEY};
