//! zshelf: a Zellij plugin for browsing a book catalog.
//!
//! zshelf renders a fixed book catalog as an interactive pane with:
//! - Free-text search over titles and authors (case-insensitive substring)
//! - Category filtering with an "All" sentinel that disables the filter
//! - Per-book favorite toggling, persisted across sessions
//! - A read-only favorites panel summarizing the favorited books
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Storage IPC │
//! │ - Theming     │   │ - Two keys    │   │ - Responses   │
//! │ - Components  │   │ - Defaults    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Catalog, filter, favorites, errors (domain/)     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Persistence
//!
//! Two values survive across sessions, each in its own JSON file in the
//! plugin data directory: the last search text and the favorite-id list.
//! Missing or corrupt values fall back to their defaults (`""` and `[]`);
//! writes are best-effort and never surface to the UI. The selected category
//! is deliberately not persisted.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zshelf.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` over the built-in catalog, subscribe to events
//! 2. **Permission Grant**: post a `LoadState` message to the worker
//! 3. **Worker Response**: restored search text and favorites flow back as a
//!    `StateLoaded` event and the filter is re-applied
//! 4. **Interaction**: every event mutates state synchronously; changed
//!    values are persisted through explicit worker actions

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Book, Catalog, FavoriteSet, Result, ZshelfError, ALL_CATEGORIES};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Values are provided via Zellij's KDL layout configuration and passed to
/// the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zshelf.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Unknown keys are ignored; absent keys leave the
    /// defaults in place.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and builds an `AppState` over the built-in catalog. Theme
/// failures degrade to the default theme with a diagnostic rather than
/// failing the plugin.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zshelf plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(Catalog::builtin(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys_and_ignores_the_rest() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "catppuccin-latte".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("unknown".to_string(), "ignored".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.filtered_books.len(), 8);
    }

    #[test]
    fn initialize_honors_builtin_theme_name() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }
}
