//! Stok: an office-supplies inventory tracker running as a Zellij plugin.
//!
//! Stok keeps a catalog of materials (pens, paper, staplers) with stock
//! counts, records every stock-in and stock-out as an immutable transaction,
//! and exports the history as CSV:
//! - Movement form with autocomplete over the catalog
//! - Material add, edit and delete with generated category codes
//! - Current-stock table with critical and low stock alerts
//! - Recent transactions panel and CSV export through a worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Key bindings and events                          │
//! │  - Form buffers and modes                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Inventory     │   │ Worker Layer  │
//! │ (ui/)         │   │ (inventory/)  │   │ (worker/)     │
//! │ - Rendering   │   │ - Catalog     │   │ - CSV writes  │
//! │ - Theming     │   │ - Ledger      │   │ - IPC bridge  │
//! │ - Components  │   │ - Seed data   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Export & Infrastructure                    │
//! │  - Materials, codes, transactions (domain/)         │
//! │  - CSV encoding and file sink (export/)             │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, OTLP JSON file export     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog and the log live in memory for the lifetime of the plugin
//! instance; only exports touch the disk.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/stok.wasm" {
//!         theme "catppuccin-latte"
//!         export_dir "~/Laporan"
//!         critical_stock_below "10"
//!         low_stock_below "20"
//!         categories "Alat Tulis,Kertas,Alat Kantor"
//!         trace_level "stok=debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use stok::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Select "Penggaris 30cm - Butterfly" and take five out.
//! for event in [Event::FocusSearch, Event::Char('g'), Event::Char('a'), Event::Char('r')] {
//!     handle_event(&mut state, &event)?;
//! }
//! handle_event(&mut state, &Event::Submit)?;
//! for event in [Event::Char('5'), Event::Char('-'), Event::Submit] {
//!     handle_event(&mut state, &event)?;
//! }
//!
//! let ruler = state.inventory.catalog.list().iter().find(|m| m.code.to_string() == "RUL-001");
//! assert_eq!(ruler.map(|m| m.stock), Some(5));
//! assert_eq!(state.inventory.log.len(), 1);
//! # Ok::<(), stok::StokError>(())
//! ```

pub mod app;
pub mod domain;
pub mod export;
pub mod infrastructure;
pub mod inventory;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, Mode};
pub use domain::{InventoryError, Material, MaterialCode, Movement, Result, StokError, Transaction};
pub use ui::Theme;

use app::state::DEFAULT_CATEGORIES;
use app::StockThresholds;
use inventory::Inventory;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Plugin configuration parsed from the Zellij KDL block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme: `catppuccin-mocha` (default) or `catppuccin-latte`.
    /// Ignored when `theme_file` loads.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`].
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory CSV exports are written to. `~` is the host home.
    /// Default: `"/host"`
    pub export_dir: String,

    /// Stock below this is critical. Default: 10
    pub critical_stock_below: u32,

    /// Stock below this is low. Never below `critical_stock_below`.
    /// Default: 20
    pub low_stock_below: u32,

    /// Start with the ten starter materials. Default: `true`
    pub seed_catalog: bool,

    /// Category presets offered by the material form.
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = StockThresholds::default();
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            export_dir: infrastructure::HOST_ROOT.to_string(),
            critical_stock_below: thresholds.critical_below,
            low_stock_below: thresholds.low_below,
            seed_catalog: true,
            categories: DEFAULT_CATEGORIES.map(String::from).to_vec(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Missing keys take their defaults. Unparsable values are logged and
    /// take their defaults too, so a typo never keeps the plugin from loading.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use stok::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("critical_stock_below".to_string(), "5".to_string()),
    ///     ("categories".to_string(), "ATK, Kertas,,".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.critical_stock_below, 5);
    /// assert_eq!(config.categories, vec!["ATK", "Kertas"]);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let categories = config
            .get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.categories);

        let critical_stock_below = parse_or(config, "critical_stock_below", defaults.critical_stock_below);
        let low_stock_below = parse_or(config, "low_stock_below", defaults.low_stock_below);
        if low_stock_below < critical_stock_below {
            tracing::warn!(
                critical_stock_below,
                low_stock_below,
                "low_stock_below is under critical_stock_below, raising it"
            );
        }

        Self {
            theme_name: non_blank(config, "theme"),
            theme_file: non_blank(config, "theme_file"),
            trace_level: non_blank(config, "trace_level"),
            export_dir: non_blank(config, "export_dir").unwrap_or(defaults.export_dir),
            critical_stock_below,
            low_stock_below: low_stock_below.max(critical_stock_below),
            seed_catalog: parse_or(config, "seed_catalog", defaults.seed_catalog),
            categories,
        }
    }

    /// Alert thresholds for the stock table.
    #[must_use]
    pub const fn thresholds(&self) -> StockThresholds {
        StockThresholds {
            critical_below: self.critical_stock_below,
            low_below: self.low_stock_below,
        }
    }
}

fn non_blank(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Reads `key` as `T`.
///
/// # Errors
///
/// Returns [`StokError::Config`] naming the key when the value does not parse.
fn parse_key<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| StokError::Config(format!("{key} has an invalid value {raw:?}")))
        })
        .transpose()
}

fn parse_or<T: FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match parse_key(config, key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "using default");
            default
        }
    }
}

/// Builds the initial application state from the configuration.
///
/// Tracing is not initialized here; the plugin shim does that before calling
/// this so theme fallbacks are logged.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed_catalog = config.seed_catalog, "initializing stok plugin");

    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref());
    let inventory = if config.seed_catalog {
        Inventory::seeded()
    } else {
        Inventory::empty()
    };

    let mut state = AppState::new(inventory, theme);
    state.thresholds = config.thresholds();
    state.categories.clone_from(&config.categories);
    state.export_dir = infrastructure::resolve_export_dir(&config.export_dir);
    state
}
