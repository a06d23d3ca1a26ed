//! Terminal UI.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! - [`viewmodel`]: display-ready data computed from the app state
//! - [`renderer`]: entry point printing a frame
//! - [`components`]: one renderer per screen section
//! - [`helpers`]: cursor positioning, width fitting and match highlighting
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    FooterInfo, HeaderInfo, HistoryInfo, HistoryRow, NoticeInfo, Panel, StockLevel, StockRow, StockTable,
    SuggestionItem, SuggestionList, UIViewModel,
};
