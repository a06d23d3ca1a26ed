//! Error types for the Stok plugin.
//!
//! This module defines the centralized error type [`StokError`], the inventory
//! rule violations in [`InventoryError`], and a type alias [`Result`] used
//! throughout the crate. All errors are implemented with `thiserror`.
//!
//! Inventory errors double as the user-facing notices shown in the pane, so
//! their `Display` text is written for the person at the keyboard (in
//! Indonesian, like the rest of the UI). Infrastructure errors are for logs.

use thiserror::Error;

/// A rejected inventory operation.
///
/// Every variant leaves the session untouched. The `Display` text is the
/// notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The movement form is missing the item or carries a non-positive quantity.
    #[error("Mohon lengkapi semua field dengan benar!")]
    IncompleteMovement,

    /// The material form has a blank field or an unparsable stock value.
    #[error("Mohon lengkapi semua field!")]
    IncompleteMaterial,

    /// The selected or referenced material is not in the catalog anymore.
    #[error("Barang tidak ditemukan!")]
    MaterialNotFound,

    /// An outgoing movement asked for more than is on hand.
    #[error("Stok tidak mencukupi!")]
    InsufficientStock {
        /// Units currently on hand.
        available: u32,
        /// Units the movement asked for.
        requested: u32,
    },

    /// An incoming movement would push stock past `u32::MAX`.
    #[error("Jumlah stok terlalu besar!")]
    StockOverflow,

    /// Every sequence number for a code prefix is taken.
    #[error("Kode material untuk prefix {prefix} sudah habis!")]
    CodesExhausted {
        /// The prefix with no sequence numbers left.
        prefix: String,
    },
}

/// The main error type for Stok plugin operations.
#[derive(Debug, Error)]
pub enum StokError {
    /// An inventory rule rejected the operation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing an export file failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Stok operations.
pub type Result<T> = std::result::Result<T, StokError>;
