//! Domain layer for the Stok plugin.
//!
//! Core inventory types, independent of Zellij APIs and rendering. The
//! catalog and log that operate on these types live in [`crate::inventory`].
//!
//! # Organization
//!
//! - [`code`]: Material codes (`PEN-001`) and their allocation rule
//! - [`error`]: Error types and result alias
//! - [`material`]: Material records, keys and validated drafts
//! - [`transaction`]: Stock movement records
//!
//! # Examples
//!
//! ```
//! use stok::domain::{MaterialDraft, Result};
//!
//! fn draft() -> Result<MaterialDraft> {
//!     Ok(MaterialDraft::parse("Map Plastik", "Bantex", "Alat Kantor", "12")?)
//! }
//! assert_eq!(draft().unwrap().stock, 12);
//! ```

pub mod code;
pub mod error;
pub mod material;
pub mod transaction;

pub use code::MaterialCode;
pub use error::{InventoryError, Result, StokError};
pub use material::{Material, MaterialDraft, MaterialKey};
pub use transaction::{Movement, Transaction};
