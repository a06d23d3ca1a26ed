//! The inventory session: catalog plus transaction log.
//!
//! [`Inventory`] is the single writer of both collections. Stock movements go
//! through [`Inventory::submit_movement`], which validates the raw form input,
//! adjusts the catalog and records the transaction as one step.

pub mod catalog;
pub mod ledger;
pub mod seed;

pub use catalog::Catalog;
pub use ledger::{TransactionLog, RECENT_LIMIT};

use crate::domain::{InventoryError, Material, MaterialDraft, MaterialKey, Movement, Transaction};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// In-memory inventory for the lifetime of the plugin instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub catalog: Catalog,
    pub log: TransactionLog,
}

impl Inventory {
    /// An inventory with no materials and no history.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An inventory preloaded with the starter catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            catalog: Catalog::with_materials(seed::seed_materials()),
            log: TransactionLog::new(),
        }
    }

    /// Records a stock movement for the selected material.
    ///
    /// `quantity` is the raw text of the quantity field and must parse as a
    /// positive integer. The transaction snapshots the material's display
    /// name as it is at submission time.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::IncompleteMovement`] if nothing is selected or the
    ///   quantity is not a positive integer
    /// - [`InventoryError::MaterialNotFound`] if the selection no longer
    ///   resolves
    /// - [`InventoryError::InsufficientStock`] / [`InventoryError::StockOverflow`]
    ///   from the stock adjustment
    pub fn submit_movement<Tz: TimeZone>(
        &mut self,
        selection: Option<MaterialKey>,
        quantity: &str,
        action: Movement,
        at: &DateTime<Tz>,
    ) -> Result<&Transaction, InventoryError>
    where
        Tz::Offset: Display,
    {
        let _span = tracing::debug_span!("submit_movement", ?selection, quantity, ?action).entered();

        let key = selection.ok_or(InventoryError::IncompleteMovement)?;
        let quantity = parse_quantity(quantity).ok_or(InventoryError::IncompleteMovement)?;

        let material = self.catalog.adjust_stock(key, quantity, action)?;
        let item_name = material.display_name();

        Ok(self.log.record(item_name, quantity, action, at))
    }

    /// Validates the raw material form and appends a new material.
    ///
    /// # Errors
    ///
    /// [`InventoryError::IncompleteMaterial`] for blank fields or a bad stock
    /// value, [`InventoryError::CodesExhausted`] if no code is left.
    pub fn add_material(
        &mut self,
        name: &str,
        brand: &str,
        category: &str,
        stock: &str,
    ) -> Result<&Material, InventoryError> {
        let draft = MaterialDraft::parse(name, brand, category, stock)?;
        self.catalog.add(draft)
    }

    /// Validates the raw material form and replaces the material's fields.
    ///
    /// # Errors
    ///
    /// [`InventoryError::IncompleteMaterial`] or
    /// [`InventoryError::MaterialNotFound`].
    pub fn edit_material(
        &mut self,
        key: MaterialKey,
        name: &str,
        brand: &str,
        category: &str,
        stock: &str,
    ) -> Result<&Material, InventoryError> {
        let draft = MaterialDraft::parse(name, brand, category, stock)?;
        self.catalog.edit(key, draft)
    }

    /// Removes a material. Recorded history is left untouched.
    ///
    /// # Errors
    ///
    /// [`InventoryError::MaterialNotFound`] if the key is unknown.
    pub fn delete_material(&mut self, key: MaterialKey) -> Result<Material, InventoryError> {
        self.catalog.remove(key)
    }
}

/// Strict positive-integer parse of the quantity field.
fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|q| *q > 0)
}
