//! Material domain model.
//!
//! A material is one stocked item/brand combination in the catalog, e.g.
//! "Pulpen - Pilot". It carries an opaque [`MaterialKey`] used for selection
//! and a human-readable [`MaterialCode`] shown to users.

use super::code::MaterialCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, session-unique material identifier.
///
/// Keys are issued by the catalog and never reused within a session. The UI
/// captures a key when the user picks a suggestion and re-validates it when
/// the movement is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialKey(pub u64);

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub key: MaterialKey,
    pub code: MaterialCode,
    pub name: String,
    pub brand: String,
    pub stock: u32,
    pub category: String,
}

impl Material {
    /// Short label used in the search field after a suggestion is picked.
    ///
    /// ```
    /// use stok::domain::{Material, MaterialCode, MaterialKey};
    ///
    /// let pen = Material {
    ///     key: MaterialKey(3),
    ///     code: MaterialCode::parse("PUL-001").unwrap(),
    ///     name: "Pulpen".to_string(),
    ///     brand: "Pilot".to_string(),
    ///     stock: 25,
    ///     category: "Alat Tulis".to_string(),
    /// };
    /// assert_eq!(pen.label(), "Pulpen - Pilot");
    /// assert_eq!(pen.display_name(), "Pulpen - Pilot (PUL-001)");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.brand)
    }

    /// Full display string, snapshotted into transactions.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {} ({})", self.name, self.brand, self.code)
    }

    /// Case-insensitive substring match on the material name.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Validated field values for creating or editing a material.
///
/// Built from raw form input with [`MaterialDraft::parse`]; the code is not
/// part of the draft because it is derived on creation and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub stock: u32,
}

impl MaterialDraft {
    /// Validates raw form fields.
    ///
    /// Every text field must be non-blank after trimming and `stock` must parse
    /// as a non-negative integer. Text fields are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::IncompleteMaterial`](super::InventoryError::IncompleteMaterial)
    /// when any check fails.
    pub fn parse(
        name: &str,
        brand: &str,
        category: &str,
        stock: &str,
    ) -> Result<Self, super::InventoryError> {
        let (name, brand, category) = (name.trim(), brand.trim(), category.trim());
        if name.is_empty() || brand.is_empty() || category.is_empty() {
            return Err(super::InventoryError::IncompleteMaterial);
        }

        let stock = stock
            .trim()
            .parse::<u32>()
            .map_err(|_| super::InventoryError::IncompleteMaterial)?;

        Ok(Self {
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            stock,
        })
    }
}
