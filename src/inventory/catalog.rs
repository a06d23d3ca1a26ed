//! Catalog store: the ordered collection of materials.
//!
//! The catalog owns key issuance and code allocation, and enforces the stock
//! invariants. Every mutating method validates first and mutates last, so a
//! rejected call leaves the catalog exactly as it was.

use crate::domain::code::prefix_from_category;
use crate::domain::{InventoryError, Material, MaterialCode, MaterialDraft, MaterialKey, Movement};

/// Ordered collection of materials, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    materials: Vec<Material>,
    /// Highest key issued so far; new keys are strictly greater.
    last_key: u64,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `materials` in the given order.
    #[must_use]
    pub fn with_materials(materials: Vec<Material>) -> Self {
        let last_key = materials.iter().map(|m| m.key.0).max().unwrap_or(0);
        Self { materials, last_key }
    }

    /// All materials in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Material] {
        &self.materials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Looks up a material by key.
    #[must_use]
    pub fn get(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.iter().find(|m| m.key == key)
    }

    /// Index of a material in insertion order.
    #[must_use]
    pub fn position(&self, key: MaterialKey) -> Option<usize> {
        self.materials.iter().position(|m| m.key == key)
    }

    /// Materials whose name contains `query`, ignoring case, in insertion order.
    ///
    /// An empty query matches every material; callers that hide suggestions
    /// for an empty query do so themselves.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Material> {
        let needle = query.to_lowercase();
        self.materials.iter().filter(|m| m.name_contains(&needle)).collect()
    }

    /// Code prefix a new material in `category` would get.
    ///
    /// Reuses the prefix already established by the category's materials when
    /// they all agree on one (the seed's "Kertas" items are `PAP-*`), and
    /// otherwise derives it from the category name.
    #[must_use]
    pub fn prefix_for(&self, category: &str) -> String {
        let wanted = category.trim().to_lowercase();
        let mut prefixes = self
            .materials
            .iter()
            .filter(|m| m.category.trim().to_lowercase() == wanted)
            .map(|m| m.code.prefix());

        match prefixes.next() {
            Some(first) if prefixes.all(|p| p == first) => first.to_string(),
            _ => prefix_from_category(category),
        }
    }

    /// Appends a new material and returns it.
    ///
    /// The code is allocated one past the highest sequence for the prefix, so
    /// codes stay unique.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::CodesExhausted`] if the prefix has no
    /// sequence numbers left.
    pub fn add(&mut self, draft: MaterialDraft) -> Result<&Material, InventoryError> {
        let prefix = self.prefix_for(&draft.category);
        let code = MaterialCode::next_in(self.materials.iter().map(|m| &m.code), &prefix)
            .ok_or_else(|| InventoryError::CodesExhausted { prefix: prefix.clone() })?;
        let key = self.issue_key();

        tracing::debug!(material_key = %key, material_code = %code, name = %draft.name, "adding material");

        self.materials.push(Material {
            key,
            code,
            name: draft.name,
            brand: draft.brand,
            stock: draft.stock,
            category: draft.category,
        });

        Ok(&self.materials[self.materials.len() - 1])
    }

    /// Applies a stock movement to one material and returns it.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::IncompleteMovement`] if `quantity` is zero
    /// - [`InventoryError::MaterialNotFound`] if `key` is not in the catalog
    /// - [`InventoryError::InsufficientStock`] for an outgoing movement larger
    ///   than the stock on hand
    /// - [`InventoryError::StockOverflow`] if an incoming movement overflows
    pub fn adjust_stock(
        &mut self,
        key: MaterialKey,
        quantity: u32,
        direction: Movement,
    ) -> Result<&Material, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::IncompleteMovement);
        }

        let material = self
            .materials
            .iter_mut()
            .find(|m| m.key == key)
            .ok_or(InventoryError::MaterialNotFound)?;

        let new_stock = match direction {
            Movement::In => material
                .stock
                .checked_add(quantity)
                .ok_or(InventoryError::StockOverflow)?,
            Movement::Out => material.stock.checked_sub(quantity).ok_or(
                InventoryError::InsufficientStock {
                    available: material.stock,
                    requested: quantity,
                },
            )?,
        };

        tracing::debug!(
            material_code = %material.code,
            old_stock = material.stock,
            new_stock,
            ?direction,
            "stock adjusted"
        );
        material.stock = new_stock;
        Ok(material)
    }

    /// Replaces name, brand, category and stock of a material.
    ///
    /// The material code is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::MaterialNotFound`] if `key` is unknown.
    pub fn edit(&mut self, key: MaterialKey, draft: MaterialDraft) -> Result<&Material, InventoryError> {
        let material = self
            .materials
            .iter_mut()
            .find(|m| m.key == key)
            .ok_or(InventoryError::MaterialNotFound)?;

        tracing::debug!(material_code = %material.code, "editing material");

        material.name = draft.name;
        material.brand = draft.brand;
        material.category = draft.category;
        material.stock = draft.stock;
        Ok(material)
    }

    /// Removes a material and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::MaterialNotFound`] if `key` is unknown.
    pub fn remove(&mut self, key: MaterialKey) -> Result<Material, InventoryError> {
        let index = self.position(key).ok_or(InventoryError::MaterialNotFound)?;
        let removed = self.materials.remove(index);
        tracing::debug!(material_code = %removed.code, "material removed");
        Ok(removed)
    }

    /// Issues a key derived from the current time in milliseconds, bumped past
    /// the last issued key when the clock hasn't moved.
    fn issue_key(&mut self) -> MaterialKey {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_key = now.max(self.last_key.saturating_add(1));
        MaterialKey(self.last_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed::seed_materials;
    use std::collections::HashSet;

    fn seeded() -> Catalog {
        Catalog::with_materials(seed_materials())
    }

    fn draft(name: &str, brand: &str, category: &str, stock: u32) -> MaterialDraft {
        MaterialDraft {
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            stock,
        }
    }

    #[test]
    fn test_filter_pul_returns_both_pulpen() {
        let catalog = seeded();
        let hits: Vec<String> = catalog.filter("pul").iter().map(|m| m.label()).collect();
        assert_eq!(hits, vec!["Pulpen - Pilot", "Pulpen - Zebra"]);
        assert_eq!(catalog.filter("PUL").len(), 2);
    }

    #[test]
    fn test_filter_keeps_insertion_order() {
        let catalog = seeded();
        let codes: Vec<String> = catalog.filter("pen").iter().map(|m| m.code.to_string()).collect();
        assert_eq!(codes, vec!["PEN-001", "PEN-002", "PUL-001", "PUL-002", "ERA-001", "RUL-001"]);
    }

    #[test]
    fn test_add_kertas_continues_paper_sequence() {
        let mut catalog = seeded();
        let added = catalog.add(draft("Kertas F4", "SiDU", "Kertas", 40)).unwrap();
        assert_eq!(added.code.to_string(), "PAP-002");
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.list().last().map(|m| m.name.as_str()), Some("Kertas F4"));
    }

    #[test]
    fn test_add_mixed_prefix_category_derives_from_name() {
        let mut catalog = seeded();
        let added = catalog.add(draft("Tipe-X", "Kenko", "Alat Tulis", 3)).unwrap();
        assert_eq!(added.code.to_string(), "ALA-001");
    }

    #[test]
    fn test_add_new_category_starts_at_one() {
        let mut catalog = seeded();
        let first = catalog.add(draft("Mouse", "Logitech", "Elektronik", 4)).unwrap().code.to_string();
        let second = catalog.add(draft("Keyboard", "Logitech", "Elektronik", 2)).unwrap().code.to_string();
        assert_eq!(first, "ELE-001");
        assert_eq!(second, "ELE-002");
    }

    #[test]
    fn test_added_keys_are_unique() {
        let mut catalog = seeded();
        for i in 0..20 {
            catalog.add(draft(&format!("Item {i}"), "Merk", "Lainnya", 1)).unwrap();
        }
        let keys: HashSet<MaterialKey> = catalog.list().iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn test_adjust_in_and_out() {
        let mut catalog = seeded();
        let key = MaterialKey(8); // Penggaris, stock 10
        assert_eq!(catalog.adjust_stock(key, 5, Movement::In).unwrap().stock, 15);
        assert_eq!(catalog.adjust_stock(key, 15, Movement::Out).unwrap().stock, 0);
    }

    #[test]
    fn test_adjust_out_beyond_stock_is_rejected() {
        let mut catalog = seeded();
        let before = catalog.clone();
        let err = catalog.adjust_stock(MaterialKey(8), 20, Movement::Out).unwrap_err();
        assert_eq!(err, InventoryError::InsufficientStock { available: 10, requested: 20 });
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_adjust_rejects_zero_and_unknown() {
        let mut catalog = seeded();
        assert_eq!(
            catalog.adjust_stock(MaterialKey(1), 0, Movement::In).unwrap_err(),
            InventoryError::IncompleteMovement
        );
        assert_eq!(
            catalog.adjust_stock(MaterialKey(999), 1, Movement::In).unwrap_err(),
            InventoryError::MaterialNotFound
        );
    }

    #[test]
    fn test_adjust_in_overflow_is_rejected() {
        let mut catalog = seeded();
        catalog.adjust_stock(MaterialKey(1), u32::MAX - 50, Movement::In).unwrap();
        assert_eq!(
            catalog.adjust_stock(MaterialKey(1), 1, Movement::In).unwrap_err(),
            InventoryError::StockOverflow
        );
        assert_eq!(catalog.get(MaterialKey(1)).unwrap().stock, u32::MAX);
    }

    #[test]
    fn test_edit_keeps_code() {
        let mut catalog = seeded();
        let edited = catalog
            .edit(MaterialKey(3), draft("Pulpen Gel", "Pilot", "Alat Tulis", 40))
            .unwrap();
        assert_eq!(edited.code.to_string(), "PUL-001");
        assert_eq!(edited.name, "Pulpen Gel");
        assert_eq!(edited.stock, 40);
    }

    #[test]
    fn test_remove() {
        let mut catalog = seeded();
        let removed = catalog.remove(MaterialKey(10)).unwrap();
        assert_eq!(removed.code.to_string(), "STA-001");
        assert!(catalog.get(MaterialKey(10)).is_none());
        assert_eq!(catalog.remove(MaterialKey(10)).unwrap_err(), InventoryError::MaterialNotFound);
    }

    #[test]
    fn test_keys_after_seed_do_not_collide() {
        let mut catalog = seeded();
        let key = catalog.add(draft("Lem", "UHU", "Lainnya", 1)).unwrap().key;
        assert!(key.0 > 10);
    }
}
