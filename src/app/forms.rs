//! Raw form buffers for the movement form and the material form.
//!
//! Forms hold exactly what the user typed. Validation happens when the form
//! is submitted, in the inventory layer, so an invalid form can always be
//! corrected in place.

use super::modes::Suggest;
use crate::domain::{Material, MaterialKey, Movement};

/// Stock movement form: item search, quantity and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementForm {
    /// Text of the search field.
    pub query: String,
    /// Material picked from the suggestions, re-validated on submit.
    pub selection: Option<MaterialKey>,
    /// Text of the quantity field.
    pub quantity: String,
    pub action: Movement,
    pub suggest: Suggest,
    /// Highlighted row in the suggestion panel.
    pub suggestion_cursor: usize,
}

impl MovementForm {
    /// Appends a character to the query. Any previous selection is dropped.
    pub fn type_query(&mut self, c: char) {
        self.query.push(c);
        self.query_changed();
    }

    /// Removes the last query character. Any previous selection is dropped.
    pub fn erase_query(&mut self) {
        if self.query.pop().is_some() {
            self.query_changed();
        }
    }

    fn query_changed(&mut self) {
        self.selection = None;
        self.open_suggestions();
    }

    pub fn open_suggestions(&mut self) {
        self.suggest = Suggest::Suggesting;
        self.suggestion_cursor = 0;
    }

    pub fn close_suggestions(&mut self) {
        self.suggest = Suggest::Idle;
        self.suggestion_cursor = 0;
    }

    /// Binds the selection to `material` and shows its label in the search
    /// field.
    pub fn pick(&mut self, material: &Material) {
        self.query = material.label();
        self.selection = Some(material.key);
        self.close_suggestions();
    }

    /// Moves the suggestion cursor with wrap-around over `count` rows.
    pub fn move_suggestion(&mut self, count: usize, down: bool) {
        if count == 0 {
            self.suggestion_cursor = 0;
            return;
        }
        let cursor = self.suggestion_cursor.min(count - 1);
        self.suggestion_cursor = if down {
            (cursor + 1) % count
        } else if cursor == 0 {
            count - 1
        } else {
            cursor - 1
        };
    }

    /// Appends a digit to the quantity. Non-digits are ignored.
    ///
    /// Returns whether the field changed.
    pub fn type_quantity(&mut self, c: char) -> bool {
        if c.is_ascii_digit() {
            self.quantity.push(c);
            true
        } else {
            false
        }
    }

    pub fn erase_quantity(&mut self) {
        self.quantity.pop();
    }

    /// Empties every field and resets the direction to stock-in.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fields of the material form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialField {
    #[default]
    Name,
    Brand,
    Category,
    Stock,
}

impl MaterialField {
    const ORDER: [Self; 4] = [Self::Name, Self::Brand, Self::Category, Self::Stock];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nama Barang",
            Self::Brand => "Merk",
            Self::Category => "Kategori",
            Self::Stock => "Stok",
        }
    }

    /// All fields in tab order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        Self::ORDER
    }
}

/// Add/edit material form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialForm {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub stock: String,
    pub focus: MaterialField,
    /// Material being edited; `None` when adding.
    pub editing: Option<MaterialKey>,
}

impl MaterialForm {
    /// Blank form for a new material, category preset to `category`.
    #[must_use]
    pub fn for_new(category: Option<&str>) -> Self {
        Self {
            category: category.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Form prefilled with an existing material.
    #[must_use]
    pub fn for_edit(material: &Material) -> Self {
        Self {
            name: material.name.clone(),
            brand: material.brand.clone(),
            category: material.category.clone(),
            stock: material.stock.to_string(),
            focus: MaterialField::Name,
            editing: Some(material.key),
        }
    }

    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: MaterialField) -> &str {
        match field {
            MaterialField::Name => &self.name,
            MaterialField::Brand => &self.brand,
            MaterialField::Category => &self.category,
            MaterialField::Stock => &self.stock,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            MaterialField::Name => &mut self.name,
            MaterialField::Brand => &mut self.brand,
            MaterialField::Category => &mut self.category,
            MaterialField::Stock => &mut self.stock,
        }
    }

    /// Types into the focused field. The stock field takes digits only.
    pub fn type_char(&mut self, c: char) {
        if self.focus == MaterialField::Stock && !c.is_ascii_digit() {
            return;
        }
        self.focused_mut().push(c);
    }

    pub fn erase(&mut self) {
        self.focused_mut().pop();
    }

    /// Replaces the category with the next or previous preset.
    ///
    /// Free text that matches no preset cycles from the start of the list.
    pub fn cycle_category(&mut self, presets: &[String], forward: bool) {
        if presets.is_empty() {
            return;
        }
        let current = presets
            .iter()
            .position(|p| p.eq_ignore_ascii_case(self.category.trim()));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => presets.len() - 1,
            (Some(i), true) => (i + 1) % presets.len(),
            (Some(i), false) => (i + presets.len() - 1) % presets.len(),
        };
        self.category.clone_from(&presets[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed::seed_materials;

    #[test]
    fn test_typing_after_pick_clears_selection() {
        let seed = seed_materials();
        let mut form = MovementForm::default();
        form.pick(&seed[2]);
        assert_eq!(form.query, "Pulpen - Pilot");
        assert_eq!(form.selection, Some(MaterialKey(3)));
        assert_eq!(form.suggest, Suggest::Idle);

        form.type_query('x');
        assert_eq!(form.selection, None);
        assert_eq!(form.suggest, Suggest::Suggesting);
    }

    #[test]
    fn test_suggestion_cursor_wraps() {
        let mut form = MovementForm::default();
        form.move_suggestion(3, false);
        assert_eq!(form.suggestion_cursor, 2);
        form.move_suggestion(3, true);
        assert_eq!(form.suggestion_cursor, 0);
        form.suggestion_cursor = 7;
        form.move_suggestion(2, true);
        assert_eq!(form.suggestion_cursor, 0);
    }

    #[test]
    fn test_quantity_takes_digits_only() {
        let mut form = MovementForm::default();
        assert!(form.type_quantity('1'));
        assert!(!form.type_quantity('a'));
        assert!(form.type_quantity('0'));
        assert_eq!(form.quantity, "10");
    }

    #[test]
    fn test_material_field_order_wraps() {
        assert_eq!(MaterialField::Stock.next(), MaterialField::Name);
        assert_eq!(MaterialField::Name.previous(), MaterialField::Stock);
        assert_eq!(MaterialField::Brand.next(), MaterialField::Category);
    }

    #[test]
    fn test_cycle_category() {
        let presets: Vec<String> = ["Alat Tulis", "Kertas", "Lainnya"].map(String::from).to_vec();
        let mut form = MaterialForm::for_new(None);
        form.cycle_category(&presets, true);
        assert_eq!(form.category, "Alat Tulis");
        form.cycle_category(&presets, false);
        assert_eq!(form.category, "Lainnya");
        form.category = "kertas".into();
        form.cycle_category(&presets, true);
        assert_eq!(form.category, "Lainnya");
    }

    #[test]
    fn test_stock_field_rejects_letters() {
        let mut form = MaterialForm::for_new(Some("Kertas"));
        form.focus = MaterialField::Stock;
        form.type_char('4');
        form.type_char('x');
        assert_eq!(form.stock, "4");
    }
}
