//! Starter catalog loaded when the plugin opens.

use crate::domain::{Material, MaterialCode, MaterialKey};

/// `(code, name, brand, stock, category)` rows of the starter catalog.
const SEED: [(&str, &str, &str, u32, &str); 10] = [
    ("PEN-001", "Pensil 2B", "Faber Castell", 50, "Alat Tulis"),
    ("PEN-002", "Pensil 2B", "Staedtler", 30, "Alat Tulis"),
    ("PUL-001", "Pulpen", "Pilot", 25, "Alat Tulis"),
    ("PUL-002", "Pulpen", "Zebra", 20, "Alat Tulis"),
    ("SPI-001", "Spidol", "Snowman", 12, "Alat Tulis"),
    ("SPI-002", "Spidol", "Pilot", 8, "Alat Tulis"),
    ("ERA-001", "Penghapus", "Faber Castell", 15, "Alat Tulis"),
    ("RUL-001", "Penggaris 30cm", "Butterfly", 10, "Alat Tulis"),
    ("PAP-001", "Kertas A4", "SiDU", 100, "Kertas"),
    ("STA-001", "Stapler", "Kenko", 5, "Alat Kantor"),
];

/// The starter catalog, keyed `1..=10` in listing order.
#[must_use]
pub fn seed_materials() -> Vec<Material> {
    (1_u64..)
        .zip(SEED)
        .filter_map(|(key, (code, name, brand, stock, category))| {
            Some(Material {
                key: MaterialKey(key),
                code: MaterialCode::parse(code)?,
                name: name.to_string(),
                brand: brand.to_string(),
                stock,
                category: category.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses_completely() {
        let seed = seed_materials();
        assert_eq!(seed.len(), SEED.len());
        assert_eq!(seed[0].key, MaterialKey(1));
        assert_eq!(seed[9].code.to_string(), "STA-001");
    }
}
