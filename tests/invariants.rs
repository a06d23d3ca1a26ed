//! Property tests for the inventory invariants.

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;
use stok::domain::MaterialKey;
use stok::inventory::Inventory;
use stok::{InventoryError, Movement};

#[derive(Debug, Clone)]
enum Op {
    Move { pick: usize, quantity: u32, action: Movement },
    Add { category: usize, stock: u32 },
    Delete { pick: usize },
}

const CATEGORIES: [&str; 5] = ["Alat Tulis", "Kertas", "Alat Kantor", "Elektronik", "Lainnya"];

fn op() -> impl Strategy<Value = Op> {
    let action = prop_oneof![Just(Movement::In), Just(Movement::Out)];
    prop_oneof![
        6 => (any::<usize>(), 0_u32..80, action).prop_map(|(pick, quantity, action)| Op::Move { pick, quantity, action }),
        2 => (0..CATEGORIES.len(), 0_u32..50).prop_map(|(category, stock)| Op::Add { category, stock }),
        1 => any::<usize>().prop_map(|pick| Op::Delete { pick }),
    ]
}

fn key_at(inventory: &Inventory, pick: usize) -> Option<MaterialKey> {
    let list = inventory.catalog.list();
    (!list.is_empty()).then(|| list[pick % list.len()].key)
}

proptest! {
    #[test]
    fn rejected_movements_change_nothing(ops in prop::collection::vec(op(), 0..60)) {
        let mut inventory = Inventory::seeded();
        let mut recorded = 0;

        for op in ops {
            match op {
                Op::Move { pick, quantity, action } => {
                    let key = key_at(&inventory, pick);
                    let before = inventory.clone();
                    let on_hand = key.and_then(|k| inventory.catalog.get(k)).map(|m| m.stock);

                    let outcome = inventory
                        .submit_movement(key, &quantity.to_string(), action, &Utc::now())
                        .map(|_| ());
                    match outcome {
                        Ok(()) => {
                            recorded += 1;
                            prop_assert!(quantity > 0);
                        }
                        Err(e) => {
                            prop_assert_eq!(&inventory, &before);
                            if action == Movement::Out && quantity > 0 {
                                if let Some(stock) = on_hand {
                                    prop_assert!(quantity > stock);
                                    prop_assert_eq!(e, InventoryError::InsufficientStock { available: stock, requested: quantity });
                                }
                            }
                        }
                    }
                }
                Op::Add { category, stock } => {
                    inventory
                        .add_material("Barang", "Merk", CATEGORIES[category], &stock.to_string())
                        .unwrap();
                }
                Op::Delete { pick } => {
                    if let Some(key) = key_at(&inventory, pick) {
                        inventory.delete_material(key).unwrap();
                    }
                }
            }
        }

        prop_assert_eq!(inventory.log.len(), recorded);
    }

    #[test]
    fn codes_and_keys_stay_unique(ops in prop::collection::vec(op(), 0..60)) {
        let mut inventory = Inventory::seeded();

        for op in ops {
            match op {
                Op::Add { category, stock } => {
                    inventory
                        .add_material("Barang", "Merk", CATEGORIES[category], &stock.to_string())
                        .unwrap();
                }
                Op::Delete { pick } => {
                    if let Some(key) = key_at(&inventory, pick) {
                        inventory.delete_material(key).unwrap();
                    }
                }
                Op::Move { .. } => {}
            }

            let codes: HashSet<String> = inventory.catalog.list().iter().map(|m| m.code.to_string()).collect();
            let keys: HashSet<MaterialKey> = inventory.catalog.list().iter().map(|m| m.key).collect();
            prop_assert_eq!(codes.len(), inventory.catalog.len());
            prop_assert_eq!(keys.len(), inventory.catalog.len());
        }
    }

    #[test]
    fn transaction_ids_are_unique(count in 1_usize..40) {
        let mut inventory = Inventory::seeded();
        for _ in 0..count {
            inventory
                .submit_movement(Some(MaterialKey(9)), "1", Movement::In, &Utc::now())
                .unwrap();
        }
        let ids: HashSet<u64> = inventory.log.iter().map(|tx| tx.id).collect();
        prop_assert_eq!(ids.len(), count);
    }
}
