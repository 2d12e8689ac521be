use rand::Rng;

use super::catalog::ItemCatalog;
use super::types::{Item, ItemDrop};

/// Rolls a drop table after a kill.
///
/// Each entry is an independent Bernoulli trial: a single kill can pay out
/// several entries, or none. A successful roll grants `quantity` clones of
/// the catalog item. Entries whose id is missing from the catalog are
/// skipped here; `fight` validates the table up front so a caller going
/// through the combat path sees the missing id as a typed error instead.
pub fn roll_drops(drops: &[ItemDrop], catalog: &ItemCatalog, rng: &mut impl Rng) -> Vec<Item> {
    let mut granted = Vec::new();
    for drop in drops {
        if rng.gen::<f64>() >= drop.chance {
            continue;
        }
        if let Some(item) = catalog.get(&drop.item_id) {
            for _ in 0..drop.quantity {
                granted.push(item.clone());
            }
        }
    }
    granted
}
