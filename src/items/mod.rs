//! Items, equipment slots and drop tables.

pub mod catalog;
pub mod drops;
pub mod equipment;
pub mod types;

pub use catalog::ItemCatalog;
pub use equipment::{equip, unequip, Equipment};
pub use types::{EquipmentSlot, Item, ItemDrop, ItemKind};
