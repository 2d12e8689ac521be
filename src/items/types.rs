use serde::{Deserialize, Serialize};

use crate::character::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Material,
    Consumable,
    Equipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    /// Returns the display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// A catalog item. Only `Equipment`-kind items carry a `slot` and are
/// eligible to be worn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub slot: Option<EquipmentSlot>,
}

impl Item {
    pub fn is_equippable(&self) -> bool {
        self.kind == ItemKind::Equipment && self.slot.is_some()
    }
}

/// One entry of a monster's drop table. Entries are rolled independently;
/// several can pay out from a single kill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub item_id: String,
    /// Probability of the drop paying out, 0.0 to 1.0.
    pub chance: f64,
    /// Copies granted when the roll succeeds.
    pub quantity: u32,
}
