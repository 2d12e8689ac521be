use serde::{Deserialize, Serialize};

use super::types::{EquipmentSlot, Item};
use crate::character::player::Player;
use crate::core::error::EngineError;

/// The three wearable slots. At most one item per slot; a worn item lives
/// here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Accessory => &self.accessory,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) {
        self.replace(slot, item);
    }

    /// Swaps the slot's content, returning whatever was worn before.
    pub fn replace(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}

/// Moves the first inventory entry with `item_id` into its equipment slot.
///
/// A previously worn item returns to the inventory in the same call, so the
/// transfer is atomic: no item is ever duplicated or lost, and nothing sits
/// in both the inventory and a slot.
pub fn equip(player: &mut Player, item_id: &str) -> Result<(), EngineError> {
    let index = player
        .inventory
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| EngineError::UnknownItem(item_id.to_string()))?;

    let slot = match player.inventory[index].slot {
        Some(slot) if player.inventory[index].is_equippable() => slot,
        _ => return Err(EngineError::NotEquippable(item_id.to_string())),
    };

    let item = player.inventory.remove(index);
    if let Some(previous) = player.equipment.replace(slot, Some(item)) {
        player.inventory.push(previous);
    }
    Ok(())
}

/// Moves the slot's item (if any) back into the inventory.
/// Returns whether anything was actually unequipped.
pub fn unequip(player: &mut Player, slot: EquipmentSlot) -> bool {
    match player.equipment.replace(slot, None) {
        Some(item) => {
            player.inventory.push(item);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::stats::Stats;
    use crate::items::types::ItemKind;

    fn gear(id: &str, slot: EquipmentSlot, atk: u32) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            kind: ItemKind::Equipment,
            stats: Some(Stats::new(0, atk, 0, 0)),
            slot: Some(slot),
        }
    }

    fn test_player() -> Player {
        Player::new(
            "Test".to_string(),
            "realm-mortal".to_string(),
            Stats::new(100, 10, 5, 5),
        )
    }

    fn total_items(player: &Player) -> usize {
        player.inventory.len() + player.equipment.iter_equipped().count()
    }

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert!(eq.armor.is_none());
        assert!(eq.accessory.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
    }

    #[test]
    fn test_equip_moves_item_out_of_inventory() {
        let mut player = test_player();
        player.inventory.push(gear("sword", EquipmentSlot::Weapon, 5));

        equip(&mut player, "sword").unwrap();

        assert!(player.inventory.is_empty());
        assert_eq!(
            player.equipment.get(EquipmentSlot::Weapon).as_ref().unwrap().id,
            "sword"
        );
    }

    #[test]
    fn test_equip_swaps_previous_item_back() {
        let mut player = test_player();
        player.inventory.push(gear("old-sword", EquipmentSlot::Weapon, 2));
        player.inventory.push(gear("new-sword", EquipmentSlot::Weapon, 8));

        equip(&mut player, "old-sword").unwrap();
        let before = total_items(&player);
        equip(&mut player, "new-sword").unwrap();

        assert_eq!(total_items(&player), before);
        assert_eq!(
            player.equipment.get(EquipmentSlot::Weapon).as_ref().unwrap().id,
            "new-sword"
        );
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].id, "old-sword");
    }

    #[test]
    fn test_equip_unknown_item_fails_untouched() {
        let mut player = test_player();
        let snapshot = player.clone();

        let err = equip(&mut player, "ghost").unwrap_err();
        assert_eq!(err, EngineError::UnknownItem("ghost".to_string()));
        assert_eq!(player, snapshot);
    }

    #[test]
    fn test_equip_rejects_non_equipment() {
        let mut player = test_player();
        player.inventory.push(Item {
            id: "herb".to_string(),
            name: "Spirit Herb".to_string(),
            description: String::new(),
            kind: ItemKind::Material,
            stats: None,
            slot: None,
        });
        let snapshot = player.clone();

        let err = equip(&mut player, "herb").unwrap_err();
        assert_eq!(err, EngineError::NotEquippable("herb".to_string()));
        assert_eq!(player, snapshot);
    }

    #[test]
    fn test_unequip_returns_item_to_inventory() {
        let mut player = test_player();
        player.inventory.push(gear("robe", EquipmentSlot::Armor, 0));
        equip(&mut player, "robe").unwrap();

        assert!(unequip(&mut player, EquipmentSlot::Armor));
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].id, "robe");
        assert!(player.equipment.get(EquipmentSlot::Armor).is_none());

        // Empty slot is a no-op.
        assert!(!unequip(&mut player, EquipmentSlot::Armor));
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_equip_all_three_slots() {
        let mut player = test_player();
        for slot in EquipmentSlot::all() {
            let id = slot.name().to_lowercase();
            player.inventory.push(gear(&id, slot, 1));
            equip(&mut player, &id).unwrap();
        }

        assert!(player.inventory.is_empty());
        assert_eq!(player.equipment.iter_equipped().count(), 3);
        for slot in EquipmentSlot::all() {
            assert!(player.equipment.get(slot).is_some(), "{:?} empty", slot);
        }
    }

    #[test]
    fn test_equip_only_picks_first_matching_copy() {
        let mut player = test_player();
        player.inventory.push(gear("ring", EquipmentSlot::Accessory, 1));
        player.inventory.push(gear("ring", EquipmentSlot::Accessory, 1));

        equip(&mut player, "ring").unwrap();

        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.equipment.iter_equipped().count(), 1);
    }
}
