use serde::{Deserialize, Serialize};

use crate::items::equipment::Equipment;

/// The four combat statistics shared by players and monsters.
///
/// `Stats` is a plain value: it is always copied between entities, never
/// shared, so mutating one holder cannot bleed into another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub agi: u32,
}

impl Stats {
    pub fn new(hp: u32, atk: u32, def: u32, agi: u32) -> Self {
        Self { hp, atk, def, agi }
    }

    /// Component-wise sum, saturating at the numeric ceiling.
    pub fn add(&self, other: &Stats) -> Stats {
        Stats {
            hp: self.hp.saturating_add(other.hp),
            atk: self.atk.saturating_add(other.atk),
            def: self.def.saturating_add(other.def),
            agi: self.agi.saturating_add(other.agi),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hp == 0 && self.atk == 0 && self.def == 0 && self.agi == 0
    }
}

/// Combines base stats with every equipped item's bonuses.
///
/// Items without a stats block contribute nothing. Pure: neither input is
/// modified and repeated calls give the same answer.
pub fn effective_stats(base: &Stats, equipment: &Equipment) -> Stats {
    equipment
        .iter_equipped()
        .filter_map(|item| item.stats.as_ref())
        .fold(*base, |total, bonus| total.add(bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{EquipmentSlot, Item, ItemKind};

    fn equipment_piece(slot: EquipmentSlot, stats: Option<Stats>) -> Item {
        Item {
            id: format!("test-{:?}", slot),
            name: "Test Gear".to_string(),
            description: String::new(),
            kind: ItemKind::Equipment,
            stats,
            slot: Some(slot),
        }
    }

    #[test]
    fn test_stats_add_component_wise() {
        let a = Stats::new(100, 20, 10, 5);
        let b = Stats::new(3, 2, 1, 0);
        assert_eq!(a.add(&b), Stats::new(103, 22, 11, 5));
    }

    #[test]
    fn test_stats_add_saturates() {
        let a = Stats::new(u32::MAX, 0, 0, 0);
        let b = Stats::new(10, 0, 0, 0);
        assert_eq!(a.add(&b).hp, u32::MAX);
    }

    #[test]
    fn test_effective_stats_no_equipment() {
        let base = Stats::new(100, 20, 10, 5);
        let equipment = Equipment::new();
        assert_eq!(effective_stats(&base, &equipment), base);
    }

    #[test]
    fn test_effective_stats_sums_all_slots() {
        let base = Stats::new(100, 20, 10, 5);
        let mut equipment = Equipment::new();
        equipment.set(
            EquipmentSlot::Weapon,
            Some(equipment_piece(
                EquipmentSlot::Weapon,
                Some(Stats::new(0, 6, 0, 0)),
            )),
        );
        equipment.set(
            EquipmentSlot::Armor,
            Some(equipment_piece(
                EquipmentSlot::Armor,
                Some(Stats::new(20, 0, 4, 0)),
            )),
        );
        equipment.set(
            EquipmentSlot::Accessory,
            Some(equipment_piece(
                EquipmentSlot::Accessory,
                Some(Stats::new(0, 0, 0, 3)),
            )),
        );

        assert_eq!(
            effective_stats(&base, &equipment),
            Stats::new(120, 26, 14, 8)
        );
    }

    #[test]
    fn test_effective_stats_item_without_stats_counts_zero() {
        let base = Stats::new(50, 10, 5, 2);
        let mut equipment = Equipment::new();
        equipment.set(
            EquipmentSlot::Weapon,
            Some(equipment_piece(EquipmentSlot::Weapon, None)),
        );
        assert_eq!(effective_stats(&base, &equipment), base);
    }
}
