use serde::{Deserialize, Serialize};

use crate::character::stats::Stats;
use crate::items::equipment::Equipment;
use crate::items::types::Item;

/// A cultivator's full progression snapshot.
///
/// The engine only ever mutates a `Player` through its operations
/// (refinement, breakthrough, combat, equip transfers, qi accrual); when
/// one of those returns an error the snapshot is untouched.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so snapshots
/// persisted by older callers keep deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub username: String,
    /// Id of the realm the player currently cultivates in.
    pub realm_id: String,
    /// Accrued qi within the current realm. Fractional because idle accrual
    /// runs on real elapsed time.
    pub cultivation_progress: f64,
    /// Lifetime body refinement count, never reset.
    pub body_level: u32,
    /// Refinements performed in the current realm; resets to 0 on a
    /// successful breakthrough and never exceeds the per-realm cap.
    #[serde(default)]
    pub body_refinements_in_realm: u32,
    /// Base stats, before equipment bonuses.
    pub stats: Stats,
    pub spirit_stones: u64,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    /// Unix milliseconds of the last PvE fight, 0 if the player never fought.
    #[serde(default)]
    pub last_pve_fight_timestamp: i64,
    /// Cooldown in seconds imposed by the last fought monster.
    #[serde(default)]
    pub last_pve_cooldown: u32,
}

impl Player {
    /// Creates a fresh player in the given realm with no progress.
    pub fn new(username: String, realm_id: String, base_stats: Stats) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            username,
            realm_id,
            cultivation_progress: 0.0,
            body_level: 0,
            body_refinements_in_realm: 0,
            stats: base_stats,
            spirit_stones: 0,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            last_pve_fight_timestamp: 0,
            last_pve_cooldown: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(
            "Test Cultivator".to_string(),
            "realm-mortal".to_string(),
            Stats::new(100, 10, 5, 5),
        );

        assert!(!player.id.is_empty());
        assert_eq!(player.realm_id, "realm-mortal");
        assert_eq!(player.cultivation_progress, 0.0);
        assert_eq!(player.body_level, 0);
        assert_eq!(player.body_refinements_in_realm, 0);
        assert_eq!(player.spirit_stones, 0);
        assert!(player.inventory.is_empty());
        assert_eq!(player.equipment.iter_equipped().count(), 0);
        assert_eq!(player.last_pve_fight_timestamp, 0);
        assert_eq!(player.last_pve_cooldown, 0);
    }

    #[test]
    fn test_players_get_distinct_ids() {
        let stats = Stats::default();
        let a = Player::new("A".to_string(), "r".to_string(), stats);
        let b = Player::new("B".to_string(), "r".to_string(), stats);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_player_serde_round_trip() {
        let mut player = Player::new(
            "Round Trip".to_string(),
            "realm-foundation".to_string(),
            Stats::new(120, 25, 12, 8),
        );
        player.cultivation_progress = 345.5;
        player.body_level = 23;
        player.body_refinements_in_realm = 3;
        player.spirit_stones = 77;
        player.last_pve_fight_timestamp = 1_700_000_000_000;
        player.last_pve_cooldown = 30;

        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
    }

    #[test]
    fn test_player_deserializes_without_newer_fields() {
        // Snapshots written before the per-realm counter and PvE cooldown
        // existed must still load.
        let json = r#"{
            "id": "p1",
            "username": "Elder",
            "realm_id": "realm-mortal",
            "cultivation_progress": 12.0,
            "body_level": 4,
            "stats": { "hp": 100, "atk": 10, "def": 5, "agi": 5 },
            "spirit_stones": 0,
            "inventory": [],
            "equipment": { "weapon": null, "armor": null, "accessory": null }
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.body_refinements_in_realm, 0);
        assert_eq!(player.last_pve_fight_timestamp, 0);
        assert_eq!(player.last_pve_cooldown, 0);
    }
}
