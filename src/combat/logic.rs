use log::debug;
use rand::Rng;

use super::cooldown::remaining_cooldown;
use super::math::{attack_damage, roll_dodge};
use super::types::{
    BattleOutcome, BattleResolution, BattleRound, CombatEvent, FightReport, Monster,
};
use crate::character::player::Player;
use crate::character::stats::{effective_stats, Stats};
use crate::core::constants::{MAX_BATTLE_ROUNDS, PVE_ROUND_INTERVAL_MS};
use crate::core::error::EngineError;
use crate::items::catalog::ItemCatalog;
use crate::items::drops::roll_drops;

/// A battle in progress between aggregated player stats and a monster.
///
/// The engine never sleeps: `step` resolves one round synchronously and the
/// caller decides the pacing, stepping round by round for a live battle log
/// or draining everything at once via `resolve_battle`.
///
/// Authoritative HP is signed and may go negative on the killing blow;
/// `player_hp`/`monster_hp` expose the display values clamped at 0.
#[derive(Debug, Clone)]
pub struct Battle {
    player: Stats,
    monster: Stats,
    player_hp: i64,
    monster_hp: i64,
    round: u32,
    damage_dealt: u64,
    damage_taken: u64,
}

impl Battle {
    pub fn new(player_stats: Stats, monster_stats: Stats) -> Self {
        Self {
            player: player_stats,
            monster: monster_stats,
            player_hp: player_stats.hp as i64,
            monster_hp: monster_stats.hp as i64,
            round: 0,
            damage_dealt: 0,
            damage_taken: 0,
        }
    }

    pub fn player_hp(&self) -> u32 {
        self.player_hp.max(0) as u32
    }

    pub fn monster_hp(&self) -> u32 {
        self.monster_hp.max(0) as u32
    }

    pub fn rounds_elapsed(&self) -> u32 {
        self.round
    }

    /// Checked before each round: a side at 0 HP ends the battle, as does
    /// the round safety bound.
    pub fn is_over(&self) -> bool {
        self.player_hp <= 0 || self.monster_hp <= 0 || self.round >= MAX_BATTLE_ROUNDS
    }

    /// `None` while rounds remain. The monster must be dead for a win: the
    /// player attacks first, so a round that fells the monster can never
    /// also fell the player, and a battle aborted by the round bound counts
    /// as a loss.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.is_over() {
            return None;
        }
        if self.monster_hp <= 0 {
            Some(BattleOutcome::Win)
        } else {
            Some(BattleOutcome::Loss)
        }
    }

    /// Resolves one round, or returns `None` if the battle already ended.
    ///
    /// The player strikes first; the monster strikes back in the same round
    /// only while its HP is still positive. Each strike first rolls the
    /// defender's dodge and only deals damage when the dodge fails.
    pub fn step(&mut self, rng: &mut impl Rng) -> Option<BattleRound> {
        if self.is_over() {
            return None;
        }
        self.round += 1;
        let mut events = Vec::with_capacity(2);

        if roll_dodge(self.monster.agi, self.player.agi, rng) {
            events.push(CombatEvent::MonsterDodged);
        } else {
            let damage = attack_damage(self.player.atk, self.monster.def);
            self.monster_hp -= damage as i64;
            self.damage_dealt += damage as u64;
            events.push(CombatEvent::PlayerHit {
                damage,
                monster_hp: self.monster_hp(),
            });
        }

        if self.monster_hp > 0 {
            if roll_dodge(self.player.agi, self.monster.agi, rng) {
                events.push(CombatEvent::PlayerDodged);
            } else {
                let damage = attack_damage(self.monster.atk, self.player.def);
                self.player_hp -= damage as i64;
                self.damage_taken += damage as u64;
                events.push(CombatEvent::MonsterHit {
                    damage,
                    player_hp: self.player_hp(),
                });
            }
        }

        Some(BattleRound {
            round: self.round,
            events,
        })
    }
}

/// Runs a battle to completion and returns the outcome with the full round
/// log. Deterministic for a given RNG seed.
pub fn resolve_battle(
    player_stats: &Stats,
    monster: &Monster,
    rng: &mut impl Rng,
) -> BattleResolution {
    let mut battle = Battle::new(*player_stats, monster.stats);
    let mut rounds = Vec::new();
    while let Some(round) = battle.step(rng) {
        rounds.push(round);
    }

    BattleResolution {
        outcome: battle.outcome().unwrap_or(BattleOutcome::Loss),
        rounds,
        damage_dealt: battle.damage_dealt,
        damage_taken: battle.damage_taken,
        round_interval_ms: PVE_ROUND_INTERVAL_MS,
    }
}

/// Fights a monster and applies the consequences to the player.
///
/// Preconditions are checked before anything is touched: the re-engagement
/// cooldown must have elapsed and every drop table entry must resolve in
/// the item catalog. The battle runs on the player's aggregated stats.
/// Win or lose, the fight stamps the cooldown; only a win pays out the qi
/// reward and rolls the drop table.
pub fn fight(
    player: &mut Player,
    monster: &Monster,
    items: &ItemCatalog,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<FightReport, EngineError> {
    let remaining = remaining_cooldown(
        now_ms,
        player.last_pve_fight_timestamp,
        player.last_pve_cooldown,
    );
    if remaining > 0.0 {
        return Err(EngineError::OnCooldown {
            remaining_seconds: remaining,
        });
    }
    for drop in &monster.drops {
        if items.get(&drop.item_id).is_none() {
            return Err(EngineError::UnknownItem(drop.item_id.clone()));
        }
    }

    let stats = effective_stats(&player.stats, &player.equipment);
    let resolution = resolve_battle(&stats, monster, rng);

    player.last_pve_fight_timestamp = now_ms;
    player.last_pve_cooldown = monster.cooldown;

    let (qi_gained, items_gained) = match resolution.outcome {
        BattleOutcome::Win => {
            player.cultivation_progress += monster.qi_reward as f64;
            let granted = roll_drops(&monster.drops, items, rng);
            player.inventory.extend(granted.iter().cloned());
            (monster.qi_reward, granted)
        }
        BattleOutcome::Loss => (0, Vec::new()),
    };

    debug!(
        "{} vs {}: {:?} in {} rounds, +{} qi, {} item(s)",
        player.username,
        monster.name,
        resolution.outcome,
        resolution.rounds.len(),
        qi_gained,
        items_gained.len()
    );

    Ok(FightReport::from_resolution(
        resolution,
        qi_gained,
        items_gained,
    ))
}
