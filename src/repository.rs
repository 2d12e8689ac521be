//! Player storage boundary.
//!
//! The engine itself never touches storage; callers hand it a `Player`
//! snapshot and persist the result through an implementation of this
//! trait. The in-memory implementation backs tests and single-process
//! callers.

use std::collections::HashMap;

use crate::character::player::Player;

/// Keyed access to player snapshots.
pub trait PlayerRepository {
    fn get(&self, id: &str) -> Option<Player>;
    fn put(&mut self, player: Player);
    fn list(&self) -> Vec<Player>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerRepository {
    players: HashMap<String, Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn get(&self, id: &str) -> Option<Player> {
        self.players.get(id).cloned()
    }

    fn put(&mut self, player: Player) {
        self.players.insert(player.id.clone(), player);
    }

    fn list(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        players.sort_by(|a, b| a.id.cmp(&b.id));
        players
    }
}
