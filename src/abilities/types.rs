//! Abilities domain: the unlock set consulted by the controllers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::progress::KeyValueStore;

pub const UNLOCKED_ABILITIES_KEY: &str = "UnlockedAbilities";
pub const CURRENT_WORLD_KEY: &str = "CurrentWorldNumber";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Ability {
    DoubleJump,
    Dash,
    WallPass,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::DoubleJump, Ability::Dash, Ability::WallPass];

    pub fn key(self) -> &'static str {
        match self {
            Ability::DoubleJump => "DoubleJump",
            Ability::Dash => "Dash",
            Ability::WallPass => "WallPass",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key.trim())
    }

    /// Abilities a world grants on entry: each world adds one to the previous.
    pub fn unlocked_in_world(world_number: i64) -> &'static [Ability] {
        match world_number {
            i64::MIN..=1 => &[],
            2 => &[Ability::DoubleJump],
            3 => &[Ability::DoubleJump, Ability::Dash],
            _ => &Self::ALL,
        }
    }
}

/// Unlocked abilities. Unlocks are monotonic; only `reset_all` removes them.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Abilities {
    unlocked: BTreeSet<Ability>,
}

impl Abilities {
    pub fn has(&self, ability: Ability) -> bool {
        self.unlocked.contains(&ability)
    }

    /// Returns true only on the first unlock; repeats are no-ops.
    pub fn unlock(&mut self, ability: Ability) -> bool {
        self.unlocked.insert(ability)
    }

    pub fn reset_all(&mut self) {
        self.unlocked.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        self.unlocked.iter().copied()
    }

    /// Comma-separated keys in a stable order.
    pub fn to_storage_string(&self) -> String {
        self.iter().map(Ability::key).collect::<Vec<_>>().join(",")
    }

    /// Unknown or empty entries are skipped so an old save never blocks spawn.
    pub fn from_storage_string(value: &str) -> Self {
        let unlocked = value
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| {
                let ability = Ability::from_key(entry);
                if ability.is_none() {
                    warn!("Ignoring unknown ability '{}' in save data", entry);
                }
                ability
            })
            .collect();
        Self { unlocked }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::from_storage_string(&store.get_string(UNLOCKED_ABILITIES_KEY, ""))
    }

    pub fn persist(&self, store: &mut dyn KeyValueStore) {
        store.set_string(UNLOCKED_ABILITIES_KEY, &self.to_storage_string());
    }

    /// Replaces the set with a world's preset. Returns the newly granted
    /// abilities (those not held before the reset).
    pub fn apply_world_preset(&mut self, world_number: i64) -> Vec<Ability> {
        let previous = std::mem::take(&mut self.unlocked);
        let mut granted = Vec::new();
        for &ability in Ability::unlocked_in_world(world_number) {
            self.unlock(ability);
            if !previous.contains(&ability) {
                granted.push(ability);
            }
        }
        granted
    }
}
