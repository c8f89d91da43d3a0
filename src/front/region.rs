//! Region - one grid cell of contested territory

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};

/// A single grid cell with ownership and troop counts
///
/// Both counts may be nonzero at once; only battle resolution zeroes the
/// losing side, on capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub position: Coord,
    pub owner: Owner,
    pub enemy_count: u32,
    pub player_count: u32,
    /// Derived: borders a region with a different owner
    pub is_frontline: bool,
    /// Set once any troops have occupied the region
    pub is_active: bool,
}

impl Region {
    pub fn new(position: Coord) -> Self {
        Self {
            position,
            owner: Owner::Neutral,
            enemy_count: 0,
            player_count: 0,
            is_frontline: false,
            is_active: false,
        }
    }

    pub fn total(&self) -> u64 {
        self.enemy_count as u64 + self.player_count as u64
    }

    /// Troops held by the given side. Neutral holds none.
    pub fn troops_of(&self, owner: Owner) -> u32 {
        match owner {
            Owner::Player => self.player_count,
            Owner::Enemy => self.enemy_count,
            Owner::Neutral => 0,
        }
    }

    /// Add troops for one side, capped at `u32::MAX`. Returns how many fit.
    pub(crate) fn add_troops(&mut self, owner: Owner, troops: u32) -> u32 {
        let count = match owner {
            Owner::Player => &mut self.player_count,
            Owner::Enemy => &mut self.enemy_count,
            Owner::Neutral => return 0,
        };
        let before = *count;
        *count = before.saturating_add(troops);
        *count - before
    }

    /// Three-character cell used by the grid summary
    pub fn cell_label(&self) -> String {
        match self.owner {
            Owner::Player => format!("P{:02}", self.player_count),
            Owner::Enemy => format!("E{:02}", self.enemy_count),
            Owner::Neutral => "N--".to_string(),
        }
    }
}
