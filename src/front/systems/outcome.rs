//! Terminal condition checks

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Owner;
use crate::front::grid::Grid;

/// Fewest regions the player may hold before losing
pub const MIN_PLAYER_REGIONS: usize = 4;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOver {
    /// No enemy troops remain anywhere
    EnemyEliminated,
    /// No player troops remain anywhere
    PlayerEliminated,
    /// The center region fell
    CenterLost,
    /// Too few regions left under player control
    HomelandLost,
}

impl GameOver {
    pub fn is_victory(&self) -> bool {
        matches!(self, GameOver::EnemyEliminated)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            GameOver::EnemyEliminated => "VICTORY: no enemy troops remain.",
            GameOver::PlayerEliminated => "DEFEAT: all of your troops are dead.",
            GameOver::CenterLost => "DEFEAT: the center has fallen.",
            GameOver::HomelandLost => "DEFEAT: fewer than 4 home regions remain.",
        }
    }
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// First matching terminal condition, checked in a fixed order
pub fn evaluate_game_over(grid: &Grid) -> Option<GameOver> {
    if grid.total_troops(Owner::Enemy) == 0 {
        return Some(GameOver::EnemyEliminated);
    }
    if grid.total_troops(Owner::Player) == 0 {
        return Some(GameOver::PlayerEliminated);
    }
    if grid.owner_at(grid.center()) != Some(Owner::Player) {
        return Some(GameOver::CenterLost);
    }
    if grid.count_owned(Owner::Player) < MIN_PLAYER_REGIONS {
        return Some(GameOver::HomelandLost);
    }
    None
}
