//! Session output and serialization

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::types::Turn;
use crate::front::systems::{AttackOrder, BattleResult, Deployment, GameOver, IntelReport};

/// Everything that happened in one autoplayed session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub config: GameConfig,
    pub turns: Vec<TurnRecord>,
    pub outcome: Option<GameOver>,
    pub final_summary: String,
    pub statistics: SessionStats,
}

/// One turn, in the order the steps ran
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: Turn,
    /// Grid as it stood at the start of the turn
    pub summary: String,
    pub intel: Vec<IntelReport>,
    pub deployments: Vec<Deployment>,
    pub troops_deployed: u32,
    pub orders: Vec<AttackOrder>,
    pub battles: Vec<BattleResult>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub turns_played: u32,
    pub simulation_time_ms: u64,
    pub battles_fought: u32,
    pub regions_captured: u32,
    pub enemy_losses: i64,
    pub player_losses: i64,
}

impl SessionRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Turn-by-turn text log followed by the outcome
    pub fn report(&self) -> String {
        let mut out = Vec::new();

        for turn in &self.turns {
            out.push(turn.summary.clone());
            out.push(String::new());
            out.push("Intel:".to_string());
            for report in &turn.intel {
                out.push(format!("- {}: {}", report.region, report.signal));
            }
            for battle in &turn.battles {
                out.push(format!(
                    "Battle at {}: {} wins with {} ({} attacker / {} defender losses)",
                    battle.target,
                    battle.winner,
                    battle.remaining,
                    battle.attacker_losses,
                    battle.defender_losses
                ));
            }
            out.push("\n---\n".to_string());
        }

        out.push(self.final_summary.clone());
        match &self.outcome {
            Some(outcome) => out.push(outcome.to_string()),
            None => out.push(format!(
                "No decision after {} turns.",
                self.statistics.turns_played
            )),
        }
        out.join("\n")
    }

    pub fn summary(&self) -> String {
        format!(
            "Played {} turns in {}ms\n{} battles, {} regions captured, losses: enemy {} / player {}",
            self.statistics.turns_played,
            self.statistics.simulation_time_ms,
            self.statistics.battles_fought,
            self.statistics.regions_captured,
            self.statistics.enemy_losses,
            self.statistics.player_losses,
        )
    }
}
