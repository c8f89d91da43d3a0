//! Simulation systems

mod battle;
mod deployment;
mod distribution;
mod frontline;
mod intel;
mod orders;
mod outcome;

pub use battle::{loss_formula, resolve_battles, resolve_combat, BattleResult, CombatOutcome};
pub use deployment::{apply_deployments, can_player_deploy, Deployment};
pub use distribution::{distribute_initial_forces, strategic_distribute, weighted_split};
pub use frontline::refresh_frontlines;
pub use intel::{generate_intel, IntelReport, Signal};
pub use orders::{generate_enemy_orders, AttackOrder};
pub use outcome::{evaluate_game_over, GameOver};
