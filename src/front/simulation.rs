//! Main session loop

use std::time::Instant;

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::Owner;
use crate::front::driver::Autoplayer;
use crate::front::game::Game;
use crate::front::output::{SessionRecord, SessionStats, TurnRecord};

/// Turns played when nothing else is asked for
pub const DEFAULT_TURNS: u32 = 10;

/// Seed used by the command line when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Autoplay a game for up to `turns` turns
///
/// Stops early on a terminal result, without advancing the turn.
pub fn run_session(config: GameConfig, turns: u32) -> Result<SessionRecord> {
    let start = Instant::now();

    let mut game = Game::new(config)?;
    let mut player = Autoplayer::for_config(&game.config);

    tracing::info!(
        "Starting session: {}x{} grid, up to {} turns",
        game.config.size,
        game.config.size,
        turns
    );

    let mut records = Vec::new();
    let mut stats = SessionStats::default();
    let mut outcome = None;

    for _ in 0..turns {
        // 1. Read the board and intel
        let summary = game.summary();
        let intel = game.intel_report();

        // 2. Player reinforces
        let deployments = player.plan(&game);
        let troops_deployed = game.apply_player_deployment(&deployments);

        // 3. Enemy attacks
        let orders = game.enemy_orders();
        let battles = game.resolve_battles(&orders);

        stats.turns_played += 1;
        stats.battles_fought += battles.len() as u32;
        for battle in &battles {
            if battle.winner == Owner::Enemy {
                stats.regions_captured += 1;
            }
            stats.enemy_losses += battle.attacker_losses;
            stats.player_losses += battle.defender_losses;
        }

        records.push(TurnRecord {
            turn: game.turn,
            summary,
            intel,
            deployments,
            troops_deployed,
            orders,
            battles,
        });

        // 4. Check for a decision
        if let Some(result) = game.is_game_over() {
            tracing::info!("Game over on turn {}: {}", game.turn, result);
            outcome = Some(result);
            break;
        }

        game.end_turn();
    }

    stats.simulation_time_ms = start.elapsed().as_millis() as u64;

    Ok(SessionRecord {
        final_summary: game.summary(),
        config: game.config,
        turns: records,
        outcome,
        statistics: stats,
    })
}
