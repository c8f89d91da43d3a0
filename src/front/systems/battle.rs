//! Battle resolution
//!
//! Every fight is enemy-attacks-player. The outcome is a pure function of the
//! two troop counts; no randomness is involved here.

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};
use crate::front::grid::Grid;
use crate::front::systems::frontline::refresh_frontlines;
use crate::front::systems::orders::AttackOrder;

/// Survivors a defender keeps on a tie, at minimum
pub const TIE_MIN_SURVIVORS: u32 = 2;

/// Share of the defenders that survive a tie
pub const TIE_SURVIVOR_FRACTION: f64 = 0.1;

/// Outcome of a single fight before it is applied to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatOutcome {
    pub winner: Owner,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub target: Coord,
    pub winner: Owner,
    pub remaining: u32,
    /// Negative when a tie leaves the defender more than it started with
    pub attacker_losses: i64,
    pub defender_losses: i64,
}

/// Attrition suffered by the larger side: `smaller / (larger / smaller)`
///
/// Real division, floored once at the end, never below 1. Nothing is lost
/// against an empty side.
pub fn loss_formula(larger: u32, smaller: u32) -> u32 {
    if smaller == 0 {
        return 0;
    }
    let ratio = larger as f64 / smaller as f64;
    ((smaller as f64 / ratio) as u32).max(1)
}

/// Fight `attackers` (enemy) against `defenders` (player)
///
/// Ties go to the defender.
pub fn resolve_combat(attackers: u32, defenders: u32) -> CombatOutcome {
    if attackers == defenders {
        let remaining = ((defenders as f64 * TIE_SURVIVOR_FRACTION) as u32).max(TIE_MIN_SURVIVORS);
        return CombatOutcome { winner: Owner::Player, remaining };
    }

    if attackers > defenders {
        let loss = loss_formula(attackers, defenders);
        CombatOutcome {
            winner: Owner::Enemy,
            remaining: attackers.saturating_sub(loss),
        }
    } else {
        let loss = loss_formula(defenders, attackers);
        CombatOutcome {
            winner: Owner::Player,
            remaining: defenders.saturating_sub(loss),
        }
    }
}

/// Apply orders in the given sequence, then refresh frontlines once
///
/// Orders whose source is no longer enemy-held or whose target is no longer
/// player-held are dropped, as are orders with nothing left to send. Attacking
/// troops leave the source before the fight is decided.
pub fn resolve_battles(grid: &mut Grid, orders: &[AttackOrder]) -> Vec<BattleResult> {
    let mut results = Vec::new();

    for order in orders {
        if grid.owner_at(order.source) != Some(Owner::Enemy)
            || grid.owner_at(order.target) != Some(Owner::Player)
        {
            tracing::debug!("Dropping stale order {} -> {}", order.source, order.target);
            continue;
        }

        let Some(source) = grid.get_mut(order.source) else {
            continue;
        };
        let troops = order.troops.min(source.enemy_count);
        if troops == 0 {
            continue;
        }
        source.enemy_count -= troops;

        let Some(target) = grid.get_mut(order.target) else {
            continue;
        };
        let defender_start = target.player_count;
        let outcome = resolve_combat(troops, defender_start);

        if outcome.winner == Owner::Enemy {
            target.owner = Owner::Enemy;
            target.enemy_count = outcome.remaining;
            target.player_count = 0;
        } else {
            target.player_count = outcome.remaining;
        }
        target.is_active = true;

        let attacker_kept = if outcome.winner == Owner::Enemy { outcome.remaining } else { 0 };
        let defender_kept = if outcome.winner == Owner::Player { outcome.remaining } else { 0 };

        tracing::debug!(
            "Battle at {}: {} attackers vs {} defenders, {} wins with {}",
            order.target,
            troops,
            defender_start,
            outcome.winner,
            outcome.remaining
        );

        results.push(BattleResult {
            target: order.target,
            winner: outcome.winner,
            remaining: outcome.remaining,
            attacker_losses: troops as i64 - attacker_kept as i64,
            defender_losses: defender_start as i64 - defender_kept as i64,
        });
    }

    refresh_frontlines(grid);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_formula() {
        assert_eq!(loss_formula(100, 10), 1);
        assert_eq!(loss_formula(10, 0), 0);
        assert_eq!(loss_formula(12, 10), 8);
        assert_eq!(loss_formula(3, 2), 1);
        // floored once: 7 / (9/7) = 5.44
        assert_eq!(loss_formula(9, 7), 5);
    }

    #[test]
    fn test_tie_goes_to_defender() {
        let outcome = resolve_combat(10, 10);
        assert_eq!(outcome, CombatOutcome { winner: Owner::Player, remaining: 2 });

        let outcome = resolve_combat(50, 50);
        assert_eq!(outcome, CombatOutcome { winner: Owner::Player, remaining: 5 });
    }

    #[test]
    fn test_attacker_dominant() {
        let outcome = resolve_combat(100, 10);
        assert_eq!(outcome, CombatOutcome { winner: Owner::Enemy, remaining: 99 });
    }

    #[test]
    fn test_defender_dominant() {
        let outcome = resolve_combat(10, 100);
        assert_eq!(outcome, CombatOutcome { winner: Owner::Player, remaining: 99 });
    }

    #[test]
    fn test_against_empty_region() {
        let outcome = resolve_combat(5, 0);
        assert_eq!(outcome, CombatOutcome { winner: Owner::Enemy, remaining: 5 });
    }

    /// Enemy at (0,0), player at (0,1) on a 2x2 grid
    fn duel(attackers: u32, defenders: u32) -> Grid {
        let mut grid = Grid::new(2);
        grid.assign_starting_bands();
        grid.get_mut(Coord::new(0, 0)).unwrap().enemy_count = attackers;
        grid.get_mut(Coord::new(0, 1)).unwrap().player_count = defenders;
        refresh_frontlines(&mut grid);
        grid
    }

    fn order(troops: u32) -> AttackOrder {
        AttackOrder { source: Coord::new(0, 0), target: Coord::new(0, 1), troops }
    }

    #[test]
    fn test_capture_zeroes_player() {
        let mut grid = duel(100, 10);
        let results = resolve_battles(&mut grid, &[order(100)]);

        let target = grid.get(Coord::new(0, 1)).unwrap();
        assert_eq!(target.owner, Owner::Enemy);
        assert_eq!(target.enemy_count, 99);
        assert_eq!(target.player_count, 0);
        assert!(target.is_active);
        assert_eq!(grid.get(Coord::new(0, 0)).unwrap().enemy_count, 0);

        assert_eq!(
            results,
            vec![BattleResult {
                target: Coord::new(0, 1),
                winner: Owner::Enemy,
                remaining: 99,
                attacker_losses: 1,
                defender_losses: 10,
            }]
        );
    }

    #[test]
    fn test_hold_keeps_owner() {
        let mut grid = duel(10, 100);
        let results = resolve_battles(&mut grid, &[order(10)]);

        let target = grid.get(Coord::new(0, 1)).unwrap();
        assert_eq!(target.owner, Owner::Player);
        assert_eq!(target.player_count, 99);
        assert_eq!(target.enemy_count, 0);
        assert_eq!(results[0].attacker_losses, 10);
        assert_eq!(results[0].defender_losses, 1);
    }

    #[test]
    fn test_troops_clamped_to_source() {
        let mut grid = duel(4, 10);
        let results = resolve_battles(&mut grid, &[order(40)]);
        assert_eq!(grid.get(Coord::new(0, 0)).unwrap().enemy_count, 0);
        // 4 vs 10: loss = max(1, floor(4 / 2.5)) = 1
        assert_eq!(results[0].remaining, 9);
        assert_eq!(results[0].attacker_losses, 4);
    }

    #[test]
    fn test_tie_with_one_defender_reports_negative_loss() {
        let mut grid = duel(1, 1);
        let results = resolve_battles(&mut grid, &[order(1)]);
        assert_eq!(results[0].remaining, 2);
        assert_eq!(results[0].attacker_losses, 1);
        assert_eq!(results[0].defender_losses, -1);
        assert_eq!(grid.get(Coord::new(0, 1)).unwrap().player_count, 2);
    }

    #[test]
    fn test_stale_orders_dropped() {
        let mut grid = duel(10, 10);
        let before = grid.clone();
        let stale = [
            // target is enemy-held
            AttackOrder { source: Coord::new(0, 0), target: Coord::new(1, 0), troops: 5 },
            // source is player-held
            AttackOrder { source: Coord::new(1, 1), target: Coord::new(0, 1), troops: 5 },
            // off the grid
            AttackOrder { source: Coord::new(0, -1), target: Coord::new(0, 1), troops: 5 },
            order(0),
        ];
        assert!(resolve_battles(&mut grid, &stale).is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_second_order_on_captured_target_is_stale() {
        let mut grid = duel(100, 10);
        grid.get_mut(Coord::new(1, 0)).unwrap().enemy_count = 50;
        let orders = [
            order(60),
            AttackOrder { source: Coord::new(1, 0), target: Coord::new(0, 1), troops: 20 },
        ];
        let results = resolve_battles(&mut grid, &orders);
        assert_eq!(results.len(), 1);
        assert_eq!(grid.get(Coord::new(1, 0)).unwrap().enemy_count, 50);
    }

    #[test]
    fn test_frontlines_refreshed_after_capture() {
        let mut grid = duel(100, 10);
        resolve_battles(&mut grid, &[order(100)]);
        // (0,1) is now enemy and borders player-held (1,1)
        assert!(grid.get(Coord::new(0, 1)).unwrap().is_frontline);
        // (0,0) is surrounded by enemy-held cells
        assert!(!grid.get(Coord::new(0, 0)).unwrap().is_frontline);
    }
}
