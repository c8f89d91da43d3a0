//! Enemy attack order generation

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};
use crate::front::grid::Grid;

/// Lower bound of the share of a region's troops committed to an attack
pub const MIN_COMMIT_FRACTION: f64 = 0.3;
/// Upper bound of the share of a region's troops committed to an attack
pub const MAX_COMMIT_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOrder {
    pub source: Coord,
    pub target: Coord,
    pub troops: u32,
}

/// Pick attacks for every enemy frontline region that can reach the player
///
/// Sources are visited in shuffled order, each issuing at most one order
/// against its weakest player-held neighbor. Ties go to the neighbor that
/// comes first in west/east/north/south order.
pub fn generate_enemy_orders(grid: &Grid, rng: &mut ChaCha8Rng) -> Vec<AttackOrder> {
    let mut frontline: Vec<Coord> = grid
        .regions()
        .iter()
        .filter(|r| r.owner == Owner::Enemy && r.is_frontline)
        .map(|r| r.position)
        .collect();

    if frontline.is_empty() {
        return Vec::new();
    }
    frontline.shuffle(rng);

    let mut orders = Vec::new();
    for source in frontline {
        let Some(target) = weakest_player_neighbor(grid, source) else {
            continue;
        };
        let available = grid.get(source).map_or(0, |r| r.enemy_count);
        if available == 0 {
            continue;
        }

        let fraction = rng.gen_range(MIN_COMMIT_FRACTION..=MAX_COMMIT_FRACTION);
        let troops = ((available as f64 * fraction) as u32).max(1);
        orders.push(AttackOrder { source, target, troops });
    }

    tracing::debug!("Enemy issued {} attack orders", orders.len());
    orders
}

/// Player-held neighbor with the fewest troops, first one wins ties
fn weakest_player_neighbor(grid: &Grid, pos: Coord) -> Option<Coord> {
    let mut best: Option<(Coord, u32)> = None;
    for n in grid.neighbors(pos) {
        let Some(region) = grid.get(n) else { continue };
        if region.owner != Owner::Player {
            continue;
        }
        match best {
            Some((_, count)) if count <= region.player_count => {}
            _ => best = Some((n, region.player_count)),
        }
    }
    best.map(|(coord, _)| coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front::systems::refresh_frontlines;
    use rand::SeedableRng;

    /// Enemy on row 0 directly facing player-held row 1
    fn facing_rows(enemy: u32, player: &[u32]) -> Grid {
        let mut grid = Grid::new(player.len() as u32);
        grid.assign_starting_bands();
        for region in grid.regions_mut() {
            if region.position.y == 1 {
                region.owner = Owner::Player;
            }
            match region.owner {
                Owner::Enemy => region.enemy_count = enemy,
                Owner::Player => region.player_count = player[region.position.x as usize],
                Owner::Neutral => {}
            }
        }
        refresh_frontlines(&mut grid);
        grid
    }

    #[test]
    fn test_weakest_neighbor_with_first_tie() {
        let mut grid = Grid::new(3);
        for region in grid.regions_mut() {
            region.owner = Owner::Player;
            region.player_count = 10;
        }
        grid.get_mut(Coord::new(1, 1)).unwrap().owner = Owner::Enemy;
        // east and south tie at 2; east comes first
        grid.get_mut(Coord::new(2, 1)).unwrap().player_count = 2;
        grid.get_mut(Coord::new(1, 2)).unwrap().player_count = 2;
        assert_eq!(weakest_player_neighbor(&grid, Coord::new(1, 1)), Some(Coord::new(2, 1)));
    }

    #[test]
    fn test_orders_target_player_neighbors() {
        let mut grid = Grid::new(2);
        grid.assign_starting_bands();
        for region in grid.regions_mut() {
            match region.owner {
                Owner::Enemy => region.enemy_count = 20,
                _ => region.player_count = 5,
            }
        }
        refresh_frontlines(&mut grid);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let orders = generate_enemy_orders(&grid, &mut rng);
        assert_eq!(orders.len(), 2);
        for order in &orders {
            assert_eq!(grid.owner_at(order.source), Some(Owner::Enemy));
            assert_eq!(grid.owner_at(order.target), Some(Owner::Player));
            // below-neighbor is the only player neighbor of each top cell
            assert_eq!(order.target, Coord::new(order.source.x, 1));
            assert!((6..=12).contains(&order.troops), "troops {}", order.troops);
        }
    }

    #[test]
    fn test_one_order_per_source() {
        let grid = facing_rows(50, &[3, 1, 4, 1, 5]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let orders = generate_enemy_orders(&grid, &mut rng);
        assert_eq!(orders.len(), 5);
        let mut sources: Vec<Coord> = orders.iter().map(|o| o.source).collect();
        sources.sort();
        sources.dedup();
        assert_eq!(sources.len(), orders.len());
    }

    #[test]
    fn test_minimum_commit_is_one() {
        let grid = facing_rows(1, &[5, 5]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let orders = generate_enemy_orders(&grid, &mut rng);
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.troops == 1));
    }

    #[test]
    fn test_empty_sources_skipped() {
        let grid = facing_rows(0, &[5, 5, 5]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(generate_enemy_orders(&grid, &mut rng).is_empty());
    }

    #[test]
    fn test_no_frontline_consumes_no_draws() {
        let mut grid = Grid::new(5);
        grid.assign_starting_bands();
        // frontlines never refreshed, so nothing qualifies
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let before = rng.clone();
        assert!(generate_enemy_orders(&grid, &mut rng).is_empty());
        assert_eq!(rng, before);
    }
}
