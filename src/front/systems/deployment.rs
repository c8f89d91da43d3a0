//! Player reinforcement deployment

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};
use crate::front::grid::Grid;

/// A request to place troops on one region
///
/// Signed so that nonsense requests can be expressed and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub target: Coord,
    pub troops: i64,
}

impl Deployment {
    pub fn new(target: Coord, troops: i64) -> Self {
        Self { target, troops }
    }
}

/// Player-held, or touching a player-held region
pub fn can_player_deploy(grid: &Grid, pos: Coord) -> bool {
    match grid.owner_at(pos) {
        Some(Owner::Player) => true,
        Some(_) => grid.borders(pos, Owner::Player),
        None => false,
    }
}

/// Apply deployments in order against a fixed budget
///
/// Invalid entries are skipped, never reported as errors. Later entries see
/// only what earlier ones left of the budget. Eligibility is judged on the
/// ownership at call time; frontlines are not refreshed here.
///
/// A region already holding `u32::MAX` troops takes no more, and only what
/// fits is charged against the budget. Returns the number of troops actually
/// placed.
pub fn apply_deployments(grid: &mut Grid, deployments: &[Deployment], budget: u32) -> u32 {
    let mut remaining = budget;

    for deployment in deployments {
        if deployment.troops <= 0 || remaining == 0 {
            continue;
        }
        if !can_player_deploy(grid, deployment.target) {
            tracing::debug!("Skipping deployment to {}: not deployable", deployment.target);
            continue;
        }
        let Some(region) = grid.get_mut(deployment.target) else {
            continue;
        };

        let requested = deployment.troops.min(remaining as i64) as u32;
        let placed = region.add_troops(Owner::Player, requested);
        region.is_active = true;
        remaining -= placed;
    }

    budget - remaining
}
