//! Frontline derivation

use crate::core::types::Owner;
use crate::front::grid::Grid;

/// Recompute `is_frontline` for every region from current ownership
///
/// Neutral regions are never frontline. Always a full pass.
pub fn refresh_frontlines(grid: &mut Grid) {
    let flags: Vec<bool> = grid
        .regions()
        .iter()
        .map(|region| {
            region.owner != Owner::Neutral
                && grid
                    .neighbors(region.position)
                    .any(|n| grid.owner_at(n) != Some(region.owner))
        })
        .collect();

    for (region, is_frontline) in grid.regions_mut().iter_mut().zip(flags) {
        region.is_frontline = is_frontline;
    }
}
