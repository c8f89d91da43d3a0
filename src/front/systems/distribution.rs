//! Initial force distribution

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Owner;
use crate::front::grid::Grid;

/// Seed ownership bands and spread both starting pools
///
/// Enemy is distributed before player; the order fixes how many remainder
/// draws each side consumes from the shared generator.
pub fn distribute_initial_forces(
    grid: &mut Grid,
    enemy_total: u32,
    player_total: u32,
    rng: &mut ChaCha8Rng,
) {
    grid.assign_starting_bands();
    strategic_distribute(grid, enemy_total, Owner::Enemy, rng);
    strategic_distribute(grid, player_total, Owner::Player, rng);
}

/// Spread `total` troops over every region held by `owner`
///
/// Columns far from the middle weigh more (`1 + |x - size/2|`). Every region
/// in the set is marked active, including ones that end up with zero.
pub fn strategic_distribute(grid: &mut Grid, total: u32, owner: Owner, rng: &mut ChaCha8Rng) {
    let mid = (grid.size() / 2) as i32;
    let indices: Vec<usize> = grid
        .regions()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.owner == owner)
        .map(|(i, _)| i)
        .collect();

    if indices.is_empty() {
        return;
    }

    let weights: Vec<u32> = indices
        .iter()
        .map(|&i| 1 + (grid.regions()[i].position.x - mid).unsigned_abs())
        .collect();

    let allocation = weighted_split(total, &weights, rng);

    let regions = grid.regions_mut();
    for (&i, troops) in indices.iter().zip(allocation) {
        regions[i].add_troops(owner, troops);
        regions[i].is_active = true;
    }

    tracing::debug!(
        "Distributed {} {} troops over {} regions",
        total,
        owner,
        indices.len()
    );
}

/// Weighted largest-remainder split of `total` over `weights`
///
/// Floors each proportional share, then hands the remainder out one unit at a
/// time to uniformly chosen slots (with replacement). The result always sums
/// to `total`. A zero total weight yields all zeros and consumes no draws.
pub fn weighted_split(total: u32, weights: &[u32], rng: &mut ChaCha8Rng) -> Vec<u32> {
    let total_weight: u64 = weights.iter().map(|&w| w as u64).sum();
    if total_weight == 0 {
        return vec![0; weights.len()];
    }

    let mut shares: Vec<u32> = weights
        .iter()
        .map(|&w| (total as f64 * (w as f64 / total_weight as f64)) as u32)
        .collect();

    let allocated: u64 = shares.iter().map(|&s| s as u64).sum();
    let remainder = (total as u64).saturating_sub(allocated);
    for _ in 0..remainder {
        let slot = rng.gen_range(0..shares.len());
        shares[slot] += 1;
    }

    shares
}
