//! Game - the engine's only public surface
//!
//! Owns the grid, the turn counter and the random source. Every operation that
//! draws randomness advances the same generator, so a seeded game replays
//! exactly when driven with the same inputs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Coord, Turn};
use crate::front::grid::Grid;
use crate::front::systems::{
    self, AttackOrder, BattleResult, Deployment, GameOver, IntelReport,
};

/// One running game
#[derive(Clone, Debug)]
pub struct Game {
    pub config: GameConfig,
    pub grid: Grid,
    pub turn: Turn,
    /// Random number generator (deterministic when seeded)
    rng: ChaCha8Rng,
}

impl Game {
    /// Build the grid, seed ownership bands, distribute forces, derive frontlines
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut grid = Grid::new(config.size);
        systems::distribute_initial_forces(
            &mut grid,
            config.enemy_total,
            config.player_total,
            &mut rng,
        );
        systems::refresh_frontlines(&mut grid);

        tracing::debug!(
            "New {}x{} game: {} enemy vs {} player troops",
            config.size,
            config.size,
            config.enemy_total,
            config.player_total
        );

        Ok(Self { config, grid, turn: 1, rng })
    }

    /// Noisy reports on enemy and neutral regions, never empty
    pub fn intel_report(&mut self) -> Vec<IntelReport> {
        systems::generate_intel(&self.grid, &mut self.rng)
    }

    /// Place reinforcements against this turn's budget
    ///
    /// Entries are processed in slice order. Returns the troops placed.
    pub fn apply_player_deployment(&mut self, deployments: &[Deployment]) -> u32 {
        systems::apply_deployments(
            &mut self.grid,
            deployments,
            self.config.player_reinforcements,
        )
    }

    pub fn enemy_orders(&mut self) -> Vec<AttackOrder> {
        systems::generate_enemy_orders(&self.grid, &mut self.rng)
    }

    pub fn resolve_battles(&mut self, orders: &[AttackOrder]) -> Vec<BattleResult> {
        systems::resolve_battles(&mut self.grid, orders)
    }

    pub fn is_game_over(&self) -> Option<GameOver> {
        systems::evaluate_game_over(&self.grid)
    }

    pub fn end_turn(&mut self) {
        self.turn += 1;
        systems::refresh_frontlines(&mut self.grid);
    }

    /// `Turn <n>` followed by one row of cells per line
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Turn {}", self.turn)];
        lines.extend(self.grid.render_rows());
        lines.join("\n")
    }

    /// Whether the player may deploy to `pos` right now
    pub fn can_deploy(&self, pos: Coord) -> bool {
        systems::can_player_deploy(&self.grid, pos)
    }
}
