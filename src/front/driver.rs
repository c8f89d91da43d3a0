//! Autoplayer - random stand-in for a human player
//!
//! Picks deployable regions at random and splits the turn's budget over them
//! in random chunks. Uses its own generator so the game's draw sequence does
//! not depend on how the player decides.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::types::Coord;
use crate::front::game::Game;
use crate::front::systems::Deployment;

pub struct Autoplayer {
    rng: ChaCha8Rng,
}

impl Autoplayer {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seeded one past the game seed, or from entropy for unseeded games
    pub fn for_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed.wrapping_add(1)),
            None => Self { rng: ChaCha8Rng::from_entropy() },
        }
    }

    /// Deployments for this turn, in the order they should be applied
    ///
    /// Each chosen region gets between 1 and whatever budget is left, so the
    /// plan never asks for more than `player_reinforcements` in total.
    pub fn plan(&mut self, game: &Game) -> Vec<Deployment> {
        let mut candidates: Vec<Coord> = game
            .grid
            .regions()
            .iter()
            .map(|r| r.position)
            .filter(|&pos| game.can_deploy(pos))
            .collect();
        candidates.shuffle(&mut self.rng);

        let mut remaining = game.config.player_reinforcements;
        let mut plan = Vec::new();
        for pos in candidates {
            if remaining == 0 {
                break;
            }
            let commit = self.rng.gen_range(1..=remaining);
            plan.push(Deployment::new(pos, commit as i64));
            remaining -= commit;
        }
        plan
    }
}
