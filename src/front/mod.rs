//! Frontline simulation
//!
//! Two factions and neutral ground on a square grid. The player reinforces,
//! the enemy attacks its weakest neighbors, and a fixed combat formula
//! settles each fight.

pub mod driver;
pub mod game;
pub mod grid;
pub mod output;
pub mod region;
pub mod simulation;
pub mod systems;

pub use driver::Autoplayer;
pub use game::Game;
pub use grid::Grid;
pub use output::{SessionRecord, SessionStats, TurnRecord};
pub use region::Region;
pub use simulation::{run_session, DEFAULT_SEED, DEFAULT_TURNS};
pub use systems::{AttackOrder, BattleResult, Deployment, GameOver, IntelReport, Signal};
