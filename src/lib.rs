//! Signal Front - turn-based territorial conflict simulation

pub mod core;
pub mod front;

pub use crate::core::{Coord, GameConfig, Owner, Result, SignalError};
pub use crate::front::Game;
