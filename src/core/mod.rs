pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{Result, SignalError};
pub use types::{Coord, Owner, Turn};
