//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinate
///
/// Signed so callers can name cells outside the grid; those are skipped
/// by every engine operation rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors in fixed order: west, east, north, south.
    ///
    /// Not clipped to any grid; see `Grid::neighbors` for the bounded version.
    pub fn orthogonal(&self) -> [Coord; 4] {
        [
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x, self.y + 1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Who holds a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Player,
    Enemy,
    #[default]
    Neutral,
}

impl Owner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Owner::Player => "player",
            Owner::Enemy => "enemy",
            Owner::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn counter (starts at 1)
pub type Turn = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_order() {
        let c = Coord::new(2, 3);
        assert_eq!(
            c.orthogonal(),
            [
                Coord::new(1, 3),
                Coord::new(3, 3),
                Coord::new(2, 2),
                Coord::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_owner_default_is_neutral() {
        assert_eq!(Owner::default(), Owner::Neutral);
        assert_eq!(Owner::Enemy.to_string(), "enemy");
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::from((4, -1)).to_string(), "(4, -1)");
    }
}
