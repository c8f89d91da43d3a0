//! Grid - the square map of regions
//!
//! Regions are stored column-major (`x` outer, `y` inner). Every pass over the
//! grid that consumes randomness walks this order, so it is part of what makes
//! a seeded game reproducible.

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};
use crate::front::region::Region;

/// Owned `size x size` map of regions, created once and mutated in place
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u32,
    regions: Vec<Region>,
}

impl Grid {
    /// Create a grid where every region is neutral and empty
    pub fn new(size: u32) -> Self {
        let n = size as i32;
        let mut regions = Vec::with_capacity((size as usize) * (size as usize));
        for x in 0..n {
            for y in 0..n {
                regions.push(Region::new(Coord::new(x, y)));
            }
        }
        Self { size, regions }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&pos.x) && (0..n).contains(&pos.y)
    }

    fn index_of(&self, pos: Coord) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.x as usize * self.size as usize + pos.y as usize)
    }

    pub fn get(&self, pos: Coord) -> Option<&Region> {
        self.index_of(pos).map(|i| &self.regions[i])
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut Region> {
        self.index_of(pos).map(move |i| &mut self.regions[i])
    }

    /// Regions in canonical (column-major) order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// In-bounds orthogonal neighbors, in west/east/north/south order
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = Coord> + '_ {
        pos.orthogonal().into_iter().filter(move |&n| self.contains(n))
    }

    /// Owner of the region at `pos`, if it exists
    pub fn owner_at(&self, pos: Coord) -> Option<Owner> {
        self.get(pos).map(|r| r.owner)
    }

    /// True if any in-bounds neighbor of `pos` is owned by `owner`
    pub fn borders(&self, pos: Coord, owner: Owner) -> bool {
        self.neighbors(pos)
            .any(|n| self.owner_at(n) == Some(owner))
    }

    /// The cell the player must hold
    pub fn center(&self) -> Coord {
        let c = (self.size / 2) as i32;
        Coord::new(c, c)
    }

    /// Enemy on row 0, player on the last row, neutral elsewhere.
    pub fn assign_starting_bands(&mut self) {
        let last_row = self.size as i32 - 1;
        for region in &mut self.regions {
            region.owner = if region.position.y == 0 {
                Owner::Enemy
            } else if region.position.y == last_row {
                Owner::Player
            } else {
                Owner::Neutral
            };
        }
    }

    /// Sum of a side's troops over the whole grid
    pub fn total_troops(&self, owner: Owner) -> u64 {
        self.regions
            .iter()
            .map(|r| r.troops_of(owner) as u64)
            .sum()
    }

    pub fn count_owned(&self, owner: Owner) -> usize {
        self.regions.iter().filter(|r| r.owner == owner).count()
    }

    /// Row-major text rendering, one line per row
    pub fn render_rows(&self) -> Vec<String> {
        let n = self.size as i32;
        (0..n)
            .map(|y| {
                (0..n)
                    .filter_map(|x| self.get(Coord::new(x, y)))
                    .map(Region::cell_label)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
