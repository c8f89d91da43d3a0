//! Intel generation
//!
//! Produces noisy reports about enemy and neutral regions. Reports are for
//! display only; nothing here writes to the grid.

use std::fmt;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Owner};
use crate::front::grid::Grid;

/// Chance a frontline enemy region reports activity
pub const ACTIVITY_CHANCE: f64 = 0.6;

/// Chance any enemy region leaks a generic signal
pub const SIGNAL_CHANCE: f64 = 0.2;

/// Chance a neutral region produces a possibly false report
pub const MISLEADING_CHANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    EnemyActivity,
    SignalReceived,
    PossiblyMisleading,
    Silence,
}

impl Signal {
    pub fn text(&self) -> &'static str {
        match self {
            Signal::EnemyActivity => "Enemy activity in this region",
            Signal::SignalReceived => "Signal received",
            Signal::PossiblyMisleading => "Information may be misleading",
            Signal::Silence => "Silence",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelReport {
    pub region: Coord,
    pub signal: Signal,
}

/// One pass of intel over the grid in canonical order
///
/// Never empty for a non-empty grid: when no region reports, a random region
/// reports silence.
pub fn generate_intel(grid: &Grid, rng: &mut ChaCha8Rng) -> Vec<IntelReport> {
    let mut reports = Vec::new();

    for region in grid.regions() {
        let signal = match region.owner {
            Owner::Enemy => {
                // The second roll only happens when the first misses
                if region.is_frontline && rng.gen::<f64>() < ACTIVITY_CHANCE {
                    Some(Signal::EnemyActivity)
                } else if rng.gen::<f64>() < SIGNAL_CHANCE {
                    Some(Signal::SignalReceived)
                } else {
                    None
                }
            }
            Owner::Neutral if rng.gen::<f64>() < MISLEADING_CHANCE => {
                Some(Signal::PossiblyMisleading)
            }
            _ => None,
        };

        if let Some(signal) = signal {
            reports.push(IntelReport { region: region.position, signal });
        }
    }

    if reports.is_empty() && !grid.is_empty() {
        let pick = rng.gen_range(0..grid.len());
        reports.push(IntelReport {
            region: grid.regions()[pick].position,
            signal: Signal::Silence,
        });
    }

    tracing::trace!("Generated {} intel reports", reports.len());
    reports
}
