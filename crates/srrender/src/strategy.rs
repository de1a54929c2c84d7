//! Sequential vs parallel execution selection.

use serde::{Deserialize, Serialize};

/// How a single-image render is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One pass over the points on the calling thread.
    Sequential,
    /// Points split across workers, each accumulating into a private image,
    /// followed by a pixel-parallel reduction.
    Parallel,
}

impl Strategy {
    /// Pick a strategy from the workload.
    ///
    /// Parallel dispatch pays for a private image per worker plus a reduction
    /// over every pixel, so it is only chosen once the point count reaches
    /// `sqrt(num_pixels)`.
    pub fn select(num_points: usize, num_pixels: usize) -> Self {
        if num_points as f64 >= (num_pixels as f64).sqrt() {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        }
    }
}

/// Configured override for strategy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyPolicy {
    /// Use [`Strategy::select`].
    #[default]
    Auto,
    Sequential,
    Parallel,
}

impl StrategyPolicy {
    pub fn resolve(self, num_points: usize, num_pixels: usize) -> Strategy {
        match self {
            StrategyPolicy::Auto => Strategy::select(num_points, num_pixels),
            StrategyPolicy::Sequential => Strategy::Sequential,
            StrategyPolicy::Parallel => Strategy::Parallel,
        }
    }

    /// Parse from a string, e.g. an environment variable.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(StrategyPolicy::Auto),
            "sequential" | "single" => Some(StrategyPolicy::Sequential),
            "parallel" => Some(StrategyPolicy::Parallel),
            _ => None,
        }
    }
}
