//! Named tuning constants read once when a session is constructed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{hex::step_length, ConfigurationError};

/// Strategy used to lay the playable path across the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Self-avoiding random walk between neighbouring cells.
    #[default]
    RandomWalk,
    /// Chained A* segments from an extremal cell toward random goals.
    AStar,
}

/// Aggregated configuration for board generation and turn resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Radius of the hexagonal grid, in cells from the centre.
    pub grid_radius: i32,
    /// Circumradius of a single hex cell, in world units.
    pub cell_size: f32,
    /// Number of cells along the playable path.
    pub path_length: usize,
    /// Number of interior path cells guarded by goblins.
    pub hazard_count: usize,
    /// Hit points both agents start with.
    pub starting_hit_points: u32,
    /// Radius around the observer inside which cells are revealed.
    pub visibility_radius: f32,
    /// Smallest damage a goblin deals.
    pub damage_min: u32,
    /// Largest damage a goblin deals.
    pub damage_max: u32,
    /// Hit points at or below which the bot shies away from goblins.
    pub bot_low_health_threshold: u32,
    /// Pause before the bot rolls, in milliseconds.
    pub bot_think_millis: u64,
    /// Path construction strategy.
    pub path_algorithm: PathAlgorithm,
    /// How many of the nearest unvisited neighbours the random walk chooses from.
    pub walk_candidates: usize,
    /// Path construction attempts per adjacency threshold.
    pub path_attempts: u32,
    /// How many times the adjacency threshold may be widened after all attempts fail.
    pub path_relaxations: u32,
    /// Multiplier applied to the centre-to-centre step length to absorb float error.
    pub adjacency_tolerance: f32,
    /// A* cost of stepping onto a cell known to be hazardous.
    ///
    /// Goblins are placed after the path is built, so a freshly generated
    /// board never has hazards to weigh and this value leaves its shape
    /// unchanged.
    pub hazard_edge_cost: u32,
    /// Seed for every random stream of the session.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_radius: 6,
            cell_size: 2.5,
            path_length: 50,
            hazard_count: 7,
            starting_hit_points: 15,
            visibility_radius: 20.0,
            damage_min: 1,
            damage_max: 3,
            bot_low_health_threshold: 3,
            bot_think_millis: 1_000,
            path_algorithm: PathAlgorithm::RandomWalk,
            walk_candidates: 3,
            path_attempts: 64,
            path_relaxations: 1,
            adjacency_tolerance: 1.05,
            hazard_edge_cost: 2,
            seed: 0x601b_1d5e_ed00_7a11,
        }
    }
}

impl GameConfig {
    /// Rejects constants that can never produce a playable game.
    ///
    /// The reachable cell count is only known once the grid exists, so the path
    /// length is checked against it by the setup pipeline instead.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.grid_radius <= 0 {
            return Err(ConfigurationError::NonPositiveRadius {
                radius: self.grid_radius,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigurationError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        if self.path_length < 2 {
            return Err(ConfigurationError::PathTooShort {
                path_length: self.path_length,
            });
        }
        let interior = self.path_length - 2;
        if self.hazard_count >= interior {
            return Err(ConfigurationError::TooManyHazards {
                hazard_count: self.hazard_count,
                interior,
            });
        }
        if self.damage_min > self.damage_max {
            return Err(ConfigurationError::InvertedDamageRange {
                min: self.damage_min,
                max: self.damage_max,
            });
        }
        if self.walk_candidates == 0 {
            return Err(ConfigurationError::NoWalkCandidates);
        }
        if self.path_attempts == 0 {
            return Err(ConfigurationError::NoPathAttempts);
        }
        if !(self.visibility_radius.is_finite() && self.visibility_radius >= 0.0) {
            return Err(ConfigurationError::InvalidVisibilityRadius {
                radius: self.visibility_radius,
            });
        }
        if !(self.adjacency_tolerance.is_finite() && self.adjacency_tolerance >= 1.0) {
            return Err(ConfigurationError::InvalidAdjacencyTolerance {
                tolerance: self.adjacency_tolerance,
            });
        }
        Ok(())
    }

    /// Largest world distance at which two cells count as adjacent.
    #[must_use]
    pub fn adjacency_threshold(&self) -> f32 {
        step_length(self.cell_size) * self.adjacency_tolerance
    }

    /// Pause before the bot's automatic roll.
    #[must_use]
    pub const fn bot_think_delay(&self) -> Duration {
        Duration::from_millis(self.bot_think_millis)
    }
}
