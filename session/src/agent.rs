//! Mutable state of one competitor.

use goblin_trail_core::AgentId;

/// Player or bot travelling along the path.
///
/// The position only ever grows and never passes the goal. Hit points never
/// drop below zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    position: usize,
    hit_points: u32,
    last_index: usize,
}

impl Agent {
    /// Creates an agent at the entry of a path with `path_length` cells.
    #[must_use]
    pub fn new(id: AgentId, hit_points: u32, path_length: usize) -> Self {
        Self {
            id,
            position: 0,
            hit_points,
            last_index: path_length.saturating_sub(1),
        }
    }

    /// Identity of the agent.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Current index along the path.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Remaining hit points.
    #[must_use]
    pub const fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Reports whether the agent stands on the goal.
    #[must_use]
    pub const fn at_goal(&self) -> bool {
        self.position == self.last_index
    }

    /// Index the agent would land on after `steps`, without moving it.
    #[must_use]
    pub fn projected(&self, steps: u32) -> usize {
        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        self.position.saturating_add(steps).min(self.last_index)
    }

    /// Moves the agent forward, stopping at the goal, and returns the new index.
    pub fn advance(&mut self, steps: u32) -> usize {
        self.position = self.projected(steps);
        self.position
    }

    /// Subtracts damage, flooring at zero, and returns the remaining hit points.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.hit_points
    }
}
