#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Goblin Trail engine.
//!
//! This crate defines the message surface that connects the presentation
//! layer, the authoritative game session, and pure systems. Presentations
//! submit [`Command`] values describing what the players asked for, the
//! session resolves them through its `apply` entry point, and then broadcasts
//! [`Event`] values describing every state change. Systems consume event
//! streams, query immutable snapshots, and respond exclusively with new
//! command batches.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

mod board;
mod config;
mod error;
mod hex;

pub use board::{Board, Cell, CellId, Goblin, Path};
pub use config::{GameConfig, PathAlgorithm};
pub use error::{ConfigurationError, SetupError};
pub use hex::{step_length, HexCoord, WorldPoint, HEX_DIRECTIONS};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Goblin Trail.";

/// Faces of the die every turn starts with.
pub const DIE_FACES: u32 = 6;

/// Identity of one of the two competitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentId {
    /// The human-controlled agent.
    Player,
    /// The computer-controlled agent.
    Bot,
}

impl AgentId {
    /// The competitor who moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Bot,
            Self::Bot => Self::Player,
        }
    }
}

/// Stage of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current agent to roll.
    Idle,
    /// The die is being cast.
    Rolling,
    /// Waiting for the presentation to finish animating a move.
    Moving,
    /// Checking the landed cell for a goblin.
    ResolvingHazard,
    /// An agent reached the goal; only a reset is accepted.
    GameOver,
}

/// Commands that express every permissible request from the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Asks to roll the die for the provided agent's turn.
    RequestRoll {
        /// Agent whose turn should be played.
        agent: AgentId,
    },
    /// Reports that the presentation finished animating the agent's move.
    NotifyMoveComplete {
        /// Agent whose move finished.
        agent: AgentId,
    },
    /// Discards the current game and builds a fresh board.
    ResetGame,
}

/// Move the session asks the presentation to animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRequest {
    /// Agent being moved.
    pub agent: AgentId,
    /// Path index the agent leaves.
    pub from_index: usize,
    /// Path index the agent lands on.
    pub to_index: usize,
    /// Cell the agent leaves.
    pub from: CellId,
    /// Cell the agent lands on.
    pub to: CellId,
    /// World position of the landing cell.
    pub destination: WorldPoint,
}

/// Visibility of a single cell from the observer's position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellVisibility {
    /// Cell described by the entry.
    pub cell: CellId,
    /// Whether the cell lies inside the visibility radius.
    pub visible: bool,
    /// Opacity hint in `[0, 1]`; presentation only, never read by game logic.
    pub fade: f32,
}

/// Fog-of-war state derived from one observer position, indexed by cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySet {
    entries: Vec<CellVisibility>,
}

impl VisibilitySet {
    /// Creates a set from entries stored in cell arena order.
    #[must_use]
    pub fn from_entries(entries: Vec<CellVisibility>) -> Self {
        Self { entries }
    }

    /// Visibility of the provided cell, if it exists.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<&CellVisibility> {
        self.entries.get(cell.index())
    }

    /// Reports whether the provided cell is revealed.
    #[must_use]
    pub fn is_visible(&self, cell: CellId) -> bool {
        self.get(cell).is_some_and(|entry| entry.visible)
    }

    /// Iterator over every entry in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &CellVisibility> {
        self.entries.iter()
    }

    /// Iterator over the revealed cells.
    pub fn revealed(&self) -> impl Iterator<Item = CellId> + '_ {
        self.iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.cell)
    }

    /// Number of cells described by the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the set describes no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A new board finished construction and play can begin.
    BoardReady {
        /// Immutable board shared with the session.
        board: Arc<Board>,
    },
    /// The turn state machine entered a new phase.
    PhaseChanged {
        /// Phase that became active.
        phase: Phase,
    },
    /// The die settled for the current agent.
    DiceRolled {
        /// Agent who rolled.
        agent: AgentId,
        /// Face shown by the die.
        roll: u32,
        /// Steps the agent chose to take for the roll.
        steps: u32,
    },
    /// The presentation must animate a move and report its completion.
    MoveRequested(MoveRequest),
    /// The agent's position along the path was committed.
    MoveCompleted {
        /// Agent who moved.
        agent: AgentId,
        /// Committed path index.
        position: usize,
    },
    /// A goblin struck the agent who landed on its cell.
    HazardTriggered {
        /// Agent who was struck.
        agent: AgentId,
        /// Cell the goblin guards.
        cell: CellId,
        /// Name of the goblin.
        goblin: String,
        /// Damage dealt.
        damage: u32,
        /// Hit points left after the strike.
        hit_points: u32,
    },
    /// Fog of war was recomputed around the observer.
    VisibilityChanged {
        /// Agent whose position the set was computed from.
        observer: AgentId,
        /// Recomputed visibility of every cell.
        visibility: VisibilitySet,
    },
    /// The turn passed to a new agent.
    TurnChanged {
        /// Agent expected to roll next.
        current: AgentId,
    },
    /// An agent reached the goal.
    GameOver {
        /// Agent who reached the goal first.
        winner: AgentId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(AgentId::Player.opponent(), AgentId::Bot);
        assert_eq!(AgentId::Bot.opponent(), AgentId::Player);
    }

    #[test]
    fn visibility_set_indexes_by_cell() {
        let set = VisibilitySet::from_entries(vec![
            CellVisibility {
                cell: CellId::new(0),
                visible: true,
                fade: 1.0,
            },
            CellVisibility {
                cell: CellId::new(1),
                visible: false,
                fade: 0.0,
            },
        ]);

        assert!(set.is_visible(CellId::new(0)));
        assert!(!set.is_visible(CellId::new(1)));
        assert!(!set.is_visible(CellId::new(9)));
        assert_eq!(set.revealed().collect::<Vec<_>>(), vec![CellId::new(0)]);
    }
}
