#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game session for Goblin Trail.
//!
//! A [`GameSession`] owns the board, both agents and the turn state. It is
//! only ever changed through [`apply`], which resolves one command and
//! reports every resulting change as [`Event`] values. Commands that arrive
//! at the wrong moment, such as a second roll while a move is animating, are
//! ignored without error.

use std::sync::Arc;

use goblin_trail_core::{
    AgentId, Board, Command, Event, GameConfig, MoveRequest, Phase, SetupError, VisibilitySet,
};
use goblin_trail_system_bot::effective_steps;
use goblin_trail_system_visibility::compute_visibility;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

mod agent;
mod dice;
mod setup;

pub use agent::Agent;
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use setup::build_board;

/// One game of Goblin Trail, from board construction to the winner.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Arc<Board>,
    rng: ChaCha8Rng,
    dice: Box<dyn Dice>,
    player: Agent,
    bot: Agent,
    phase: Phase,
    current_turn: AgentId,
    winner: Option<AgentId>,
    pending_move: Option<MoveRequest>,
}

impl GameSession {
    /// Builds the board and seats both agents at the entry, rolling fair dice.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let dice = SeededDice::new(config.seed);
        Self::with_dice(config, Box::new(dice))
    }

    /// Builds the board and seats both agents, rolling the provided dice.
    pub fn with_dice(config: GameConfig, dice: Box<dyn Dice>) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let board = build_board(&config, &mut rng)?;
        let path_length = board.path().len();
        Ok(Self {
            player: Agent::new(AgentId::Player, config.starting_hit_points, path_length),
            bot: Agent::new(AgentId::Bot, config.starting_hit_points, path_length),
            board: Arc::new(board),
            config,
            rng,
            dice,
            phase: Phase::Idle,
            current_turn: AgentId::Player,
            winner: None,
            pending_move: None,
        })
    }

    fn agent(&self, id: AgentId) -> &Agent {
        match id {
            AgentId::Player => &self.player,
            AgentId::Bot => &self.bot,
        }
    }

    fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        match id {
            AgentId::Player => &mut self.player,
            AgentId::Bot => &mut self.bot,
        }
    }

    fn enter(&mut self, phase: Phase, out_events: &mut Vec<Event>) {
        self.phase = phase;
        out_events.push(Event::PhaseChanged { phase });
    }

    fn player_visibility(&self) -> VisibilitySet {
        let observer = self
            .board
            .path_cell(self.player.position())
            .map(|cell| cell.position())
            .unwrap_or_default();
        compute_visibility(
            observer,
            self.board.cells(),
            self.config.visibility_radius,
        )
    }

    fn announce(&self, out_events: &mut Vec<Event>) {
        out_events.push(Event::BoardReady {
            board: Arc::clone(&self.board),
        });
        out_events.push(Event::PhaseChanged { phase: self.phase });
        out_events.push(Event::VisibilityChanged {
            observer: AgentId::Player,
            visibility: self.player_visibility(),
        });
        out_events.push(Event::TurnChanged {
            current: self.current_turn,
        });
    }

    fn roll(&mut self, agent: AgentId, out_events: &mut Vec<Event>) {
        self.enter(Phase::Rolling, out_events);

        let roll = self.dice.roll();
        let mover = self.agent(agent);
        let steps = match agent {
            AgentId::Player => roll,
            AgentId::Bot => {
                let landing = mover.projected(roll);
                let landing_is_hazard =
                    landing != mover.position() && self.board.is_hazard_at(landing);
                effective_steps(
                    roll,
                    landing_is_hazard,
                    mover.hit_points(),
                    self.config.bot_low_health_threshold,
                )
            }
        };
        out_events.push(Event::DiceRolled { agent, roll, steps });

        let from_index = mover.position();
        let to_index = mover.projected(steps);
        let from = self.board.path_cell(from_index);
        let to = self.board.path_cell(to_index);
        let (Some(from), Some(to)) = (from, to) else {
            warn!(?agent, from_index, to_index, "move left the path");
            self.enter(Phase::Idle, out_events);
            return;
        };

        let request = MoveRequest {
            agent,
            from_index,
            to_index,
            from: from.id(),
            to: to.id(),
            destination: to.position(),
        };
        debug!(?agent, roll, steps, from_index, to_index, "move requested");
        self.pending_move = Some(request);
        self.enter(Phase::Moving, out_events);
        out_events.push(Event::MoveRequested(request));
    }

    fn complete_move(&mut self, request: MoveRequest, out_events: &mut Vec<Event>) {
        let agent = request.agent;
        let steps = u32::try_from(request.to_index - request.from_index).unwrap_or(u32::MAX);
        let mover = self.agent_mut(agent);
        let position = mover.advance(steps);
        debug!(agent = ?mover.id(), position, "move completed");
        out_events.push(Event::MoveCompleted { agent, position });

        self.enter(Phase::ResolvingHazard, out_events);
        if position != request.from_index && self.board.is_hazard_at(position) {
            self.strike(agent, position, out_events);
        }

        if agent == AgentId::Player {
            out_events.push(Event::VisibilityChanged {
                observer: AgentId::Player,
                visibility: self.player_visibility(),
            });
        }

        if self.agent(agent).at_goal() {
            self.winner = Some(agent);
            self.enter(Phase::GameOver, out_events);
            out_events.push(Event::GameOver { winner: agent });
            info!(winner = ?agent, "game over");
            return;
        }

        self.current_turn = agent.opponent();
        self.enter(Phase::Idle, out_events);
        out_events.push(Event::TurnChanged {
            current: self.current_turn,
        });
    }

    fn strike(&mut self, agent: AgentId, position: usize, out_events: &mut Vec<Event>) {
        let board = Arc::clone(&self.board);
        let (Some(cell), Some(goblin)) = (board.path().get(position), board.goblin_at(position))
        else {
            warn!(?agent, position, "hazard without a goblin");
            return;
        };

        let damage = self
            .rng
            .gen_range(self.config.damage_min..=self.config.damage_max);
        let hit_points = self.agent_mut(agent).apply_damage(damage);
        debug!(?agent, goblin = %goblin.name, damage, hit_points, "goblin strikes");
        out_events.push(Event::HazardTriggered {
            agent,
            cell,
            goblin: goblin.name.clone(),
            damage,
            hit_points,
        });
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) -> Result<(), SetupError> {
        let board = build_board(&self.config, &mut self.rng)?;
        let path_length = board.path().len();
        let hit_points = self.config.starting_hit_points;

        self.board = Arc::new(board);
        self.player = Agent::new(AgentId::Player, hit_points, path_length);
        self.bot = Agent::new(AgentId::Bot, hit_points, path_length);
        self.phase = Phase::Idle;
        self.current_turn = AgentId::Player;
        self.winner = None;
        self.pending_move = None;

        info!("game reset");
        self.announce(out_events);
        Ok(())
    }
}

/// Emits the events describing a freshly constructed session.
///
/// Presentations call this once before submitting commands so that they
/// receive the board, the initial fog of war and the first turn.
pub fn start(session: &GameSession, out_events: &mut Vec<Event>) {
    session.announce(out_events);
}

/// Applies the provided command to the session.
///
/// Only a reset can fail: if the new board cannot be built the error is
/// returned and the current game is left exactly as it was.
pub fn apply(
    session: &mut GameSession,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), SetupError> {
    match command {
        Command::RequestRoll { agent } => {
            if session.phase != Phase::Idle || session.current_turn != agent {
                trace!(?agent, phase = ?session.phase, "roll request ignored");
                return Ok(());
            }
            session.roll(agent, out_events);
        }
        Command::NotifyMoveComplete { agent } => {
            let pending = session
                .pending_move
                .filter(|request| session.phase == Phase::Moving && request.agent == agent);
            let Some(request) = pending else {
                trace!(?agent, phase = ?session.phase, "move completion ignored");
                return Ok(());
            };
            session.pending_move = None;
            session.complete_move(request, out_events);
        }
        Command::ResetGame => session.reset(out_events)?,
    }
    Ok(())
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use std::sync::Arc;

    use goblin_trail_core::{AgentId, Board, GameConfig, MoveRequest, Phase};

    use super::{Agent, GameSession};

    /// Configuration the session was built from.
    #[must_use]
    pub fn config(session: &GameSession) -> &GameConfig {
        &session.config
    }

    /// Shared handle to the current board.
    #[must_use]
    pub fn board(session: &GameSession) -> Arc<Board> {
        Arc::clone(&session.board)
    }

    /// Active phase of the turn state machine.
    #[must_use]
    pub fn phase(session: &GameSession) -> Phase {
        session.phase
    }

    /// Agent expected to act next.
    #[must_use]
    pub fn current_turn(session: &GameSession) -> AgentId {
        session.current_turn
    }

    /// Agent who reached the goal, once the game is over.
    #[must_use]
    pub fn winner(session: &GameSession) -> Option<AgentId> {
        session.winner
    }

    /// State of the requested agent.
    #[must_use]
    pub fn agent(session: &GameSession, id: AgentId) -> &Agent {
        session.agent(id)
    }

    /// Move awaiting its completion signal, if any.
    #[must_use]
    pub fn pending_move(session: &GameSession) -> Option<MoveRequest> {
        session.pending_move
    }

    /// Captures positions, hit points and turn state in one value.
    #[must_use]
    pub fn snapshot(session: &GameSession) -> Snapshot {
        Snapshot {
            phase: session.phase,
            current_turn: session.current_turn,
            winner: session.winner,
            player: AgentSnapshot::of(&session.player),
            bot: AgentSnapshot::of(&session.bot),
        }
    }

    /// Read-only summary of the whole session, handy for logs and assertions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Snapshot {
        /// Active phase.
        pub phase: Phase,
        /// Agent expected to act next.
        pub current_turn: AgentId,
        /// Winner, once decided.
        pub winner: Option<AgentId>,
        /// Human-controlled agent.
        pub player: AgentSnapshot,
        /// Computer-controlled agent.
        pub bot: AgentSnapshot,
    }

    /// Position and health of one agent.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AgentSnapshot {
        /// Index along the path.
        pub position: usize,
        /// Remaining hit points.
        pub hit_points: u32,
    }

    impl AgentSnapshot {
        fn of(agent: &Agent) -> Self {
            Self {
                position: agent.position(),
                hit_points: agent.hit_points(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(faces: Vec<u32>) -> GameSession {
        GameSession::with_dice(GameConfig::default(), Box::new(ScriptedDice::new(faces)))
            .expect("default board")
    }

    #[test]
    fn start_announces_board_and_first_turn() {
        let session = scripted(vec![1]);
        let mut events = Vec::new();

        start(&session, &mut events);

        assert!(matches!(events[0], Event::BoardReady { .. }));
        assert_eq!(events[1], Event::PhaseChanged { phase: Phase::Idle });
        assert!(matches!(
            events[2],
            Event::VisibilityChanged {
                observer: AgentId::Player,
                ..
            }
        ));
        assert_eq!(
            events[3],
            Event::TurnChanged {
                current: AgentId::Player
            }
        );
    }

    #[test]
    fn roll_suspends_in_moving_until_notified() {
        let mut session = scripted(vec![3]);
        let mut events = Vec::new();

        apply(
            &mut session,
            Command::RequestRoll {
                agent: AgentId::Player,
            },
            &mut events,
        )
        .expect("rolls never fail");

        assert_eq!(session.phase, Phase::Moving);
        assert_eq!(session.player.position(), 0, "position waits for the animation");
        let request = session.pending_move.expect("move is pending");
        assert_eq!((request.from_index, request.to_index), (0, 3));
        assert_eq!(
            events.last(),
            Some(&Event::MoveRequested(request)),
            "the move request closes the batch"
        );
    }

    #[test]
    fn roll_out_of_turn_is_ignored() {
        let mut session = scripted(vec![3]);
        let mut events = Vec::new();

        apply(
            &mut session,
            Command::RequestRoll {
                agent: AgentId::Bot,
            },
            &mut events,
        )
        .expect("rolls never fail");

        assert!(events.is_empty());
        assert_eq!(session.phase, Phase::Idle);
    }
}
