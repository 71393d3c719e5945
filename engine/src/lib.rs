#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Asynchronous driver that connects a game session to a presentation.
//!
//! The engine owns the [`GameSession`] and feeds it commands arriving through
//! an [`EngineHandle`]. After a roll it suspends until the presentation
//! reports that the move animation finished; that wait is the only place the
//! engine yields while a turn is in flight. The bot's roll is scheduled on a
//! timer once its turn begins.

use std::collections::VecDeque;

use goblin_trail_core::{
    AgentId, Board, Command, Event, GameConfig, MoveRequest, Phase, SetupError, VisibilitySet,
};
use goblin_trail_session::{self as session, query, GameSession};
use goblin_trail_system_bot::Bot;
use thiserror::Error;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    time::{sleep_until, Duration, Instant},
};
use tracing::{debug, trace};

/// Failures that stop the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A fresh board could not be built while resetting the game.
    #[error("failed to set up a new game: {0}")]
    Setup(#[from] SetupError),
    /// The engine stopped and no longer accepts messages.
    #[error("the engine is no longer running")]
    Disconnected,
}

/// Callbacks through which the engine narrates the game.
///
/// Every method except [`Presentation::move_requested`] defaults to doing
/// nothing. A presentation must eventually answer each move request with
/// [`EngineHandle::notify_move_complete`], or the engine waits forever.
pub trait Presentation {
    /// A new board was built.
    fn board_ready(&mut self, _board: &Board) {}

    /// The turn state machine changed phase.
    fn phase_changed(&mut self, _phase: Phase) {}

    /// The die settled.
    fn dice_rolled(&mut self, _agent: AgentId, _roll: u32, _steps: u32) {}

    /// An agent must be animated from one cell to another.
    fn move_requested(&mut self, request: &MoveRequest);

    /// The move was committed.
    fn move_completed(&mut self, _agent: AgentId, _position: usize) {}

    /// A goblin struck an agent.
    fn hazard_triggered(
        &mut self,
        _agent: AgentId,
        _goblin: &str,
        _damage: u32,
        _hit_points: u32,
    ) {
    }

    /// The fog of war was recomputed around the player.
    fn visibility_changed(&mut self, _visibility: &VisibilitySet) {}

    /// The turn passed to `current`.
    fn turn_changed(&mut self, _current: AgentId) {}

    /// The game ended.
    fn game_over(&mut self, _winner: AgentId) {}
}

#[derive(Clone, Copy, Debug)]
enum Inbound {
    Command(Command),
    Shutdown,
}

/// Cloneable sender through which presentations talk to the engine.
#[derive(Clone, Debug)]
pub struct EngineHandle {
    sender: UnboundedSender<Inbound>,
}

impl EngineHandle {
    fn send(&self, inbound: Inbound) -> Result<(), EngineError> {
        self.sender
            .send(inbound)
            .map_err(|_| EngineError::Disconnected)
    }

    /// Asks to roll for `agent`; ignored unless it is that agent's turn.
    pub fn request_roll(&self, agent: AgentId) -> Result<(), EngineError> {
        self.send(Inbound::Command(Command::RequestRoll { agent }))
    }

    /// Reports that the move animation of `agent` finished.
    pub fn notify_move_complete(&self, agent: AgentId) -> Result<(), EngineError> {
        self.send(Inbound::Command(Command::NotifyMoveComplete { agent }))
    }

    /// Discards the current game and starts a new one.
    pub fn reset_game(&self) -> Result<(), EngineError> {
        self.send(Inbound::Command(Command::ResetGame))
    }

    /// Stops the engine after the message currently being processed.
    pub fn shutdown(&self) -> Result<(), EngineError> {
        self.send(Inbound::Shutdown)
    }
}

/// Receiving side of the engine's message channel.
#[derive(Debug)]
pub struct Inbox {
    receiver: UnboundedReceiver<Inbound>,
}

/// Creates the channel connecting presentations to an engine.
#[must_use]
pub fn channel() -> (EngineHandle, Inbox) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (EngineHandle { sender }, Inbox { receiver })
}

enum Flow {
    Continue,
    Stop,
}

enum Completion {
    Finished(AgentId),
    Reset,
    Stop,
}

/// Drives one session until it is shut down.
#[derive(Debug)]
pub struct TurnEngine<P> {
    session: GameSession,
    presentation: P,
    inbox: Inbox,
    bot: Bot,
    bot_think_delay: Duration,
    scheduled: Option<(Instant, Command)>,
}

impl<P> TurnEngine<P>
where
    P: Presentation,
{
    /// Creates an engine around a freshly built session.
    #[must_use]
    pub fn new(session: GameSession, presentation: P, inbox: Inbox) -> Self {
        let bot_think_delay = query::config(&session).bot_think_delay();
        Self {
            session,
            presentation,
            inbox,
            bot: Bot::new(),
            bot_think_delay,
            scheduled: None,
        }
    }

    /// Session being driven.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Presentation receiving the callbacks.
    #[must_use]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Configuration of the session being driven.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        query::config(&self.session)
    }

    /// Announces the board and processes messages until shutdown.
    ///
    /// The engine also stops once every [`EngineHandle`] is dropped.
    pub async fn run(&mut self) -> Result<(), EngineError> {
        let mut events = Vec::new();
        session::start(&self.session, &mut events);
        self.publish(&events);

        while let Some(inbound) = self.next_inbound().await {
            let Inbound::Command(command) = inbound else {
                break;
            };
            if let Flow::Stop = self.dispatch(command).await? {
                break;
            }
        }
        debug!("engine stopped");
        Ok(())
    }

    async fn next_inbound(&mut self) -> Option<Inbound> {
        let Some((deadline, command)) = self.scheduled else {
            return self.inbox.receiver.recv().await;
        };

        let fired = tokio::select! {
            inbound = self.inbox.receiver.recv() => return inbound,
            () = sleep_until(deadline) => command,
        };
        self.scheduled = None;
        Some(Inbound::Command(fired))
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow, EngineError> {
        let mut queue = VecDeque::from([command]);
        while let Some(command) = queue.pop_front() {
            let mut events = Vec::new();
            session::apply(&mut self.session, command, &mut events)?;
            self.publish(&events);

            let moving = events.iter().find_map(|event| match event {
                Event::MoveRequested(request) => Some(request.agent),
                _ => None,
            });
            let Some(agent) = moving else {
                continue;
            };
            match self.await_move_completion(agent).await {
                Completion::Finished(agent) => {
                    queue.push_back(Command::NotifyMoveComplete { agent });
                }
                Completion::Reset => queue.push_back(Command::ResetGame),
                Completion::Stop => return Ok(Flow::Stop),
            }
        }
        Ok(Flow::Continue)
    }

    /// Waits for the presentation to finish animating the move of `agent`.
    ///
    /// A reset abandons the move; the session then rebuilds the game without
    /// committing the position. Anything else is ignored while waiting.
    async fn await_move_completion(&mut self, agent: AgentId) -> Completion {
        while let Some(inbound) = self.inbox.receiver.recv().await {
            match inbound {
                Inbound::Command(Command::NotifyMoveComplete { agent: done }) if done == agent => {
                    return Completion::Finished(agent);
                }
                Inbound::Command(Command::ResetGame) => return Completion::Reset,
                Inbound::Command(command) => {
                    trace!(?command, "ignored while a move is animating");
                }
                Inbound::Shutdown => return Completion::Stop,
            }
        }
        Completion::Stop
    }

    fn publish(&mut self, events: &[Event]) {
        for event in events {
            present(&mut self.presentation, event);
        }

        let turn_moved = events.iter().any(|event| {
            matches!(
                event,
                Event::TurnChanged { .. } | Event::GameOver { .. } | Event::BoardReady { .. }
            )
        });
        if !turn_moved {
            return;
        }

        let mut commands = Vec::new();
        self.bot.handle(events, &mut commands);
        self.scheduled = commands.into_iter().next().map(|command| {
            debug!(delay = ?self.bot_think_delay, "bot is thinking");
            (Instant::now() + self.bot_think_delay, command)
        });
    }
}

fn present<P>(presentation: &mut P, event: &Event)
where
    P: Presentation,
{
    match event {
        Event::BoardReady { board } => presentation.board_ready(board),
        Event::PhaseChanged { phase } => presentation.phase_changed(*phase),
        Event::DiceRolled { agent, roll, steps } => presentation.dice_rolled(*agent, *roll, *steps),
        Event::MoveRequested(request) => presentation.move_requested(request),
        Event::MoveCompleted { agent, position } => {
            presentation.move_completed(*agent, *position);
        }
        Event::HazardTriggered {
            agent,
            goblin,
            damage,
            hit_points,
            ..
        } => presentation.hazard_triggered(*agent, goblin, *damage, *hit_points),
        Event::VisibilityChanged { visibility, .. } => presentation.visibility_changed(visibility),
        Event::TurnChanged { current } => presentation.turn_changed(*current),
        Event::GameOver { winner } => presentation.game_over(*winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_reports_a_stopped_engine() {
        let (handle, inbox) = channel();
        drop(inbox);

        assert!(matches!(
            handle.request_roll(AgentId::Player),
            Err(EngineError::Disconnected)
        ));
    }

    #[test]
    fn handle_queues_commands_in_order() {
        let (handle, mut inbox) = channel();
        handle.request_roll(AgentId::Player).expect("open");
        handle.reset_game().expect("open");

        assert!(matches!(
            inbox.receiver.try_recv(),
            Ok(Inbound::Command(Command::RequestRoll {
                agent: AgentId::Player
            }))
        ));
        assert!(matches!(
            inbox.receiver.try_recv(),
            Ok(Inbound::Command(Command::ResetGame))
        ));
    }
}
