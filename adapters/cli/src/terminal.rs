//! Text presentation that narrates the game on standard output.

use std::time::Duration;

use goblin_trail_core::{AgentId, Board, MoveRequest, VisibilitySet};
use goblin_trail_engine::{EngineHandle, Presentation};

/// Prints every event and fakes move animations with a short pause.
#[derive(Debug)]
pub(crate) struct TerminalPresentation {
    handle: EngineHandle,
    move_delay: Duration,
    autoplay: bool,
}

impl TerminalPresentation {
    pub(crate) fn new(handle: EngineHandle, move_delay: Duration, autoplay: bool) -> Self {
        Self {
            handle,
            move_delay,
            autoplay,
        }
    }
}

fn name(agent: AgentId) -> &'static str {
    match agent {
        AgentId::Player => "You",
        AgentId::Bot => "The bot",
    }
}

impl Presentation for TerminalPresentation {
    fn board_ready(&mut self, board: &Board) {
        println!(
            "A trail of {} cells winds through {} hexes; {} goblins lie in wait.",
            board.path().len(),
            board.cells().len(),
            board.goblins().len()
        );
        if let (Some(entry), Some(exit)) = (board.entry(), board.exit()) {
            println!(
                "Start at ({}, {}), reach ({}, {}) to win.",
                entry.coord().q(),
                entry.coord().r(),
                exit.coord().q(),
                exit.coord().r()
            );
        }
    }

    fn dice_rolled(&mut self, agent: AgentId, roll: u32, steps: u32) {
        if roll == steps {
            println!("{} rolled a {roll}.", name(agent));
        } else {
            println!(
                "{} rolled a {roll} but cautiously moves {steps}.",
                name(agent)
            );
        }
    }

    fn move_requested(&mut self, request: &MoveRequest) {
        let handle = self.handle.clone();
        let delay = self.move_delay;
        let agent = request.agent;
        let _ = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = handle.notify_move_complete(agent);
        });
    }

    fn move_completed(&mut self, agent: AgentId, position: usize) {
        match agent {
            AgentId::Player => println!("You now stand on step {position}."),
            AgentId::Bot => println!("The bot now stands on step {position}."),
        }
    }

    fn hazard_triggered(&mut self, agent: AgentId, goblin: &str, damage: u32, hit_points: u32) {
        println!(
            "{goblin} ambushes {} for {damage} damage! {hit_points} HP left.",
            name(agent).to_lowercase()
        );
    }

    fn visibility_changed(&mut self, visibility: &VisibilitySet) {
        println!(
            "The fog lifts around you: {} of {} cells visible.",
            visibility.revealed().count(),
            visibility.len()
        );
    }

    fn turn_changed(&mut self, current: AgentId) {
        match current {
            AgentId::Player if self.autoplay => {
                let _ = self.handle.request_roll(AgentId::Player);
            }
            AgentId::Player => println!("Your turn. Press Enter to roll."),
            AgentId::Bot => println!("The bot is thinking..."),
        }
    }

    fn game_over(&mut self, winner: AgentId) {
        match winner {
            AgentId::Player => println!("You reached the end of the trail. Victory!"),
            AgentId::Bot => println!("The bot reached the end of the trail first."),
        }
        if self.autoplay {
            let _ = self.handle.shutdown();
        } else {
            println!("Type `reset` to play again or `quit` to leave.");
        }
    }
}
