#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Computer opponent: schedules the bot's rolls and decides how far it moves.

use goblin_trail_core::{AgentId, Command, Event};

/// Pure system that asks for the bot's roll whenever its turn begins.
///
/// The system only reacts to events; how long the bot "thinks" before the
/// command is submitted is up to the driver that runs it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bot;

impl Bot {
    /// Creates the bot system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes events and emits a roll request when the bot should play.
    ///
    /// Only the last turn-related event of the batch counts, so a turn that
    /// was handed to the bot and revoked by a reset in the same batch does
    /// not produce a roll.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        let mut bots_turn = None;
        for event in events {
            match event {
                Event::TurnChanged { current } => bots_turn = Some(*current == AgentId::Bot),
                Event::GameOver { .. } | Event::BoardReady { .. } => bots_turn = Some(false),
                _ => {}
            }
        }

        if bots_turn == Some(true) {
            out.push(Command::RequestRoll {
                agent: AgentId::Bot,
            });
        }
    }
}

/// Number of steps the bot takes for `roll`.
///
/// When the bot is at or below `low_health_threshold` hit points and the
/// straightforward landing cell hides a goblin, it halves the roll,
/// rounding down. Otherwise it moves the full roll.
#[must_use]
pub const fn effective_steps(
    roll: u32,
    landing_is_hazard: bool,
    hit_points: u32,
    low_health_threshold: u32,
) -> u32 {
    if landing_is_hazard && hit_points <= low_health_threshold {
        roll / 2
    } else {
        roll
    }
}
