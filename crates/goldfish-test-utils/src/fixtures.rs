//! Reusable agent fixtures.
//!
//! - [`ScriptedAgent`]: keeps hands up to a size, plays N turns, records
//!   what it saw.
//! - [`SleepyAgent`]: sleeps during its single turn, for completion-order
//!   tests.
//! - [`FailingAgent`]: returns an error on a chosen turn.
//! - [`PanickingAgent`]: panics on its first turn.

use std::time::Duration;

use goldfish_core::{Card, CardList};
use goldfish_engine::{Agent, AgentError};
use goldfish_library::Library;

/// `lands` x "Land" plus `spells` x "Spell".
pub fn land_spell_deck(lands: usize, spells: usize) -> CardList<&'static str> {
    [("Land", lands), ("Spell", spells)].into_iter().collect()
}

/// Cards `0..size`, one copy each.
pub fn numbered_deck(size: u32) -> CardList<u32> {
    (0..size).collect()
}

/// Deterministic agent that records every turn it plays.
pub struct ScriptedAgent<T: Card> {
    pub id: usize,
    /// Largest opening hand size to keep. 0 rejects every hand.
    pub keep_at: usize,
    /// Turns to play per game.
    pub turns: u32,
    pub games_started: u32,
    pub games_finished: u32,
    pub mulligans: u32,
    /// Hand as seen at the start of each turn, across all games.
    pub hands: Vec<(u32, CardList<T>)>,
    pub started: bool,
    pub done: bool,
    played: u32,
}

impl<T: Card> ScriptedAgent<T> {
    pub fn new(id: usize, keep_at: usize, turns: u32) -> Self {
        Self {
            id,
            keep_at,
            turns,
            games_started: 0,
            games_finished: 0,
            mulligans: 0,
            hands: Vec::new(),
            started: false,
            done: false,
            played: 0,
        }
    }

    /// Keeps seven and plays one turn.
    pub fn one_turn(id: usize) -> Self {
        Self::new(id, 7, 1)
    }
}

impl<T: Card> Agent<T> for ScriptedAgent<T> {
    fn keep_opening_hand(&mut self, count: usize, _hand: &CardList<T>) -> bool {
        let keep = count <= self.keep_at;
        if !keep {
            self.mulligans += 1;
        }
        keep
    }

    fn simulate_another_turn(&mut self) -> bool {
        self.played < self.turns
    }

    fn take_turn(
        &mut self,
        turn: u32,
        _library: &mut Library<T>,
        hand: &mut CardList<T>,
    ) -> Result<(), AgentError> {
        self.played = turn;
        self.hands.push((turn, hand.clone()));
        Ok(())
    }

    fn new_game(&mut self) {
        self.played = 0;
        self.games_started += 1;
    }

    fn game_done(&mut self) {
        self.games_finished += 1;
    }

    fn simulation_started(&mut self) {
        self.started = true;
    }

    fn simulation_done(&mut self) {
        self.done = true;
    }
}

/// Keeps seven and sleeps for `nap` during its only turn.
pub struct SleepyAgent {
    pub id: usize,
    pub nap: Duration,
}

impl SleepyAgent {
    pub fn new(id: usize, nap: Duration) -> Self {
        Self { id, nap }
    }
}

impl<T: Card> Agent<T> for SleepyAgent {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<T>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        false
    }

    fn take_turn(
        &mut self,
        _turn: u32,
        _library: &mut Library<T>,
        _hand: &mut CardList<T>,
    ) -> Result<(), AgentError> {
        std::thread::sleep(self.nap);
        Ok(())
    }
}

/// Returns [`AgentError::Failed`] on turn `fail_on`.
pub struct FailingAgent {
    pub fail_on: u32,
}

impl<T: Card> Agent<T> for FailingAgent {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<T>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        true
    }

    fn take_turn(
        &mut self,
        turn: u32,
        _library: &mut Library<T>,
        _hand: &mut CardList<T>,
    ) -> Result<(), AgentError> {
        if turn == self.fail_on {
            return Err(AgentError::failed(format!("failed on turn {turn}")));
        }
        Ok(())
    }
}

/// Panics with `message` on its first turn.
pub struct PanickingAgent {
    pub message: &'static str,
}

impl<T: Card> Agent<T> for PanickingAgent {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<T>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        false
    }

    fn take_turn(
        &mut self,
        _turn: u32,
        _library: &mut Library<T>,
        _hand: &mut CardList<T>,
    ) -> Result<(), AgentError> {
        panic!("{}", self.message);
    }
}
