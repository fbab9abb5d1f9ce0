//! Benchmark profiles for the Goldfish deck simulator.
//!
//! - [`constructed_deck`]: 60 cards, 4 copies of 15 names
//! - [`singleton_deck`]: `size` distinct cards, one copy each
//! - [`TurnLimit`]: an agent that keeps seven and plays a fixed number of
//!   turns, so benchmarks measure the driver rather than agent logic

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use goldfish_core::CardList;
use goldfish_engine::{Agent, AgentError};
use goldfish_library::Library;

/// Typical constructed deck: 15 distinct cards at 4 copies each.
pub fn constructed_deck() -> CardList<u16> {
    (0u16..15).map(|card| (card, 4)).collect()
}

/// Singleton deck with `size` distinct cards, e.g. a 100-card commander
/// deck or a 540-card cube.
pub fn singleton_deck(size: u16) -> CardList<u16> {
    (0..size).collect()
}

/// Keeps any opening hand, then plays `turns` turns doing nothing but
/// counting cards seen.
#[derive(Clone, Debug)]
pub struct TurnLimit {
    turns: u32,
    current: u32,
    /// Sum of hand sizes over every turn played.
    pub cards_seen: usize,
}

impl TurnLimit {
    /// Agent that plays `turns` turns per game.
    pub fn new(turns: u32) -> Self {
        Self {
            turns,
            current: 0,
            cards_seen: 0,
        }
    }
}

impl Agent<u16> for TurnLimit {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<u16>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        self.current < self.turns
    }

    fn take_turn(
        &mut self,
        turn: u32,
        _library: &mut Library<u16>,
        hand: &mut CardList<u16>,
    ) -> Result<(), AgentError> {
        self.current = turn;
        self.cards_seen += hand.size();
        Ok(())
    }

    fn new_game(&mut self) {
        self.current = 0;
    }
}
