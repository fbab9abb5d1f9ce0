//! The [`Agent`] trait: caller-supplied decision logic.
//!
//! An agent is both the controller and the observer of a simulation. The
//! driver asks it which opening hand to keep and whether to play another
//! turn, hands it the library and hand each turn, and notifies it at game
//! and simulation boundaries. Whatever the agent records is the result of
//! the simulation: the driver returns the agent itself when it finishes.

use goldfish_core::{Card, CardList};
use goldfish_library::Library;

use crate::error::AgentError;

/// Decision maker driven by [`Goldfish`](crate::Goldfish).
///
/// Only [`take_turn`](Agent::take_turn) can return an error. Every other
/// callback can fail only by panicking; [`Goldfish::run`](crate::Goldfish::run)
/// lets the panic unwind, and
/// [`SimulationService`](crate::SimulationService) returns it as
/// [`SimulationError::Panicked`](crate::SimulationError::Panicked).
///
/// # Call order
///
/// ```text
/// simulation_started
/// per game:
///     new_game
///     keep_opening_hand (7, 6, ... until kept or 1 rejected)
///     take_turn(1)
///     while cards remain && simulate_another_turn: take_turn(n)
///     game_done
/// simulation_done
/// ```
///
/// # Examples
///
/// ```
/// use goldfish_core::CardList;
/// use goldfish_engine::{Agent, AgentError};
/// use goldfish_library::Library;
///
/// /// Counts lands in hand on turn 3.
/// #[derive(Default)]
/// struct LandCounter {
///     turn: u32,
///     lands_on_three: Vec<usize>,
/// }
///
/// impl Agent<&'static str> for LandCounter {
///     fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<&'static str>) -> bool {
///         true
///     }
///
///     fn simulate_another_turn(&mut self) -> bool {
///         self.turn < 3
///     }
///
///     fn take_turn(
///         &mut self,
///         turn: u32,
///         _library: &mut Library<&'static str>,
///         hand: &mut CardList<&'static str>,
///     ) -> Result<(), AgentError> {
///         self.turn = turn;
///         if turn == 3 {
///             self.lands_on_three.push(hand.count(&"Land"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Agent<T: Card> {
    /// Decide whether to keep an opening hand of `count` cards.
    ///
    /// Rejecting a hand reshuffles and offers one card fewer.
    fn keep_opening_hand(&mut self, count: usize, hand: &CardList<T>) -> bool;

    /// Decide whether to play another turn. Only asked while the library
    /// still has cards.
    fn simulate_another_turn(&mut self) -> bool;

    /// Play turn `turn`. The turn's draw has already been added to `hand`.
    ///
    /// The agent may draw, tutor, or place cards via `library` and edit
    /// `hand` freely. Returning an error aborts the whole simulation.
    fn take_turn(
        &mut self,
        turn: u32,
        library: &mut Library<T>,
        hand: &mut CardList<T>,
    ) -> Result<(), AgentError>;

    /// Called before each game's opening hand is drawn.
    fn new_game(&mut self) {}

    /// Called after each game's last turn.
    fn game_done(&mut self) {}

    /// Called once before the first game.
    fn simulation_started(&mut self) {}

    /// Called once after the last game.
    fn simulation_done(&mut self) {}
}

impl<T: Card, A: Agent<T> + ?Sized> Agent<T> for Box<A> {
    fn keep_opening_hand(&mut self, count: usize, hand: &CardList<T>) -> bool {
        (**self).keep_opening_hand(count, hand)
    }

    fn simulate_another_turn(&mut self) -> bool {
        (**self).simulate_another_turn()
    }

    fn take_turn(
        &mut self,
        turn: u32,
        library: &mut Library<T>,
        hand: &mut CardList<T>,
    ) -> Result<(), AgentError> {
        (**self).take_turn(turn, library, hand)
    }

    fn new_game(&mut self) {
        (**self).new_game();
    }

    fn game_done(&mut self) {
        (**self).game_done();
    }

    fn simulation_started(&mut self) {
        (**self).simulation_started();
    }

    fn simulation_done(&mut self) {
        (**self).simulation_done();
    }
}
