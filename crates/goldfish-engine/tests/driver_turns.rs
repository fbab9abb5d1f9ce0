//! Driver scenarios where the agent reaches into the library mid-turn.

use goldfish_core::{CardList, LibraryError};
use goldfish_engine::{Agent, AgentError, Goldfish, OPENING_HAND_SIZE};
use goldfish_library::Library;
use goldfish_test_utils::{land_spell_deck, numbered_deck, ScriptedAgent};
use proptest::prelude::*;

/// Each turn, puts one land from hand back on top and records what the
/// next turn's draw was.
#[derive(Default)]
struct LandRecycler {
    turns: u32,
    next_draws: Vec<&'static str>,
    expecting_land: bool,
    lands_before_draw: usize,
}

impl Agent<&'static str> for LandRecycler {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<&'static str>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        self.turns < 5
    }

    fn take_turn(
        &mut self,
        turn: u32,
        library: &mut Library<&'static str>,
        hand: &mut CardList<&'static str>,
    ) -> Result<(), AgentError> {
        self.turns = turn;
        if self.expecting_land {
            let drew_land = hand.count(&"Land") > self.lands_before_draw;
            self.next_draws.push(if drew_land { "Land" } else { "Spell" });
        }
        if hand.remove_card(&"Land") {
            library.top(&"Land")?;
            self.expecting_land = true;
            self.lands_before_draw = hand.count(&"Land");
        } else {
            self.expecting_land = false;
        }
        Ok(())
    }
}

#[test]
fn topped_land_is_the_next_draw() {
    let library = Library::seeded(21, land_spell_deck(30, 10));
    let agent = Goldfish::new(library, LandRecycler::default()).run().unwrap();
    assert!(!agent.next_draws.is_empty());
    assert!(agent.next_draws.iter().all(|card| *card == "Land"));
}

/// Tops a card it never drew.
struct Cheater;

impl Agent<&'static str> for Cheater {
    fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<&'static str>) -> bool {
        true
    }

    fn simulate_another_turn(&mut self) -> bool {
        true
    }

    fn take_turn(
        &mut self,
        _turn: u32,
        library: &mut Library<&'static str>,
        _hand: &mut CardList<&'static str>,
    ) -> Result<(), AgentError> {
        library.top(&"Black Lotus")?;
        Ok(())
    }
}

#[test]
fn library_errors_propagate_through_take_turn() {
    let library = Library::seeded(22, land_spell_deck(20, 20));
    let err = Goldfish::new(library, Cheater).run().err().unwrap();
    assert_eq!(
        err,
        AgentError::Library(LibraryError::CardNotDrawn {
            card: "\"Black Lotus\"".into()
        })
    );
}

/// Tutors for a named card on turn one and keeps it.
struct Tutor {
    target: u32,
    found: Option<u32>,
}

impl Agent<u32> for Tutor {
    fn keep_opening_hand(&mut self, count: usize, hand: &CardList<u32>) -> bool {
        // Mulligan until the target is not already in hand.
        hand.count(&self.target) == 0 || count == 1
    }

    fn simulate_another_turn(&mut self) -> bool {
        false
    }

    fn take_turn(
        &mut self,
        _turn: u32,
        library: &mut Library<u32>,
        hand: &mut CardList<u32>,
    ) -> Result<(), AgentError> {
        if hand.count(&self.target) > 0 {
            self.found = Some(self.target);
            return Ok(());
        }
        if let Some(card) = library.tutor(&self.target) {
            hand.add_card(card);
            self.found = Some(card);
        }
        Ok(())
    }
}

#[test]
fn tutor_finds_a_card_still_in_the_library() {
    let library = Library::seeded(23, numbered_deck(60));
    let agent = Goldfish::new(
        library,
        Tutor {
            target: 42,
            found: None,
        },
    )
    .run()
    .unwrap();
    assert_eq!(agent.found, Some(42));
}

#[test]
fn every_game_draws_from_a_full_library() {
    let library = Library::seeded(24, numbered_deck(10));
    let agent = Goldfish::new(library, ScriptedAgent::new(0, 7, 100))
        .games(4)
        .run()
        .unwrap();
    assert_eq!(agent.games_finished, 4);
    // 7 in hand + turn-1 draw + two more turns empties a 10-card deck.
    let last_turns: Vec<_> = agent
        .hands
        .iter()
        .filter(|(_, hand)| hand.size() == 10)
        .collect();
    assert_eq!(last_turns.len(), 4);
    assert!(last_turns.iter().all(|(_, hand)| *hand == numbered_deck(10)));
}

proptest! {
    #[test]
    fn hand_grows_one_card_per_turn(
        seed in any::<u64>(),
        deck_size in 1u32..60,
        keep_at in 1usize..=OPENING_HAND_SIZE,
        turns in 1u32..20,
        skip in any::<bool>(),
    ) {
        let library = Library::seeded(seed, numbered_deck(deck_size));
        let agent = Goldfish::new(library, ScriptedAgent::new(0, keep_at, turns))
            .skip_first_draw(skip)
            .run()
            .unwrap();

        let deck = deck_size as usize;
        let opening = keep_at.min(deck);
        let first = if skip { opening } else { (opening + 1).min(deck) };
        for (turn, hand) in &agent.hands {
            let expected = (first + (*turn as usize - 1)).min(deck);
            prop_assert_eq!(hand.size(), expected);
        }
        prop_assert!(agent.hands.len() as u32 <= turns);
    }
}
