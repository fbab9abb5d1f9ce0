//! [`Goldfish`]: the single-run simulation driver.
//!
//! "Goldfishing" a deck means playing it against an opponent who does
//! nothing: only the draws and the agent's own decisions matter. The
//! driver owns one [`Library`] and one [`Agent`], plays the configured
//! number of games, and returns the agent so the caller can read what it
//! observed.

use goldfish_core::{Card, CardList};
use goldfish_library::Library;

use crate::agent::Agent;
use crate::error::AgentError;

/// Size of the first opening hand offered each game.
pub const OPENING_HAND_SIZE: usize = 7;

/// Drives one agent through one or more games against one library.
///
/// Defaults: one game, first draw not skipped (on the draw).
pub struct Goldfish<T: Card, A: Agent<T>> {
    library: Library<T>,
    agent: A,
    games: u32,
    skip_first_draw: bool,
}

impl<T: Card, A: Agent<T>> Goldfish<T, A> {
    /// Create a driver over `library` controlled by `agent`.
    pub fn new(library: Library<T>, agent: A) -> Self {
        Self {
            library,
            agent,
            games: 1,
            skip_first_draw: false,
        }
    }

    /// Set the number of games to play.
    pub fn games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Skip the turn-1 draw (play the games on the play).
    pub fn skip_first_draw(mut self, skip: bool) -> Self {
        self.skip_first_draw = skip;
        self
    }

    /// Play every game and return the agent.
    ///
    /// # Errors
    ///
    /// The first error returned by [`Agent::take_turn`]; the remaining
    /// games are not played and no further callbacks are made.
    pub fn run(mut self) -> Result<A, AgentError> {
        self.agent.simulation_started();
        for game in 0..self.games {
            self.agent.new_game();
            let mut hand = self.draw_opening_hand();
            tracing::debug!(game, hand = hand.size(), "opening hand kept");

            let mut turn = 1;
            if !self.skip_first_draw {
                self.draw_into(&mut hand);
            }
            self.agent.take_turn(turn, &mut self.library, &mut hand)?;

            while self.library.cards_remaining() > 0 && self.agent.simulate_another_turn() {
                turn += 1;
                self.draw_into(&mut hand);
                self.agent.take_turn(turn, &mut self.library, &mut hand)?;
            }
            self.agent.game_done();
            tracing::debug!(game, turns = turn, "game done");
        }
        self.agent.simulation_done();
        Ok(self.agent)
    }

    /// Offer hands of 7, 6, ... 1 cards until the agent keeps one.
    ///
    /// If even the 1-card hand is rejected the game starts with an empty
    /// hand and a full library.
    fn draw_opening_hand(&mut self) -> CardList<T> {
        let mut hand = CardList::new();
        self.library.reset();
        for count in (1..=OPENING_HAND_SIZE).rev() {
            for _ in 0..count {
                self.draw_into(&mut hand);
            }
            if self.agent.keep_opening_hand(count, &hand) {
                return hand;
            }
            tracing::trace!(count, "mulligan");
            hand.clear();
            self.library.reset();
        }
        hand
    }

    /// Draw one card into `hand`; an exhausted library adds nothing.
    fn draw_into(&mut self, hand: &mut CardList<T>) {
        if let Some(card) = self.library.draw() {
            hand.add_card(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        Started,
        NewGame,
        Keep(usize, usize),
        Turn(u32, usize),
        GameDone,
        Done,
    }

    /// Keeps hands of at most `keep_at` cards and plays `turns` turns,
    /// recording every callback.
    struct Recorder {
        keep_at: usize,
        turns: u32,
        played: u32,
        calls: Vec<Call>,
        last_hand: CardList<&'static str>,
        fail_on: Option<u32>,
    }

    impl Recorder {
        fn new(keep_at: usize, turns: u32) -> Self {
            Self {
                keep_at,
                turns,
                played: 0,
                calls: Vec::new(),
                last_hand: CardList::new(),
                fail_on: None,
            }
        }
    }

    impl Agent<&'static str> for Recorder {
        fn keep_opening_hand(&mut self, count: usize, hand: &CardList<&'static str>) -> bool {
            self.calls.push(Call::Keep(count, hand.size()));
            count <= self.keep_at
        }

        fn simulate_another_turn(&mut self) -> bool {
            self.played < self.turns
        }

        fn take_turn(
            &mut self,
            turn: u32,
            _library: &mut Library<&'static str>,
            hand: &mut CardList<&'static str>,
        ) -> Result<(), AgentError> {
            self.played = turn;
            self.calls.push(Call::Turn(turn, hand.size()));
            self.last_hand = hand.clone();
            if self.fail_on == Some(turn) {
                return Err(AgentError::failed("scripted failure"));
            }
            Ok(())
        }

        fn new_game(&mut self) {
            self.played = 0;
            self.calls.push(Call::NewGame);
        }

        fn game_done(&mut self) {
            self.calls.push(Call::GameDone);
        }

        fn simulation_started(&mut self) {
            self.calls.push(Call::Started);
        }

        fn simulation_done(&mut self) {
            self.calls.push(Call::Done);
        }
    }

    fn land_spell_deck() -> CardList<&'static str> {
        [("Land", 7), ("Spell", 1)].into_iter().collect()
    }

    #[test]
    fn keeping_seven_and_drawing_holds_whole_deck() {
        let library = Library::seeded(1, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 1)).run().unwrap();
        assert_eq!(agent.last_hand.size(), 8);
        assert_eq!(agent.last_hand, land_spell_deck());
    }

    #[test]
    fn callbacks_follow_documented_order() {
        let library = Library::seeded(2, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 1)).run().unwrap();
        assert_eq!(
            agent.calls,
            vec![
                Call::Started,
                Call::NewGame,
                Call::Keep(7, 7),
                Call::Turn(1, 8),
                Call::GameDone,
                Call::Done,
            ]
        );
    }

    #[test]
    fn skip_first_draw_keeps_opening_hand_size() {
        let library = Library::seeded(3, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 1))
            .skip_first_draw(true)
            .run()
            .unwrap();
        assert!(agent.calls.contains(&Call::Turn(1, 7)));
    }

    #[test]
    fn mulligans_down_to_kept_size() {
        let deck: CardList<&str> = [("Land", 40)].into_iter().collect();
        let agent = Goldfish::new(Library::seeded(4, deck), Recorder::new(5, 1))
            .run()
            .unwrap();
        let keeps: Vec<_> = agent
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Keep(..)))
            .cloned()
            .collect();
        assert_eq!(
            keeps,
            vec![Call::Keep(7, 7), Call::Keep(6, 6), Call::Keep(5, 5)]
        );
        assert!(agent.calls.contains(&Call::Turn(1, 6)));
    }

    #[test]
    fn rejecting_every_hand_starts_empty() {
        let deck: CardList<&str> = [("Land", 40)].into_iter().collect();
        let agent = Goldfish::new(Library::seeded(5, deck), Recorder::new(0, 1))
            .run()
            .unwrap();
        let keeps = agent
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Keep(..)))
            .count();
        assert_eq!(keeps, OPENING_HAND_SIZE);
        assert!(agent.calls.contains(&Call::Turn(1, 1)));
    }

    #[test]
    fn turns_stop_when_agent_declines() {
        let deck: CardList<&str> = [("Land", 40)].into_iter().collect();
        let agent = Goldfish::new(Library::seeded(6, deck), Recorder::new(7, 4))
            .run()
            .unwrap();
        let turns: Vec<_> = agent
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Turn(t, size) => Some((*t, *size)),
                _ => None,
            })
            .collect();
        assert_eq!(turns, vec![(1, 8), (2, 9), (3, 10), (4, 11)]);
    }

    #[test]
    fn turns_stop_when_library_is_empty() {
        let library = Library::seeded(7, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 100)).run().unwrap();
        assert_eq!(agent.played, 1);
    }

    #[test]
    fn small_deck_draws_what_it_has() {
        let deck: CardList<&str> = [("Land", 3)].into_iter().collect();
        let agent = Goldfish::new(Library::seeded(8, deck), Recorder::new(7, 1))
            .run()
            .unwrap();
        assert_eq!(agent.calls[2], Call::Keep(7, 3));
        assert_eq!(agent.calls[3], Call::Turn(1, 3));
    }

    #[test]
    fn every_game_is_played() {
        let library = Library::seeded(9, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 1))
            .games(3)
            .run()
            .unwrap();
        let games = agent.calls.iter().filter(|c| **c == Call::GameDone).count();
        assert_eq!(games, 3);
        assert_eq!(agent.calls.first(), Some(&Call::Started));
        assert_eq!(agent.calls.last(), Some(&Call::Done));
    }

    #[test]
    fn zero_games_only_brackets_the_simulation() {
        let library = Library::seeded(10, land_spell_deck());
        let agent = Goldfish::new(library, Recorder::new(7, 1))
            .games(0)
            .run()
            .unwrap();
        assert_eq!(agent.calls, vec![Call::Started, Call::Done]);
    }

    #[test]
    fn turn_error_aborts_run() {
        let deck: CardList<&str> = [("Land", 40)].into_iter().collect();
        let mut recorder = Recorder::new(7, 5);
        recorder.fail_on = Some(2);
        let err = Goldfish::new(Library::seeded(11, deck), recorder)
            .games(2)
            .run()
            .err()
            .unwrap();
        assert_eq!(err, AgentError::failed("scripted failure"));
    }

    #[test]
    fn boxed_agents_drive_the_same_way() {
        let agent: Box<dyn Agent<&'static str>> = Box::new(Recorder::new(7, 1));
        let library = Library::seeded(12, land_spell_deck());
        assert!(Goldfish::new(library, agent).run().is_ok());
    }
}
