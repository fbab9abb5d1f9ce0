//! Land drops: how often does a 60-card deck hit its land drops?
//!
//! Demonstrates:
//!   1. Building a deck as a `CardList`
//!   2. Implementing an `Agent` with a simple mulligan rule
//!   3. Submitting many simulations to a `SimulationService`
//!   4. Retrieving agents in completion order and aggregating results
//!
//! Run with:
//!   RUST_LOG=goldfish_engine=debug cargo run --example land_drops

use std::fmt;
use std::sync::Arc;

use goldfish_core::CardList;
use goldfish_engine::{Agent, AgentError, ServiceConfig, SimulationOptions, SimulationService};
use goldfish_library::Library;
use tracing_subscriber::EnvFilter;

// ─── Deck ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Card {
    Land,
    Spell,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Card::Land => "Land",
            Card::Spell => "Spell",
        })
    }
}

const LANDS: usize = 24;
const SPELLS: usize = 36;
const TURNS: u32 = 6;

// ─── Agent: play a land every turn we can ───────────────────────

/// Keeps hands with 2 to 5 lands (anything at 5 cards or fewer), plays
/// one land per turn, and counts on which turns it missed.
struct LandDropper {
    turn: u32,
    lands_in_play: usize,
    missed: [u32; TURNS as usize],
    games: u32,
    mulligans: u32,
}

impl LandDropper {
    fn new() -> Self {
        Self {
            turn: 0,
            lands_in_play: 0,
            missed: [0; TURNS as usize],
            games: 0,
            mulligans: 0,
        }
    }
}

impl Agent<Card> for LandDropper {
    fn keep_opening_hand(&mut self, count: usize, hand: &CardList<Card>) -> bool {
        let lands = hand.count(&Card::Land);
        let keep = count <= 5 || (2..=5).contains(&lands);
        if !keep {
            self.mulligans += 1;
        }
        keep
    }

    fn simulate_another_turn(&mut self) -> bool {
        self.turn < TURNS
    }

    fn take_turn(
        &mut self,
        turn: u32,
        _library: &mut Library<Card>,
        hand: &mut CardList<Card>,
    ) -> Result<(), AgentError> {
        self.turn = turn;
        if hand.remove_card(&Card::Land) {
            self.lands_in_play += 1;
        } else {
            self.missed[turn as usize - 1] += 1;
        }
        Ok(())
    }

    fn new_game(&mut self) {
        self.turn = 0;
        self.lands_in_play = 0;
    }

    fn game_done(&mut self) {
        self.games += 1;
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let deck: Arc<CardList<Card>> = Arc::new(
        [(Card::Land, LANDS), (Card::Spell, SPELLS)]
            .into_iter()
            .collect(),
    );
    println!("{deck}");

    let service = SimulationService::new(ServiceConfig {
        default_games: 1_000,
        seed: Some(0x60_1D_F1_54),
        ..Default::default()
    })?;
    println!("workers: {}", service.worker_count());

    // Half the agents play first, half draw first.
    for i in 0..16 {
        let opts = SimulationOptions::default().skip_first_draw(i % 2 == 0);
        service.simulate_with(Arc::clone(&deck), LandDropper::new(), opts)?;
    }

    let mut games = 0;
    let mut mulligans = 0;
    let mut missed = [0u32; TURNS as usize];
    while let Some(agent) = service.retrieve_next_completed()? {
        games += agent.games;
        mulligans += agent.mulligans;
        for (total, m) in missed.iter_mut().zip(agent.missed) {
            *total += m;
        }
    }

    println!("\n{games} games, {mulligans} mulligans");
    for (turn, m) in missed.iter().enumerate() {
        let hit = 100.0 * (1.0 - f64::from(*m) / f64::from(games));
        println!("turn {}: hit land drop in {hit:.1}% of games", turn + 1);
    }
    Ok(())
}
