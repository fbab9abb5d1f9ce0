//! Goldfish: a Monte-Carlo simulator for drawing from card game decks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Goldfish sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use goldfish::prelude::*;
//!
//! /// Records the hand size on turn 1.
//! struct FirstTurn(usize);
//!
//! impl Agent<&'static str> for FirstTurn {
//!     fn keep_opening_hand(&mut self, _count: usize, _hand: &CardList<&'static str>) -> bool {
//!         true
//!     }
//!     fn simulate_another_turn(&mut self) -> bool {
//!         false
//!     }
//!     fn take_turn(
//!         &mut self,
//!         _turn: u32,
//!         _library: &mut Library<&'static str>,
//!         hand: &mut CardList<&'static str>,
//!     ) -> Result<(), AgentError> {
//!         self.0 = hand.size();
//!         Ok(())
//!     }
//! }
//!
//! let deck: CardList<&str> = [("Land", 7), ("Spell", 1)].into_iter().collect();
//! let service = SimulationService::new(ServiceConfig::default()).unwrap();
//! service.simulate(deck, FirstTurn(0)).unwrap();
//!
//! let agent = service.retrieve_next_completed().unwrap().unwrap();
//! assert_eq!(agent.0, 8);
//! assert!(service.retrieve_next_completed().unwrap().is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `goldfish-core` | `Card`, `CardList`, `LibraryError` |
//! | [`library`] | `goldfish-library` | The randomized draw engine |
//! | [`engine`] | `goldfish-engine` | `Agent`, the `Goldfish` driver, `SimulationService` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Card multisets and shared errors (`goldfish-core`).
pub use goldfish_core as types;

/// Draw engine with top, bottom and tutor overrides (`goldfish-library`).
///
/// See [`library::Library`] for the draw priority rules.
pub use goldfish_library as library;

/// Simulation driver and worker-pool service (`goldfish-engine`).
///
/// [`engine::Goldfish`] runs one agent synchronously;
/// [`engine::SimulationService`] runs many on background threads.
pub use goldfish_engine as engine;

/// Common imports for typical Goldfish usage.
///
/// ```rust
/// use goldfish::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use goldfish_core::{Card, CardList, LibraryError};

    // Library
    pub use goldfish_library::Library;

    // Engine
    pub use goldfish_engine::{
        Agent, AgentError, ConfigError, Goldfish, ServiceConfig, SimulationError,
        SimulationOptions, SimulationService, OPENING_HAND_SIZE,
    };
}
