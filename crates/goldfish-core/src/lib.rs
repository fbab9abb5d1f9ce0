//! Core types for the Goldfish deck simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Card`] bound every simulation is generic over, the [`CardList`]
//! counted multiset used for decks and hands, and the error raised when a
//! library override names a card that is not in hand.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod card_list;
pub mod error;

pub use card_list::{Card, CardList};
pub use error::LibraryError;
