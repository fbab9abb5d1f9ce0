//! The Goldfish library: a stateful draw engine over a deck.
//!
//! A [`Library`] keeps the bulk of the deck in an unordered pool drawn
//! uniformly at random, plus two short-term override queues: cards placed
//! on top are drawn next, cards placed on the bottom are drawn last. Only
//! cards currently in hand can be placed, which keeps the deck's card
//! count conserved across every operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod library;

pub use library::Library;
