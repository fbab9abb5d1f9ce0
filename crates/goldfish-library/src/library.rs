//! [`Library`]: draw engine with deterministic short-term overrides.
//!
//! # Draw priority
//!
//! 1. The front of the top queue (cards placed with [`Library::top`]).
//! 2. A uniformly random card from the pool.
//! 3. The front of the bottom queue (cards placed with [`Library::bottom`]).
//!
//! Every drawn card is recorded as in hand. A card can only be placed on
//! top or bottom while it is in hand, so
//! `pool + top + bottom + in_hand == deck size` holds after every call.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use goldfish_core::{Card, CardList, LibraryError};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A shuffled deck that cards are drawn from.
///
/// Built once per simulation run from a deck snapshot and reset before
/// each game. `Library` is [`Send`] when the card type is `Send + Sync`,
/// so a run can be moved onto a worker thread, but it is never shared
/// between runs.
///
/// # Examples
///
/// ```
/// use goldfish_core::CardList;
/// use goldfish_library::Library;
///
/// let deck: CardList<&str> = [("Mountain", 3), ("Shock", 1)].into_iter().collect();
/// let mut library = Library::seeded(7, deck);
///
/// let card = library.draw().unwrap();
/// library.top(&card).unwrap();
/// assert_eq!(library.draw(), Some(card));
/// assert_eq!(library.cards_remaining(), 3);
/// ```
pub struct Library<T: Card> {
    source: Arc<CardList<T>>,
    rng: Box<dyn RngCore + Send>,
    pool: Vec<T>,
    top: VecDeque<T>,
    bottom: VecDeque<T>,
    drawn: CardList<T>,
}

impl<T: Card> Library<T> {
    /// Create a library over `cards`, drawing with an OS-seeded ChaCha8 RNG.
    ///
    /// Accepts either an owned [`CardList`] or an `Arc` to one, so many
    /// libraries can share a single deck snapshot.
    ///
    /// # Panics
    ///
    /// If the OS random source fails. Use [`try_new()`](Self::try_new) to
    /// handle that case.
    pub fn new(cards: impl Into<Arc<CardList<T>>>) -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng(), cards)
    }

    /// Like [`new()`](Self::new), but reports a failing OS random source.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EntropyUnavailable`] if the RNG cannot be seeded.
    pub fn try_new(cards: impl Into<Arc<CardList<T>>>) -> Result<Self, LibraryError> {
        let rng = ChaCha8Rng::try_from_os_rng().map_err(|e| LibraryError::EntropyUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self::with_rng(rng, cards))
    }

    /// Create a library whose draws are reproducible for a given `seed`.
    pub fn seeded(seed: u64, cards: impl Into<Arc<CardList<T>>>) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), cards)
    }

    /// Create a library that draws with a caller-supplied random source.
    pub fn with_rng<R>(rng: R, cards: impl Into<Arc<CardList<T>>>) -> Self
    where
        R: RngCore + Send + 'static,
    {
        let source = cards.into();
        let mut library = Self {
            pool: Vec::with_capacity(source.size()),
            drawn: CardList::new(),
            top: VecDeque::new(),
            bottom: VecDeque::new(),
            rng: Box::new(rng),
            source,
        };
        library.reset();
        library
    }

    /// Return every card to the library: clears both override queues and
    /// the in-hand record, then refills the pool from the deck.
    pub fn reset(&mut self) {
        self.top.clear();
        self.bottom.clear();
        self.drawn.clear();
        self.pool.clear();
        self.pool.extend(self.source.to_vec());
        tracing::trace!(cards = self.pool.len(), "library reset");
    }

    /// Fold the top and bottom queues back into the random pool.
    ///
    /// Cards in hand stay in hand.
    pub fn shuffle(&mut self) {
        self.pool.extend(self.top.drain(..));
        self.pool.extend(self.bottom.drain(..));
    }

    /// Draw the next card, or `None` once the library is exhausted.
    pub fn draw(&mut self) -> Option<T> {
        let card = if let Some(card) = self.top.pop_front() {
            card
        } else if !self.pool.is_empty() {
            // Pool order is irrelevant, so swap_remove keeps draws O(1).
            let index = self.rng.random_range(0..self.pool.len());
            self.pool.swap_remove(index)
        } else {
            self.bottom.pop_front()?
        };
        self.drawn.add_card(card.clone());
        Some(card)
    }

    /// Search the library for `card`, then shuffle.
    ///
    /// The shuffle happens first, so any pending top or bottom order is
    /// forfeited even when the search fails. Returns the card (now in
    /// hand) if a copy was in the library, otherwise `None`.
    pub fn tutor(&mut self, card: &T) -> Option<T> {
        self.shuffle();
        let Some(index) = self.pool.iter().position(|c| c == card) else {
            tracing::trace!(card = ?card, "tutor found nothing");
            return None;
        };
        let found = self.pool.swap_remove(index);
        self.drawn.add_card(found.clone());
        Some(found)
    }

    /// Put an in-hand card on top; it becomes the next draw.
    ///
    /// # Errors
    ///
    /// [`LibraryError::CardNotDrawn`] if `card` is not in hand.
    pub fn top(&mut self, card: &T) -> Result<(), LibraryError> {
        self.top_all(std::slice::from_ref(card))
    }

    /// Put several in-hand cards on top: the first named is drawn next,
    /// the second after it, and so on.
    ///
    /// # Errors
    ///
    /// [`LibraryError::CardNotDrawn`] if any card is not in hand, or is
    /// named more times than it is held. Nothing is moved in that case.
    pub fn top_all(&mut self, cards: &[T]) -> Result<(), LibraryError> {
        self.ensure_in_hand(cards)?;
        for card in cards.iter().rev() {
            self.drawn.remove_card(card);
            self.top.push_front(card.clone());
        }
        Ok(())
    }

    /// Put an in-hand card on the bottom; it is drawn after everything
    /// else currently in the library.
    ///
    /// # Errors
    ///
    /// [`LibraryError::CardNotDrawn`] if `card` is not in hand.
    pub fn bottom(&mut self, card: &T) -> Result<(), LibraryError> {
        self.bottom_all(std::slice::from_ref(card))
    }

    /// Put several in-hand cards on the bottom in the given order: the
    /// first named is drawn before the later ones once the bottom is
    /// reached.
    ///
    /// # Errors
    ///
    /// Same as [`top_all()`](Self::top_all); nothing is moved on error.
    pub fn bottom_all(&mut self, cards: &[T]) -> Result<(), LibraryError> {
        self.ensure_in_hand(cards)?;
        for card in cards {
            self.drawn.remove_card(card);
            self.bottom.push_back(card.clone());
        }
        Ok(())
    }

    /// Cards not currently in hand, including queued overrides.
    pub fn cards_remaining(&self) -> usize {
        self.source.size() - self.drawn.size()
    }

    /// The deck this library was built from.
    pub fn cards(&self) -> &CardList<T> {
        &self.source
    }

    /// Cards drawn and not yet placed back.
    pub fn drawn(&self) -> &CardList<T> {
        &self.drawn
    }

    fn ensure_in_hand(&self, cards: &[T]) -> Result<(), LibraryError> {
        let mut wanted = CardList::new();
        for card in cards {
            wanted.add_card(card.clone());
            if wanted.count(card) > self.drawn.count(card) {
                return Err(LibraryError::card_not_drawn(card));
            }
        }
        Ok(())
    }
}

impl<T: Card> fmt::Debug for Library<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("deck_size", &self.source.size())
            .field("pool", &self.pool.len())
            .field("top", &self.top)
            .field("bottom", &self.bottom)
            .field("drawn", &self.drawn)
            .finish_non_exhaustive()
    }
}
