//! Counted multiset of cards.
//!
//! [`CardList`] maps each distinct card to a positive count. It is used for
//! the deck a library is built from and for the hand the simulation driver
//! hands to an agent. Entries whose count drops to zero are removed, so
//! [`distinct()`](CardList::distinct) only ever counts cards that are
//! actually present.

use std::collections::BTreeMap;
use std::fmt;

/// Bound satisfied by every card type.
///
/// Cards are opaque to the simulator: it only orders, compares, clones and
/// prints them. Blanket-implemented for every type meeting the bounds.
pub trait Card: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> Card for T {}

/// A counted multiset of cards, iterated in card order.
///
/// # Examples
///
/// ```
/// use goldfish_core::CardList;
///
/// let mut deck = CardList::new();
/// deck.add_cards("Island", 17);
/// deck.add_cards("Opt", 4);
/// assert_eq!(deck.size(), 21);
/// assert!(deck.remove_cards(&"Opt", 4));
/// assert_eq!(deck.count(&"Opt"), 0);
/// assert_eq!(deck.distinct(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardList<T: Card> {
    cards: BTreeMap<T, usize>,
    total: usize,
}

impl<T: Card> CardList<T> {
    /// Create an empty card list.
    pub fn new() -> Self {
        Self {
            cards: BTreeMap::new(),
            total: 0,
        }
    }

    /// Number of copies of `card` in this list.
    pub fn count(&self, card: &T) -> usize {
        self.cards.get(card).copied().unwrap_or(0)
    }

    /// Combined count of several cards. A card named twice is counted twice.
    pub fn count_all(&self, cards: &[T]) -> usize {
        cards.iter().map(|card| self.count(card)).sum()
    }

    /// Total number of cards, counting duplicates.
    pub fn size(&self) -> usize {
        self.total
    }

    /// `true` if the list holds no cards.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct cards.
    pub fn distinct(&self) -> usize {
        self.cards.len()
    }

    /// Add one copy of `card`.
    pub fn add_card(&mut self, card: T) {
        self.add_cards(card, 1);
    }

    /// Add `amount` copies of `card`. Adding zero copies is a no-op.
    pub fn add_cards(&mut self, card: T, amount: usize) {
        if amount == 0 {
            return;
        }
        *self.cards.entry(card).or_insert(0) += amount;
        self.total += amount;
    }

    /// Remove one copy of `card`, returning `true` if the list changed.
    pub fn remove_card(&mut self, card: &T) -> bool {
        self.remove_cards(card, 1)
    }

    /// Remove `amount` copies of `card`.
    ///
    /// Returns `true` only if at least `amount` copies were present, in
    /// which case exactly `amount` are removed. Otherwise the list is left
    /// untouched and `false` is returned. Removing zero copies returns
    /// `false`.
    pub fn remove_cards(&mut self, card: &T, amount: usize) -> bool {
        if amount == 0 {
            return false;
        }
        let Some(count) = self.cards.get_mut(card) else {
            return false;
        };
        if *count < amount {
            return false;
        }
        *count -= amount;
        if *count == 0 {
            self.cards.remove(card);
        }
        self.total -= amount;
        true
    }

    /// Iterate over `(card, count)` pairs in card order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.cards.iter().map(|(card, &count)| (card, count))
    }

    /// Expand into individual cards, each repeated per its count, in card
    /// order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.total);
        for (card, &count) in &self.cards {
            out.extend(std::iter::repeat_n(card.clone(), count));
        }
        out
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}

impl<T: Card> Default for CardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Card> FromIterator<T> for CardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Card> FromIterator<(T, usize)> for CardList<T> {
    fn from_iter<I: IntoIterator<Item = (T, usize)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (card, amount) in iter {
            list.add_cards(card, amount);
        }
        list
    }
}

impl<T: Card> Extend<T> for CardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for card in iter {
            self.add_card(card);
        }
    }
}

impl<T: Card + fmt::Display> fmt::Display for CardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (card, count) in self.iter() {
            writeln!(f, "{count} x {card}")?;
        }
        write!(f, "Total {} cards", self.total)
    }
}
