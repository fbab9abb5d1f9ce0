//! Error types shared across the Goldfish workspace.

use thiserror::Error;

/// Errors raised by a library: rejected overrides (`top`, `bottom` and
/// their batch forms) and a missing OS entropy source at construction.
///
/// Exhaustion is not an error: `draw()` and `tutor()` report it with
/// `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A card was named that is not currently in hand, or was named more
    /// times than it has been drawn.
    #[error("card '{card}' was never drawn")]
    CardNotDrawn {
        /// Debug rendering of the offending card.
        card: String,
    },
    /// The OS random source could not seed a new library.
    #[error("entropy unavailable: {reason}")]
    EntropyUnavailable {
        /// Error reported by the OS random source.
        reason: String,
    },
}

impl LibraryError {
    /// Build a [`LibraryError::CardNotDrawn`] for any debug-printable card.
    pub fn card_not_drawn(card: &impl std::fmt::Debug) -> Self {
        Self::CardNotDrawn {
            card: format!("{card:?}"),
        }
    }
}
