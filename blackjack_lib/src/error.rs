use thiserror::Error;

/// Errors that can occur while playing a round of blackjack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlackjackGameError {
    /// A card was requested from a deck that has no cards left.
    #[error("the deck is empty")]
    EmptyDeck,
}
