//! Core model for a single round of multi-player blackjack.
//!  The crate provides cards, a 52 card deck, hands with soft ace scoring and a round controller
//!  that deals to a fixed number of players, resolves each players turn and determines the winner.
//!  Terminal input and rendering are left to the caller through the `DecisionProvider` and `TableView` traits.

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod round;

pub mod prelude {
    pub use super::card::{Card, ParseRankError, Rank, BLACKJACK};
    pub use super::deck::{Deck, DECK_SIZE};
    pub use super::error::BlackjackGameError;
    pub use super::hand::Hand;
    pub use super::round::{
        Decision, DecisionProvider, PlayerState, Round, RoundConfig, RoundConfigBuilder,
        RoundOutcome, Seat, SeatOutcome, SilentView, TableView, Winner, INITIAL_HAND_SIZE,
    };
}

pub use prelude::*;
