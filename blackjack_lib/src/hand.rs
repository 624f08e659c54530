use crate::card::{Card, BLACKJACK};
use serde::Serialize;
use std::fmt::Display;
use std::iter::FromIterator;

/// Points removed from the score when an ace is counted as 1 instead of 11.
const ACE_DEMOTION: u32 = 10;

/// The cards held by a single player. A hand only ever grows during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    /// Method for receiving a card, the card is placed at the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Computes the blackjack score of the hand from scratch.
    /// Every ace starts out worth 11, then while the total is over 21 aces are recounted as 1, one at a time.
    /// The returned score can still be above 21, in which case the hand is bust.
    pub fn calculate_score(&self) -> u32 {
        let mut score: u32 = self.cards.iter().map(|card| u32::from(card.value())).sum();
        let mut aces = self.cards.iter().filter(|card| card.is_ace()).count();
        while score > BLACKJACK && aces > 0 {
            score -= ACE_DEMOTION;
            aces -= 1;
        }
        score
    }

    pub fn is_bust(&self) -> bool {
        self.calculate_score() > BLACKJACK
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        write!(f, "(Score: {})", self.calculate_score())
    }
}
