use crate::card::{Card, Rank};
use crate::error::BlackjackGameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

/// Number of cards in a freshly constructed deck.
pub const DECK_SIZE: usize = 52;
const COPIES_PER_RANK: usize = 4;

/// A single 52 card deck. Suits are not modeled, each rank simply appears four times.
/// The top of the deck is the end of `cards`, so dealing is a `pop`.
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// Associated function to create a new, shuffled `Deck` seeded from the wall clock.
    pub fn new() -> Deck {
        Deck::with_seed(wall_clock_seed())
    }

    /// Creates a new shuffled `Deck` whose shuffles are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Deck {
        debug!(seed, "seeding deck");
        Deck::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a new `Deck` that owns `rng`, the deck is shuffled with it immediately.
    pub fn with_rng(rng: StdRng) -> Deck {
        let mut deck = Deck {
            cards: Deck::populate(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals `cards` in the given order, first card first. No shuffle is applied.
    pub fn stacked<I>(cards: I) -> Deck
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Deck {
            cards,
            rng: StdRng::seed_from_u64(0),
        }
    }

    fn populate() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for _ in 0..COPIES_PER_RANK {
                cards.push(Card::new(rank));
            }
        }
        cards
    }

    /// Shuffles the remaining cards in place with the deck's own generator.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the remaining cards in place with a caller supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!(remaining = self.cards.len(), "shuffled deck");
    }

    /// Removes the top card from the deck, fails with `BlackjackGameError::EmptyDeck` once the deck is exhausted.
    pub fn deal(&mut self) -> Result<Card, BlackjackGameError> {
        match self.cards.pop() {
            Some(card) => {
                trace!(card = %card, remaining = self.cards.len(), "dealt card");
                Ok(card)
            }
            None => {
                debug!("attempted to deal from an empty deck");
                Err(BlackjackGameError::EmptyDeck)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom of the deck first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn sorted(cards: &[Card]) -> Vec<Card> {
        let mut cards = cards.to_vec();
        cards.sort_by_key(|card| card.rank());
        cards
    }

    #[test]
    fn fresh_deck_has_four_of_each_rank() {
        let deck = Deck::with_seed(42);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut counts: HashMap<Rank, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.rank()).or_default() += 1;
            assert_eq!(card.value(), card.rank().value());
        }
        assert_eq!(counts.len(), 13);
        assert!(counts.values().all(|&count| count == 4));
    }

    #[test]
    fn deal_until_empty() {
        let mut deck = Deck::with_seed(7);
        let original = sorted(deck.cards());
        let mut dealt = vec![];
        for n in 1..=DECK_SIZE {
            dealt.push(deck.deal().unwrap());
            assert_eq!(deck.len(), DECK_SIZE - n);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(BlackjackGameError::EmptyDeck));
        assert_eq!(sorted(&dealt), original);
    }

    #[test]
    fn dealt_cards_leave_the_deck() {
        let mut deck = Deck::with_seed(3);
        let first = deck.deal().unwrap();
        let second = deck.deal().unwrap();
        let remaining_of = |rank: Rank, deck: &Deck| {
            deck.cards().iter().filter(|c| c.rank() == rank).count()
        };
        if first.rank() == second.rank() {
            assert_eq!(remaining_of(first.rank(), &deck), 2);
        } else {
            assert_eq!(remaining_of(first.rank(), &deck), 3);
            assert_eq!(remaining_of(second.rank(), &deck), 3);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::with_seed(1234);
        let b = Deck::with_seed(1234);
        let c = Deck::with_seed(4321);
        assert_eq!(a.cards(), b.cards());
        assert_ne!(a.cards(), c.cards());
    }

    #[test]
    fn stacked_deck_deals_in_order() {
        let mut deck = Deck::stacked([Rank::King, Rank::Two, Rank::Ace].map(Card::new));
        assert_eq!(deck.deal().unwrap().rank(), Rank::King);
        assert_eq!(deck.deal().unwrap().rank(), Rank::Two);
        assert_eq!(deck.deal().unwrap().rank(), Rank::Ace);
        assert_eq!(deck.deal(), Err(BlackjackGameError::EmptyDeck));
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u64>(), deals in 0usize..=DECK_SIZE) {
            let mut deck = Deck::with_seed(seed);
            for _ in 0..deals {
                deck.deal().unwrap();
            }
            let before = sorted(deck.cards());
            deck.shuffle();
            prop_assert_eq!(deck.len(), DECK_SIZE - deals);
            prop_assert_eq!(sorted(deck.cards()), before.clone());

            let mut other = StdRng::seed_from_u64(seed.wrapping_add(1));
            deck.shuffle_with(&mut other);
            prop_assert_eq!(sorted(deck.cards()), before);
        }
    }
}
